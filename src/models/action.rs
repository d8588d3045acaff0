use super::Category;

/// Inline menu button, identified on the wire by its callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Category(Category),
    Total,
    Help,
    Reset,
}

impl Action {
    pub const MENU: [[Action; 2]; 3] = [
        [Action::Category(Category::Weekday), Action::Category(Category::Weekend)],
        [Action::Category(Category::Holiday), Action::Total],
        [Action::Help, Action::Reset],
    ];

    pub fn callback_data(self) -> &'static str {
        match self {
            Action::Category(Category::Weekday) => "weekday",
            Action::Category(Category::Weekend) => "weekend",
            Action::Category(Category::Holiday) => "ph",
            Action::Total => "total",
            Action::Help => "help",
            Action::Reset => "reset",
        }
    }

    pub fn from_callback_data(data: &str) -> Option<Self> {
        Some(match data {
            "weekday" => Action::Category(Category::Weekday),
            "weekend" => Action::Category(Category::Weekend),
            "ph" => Action::Category(Category::Holiday),
            "total" => Action::Total,
            "help" => Action::Help,
            "reset" => Action::Reset,
            _ => return None,
        })
    }

    pub fn button_label(self) -> String {
        match self {
            Action::Category(category) => format!("{} {}", category.emoji(), category.label()),
            Action::Total => "💰 Total".to_string(),
            Action::Help => "📘 Help".to_string(),
            Action::Reset => "♻️ Reset".to_string(),
        }
    }
}
