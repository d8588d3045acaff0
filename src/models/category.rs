/// Overtime class, each with its own pay formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Weekday,
    Weekend,
    Holiday,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Weekday, Category::Weekend, Category::Holiday];

    pub fn label(self) -> &'static str {
        match self {
            Category::Weekday => "Weekday",
            Category::Weekend => "Weekend",
            Category::Holiday => "Public Holiday",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Weekday => "🏢",
            Category::Weekend => "📅",
            Category::Holiday => "🎉",
        }
    }
}
