use rust_decimal::Decimal;

use super::Category;

/// Hourly pay rate. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

/// What the bot expects next from a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    AwaitingRate,
    Idle { rate: Rate },
    AwaitingInput { rate: Rate, category: Category },
}

impl ChatState {
    pub fn rate(&self) -> Option<Rate> {
        match self {
            ChatState::AwaitingRate => None,
            ChatState::Idle { rate } | ChatState::AwaitingInput { rate, .. } => Some(*rate),
        }
    }
}

/// Running overtime pay per category since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub weekday: Decimal,
    pub weekend: Decimal,
    pub holiday: Decimal,
}

impl Totals {
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Weekday => self.weekday,
            Category::Weekend => self.weekend,
            Category::Holiday => self.holiday,
        }
    }

    pub fn add(&mut self, category: Category, amount: Decimal) {
        let slot = match category {
            Category::Weekday => &mut self.weekday,
            Category::Weekend => &mut self.weekend,
            Category::Holiday => &mut self.holiday,
        };
        *slot += amount;
    }

    pub fn grand_total(&self) -> Decimal {
        self.weekday + self.weekend + self.holiday
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub state: ChatState,
    pub totals: Totals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rate_must_be_positive() {
        assert!(Rate::new(dec!(0)).is_none());
        assert!(Rate::new(dec!(-1.5)).is_none());
        assert_eq!(Rate::new(dec!(10.5)).map(Rate::value), Some(dec!(10.5)));
    }

    #[test]
    fn fresh_session_awaits_rate_with_zero_totals() {
        let session = Session::default();
        assert_eq!(session.state, ChatState::AwaitingRate);
        assert_eq!(session.state.rate(), None);
        assert_eq!(session.totals.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn totals_track_each_category_separately() {
        let mut totals = Totals::default();
        totals.add(Category::Weekday, dec!(150.00));
        totals.add(Category::Holiday, dec!(100.00));
        totals.add(Category::Weekday, dec!(45.00));

        assert_eq!(totals.get(Category::Weekday), dec!(195.00));
        assert_eq!(totals.get(Category::Weekend), dec!(0));
        assert_eq!(totals.get(Category::Holiday), dec!(100.00));
        assert_eq!(totals.grand_total(), dec!(295.00));
    }
}
