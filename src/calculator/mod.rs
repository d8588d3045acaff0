//! Overtime pay formulas.
//!
//! All amounts are rounded to two decimal places with banker's rounding,
//! once per formula evaluation.

pub mod input;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Category, Rate};

/// Weekday overtime slots and the hours each one credits per day.
pub const WEEKDAY_SLOTS: [(&str, u32); 3] = [("OT1", 3), ("OT2", 4), ("OT3", 5)];

/// Hours credited for one weekend day.
pub const WEEKEND_DAY_HOURS: u32 = 8;

pub fn compute(rate: Rate, hours: Decimal, category: Category) -> Decimal {
    let rate = rate.value();
    let pay = match category {
        Category::Weekday => rate * dec!(1.5) * hours,
        Category::Weekend => {
            if hours <= dec!(4) {
                rate * dec!(0.5) * hours
            } else if hours <= dec!(8) {
                rate * hours
            } else {
                rate * dec!(8) + rate * dec!(2) * (hours - dec!(8))
            }
        }
        Category::Holiday => {
            if hours <= dec!(8) {
                rate * dec!(2) * hours
            } else {
                rate * dec!(2) * dec!(8) + rate * dec!(3) * (hours - dec!(8))
            }
        }
    };
    pay.round_dp(2)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPay {
    pub label: &'static str,
    pub hours: u32,
    pub days: u32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayBreakdown {
    pub slots: Vec<SlotPay>,
    pub total: Decimal,
}

/// Pay for `days[i]` days worked in weekday slot `i`.
pub fn weekday_breakdown(rate: Rate, days: [u32; 3]) -> WeekdayBreakdown {
    let slots: Vec<SlotPay> = WEEKDAY_SLOTS
        .iter()
        .zip(days)
        .map(|(&(label, hours), days)| SlotPay {
            label,
            hours,
            days,
            amount: compute(rate, Decimal::from(hours), Category::Weekday) * Decimal::from(days),
        })
        .collect();
    let total = slots.iter().map(|slot| slot.amount).sum();

    WeekdayBreakdown { slots, total }
}

pub fn weekend_pay(rate: Rate, days: u32) -> Decimal {
    compute(rate, Decimal::from(WEEKEND_DAY_HOURS), Category::Weekend) * Decimal::from(days)
}

pub fn holiday_pay(rate: Rate, hours: Decimal) -> Decimal {
    compute(rate, hours, Category::Holiday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rate(value: Decimal) -> Rate {
        Rate::new(value).unwrap()
    }

    #[test]
    fn weekday_is_time_and_a_half() {
        assert_eq!(compute(rate(dec!(10)), dec!(3), Category::Weekday), dec!(45.00));
    }

    #[test]
    fn weekend_branches() {
        let r = rate(dec!(10));
        assert_eq!(compute(r, dec!(2), Category::Weekend), dec!(10.00));
        assert_eq!(compute(r, dec!(4), Category::Weekend), dec!(20.00));
        assert_eq!(compute(r, dec!(6), Category::Weekend), dec!(60.00));
        assert_eq!(compute(r, dec!(8), Category::Weekend), dec!(80.00));
        assert_eq!(compute(r, dec!(10), Category::Weekend), dec!(120.00));
    }

    #[test]
    fn holiday_branches() {
        let r = rate(dec!(10));
        assert_eq!(compute(r, dec!(5), Category::Holiday), dec!(100.00));
        assert_eq!(compute(r, dec!(8), Category::Holiday), dec!(160.00));
        assert_eq!(compute(r, dec!(9), Category::Holiday), dec!(190.00));
    }

    #[test]
    fn results_are_rounded_to_cents() {
        // 12.345 * 1.5 * 1 = 18.5175
        assert_eq!(compute(rate(dec!(12.345)), dec!(1), Category::Weekday), dec!(18.52));
        // 0.005 * 2 * 0.5 = 0.005, ties go to even
        assert_eq!(compute(rate(dec!(0.005)), dec!(0.5), Category::Holiday), dec!(0.00));
    }

    #[test]
    fn weekday_breakdown_multiplies_preset_hours_by_days() {
        let breakdown = weekday_breakdown(rate(dec!(10)), [2, 1, 0]);

        let amounts: Vec<Decimal> = breakdown.slots.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![dec!(90.00), dec!(60.00), dec!(0.00)]);
        assert_eq!(breakdown.slots[2].label, "OT3");
        assert_eq!(breakdown.slots[2].hours, 5);
        assert_eq!(breakdown.total, dec!(150.00));
    }

    #[test]
    fn weekend_day_is_eight_hours() {
        assert_eq!(weekend_pay(rate(dec!(10)), 2), dec!(160.00));
        assert_eq!(weekend_pay(rate(dec!(10)), 0), dec!(0.00));
    }

    fn arb_rate() -> impl Strategy<Value = Rate> {
        (1i64..10_000_000).prop_map(|cents| rate(Decimal::new(cents, 2)))
    }

    fn arb_hours() -> impl Strategy<Value = Decimal> {
        (0i64..2_000).prop_map(|tenths| Decimal::new(tenths, 1))
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::Weekday),
            Just(Category::Weekend),
            Just(Category::Holiday),
        ]
    }

    proptest! {
        #[test]
        fn pay_is_never_negative(
            r in arb_rate(),
            hours in arb_hours(),
            category in arb_category(),
        ) {
            prop_assert!(compute(r, hours, category) >= Decimal::ZERO);
        }

        #[test]
        fn pay_grows_with_hours(
            r in arb_rate(),
            hours in arb_hours(),
            extra in arb_hours(),
            category in arb_category(),
        ) {
            prop_assert!(compute(r, hours + extra, category) >= compute(r, hours, category));
        }

        #[test]
        fn eight_hour_boundary_is_continuous(r in arb_rate(), category in prop_oneof![
            Just(Category::Weekend),
            Just(Category::Holiday),
        ]) {
            let at = compute(r, dec!(8), category);
            let hour_later = compute(r, dec!(9), category);
            let multiplier = if category == Category::Weekend { dec!(2) } else { dec!(3) };
            prop_assert_eq!(hour_later - at, (r.value() * multiplier).round_dp(2));
        }

        #[test]
        fn weekday_total_is_sum_of_slots(
            r in arb_rate(),
            a in 0u32..50,
            b in 0u32..50,
            c in 0u32..50,
        ) {
            let breakdown = weekday_breakdown(r, [a, b, c]);
            let sum: Decimal = breakdown.slots.iter().map(|s| s.amount).sum();
            prop_assert_eq!(breakdown.total, sum);
        }
    }
}
