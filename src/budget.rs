//! Budget allocation across spending categories
//!
//! Each named category gets the floor of its percentage share; the
//! miscellaneous bucket absorbs whatever remains so the breakdown always
//! sums to the total exactly, even when the percentages do not add up to
//! 100. When they add up to more than 100 the miscellaneous amount goes
//! negative and is surfaced as-is rather than clamped.

use serde::{Deserialize, Serialize};

/// Per-category decomposition of the total budget, in rupees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub total: u64,
    pub accommodation: u64,
    pub transport: u64,
    pub food: u64,
    pub activities: u64,
    /// Reconciling remainder; negative when percentages exceed 100
    pub miscellaneous: i64,
}

impl BudgetBreakdown {
    /// Category names and amounts in presentation order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, i64); 5] {
        [
            ("Transportation", self.transport as i64),
            ("Accommodation", self.accommodation as i64),
            ("Food & Dining", self.food as i64),
            ("Activities", self.activities as i64),
            ("Miscellaneous", self.miscellaneous),
        ]
    }

    /// Sum over all categories; always equals `total`
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.entries().iter().map(|(_, amount)| amount).sum()
    }
}

/// Split a total budget by category percentages
#[must_use]
pub fn allocate(
    total: u64,
    accommodation_pct: u8,
    transport_pct: u8,
    food_pct: u8,
    activities_pct: u8,
) -> BudgetBreakdown {
    let share = |pct: u8| total * u64::from(pct) / 100;

    let accommodation = share(accommodation_pct);
    let transport = share(transport_pct);
    let food = share(food_pct);
    let activities = share(activities_pct);
    let named = accommodation + transport + food + activities;
    let miscellaneous = total as i64 - named as i64;

    BudgetBreakdown {
        total,
        accommodation,
        transport,
        food,
        activities,
        miscellaneous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_exact_percentages_leave_zero_misc() {
        let breakdown = allocate(100_000, 40, 25, 20, 15);
        assert_eq!(breakdown.accommodation, 40_000);
        assert_eq!(breakdown.transport, 25_000);
        assert_eq!(breakdown.food, 20_000);
        assert_eq!(breakdown.activities, 15_000);
        assert_eq!(breakdown.miscellaneous, 0);
        assert_eq!(breakdown.sum(), 100_000);
    }

    #[test]
    fn test_remainder_flows_into_misc() {
        let breakdown = allocate(100_000, 40, 25, 20, 10);
        assert_eq!(breakdown.miscellaneous, 5_000);
        assert_eq!(breakdown.sum(), 100_000);
    }

    #[test]
    fn test_over_100_percent_goes_negative() {
        let breakdown = allocate(10_000, 50, 30, 20, 20);
        assert_eq!(breakdown.miscellaneous, -2_000);
        assert_eq!(breakdown.sum(), 10_000);
    }

    #[rstest]
    #[case(1, 33, 33, 33, 1)]
    #[case(99_999, 40, 25, 20, 15)]
    #[case(7, 100, 0, 0, 0)]
    #[case(12_345, 0, 0, 0, 0)]
    #[case(1_000_000, 97, 1, 1, 1)]
    fn test_sum_invariant_holds(
        #[case] total: u64,
        #[case] acc: u8,
        #[case] trans: u8,
        #[case] food: u8,
        #[case] act: u8,
    ) {
        let breakdown = allocate(total, acc, trans, food, act);
        assert_eq!(breakdown.sum(), total as i64);
    }

    #[test]
    fn test_floor_division_drops_remainder_into_misc() {
        // 33% of 100 is 33, three times over leaves 1 for misc
        let breakdown = allocate(100, 33, 33, 33, 0);
        assert_eq!(breakdown.accommodation, 33);
        assert_eq!(breakdown.miscellaneous, 1);
        assert_eq!(breakdown.sum(), 100);
    }
}
