//! Day-by-day itinerary model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Part of the day an activity is scheduled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
            DayPeriod::Evening => "Evening",
        }
    }
}

/// A single scheduled activity within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub period: DayPeriod,
    pub description: String,
    /// Rupees per traveler for this activity
    pub cost_per_person: u32,
    /// Rupees for the whole group
    pub group_cost: u32,
}

/// One planned day of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub index: u32,
    pub date: NaiveDate,
    /// "Arrival Day", "Departure Day", or the exploration theme label
    pub theme: String,
    /// Morning, afternoon, evening, in order
    pub activities: Vec<DayActivity>,
    /// Estimated group cost for the day; departure days carry none
    pub group_cost: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_labels() {
        assert_eq!(DayPeriod::Morning.label(), "Morning");
        assert_eq!(DayPeriod::Evening.label(), "Evening");
    }
}
