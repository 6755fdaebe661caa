//! Trip request model
//!
//! A `TripRequest` is the fully-validated input to the planning pipeline.
//! The caller owns it; the pipeline only ever borrows it. Validation is
//! fail-fast: a request that does not pass `validate()` never reaches
//! synthesis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TripSmithError;

/// Trip category selected by the traveler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    Family,
    Couple,
    Solo,
    Friends,
    Business,
}

impl TripType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TripType::Family => "Family",
            TripType::Couple => "Couple",
            TripType::Solo => "Solo",
            TripType::Friends => "Friends",
            TripType::Business => "Business",
        }
    }
}

/// Dietary preference for dining recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietaryPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
    NoPreference,
}

impl DietaryPreference {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::NonVegetarian => "Non-Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::NoPreference => "No Preference",
        }
    }
}

/// How densely the traveler wants days scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelPace {
    Relaxed,
    Moderate,
    FastPaced,
}

impl TravelPace {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TravelPace::Relaxed => "Relaxed",
            TravelPace::Moderate => "Moderate",
            TravelPace::FastPaced => "Fast-paced",
        }
    }
}

/// Long-distance transport mode between departure city and destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    CarRental,
}

impl TransportMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Flight => "Flight",
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
            TransportMode::CarRental => "Car Rental",
        }
    }
}

/// Traveler interest used for theme cycling and section tailoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interest {
    Adventure,
    Culture,
    Nature,
    Food,
    Shopping,
    Nightlife,
    Relaxation,
    History,
    Beaches,
    Photography,
}

impl Interest {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Interest::Adventure => "Adventure",
            Interest::Culture => "Culture",
            Interest::Nature => "Nature",
            Interest::Food => "Food",
            Interest::Shopping => "Shopping",
            Interest::Nightlife => "Nightlife",
            Interest::Relaxation => "Relaxation",
            Interest::History => "History",
            Interest::Beaches => "Beaches",
            Interest::Photography => "Photography",
        }
    }
}

/// Validated trip parameters collected from the traveler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Traveler's full name
    pub name: String,
    /// Delivery address for the finished plan
    pub email: Option<String>,
    /// Traveler's mobile number, echoed into the emergency section
    pub mobile: Option<String>,
    /// Free-form emergency contact ("Name: +91 ...")
    pub emergency_contact: Option<String>,
    /// Destination city
    pub destination: String,
    /// Departure city
    pub departure_city: String,
    /// First day of the trip
    pub departure_date: NaiveDate,
    /// Last day of the trip, inclusive
    pub return_date: NaiveDate,
    /// Group size, at least 1
    pub travelers: u32,
    /// Total budget in whole rupees
    pub total_budget: u64,
    /// Budget share for accommodation, 0-100
    pub accommodation_pct: u8,
    /// Budget share for transportation, 0-100
    pub transport_pct: u8,
    /// Budget share for food and dining, 0-100
    pub food_pct: u8,
    /// Budget share for activities, 0-100
    pub activities_pct: u8,
    /// Selected long-distance transport modes, non-empty
    pub transport_modes: Vec<TransportMode>,
    pub dietary: DietaryPreference,
    pub trip_type: TripType,
    /// May be empty; synthesis then falls back to a default theme cycle
    pub interests: Vec<Interest>,
    pub pace: TravelPace,
}

impl TripRequest {
    /// Trip duration in days, inclusive of both endpoints
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.return_date - self.departure_date).num_days() + 1
    }

    /// Whether the traveler picked a given interest
    #[must_use]
    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Fail-fast input validation, run before any synthesis starts
    pub fn validate(&self) -> Result<(), TripSmithError> {
        if self.name.trim().is_empty() {
            return Err(TripSmithError::validation("traveler name cannot be empty"));
        }
        if self.destination.trim().is_empty() {
            return Err(TripSmithError::validation("destination cannot be empty"));
        }
        if self.departure_city.trim().is_empty() {
            return Err(TripSmithError::validation("departure city cannot be empty"));
        }
        if self.return_date < self.departure_date {
            return Err(TripSmithError::validation(
                "return date must be on or after the departure date",
            ));
        }
        if self.travelers < 1 {
            return Err(TripSmithError::validation(
                "at least one traveler is required",
            ));
        }
        if self.total_budget == 0 {
            return Err(TripSmithError::validation("total budget must be positive"));
        }
        for (pct, name) in [
            (self.accommodation_pct, "accommodation"),
            (self.transport_pct, "transportation"),
            (self.food_pct, "food"),
            (self.activities_pct, "activities"),
        ] {
            if pct > 100 {
                return Err(TripSmithError::validation(format!(
                    "{name} percentage cannot exceed 100"
                )));
            }
        }
        if self.transport_modes.is_empty() {
            return Err(TripSmithError::validation(
                "at least one transport mode must be selected",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> TripRequest {
        TripRequest {
            name: "Asha Verma".to_string(),
            email: Some("asha@example.com".to_string()),
            mobile: Some("+91 9876543210".to_string()),
            emergency_contact: Some("Ravi: +91 9123456780".to_string()),
            destination: "Delhi".to_string(),
            departure_city: "Mumbai".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            travelers: 2,
            total_budget: 50_000,
            accommodation_pct: 40,
            transport_pct: 25,
            food_pct: 20,
            activities_pct: 15,
            transport_modes: vec![TransportMode::Flight],
            dietary: DietaryPreference::Vegetarian,
            trip_type: TripType::Friends,
            interests: vec![Interest::History, Interest::Food],
            pace: TravelPace::Moderate,
        }
    }

    #[test]
    fn test_duration_is_inclusive() {
        let request = sample_request();
        assert_eq!(request.duration_days(), 5);
    }

    #[test]
    fn test_single_day_duration() {
        let mut request = sample_request();
        request.return_date = request.departure_date;
        assert_eq!(request.duration_days(), 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_return_before_departure_rejected() {
        let mut request = sample_request();
        request.return_date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("return date"));
    }

    #[test]
    fn test_empty_transport_modes_rejected() {
        let mut request = sample_request();
        request.transport_modes.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut request = sample_request();
        request.total_budget = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_percentage_over_100_rejected() {
        let mut request = sample_request();
        request.food_pct = 101;
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("food"));
    }
}
