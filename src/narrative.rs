//! Optional narrative overview generation
//!
//! The document never depends on a generated narrative: the overview
//! section carries a deterministic summary, and a narrative paragraph is
//! layered on top only when a generator is wired in and produces usable
//! text. Generators that answer with the error sentinel are treated the
//! same as generators that fail outright.

use crate::error::TripSmithError;
use crate::models::{TravelData, TripRequest};

/// Sentinel prefix some generation backends emit instead of failing
const GENERATION_FAILURE_PREFIX: &str = "An error occurred";

/// Produces free-text trip narratives from a prompt
pub trait NarrativeGenerator {
    fn generate(&self, prompt: &str) -> Result<String, TripSmithError>;
}

/// Build the generation prompt from the request and gathered data
#[must_use]
pub fn build_prompt(request: &TripRequest, travel_data: &TravelData) -> String {
    let interests = if request.interests.is_empty() {
        "general sightseeing".to_string()
    } else {
        request
            .interests
            .iter()
            .map(|i| i.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut prompt = format!(
        "Write a short, engaging overview paragraph for a {}-day {} trip to {} \
         for {} travelers departing from {}. Their interests are {} and they \
         prefer a {} pace with {} dining. Total budget: Rs. {}.",
        request.duration_days(),
        request.trip_type.label().to_lowercase(),
        request.destination,
        request.travelers,
        request.departure_city,
        interests,
        request.pace.label().to_lowercase(),
        request.dietary.label().to_lowercase(),
        request.total_budget,
    );

    if let Some(summary) = &travel_data.destination_summary {
        if !summary.extract.is_empty() {
            let context: String = summary.extract.chars().take(400).collect();
            prompt.push_str(&format!(" Background on the destination: {context}"));
        }
    }

    prompt
}

/// Whether generated text is the backend's failure sentinel rather than
/// a real narrative
#[must_use]
pub fn is_generation_failure(text: &str) -> bool {
    text.trim().is_empty() || text.trim_start().starts_with(GENERATION_FAILURE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DestinationSummary, DietaryPreference, Interest, TransportMode, TravelPace, TripType,
    };
    use chrono::NaiveDate;

    fn request() -> TripRequest {
        TripRequest {
            name: "Asha Verma".to_string(),
            email: None,
            mobile: None,
            emergency_contact: None,
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
            transport_modes: vec![TransportMode::Train],
            dietary: DietaryPreference::Vegetarian,
            trip_type: TripType::Couple,
            interests: vec![Interest::History, Interest::Food],
            pace: TravelPace::Relaxed,
        }
    }

    #[test]
    fn test_prompt_mentions_core_request_facts() {
        let prompt = build_prompt(&request(), &TravelData::default());
        assert!(prompt.contains("5-day"));
        assert!(prompt.contains("Delhi"));
        assert!(prompt.contains("History, Food"));
        assert!(prompt.contains("relaxed"));
    }

    #[test]
    fn test_prompt_includes_truncated_background() {
        let travel_data = TravelData {
            destination_summary: Some(DestinationSummary {
                title: "Delhi".to_string(),
                extract: "x".repeat(1_000),
                coordinates: None,
            }),
            ..TravelData::default()
        };
        let prompt = build_prompt(&request(), &travel_data);
        assert!(prompt.contains("Background on the destination"));
        assert!(prompt.len() < 1_000);
    }

    #[test]
    fn test_failure_sentinel_detection() {
        assert!(is_generation_failure("An error occurred: upstream 503"));
        assert!(is_generation_failure("   "));
        assert!(!is_generation_failure("Delhi awaits with its layered history."));
    }
}
