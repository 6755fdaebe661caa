//! End-to-end planning tests over pre-gathered data
//!
//! These exercise the deterministic tail of the pipeline (synthesis,
//! allocation, assembly, rendering) with hand-built provider data, so no
//! network is involved.

use chrono::NaiveDate;
use tripsmith::models::{
    Block, DestinationSummary, DietaryPreference, Interest, MarketSnapshot, TransportMode,
    TravelData, TravelPace, TripType,
};
use tripsmith::render::render_text;
use tripsmith::{build_plan, TripRequest};

fn base_request() -> TripRequest {
    TripRequest {
        name: "Asha Verma".to_string(),
        email: Some("asha@example.com".to_string()),
        mobile: Some("+91 9876543210".to_string()),
        emergency_contact: Some("Ravi Verma +91 9876500000".to_string()),
        destination: "Delhi".to_string(),
        departure_city: "Mumbai".to_string(),
        departure_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
        travelers: 2,
        total_budget: 100_000,
        accommodation_pct: 40,
        transport_pct: 25,
        food_pct: 20,
        activities_pct: 15,
        transport_modes: vec![TransportMode::Flight, TransportMode::Train],
        dietary: DietaryPreference::Vegetarian,
        trip_type: TripType::Friends,
        interests: vec![Interest::History, Interest::Food],
        pace: TravelPace::Moderate,
    }
}

fn enriched_travel_data() -> TravelData {
    TravelData {
        destination_summary: Some(DestinationSummary {
            title: "Delhi".to_string(),
            extract: "Delhi is the capital territory of India.".to_string(),
            coordinates: Some((28.6139, 77.209)),
        }),
        geocoded: None,
        accommodation: Some(MarketSnapshot {
            raw_text: "Hotels from Rs. 1,800 up to Rs. 9,000 per night".to_string(),
            prices: vec![1_800, 9_000],
            price_range: "Rs. 1,800 - Rs. 9,000".to_string(),
        }),
        transport: Some(MarketSnapshot {
            raw_text: "Flights starting at 4,200".to_string(),
            prices: vec![4_200],
            price_range: "Rs. 4,200 - Rs. 4,200".to_string(),
        }),
    }
}

#[test]
fn full_allocation_leaves_zero_miscellaneous() {
    let outcome = build_plan(&base_request(), TravelData::default(), None).unwrap();
    assert_eq!(outcome.budget.accommodation, 40_000);
    assert_eq!(outcome.budget.transport, 25_000);
    assert_eq!(outcome.budget.food, 20_000);
    assert_eq!(outcome.budget.activities, 15_000);
    assert_eq!(outcome.budget.miscellaneous, 0);
    assert_eq!(outcome.budget.sum(), 100_000);
}

#[test]
fn partial_allocation_reconciles_into_miscellaneous() {
    let mut request = base_request();
    request.activities_pct = 10;
    let outcome = build_plan(&request, TravelData::default(), None).unwrap();
    assert_eq!(outcome.budget.miscellaneous, 5_000);
    assert_eq!(outcome.budget.sum(), 100_000);
}

#[test]
fn over_allocation_surfaces_negative_miscellaneous() {
    let mut request = base_request();
    request.accommodation_pct = 50;
    request.transport_pct = 30;
    request.food_pct = 20;
    request.activities_pct = 10;
    let outcome = build_plan(&request, TravelData::default(), None).unwrap();
    assert_eq!(outcome.budget.miscellaneous, -10_000);
    assert_eq!(outcome.budget.sum(), 100_000);

    let text = render_text(&outcome.document);
    assert!(text.contains("Rs. -10,000"));
}

#[test]
fn five_day_trip_cycles_interest_themes() {
    let outcome = build_plan(&base_request(), TravelData::default(), None).unwrap();
    let themes: Vec<&str> = outcome.itinerary.iter().map(|d| d.theme.as_str()).collect();
    assert_eq!(
        themes,
        vec![
            "Arrival Day",
            "Historical Exploration",
            "Culinary Adventure",
            "Historical Exploration",
            "Departure Day",
        ]
    );
}

#[test]
fn unknown_destination_degrades_to_generic_content_everywhere() {
    let mut request = base_request();
    request.destination = "Shillong".to_string();
    request.interests = vec![];
    let outcome = build_plan(&request, TravelData::default(), None).unwrap();

    // Default theme cycle, generic templates, and no leftover placeholders
    assert_eq!(outcome.itinerary[1].theme, "City Exploration");
    let text = render_text(&outcome.document);
    assert!(!text.contains('{'));
    assert!(text.contains("Trip Plan to Shillong"));
    assert!(text.contains("Research Shillong"));

    assert_eq!(outcome.document.sections.len(), 10);
    for section in &outcome.document.sections {
        assert!(!section.blocks.is_empty(), "empty section {}", section.title);
    }
}

#[test]
fn empty_travel_data_still_yields_complete_document() {
    let outcome = build_plan(&base_request(), TravelData::default(), None).unwrap();
    assert_eq!(outcome.document.sections.len(), 10);
    assert!(outcome.travel_data.is_empty());

    let text = render_text(&outcome.document);
    assert!(text.is_ascii());
    assert!(text.contains("Day-by-Day Itinerary"));
    assert!(text.contains("Emergency Contacts"));
    assert!(text.contains("112"));
}

#[test]
fn enrichment_data_flows_into_advisory_sections() {
    let outcome = build_plan(&base_request(), enriched_travel_data(), None).unwrap();

    let overview = outcome.document.section("Trip Overview").unwrap();
    assert!(overview.blocks.iter().any(|b| {
        matches!(b, Block::Paragraph(p) if p.contains("capital territory"))
    }));

    let lodging = outcome.document.section("Where to Stay").unwrap();
    assert!(lodging.blocks.iter().any(|b| {
        matches!(b, Block::Paragraph(p) if p.contains("Rs. 1,800 - Rs. 9,000"))
    }));

    let transport = outcome.document.section("Transportation Guide").unwrap();
    assert!(transport.blocks.iter().any(|b| {
        matches!(b, Block::Paragraph(p) if p.contains("Rs. 4,200"))
    }));
}

#[test]
fn rendered_plan_is_stable_across_runs() {
    let first = build_plan(&base_request(), enriched_travel_data(), None).unwrap();
    let second = build_plan(&base_request(), enriched_travel_data(), None).unwrap();
    assert_eq!(render_text(&first.document), render_text(&second.document));
}

#[test]
fn validation_failures_name_the_offending_field() {
    let mut request = base_request();
    request.return_date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let err = build_plan(&request, TravelData::default(), None).unwrap_err();
    assert!(err.to_string().to_lowercase().contains("return"));
}
