//! Deterministic itinerary synthesis
//!
//! Expands the requested date range into an arrival day, themed
//! exploration days, and a departure day. Themes are assigned by cycling
//! through the traveler's interests in a fixed priority order; activity
//! content comes from the template catalog with its layered fallbacks.
//! Given identical inputs the output is byte-identical; there is no
//! randomness and no wall-clock dependence beyond the supplied dates.

use chrono::Duration;
use tracing::debug;

use crate::catalog::{render_template, ActivityTemplateCatalog, PeriodTemplate, Theme};
use crate::error::TripSmithError;
use crate::models::{DayActivity, DayPeriod, Interest, ItineraryDay, TripRequest};

/// Flat per-day allowance for incidental meals and local transport
const DAILY_OVERHEAD_PER_PERSON: u32 = 1_500;
/// Fixed group base cost for the arrival day
const ARRIVAL_BASE_COST: u32 = 4_500;
/// Arrival-day increment per traveler
const ARRIVAL_COST_PER_TRAVELER: u32 = 500;

/// Build the ordered theme cycle for exploration days
///
/// Interests are checked in a fixed priority order so the cycle is stable
/// regardless of the order the traveler picked them in. With none of the
/// six theme-bearing interests selected, a default three-theme cycle is
/// substituted.
#[must_use]
pub fn day_themes(interests: &[Interest]) -> Vec<Theme> {
    let priority = [
        (Interest::History, Theme::HistoricalExploration),
        (Interest::Nature, Theme::NatureAndRelaxation),
        (Interest::Food, Theme::CulinaryAdventure),
        (Interest::Culture, Theme::CulturalImmersion),
        (Interest::Adventure, Theme::AdventureActivities),
        (Interest::Shopping, Theme::ShoppingAndMarkets),
    ];

    let themes: Vec<Theme> = priority
        .iter()
        .filter(|(interest, _)| interests.contains(interest))
        .map(|(_, theme)| *theme)
        .collect();

    if themes.is_empty() {
        vec![Theme::CityExploration, Theme::CulturalTour, Theme::NatureWalk]
    } else {
        themes
    }
}

/// Theme for a given exploration day (2-based), pure round-robin
#[must_use]
pub fn theme_for_day(day_index: u32, themes: &[Theme]) -> Theme {
    themes[(day_index as usize - 2) % themes.len()]
}

/// Expand the request into the full ordered day sequence
///
/// Day 1 is always the arrival template; day N (duration) is the departure
/// template, emitted only when the trip spans more than one day. Days in
/// between cycle through the themed templates. A duration of 1 yields the
/// arrival day alone.
pub fn synthesize(
    request: &TripRequest,
    catalog: &ActivityTemplateCatalog,
) -> Result<Vec<ItineraryDay>, TripSmithError> {
    let duration = request.duration_days() as u32;
    let themes = day_themes(&request.interests);
    debug!(
        duration,
        themes = ?themes.iter().map(|t| t.label()).collect::<Vec<_>>(),
        "synthesizing itinerary"
    );

    let mut days = Vec::with_capacity(duration as usize);
    days.push(arrival_day(request));

    for day_index in 2..duration {
        let theme = theme_for_day(day_index, &themes);
        days.push(exploration_day(request, catalog, day_index, theme)?);
    }

    if duration > 1 {
        days.push(departure_day(request, duration));
    }

    Ok(days)
}

fn arrival_day(request: &TripRequest) -> ItineraryDay {
    let destination = request.destination.trim();
    let activities = vec![
        DayActivity {
            period: DayPeriod::Morning,
            description: format!(
                "Arrive in {destination} and transfer to the hotel by taxi or metro."
            ),
            cost_per_person: 0,
            group_cost: 0,
        },
        DayActivity {
            period: DayPeriod::Afternoon,
            description: "Check-in at a budget-friendly hotel (Rs. 2,500/night) with restaurant \
                          and 24-hour front desk. Explore the nearby area."
                .to_string(),
            cost_per_person: 0,
            group_cost: 0,
        },
        DayActivity {
            period: DayPeriod::Evening,
            description: "Welcome dinner at a popular local restaurant serving regional cuisine. \
                          (Rs. 500 per person)"
                .to_string(),
            cost_per_person: 500,
            group_cost: 500 * request.travelers,
        },
    ];

    ItineraryDay {
        index: 1,
        date: request.departure_date,
        theme: "Arrival Day".to_string(),
        activities,
        group_cost: Some(ARRIVAL_BASE_COST + ARRIVAL_COST_PER_TRAVELER * request.travelers),
    }
}

fn exploration_day(
    request: &TripRequest,
    catalog: &ActivityTemplateCatalog,
    day_index: u32,
    theme: Theme,
) -> Result<ItineraryDay, TripSmithError> {
    let template = catalog.resolve(&request.destination, theme);
    let destination = request.destination.trim();

    let render_period = |period: DayPeriod, pt: &PeriodTemplate| -> Result<DayActivity, TripSmithError> {
        Ok(DayActivity {
            period,
            description: render_template(
                pt.text,
                destination,
                pt.cost_per_person,
                request.travelers,
            )?,
            cost_per_person: pt.cost_per_person,
            group_cost: pt.cost_per_person * request.travelers,
        })
    };

    let activities = vec![
        render_period(DayPeriod::Morning, &template.morning)?,
        render_period(DayPeriod::Afternoon, &template.afternoon)?,
        render_period(DayPeriod::Evening, &template.evening)?,
    ];

    let period_costs: u32 = activities.iter().map(|a| a.cost_per_person).sum();
    let group_cost = (period_costs + DAILY_OVERHEAD_PER_PERSON) * request.travelers;

    Ok(ItineraryDay {
        index: day_index,
        date: request.departure_date + Duration::days(i64::from(day_index) - 1),
        theme: theme.label().to_string(),
        activities,
        group_cost: Some(group_cost),
    })
}

fn departure_day(request: &TripRequest, duration: u32) -> ItineraryDay {
    let activities = vec![
        DayActivity {
            period: DayPeriod::Morning,
            description: "Final shopping and souvenir collection. Visit local markets for \
                          last-minute purchases."
                .to_string(),
            cost_per_person: 0,
            group_cost: 0,
        },
        DayActivity {
            period: DayPeriod::Afternoon,
            description: "Hotel checkout and departure preparations. Light lunch at hotel or \
                          nearby restaurant."
                .to_string(),
            cost_per_person: 0,
            group_cost: 0,
        },
        DayActivity {
            period: DayPeriod::Evening,
            description: "Journey back home. Safe travels!".to_string(),
            cost_per_person: 0,
            group_cost: 0,
        },
    ];

    ItineraryDay {
        index: duration,
        date: request.departure_date + Duration::days(i64::from(duration) - 1),
        theme: "Departure Day".to_string(),
        activities,
        group_cost: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryPreference, TransportMode, TravelPace, TripType};
    use chrono::NaiveDate;

    fn request(duration: i64, interests: Vec<Interest>, destination: &str) -> TripRequest {
        let departure = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        TripRequest {
            name: "Asha Verma".to_string(),
            email: None,
            mobile: None,
            emergency_contact: None,
            destination: destination.to_string(),
            departure_city: "Mumbai".to_string(),
            departure_date: departure,
            return_date: departure + Duration::days(duration - 1),
            travelers: 2,
            total_budget: 50_000,
            accommodation_pct: 40,
            transport_pct: 25,
            food_pct: 20,
            activities_pct: 15,
            transport_modes: vec![TransportMode::Flight],
            dietary: DietaryPreference::NoPreference,
            trip_type: TripType::Friends,
            interests,
            pace: TravelPace::Moderate,
        }
    }

    #[test]
    fn test_theme_priority_order_ignores_selection_order() {
        let themes = day_themes(&[Interest::Food, Interest::History]);
        assert_eq!(
            themes,
            vec![Theme::HistoricalExploration, Theme::CulinaryAdventure]
        );
    }

    #[test]
    fn test_default_cycle_when_no_theme_interests() {
        let themes = day_themes(&[Interest::Nightlife, Interest::Beaches]);
        assert_eq!(
            themes,
            vec![Theme::CityExploration, Theme::CulturalTour, Theme::NatureWalk]
        );
    }

    #[test]
    fn test_theme_cycling_is_periodic() {
        let themes = day_themes(&[Interest::History, Interest::Food]);
        for day in 2..=8 {
            assert_eq!(
                theme_for_day(day, &themes),
                theme_for_day(day + themes.len() as u32, &themes)
            );
        }
    }

    #[test]
    fn test_five_day_trip_shape() {
        let request = request(5, vec![Interest::History, Interest::Food], "Delhi");
        let catalog = ActivityTemplateCatalog::new();
        let days = synthesize(&request, &catalog).unwrap();

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].theme, "Arrival Day");
        assert_eq!(days[1].theme, "Historical Exploration");
        assert_eq!(days[2].theme, "Culinary Adventure");
        assert_eq!(days[3].theme, "Historical Exploration");
        assert_eq!(days[4].theme, "Departure Day");

        // Dates advance one day at a time
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.index, i as u32 + 1);
            assert_eq!(
                day.date,
                request.departure_date + Duration::days(i as i64)
            );
        }
    }

    #[test]
    fn test_two_day_trip_has_no_exploration_days() {
        let request = request(2, vec![Interest::Culture], "Delhi");
        let days = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].theme, "Arrival Day");
        assert_eq!(days[1].theme, "Departure Day");
    }

    #[test]
    fn test_single_day_trip_emits_arrival_only() {
        let request = request(1, vec![], "Delhi");
        let days = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].theme, "Arrival Day");
        assert!(days[0].group_cost.is_some());
    }

    #[test]
    fn test_arrival_cost_scales_with_travelers() {
        let mut request = request(3, vec![], "Delhi");
        request.travelers = 5;
        let days = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        assert_eq!(days[0].group_cost, Some(4_500 + 5 * 500));
    }

    #[test]
    fn test_exploration_day_cost_includes_overhead() {
        let request = request(3, vec![Interest::History], "Delhi");
        let days = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        // Delhi historical: 200 + 150 + 800 per person, plus 1500 overhead
        assert_eq!(days[1].group_cost, Some((200 + 150 + 800 + 1_500) * 2));
    }

    #[test]
    fn test_departure_day_has_no_cost_line() {
        let request = request(4, vec![], "Delhi");
        let days = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        assert_eq!(days.last().unwrap().group_cost, None);
    }

    #[test]
    fn test_unknown_destination_renders_generic_templates() {
        let request = request(4, vec![], "Ranthambore");
        let days = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        // Default cycle resolves to the generic default template
        assert!(days[1].activities[0].description.contains("City exploration"));
        // Placeholders must all be interpolated away
        for day in &days {
            for activity in &day.activities {
                assert!(!activity.description.contains('{'));
            }
        }
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let request = request(6, vec![Interest::History, Interest::Shopping], "Delhi");
        let catalog = ActivityTemplateCatalog::new();
        let first = synthesize(&request, &catalog).unwrap();
        let second = synthesize(&request, &catalog).unwrap();
        assert_eq!(first, second);
    }
}
