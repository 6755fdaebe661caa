//! End-to-end planning pipeline
//!
//! Validation, provider aggregation, itinerary synthesis, budget
//! allocation, and document assembly in one pass. Only request validation
//! can fail the pipeline; everything downstream of it degrades instead.

use tracing::{info, warn};

use crate::assembler::assemble;
use crate::budget::{allocate, BudgetBreakdown};
use crate::catalog::ActivityTemplateCatalog;
use crate::error::TripSmithError;
use crate::models::{ItineraryDay, TravelData, TripDocument, TripRequest};
use crate::narrative::{build_prompt, is_generation_failure, NarrativeGenerator};
use crate::sources::SourceAggregator;
use crate::synthesis::synthesize;

/// Everything one planning run produced
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub document: TripDocument,
    pub travel_data: TravelData,
    pub itinerary: Vec<ItineraryDay>,
    pub budget: BudgetBreakdown,
}

/// Run the full pipeline, including the provider fan-out
pub async fn plan(
    request: &TripRequest,
    aggregator: &SourceAggregator,
    generator: Option<&dyn NarrativeGenerator>,
) -> Result<PlanOutcome, TripSmithError> {
    request.validate()?;
    let travel_data = aggregator.gather(request).await;
    build_plan(request, travel_data, generator)
}

/// The deterministic tail of the pipeline: synthesis, allocation, and
/// assembly over already-gathered data
pub fn build_plan(
    request: &TripRequest,
    travel_data: TravelData,
    generator: Option<&dyn NarrativeGenerator>,
) -> Result<PlanOutcome, TripSmithError> {
    request.validate()?;

    let catalog = ActivityTemplateCatalog::new();
    let itinerary = synthesize(request, &catalog)?;
    let budget = allocate(
        request.total_budget,
        request.accommodation_pct,
        request.transport_pct,
        request.food_pct,
        request.activities_pct,
    );

    let narrative = generator.and_then(|g| {
        match g.generate(&build_prompt(request, &travel_data)) {
            Ok(text) if !is_generation_failure(&text) => Some(text),
            Ok(_) => {
                warn!("narrative generator returned a failure sentinel, continuing without");
                None
            }
            Err(e) => {
                warn!(error = %e, "narrative generation failed, continuing without");
                None
            }
        }
    });

    let document = assemble(request, &travel_data, &itinerary, &budget, narrative.as_deref());
    info!(
        destination = %request.destination,
        days = itinerary.len(),
        sections = document.sections.len(),
        enriched = !travel_data.is_empty(),
        "trip plan assembled"
    );

    Ok(PlanOutcome {
        document,
        travel_data,
        itinerary,
        budget,
    })
}
