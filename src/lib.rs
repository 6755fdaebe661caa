//! TripSmith - structured travel plan synthesis
//!
//! Aggregates best-effort destination data from public providers, then
//! deterministically synthesizes a day-by-day itinerary, a reconciled
//! budget breakdown, and a complete advisory document. Provider outages
//! degrade enrichment, never the plan itself.

pub mod assembler;
pub mod budget;
pub mod catalog;
pub mod config;
pub mod delivery;
pub mod error;
pub mod models;
pub mod narrative;
pub mod pipeline;
pub mod prices;
pub mod render;
pub mod sources;
pub mod synthesis;

pub use budget::{allocate, BudgetBreakdown};
pub use catalog::ActivityTemplateCatalog;
pub use config::TripSmithConfig;
pub use error::TripSmithError;
pub use models::{TravelData, TripDocument, TripRequest};
pub use pipeline::{build_plan, plan, PlanOutcome};
pub use sources::SourceAggregator;

/// Crate version, surfaced in logs and the CLI banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
