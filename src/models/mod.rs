//! Core data models for the `TripSmith` planner

pub mod document;
pub mod itinerary;
pub mod request;
pub mod travel_data;

pub use document::{Block, Section, Table, TripDocument};
pub use itinerary::{DayActivity, DayPeriod, ItineraryDay};
pub use request::{
    DietaryPreference, Interest, TransportMode, TravelPace, TripRequest, TripType,
};
pub use travel_data::{DestinationSummary, GeocodedPlace, MarketSnapshot, TravelData};
