//! Aggregated best-effort travel data
//!
//! Every field here is optional. A provider that times out, errors, or
//! returns nothing leaves its field `None`; absence is a normal state,
//! not a failure.

use serde::{Deserialize, Serialize};

/// Encyclopedic summary of the destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub title: String,
    pub extract: String,
    /// (latitude, longitude) when the source supplies coordinates
    pub coordinates: Option<(f64, f64)>,
}

/// Geocoder result for the destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Free-text market evidence plus the price signals mined from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Concatenated abstract, direct answer, and related snippets
    pub raw_text: String,
    /// Ascending, deduplicated prices in rupees
    pub prices: Vec<u32>,
    /// "Rs. min - Rs. max", or a neutral phrase when no price matched
    pub price_range: String,
}

/// Everything the source aggregator managed to learn for one request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelData {
    pub destination_summary: Option<DestinationSummary>,
    pub geocoded: Option<GeocodedPlace>,
    pub accommodation: Option<MarketSnapshot>,
    pub transport: Option<MarketSnapshot>,
}

impl TravelData {
    /// True when no provider returned anything usable
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destination_summary.is_none()
            && self.geocoded.is_none()
            && self.accommodation.is_none()
            && self.transport.is_none()
    }
}
