//! Best-effort aggregation of external travel information sources
//!
//! Four independent providers are queried per request: an encyclopedic
//! summary, a geocoder, and two general-answer searches (accommodation and
//! transport market queries). Calls fan out concurrently, each under its
//! own timeout. A provider that times out, returns a non-200, or produces
//! a malformed payload degrades its one field to `None`; it never aborts
//! its siblings or the overall gather. No retries are attempted.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::TripSmithError;
use crate::models::{DestinationSummary, GeocodedPlace, MarketSnapshot, TravelData, TripRequest};
use crate::prices::{extract_prices, price_range_label};

/// Queries the external providers and assembles a `TravelData` bag
pub struct SourceAggregator {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl SourceAggregator {
    /// Build an aggregator with a shared HTTP client
    pub fn new(config: ProviderConfig) -> Result<Self, TripSmithError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TripSmithError::provider(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Gather everything the providers will give us for this request
    ///
    /// Partial data is always valid data: on total provider failure the
    /// result is simply an empty `TravelData`.
    pub async fn gather(&self, request: &TripRequest) -> TravelData {
        let accommodation_query = format!("{} hotels accommodation price", request.destination);
        let transport_query = format!(
            "{} to {} flight train bus price",
            request.departure_city, request.destination
        );

        let (destination_summary, geocoded, accommodation, transport) = tokio::join!(
            self.degraded("wikipedia", self.destination_summary(&request.destination)),
            self.degraded("nominatim", self.geocode(&request.destination)),
            self.degraded("duckduckgo", self.market_snapshot(&accommodation_query)),
            self.degraded("duckduckgo", self.market_snapshot(&transport_query)),
        );

        let data = TravelData {
            destination_summary,
            geocoded,
            accommodation,
            transport,
        };
        info!(
            destination = %request.destination,
            summary = data.destination_summary.is_some(),
            geocoded = data.geocoded.is_some(),
            accommodation = data.accommodation.is_some(),
            transport = data.transport.is_some(),
            "travel data gathered"
        );
        data
    }

    /// Run one provider call under its timeout, degrading failure to `None`
    async fn degraded<T>(
        &self,
        provider: &str,
        call: impl Future<Output = Result<Option<T>>>,
    ) -> Option<T> {
        let limit = Duration::from_secs(u64::from(self.config.timeout_seconds));
        match tokio::time::timeout(limit, call).await {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                debug!(provider, error = %e, "provider call failed");
                None
            }
            Err(_) => {
                debug!(provider, timeout_seconds = self.config.timeout_seconds, "provider timed out");
                None
            }
        }
    }

    /// Encyclopedic page summary for the destination
    async fn destination_summary(&self, destination: &str) -> Result<Option<DestinationSummary>> {
        let slug = destination.trim().replace(' ', "_");
        let url = format!(
            "{}/page/summary/{}",
            self.config.wikipedia_base_url,
            urlencoding::encode(&slug)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "wikipedia lookup returned no data");
            return Ok(None);
        }

        let payload: wire::WikipediaSummary = response
            .json()
            .await
            .with_context(|| "Failed to parse Wikipedia summary response")?;

        Ok(Some(DestinationSummary {
            title: payload.title,
            extract: payload.extract,
            coordinates: payload.coordinates.map(|c| (c.lat, c.lon)),
        }))
    }

    /// Geocode the destination; queries are India-scoped like the rest of
    /// the seasonal and emergency data
    async fn geocode(&self, destination: &str) -> Result<Option<GeocodedPlace>> {
        let url = format!("{}/search", self.config.nominatim_base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", format!("{destination}, India")),
                ("format", "json".to_string()),
                ("limit", "1".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "geocoder returned no data");
            return Ok(None);
        }

        let places: Vec<wire::NominatimPlace> = response
            .json()
            .await
            .with_context(|| "Failed to parse Nominatim response")?;

        Ok(places.into_iter().next().and_then(geocoded_from_place))
    }

    /// General-answer search, mined for price signals
    async fn market_snapshot(&self, query: &str) -> Result<Option<MarketSnapshot>> {
        let url = format!("{}/", self.config.duckduckgo_base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", format!("{query} travel price cost")),
                ("format", "json".to_string()),
                ("no_redirect", "1".to_string()),
                ("no_html", "1".to_string()),
                ("skip_disambig", "1".to_string()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "instant-answer search returned no data");
            return Ok(None);
        }

        let payload: wire::InstantAnswer = response
            .json()
            .await
            .with_context(|| "Failed to parse instant-answer response")?;

        Ok(Some(snapshot_from_answer(&payload)))
    }
}

/// Convert a geocoder hit, treating unparseable coordinates as no data
fn geocoded_from_place(place: wire::NominatimPlace) -> Option<GeocodedPlace> {
    let (Ok(latitude), Ok(longitude)) = (place.lat.parse(), place.lon.parse()) else {
        debug!(display_name = %place.display_name, "geocoder returned unparseable coordinates");
        return None;
    };
    Some(GeocodedPlace {
        display_name: place.display_name,
        latitude,
        longitude,
    })
}

/// Concatenate an answer bundle and mine it for prices. No price match is
/// not an error; the snapshot then carries an empty set and the neutral
/// range phrase.
fn snapshot_from_answer(answer: &wire::InstantAnswer) -> MarketSnapshot {
    let mut parts: Vec<&str> = vec![&answer.abstract_text, &answer.answer];
    parts.extend(
        answer
            .related_topics
            .iter()
            .take(3)
            .map(|topic| topic.text.as_str()),
    );
    let raw_text = parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let prices = extract_prices(&raw_text);
    let price_range = price_range_label(&prices);
    MarketSnapshot {
        raw_text,
        prices,
        price_range,
    }
}

/// Provider wire formats
mod wire {
    use serde::Deserialize;

    /// Wikipedia REST page summary
    #[derive(Debug, Deserialize)]
    pub struct WikipediaSummary {
        #[serde(default)]
        pub title: String,
        #[serde(default)]
        pub extract: String,
        pub coordinates: Option<Coordinates>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Coordinates {
        pub lat: f64,
        pub lon: f64,
    }

    /// Nominatim search result; coordinates arrive as strings
    #[derive(Debug, Deserialize)]
    pub struct NominatimPlace {
        #[serde(default)]
        pub display_name: String,
        #[serde(default)]
        pub lat: String,
        #[serde(default)]
        pub lon: String,
    }

    /// DuckDuckGo instant-answer payload, reduced to the fields we mine
    #[derive(Debug, Deserialize)]
    pub struct InstantAnswer {
        #[serde(rename = "AbstractText", default)]
        pub abstract_text: String,
        #[serde(rename = "Answer", default)]
        pub answer: String,
        #[serde(rename = "RelatedTopics", default)]
        pub related_topics: Vec<RelatedTopic>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RelatedTopic {
        #[serde(rename = "Text", default)]
        pub text: String,
    }
}
