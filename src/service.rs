use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::constants::{DAILY_METRICS, TEMPERATURE_UNIT, USER_AGENT};
use crate::error::{Result, WeatherError};
use crate::models::{ForecastSet, GeocodeCandidate, IpInfoResponse, Location, OpenMeteoResponse};

/// Resolves locations and fetches forecasts.
///
/// Every public lookup is attempted once and never fails: errors are logged
/// and replaced by a fallback value.
#[derive(Clone)]
pub struct WeatherService {
    client: Client,
    api: ApiConfig,
}

impl WeatherService {
    pub fn new(api: ApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, api })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Location of this machine's public IP, or Minneapolis if that fails
    pub async fn locate_by_ip(&self) -> Location {
        match self.try_locate_by_ip().await {
            Ok(location) => location,
            Err(e) => {
                tracing::error!("IP location lookup failed: {}", e);
                Location::fallback()
            }
        }
    }

    async fn try_locate_by_ip(&self) -> Result<Location> {
        let info = self
            .make_request::<IpInfoResponse>(&self.api.ipinfo_url, &[])
            .await?;
        tracing::debug!(
            "ipinfo answered for {} ({}, {}, {})",
            info.ip,
            info.city,
            info.region,
            info.country
        );
        Location::try_from(info)
    }

    /// Geocodes `"{city},{state}"`. No match or a failed request yields an
    /// `"Unknown"` place at `"0.0","0.0"`.
    pub async fn resolve_place(&self, city: &str, state: &str) -> Location {
        let candidates = match self.geocode(city, state).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!("Geocoding {:?}, {:?} failed: {}", city, state, e);
                Vec::new()
            }
        };

        if candidates.is_empty() {
            tracing::warn!("No geocoding match for {:?}, {:?}", city, state);
        }

        Location::from_candidates(city, state, &candidates)
    }

    async fn geocode(&self, city: &str, state: &str) -> Result<Vec<GeocodeCandidate>> {
        let url = format!("{}/search.php", self.api.geocode_base);
        let place = format!("{},{}", city, state);

        self.make_request(
            &url,
            &[
                ("key", self.api.geocode_key.as_str()),
                ("q", place.as_str()),
                ("format", "json"),
            ],
        )
        .await
    }

    /// Daily forecast for `location`; empty when the fetch fails
    pub async fn forecast(&self, location: &Location) -> ForecastSet {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            location.latitude,
            location.longitude
        );

        match self.try_forecast(location).await {
            Ok(forecast) => forecast,
            Err(e) => {
                tracing::error!("Failed to fetch forecast: {}", e);
                ForecastSet::default()
            }
        }
    }

    async fn try_forecast(&self, location: &Location) -> Result<ForecastSet> {
        let url = format!("{}/forecast", self.api.forecast_base);

        let response = self
            .make_request::<OpenMeteoResponse>(
                &url,
                &[
                    ("latitude", location.latitude.as_str()),
                    ("longitude", location.longitude.as_str()),
                    ("daily", DAILY_METRICS),
                    ("temperature_unit", TEMPERATURE_UNIT),
                ],
            )
            .await?;

        tracing::debug!(
            "Open-Meteo grid point {:.4}, {:.4}",
            response.latitude,
            response.longitude
        );

        ForecastSet::try_from(response.daily)
    }

    /// IP location plus its forecast, as shown at startup
    pub async fn initial_lookup(&self) -> (Location, ForecastSet) {
        let location = self.locate_by_ip().await;
        let forecast = self.forecast(&location).await;
        (location, forecast)
    }

    /// Geocoded location plus its forecast, for a submitted query
    pub async fn lookup(&self, city: &str, state: &str) -> (Location, ForecastSet) {
        let location = self.resolve_place(city, state).await;
        let forecast = self.forecast(&location).await;
        (location, forecast)
    }
}
