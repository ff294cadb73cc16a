//! Error taxonomy for the location and forecast lookups.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// Connection, TLS or body read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body is not the JSON we expect
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// ipinfo `loc` field is not `lat,lon`
    #[error("malformed coordinates: {0:?}")]
    MalformedCoordinates(String),

    /// The daily arrays of a forecast response differ in length
    #[error(
        "misaligned daily arrays: time={time}, weather_code={codes}, max={highs}, min={lows}"
    )]
    MisalignedForecast {
        time: usize,
        codes: usize,
        highs: usize,
        lows: usize,
    },
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
