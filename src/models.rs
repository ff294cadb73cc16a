use serde::Deserialize;

use crate::constants::{
    DEFAULT_CITY, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_REGION, NULL_COORDINATE,
    UNKNOWN_PLACE,
};
use crate::error::{Result, WeatherError};

// ============================================================================
// ipinfo.io Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct IpInfoResponse {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    /// `"lat,lon"`
    #[serde(default)]
    pub loc: String,
}

// ============================================================================
// LocationIQ Models
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    pub lat: String,
    pub lon: String,
}

// ============================================================================
// Open-Meteo Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenMeteoResponse {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub daily: DailyData,
}

#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
}

// ============================================================================
// Domain Models
// ============================================================================

/// A resolved place. Coordinates stay as text so they can be passed into
/// query strings unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub region: String,
    pub latitude: String,
    pub longitude: String,
}

impl Location {
    pub fn new(
        city: impl Into<String>,
        region: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            region: region.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Used whenever the IP lookup fails
    pub fn fallback() -> Self {
        Self::new(DEFAULT_CITY, DEFAULT_REGION, DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }

    /// Builds a location for a typed query from the geocoder's answer.
    ///
    /// The first candidate wins. With no candidates the coordinates are
    /// `"0.0","0.0"`, and a `"0.0","0.0"` answer renames the place to
    /// `"Unknown"`.
    pub fn from_candidates(city: &str, region: &str, candidates: &[GeocodeCandidate]) -> Self {
        let (latitude, longitude) = candidates
            .first()
            .map(|c| (c.lat.as_str(), c.lon.as_str()))
            .unwrap_or((NULL_COORDINATE, NULL_COORDINATE));
        Self::from_coordinates(city, region, latitude, longitude)
    }

    pub fn from_coordinates(city: &str, region: &str, latitude: &str, longitude: &str) -> Self {
        if latitude == NULL_COORDINATE && longitude == NULL_COORDINATE {
            Self::new(UNKNOWN_PLACE, UNKNOWN_PLACE, latitude, longitude)
        } else {
            Self::new(city, region, latitude, longitude)
        }
    }
}

impl TryFrom<IpInfoResponse> for Location {
    type Error = WeatherError;

    fn try_from(info: IpInfoResponse) -> Result<Self> {
        let (latitude, longitude) = info
            .loc
            .split_once(',')
            .ok_or_else(|| WeatherError::MalformedCoordinates(info.loc.clone()))?;
        Ok(Self::new(info.city, info.region, latitude, longitude))
    }
}

/// One forecast day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    /// `YYYY-MM-DD` as sent by the forecast source
    pub date: String,
    pub weather_code: i32,
    pub temperature_max: f64,
    pub temperature_min: f64,
}

/// Forecast days in the order the source returned them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSet {
    days: Vec<DailyForecast>,
}

impl ForecastSet {
    pub fn new(days: Vec<DailyForecast>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DailyForecast] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl TryFrom<DailyData> for ForecastSet {
    type Error = WeatherError;

    fn try_from(daily: DailyData) -> Result<Self> {
        let len = daily.time.len();
        if daily.weather_code.len() != len
            || daily.temperature_max.len() != len
            || daily.temperature_min.len() != len
        {
            return Err(WeatherError::MisalignedForecast {
                time: len,
                codes: daily.weather_code.len(),
                highs: daily.temperature_max.len(),
                lows: daily.temperature_min.len(),
            });
        }

        let days = daily
            .time
            .into_iter()
            .zip(daily.weather_code)
            .zip(daily.temperature_max.into_iter().zip(daily.temperature_min))
            .map(|((date, weather_code), (temperature_max, temperature_min))| DailyForecast {
                date,
                weather_code,
                temperature_max,
                temperature_min,
            })
            .collect();

        Ok(Self { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_info_splits_loc_on_first_comma() {
        let info: IpInfoResponse = serde_json::from_str(
            r#"{"ip":"1.2.3.4","city":"Boston","region":"Massachusetts","country":"US","loc":"42.3584,-71.0598"}"#,
        )
        .unwrap();
        assert_eq!(info.ip, "1.2.3.4");
        assert_eq!(info.country, "US");

        let location = Location::try_from(info).unwrap();
        assert_eq!(
            location,
            Location::new("Boston", "Massachusetts", "42.3584", "-71.0598")
        );
    }

    #[test]
    fn ip_info_without_comma_is_rejected() {
        let info: IpInfoResponse = serde_json::from_str(r#"{"city":"Nowhere","loc":"12.5"}"#).unwrap();
        assert!(matches!(
            Location::try_from(info),
            Err(WeatherError::MalformedCoordinates(loc)) if loc == "12.5"
        ));
    }

    #[test]
    fn no_candidates_resolves_to_unknown() {
        let location = Location::from_candidates("Atlantis", "XX", &[]);
        assert_eq!(location, Location::new("Unknown", "Unknown", "0.0", "0.0"));
    }

    #[test]
    fn first_candidate_wins() {
        let candidates: Vec<GeocodeCandidate> = serde_json::from_str(
            r#"[{"lat":"34.0536909","lon":"-118.242766","display_name":"Los Angeles"},{"lat":"1","lon":"2"}]"#,
        )
        .unwrap();
        let location = Location::from_candidates("Los Angeles", "CA", &candidates);
        assert_eq!(
            location,
            Location::new("Los Angeles", "CA", "34.0536909", "-118.242766")
        );
    }

    #[test]
    fn zero_coordinates_from_geocoder_are_unknown() {
        let candidates = vec![GeocodeCandidate {
            lat: "0.0".to_string(),
            lon: "0.0".to_string(),
        }];
        let location = Location::from_candidates("Null Island", "ZZ", &candidates);
        assert_eq!(location.city, "Unknown");
        assert_eq!(location.region, "Unknown");
    }

    #[test]
    fn daily_arrays_zip_into_days_in_order() {
        let response: OpenMeteoResponse = serde_json::from_str(
            r#"{
                "latitude": 44.98,
                "longitude": -93.26,
                "daily": {
                    "time": ["2024-10-13", "2024-10-14"],
                    "weather_code": [0, 61],
                    "temperature_2m_max": [75.4, 68.0],
                    "temperature_2m_min": [60.2, 51.9]
                }
            }"#,
        )
        .unwrap();

        let set = ForecastSet::try_from(response.daily).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.days()[1],
            DailyForecast {
                date: "2024-10-14".to_string(),
                weather_code: 61,
                temperature_max: 68.0,
                temperature_min: 51.9,
            }
        );
    }

    #[test]
    fn misaligned_daily_arrays_are_rejected() {
        let daily = DailyData {
            time: vec!["2024-10-13".to_string(), "2024-10-14".to_string()],
            weather_code: vec![0],
            temperature_max: vec![75.4, 70.0],
            temperature_min: vec![60.2, 55.0],
        };
        assert!(matches!(
            ForecastSet::try_from(daily),
            Err(WeatherError::MisalignedForecast { time: 2, codes: 1, .. })
        ));
    }
}
