/// User agent string for HTTP requests
pub const USER_AGENT: &str = "ascii-weather/0.1.0";

/// IP geolocation endpoint
pub const IPINFO_URL: &str = "https://ipinfo.io/json";

/// LocationIQ geocoding API base URL
pub const LOCATIONIQ_API_BASE: &str = "https://us1.locationiq.com/v1";

/// Public LocationIQ key used when `LOCATIONIQ_API_KEY` is not set
pub const LOCATIONIQ_DEFAULT_KEY: &str = "pk.cd63b67671438fd13619f5b4afadcb8c";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Daily metrics requested from Open-Meteo
pub const DAILY_METRICS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

pub const TEMPERATURE_UNIT: &str = "fahrenheit";

/// Width of every rendered forecast column
pub const DEFAULT_COLUMN_WIDTH: usize = 25;

/// Log file name under the system temp dir when `ASCII_WEATHER_LOG_FILE` is unset
pub const DEFAULT_LOG_FILE_NAME: &str = "ascii-weather.log";

pub const COLUMN_SEPARATOR: &str = " | ";

/// Placeholder for a city or region that could not be resolved
pub const UNKNOWN_PLACE: &str = "Unknown";

/// Coordinate text returned when geocoding yields nothing
pub const NULL_COORDINATE: &str = "0.0";

pub const DEFAULT_CITY: &str = "Minneapolis";
pub const DEFAULT_REGION: &str = "Minnesota";
pub const DEFAULT_LATITUDE: &str = "44.98";
pub const DEFAULT_LONGITUDE: &str = "-93.2638";

pub const MALFORMED_QUERY_MESSAGE: &str =
    "Please enter both a city and a state (e.g., Los Angeles, CA)";

pub const PROMPT: &str =
    "Enter a city and state (e.g., Los Angeles, CA) to get weather or type 'quit' to exit:";
