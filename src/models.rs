use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// Absent (or null) for points outside NWS forecast coverage
    #[serde(default)]
    pub forecast: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub temperature: serde_json::Number,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

// ============================================================================
// Gateway Models
// ============================================================================

/// Coordinate parameters of `GET /weather`, as the caller wrote them.
#[derive(Debug, Default, PartialEq)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl WeatherQuery {
    /// Keeps the first occurrence of each key; repeats are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut query.lat,
                "lon" => &mut query.lon,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// A validated coordinate. The caller's text is kept because that, not the
/// parsed value, is what gets forwarded upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    lat_text: String,
    lon_text: String,
}

impl Coordinate {
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self, ValidationError> {
        let (lat, lon) = match (lat, lon) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
            _ => return Err(ValidationError::MissingCoordinates),
        };

        let latitude = parse_finite(lat).ok_or(ValidationError::InvalidCoordinates)?;
        let longitude = parse_finite(lon).ok_or(ValidationError::InvalidCoordinates)?;

        Ok(Self {
            latitude,
            longitude,
            lat_text: lat.to_string(),
            lon_text: lon.to_string(),
        })
    }

    /// `{lat},{lon}` exactly as the caller wrote it
    pub fn path_segment(&self) -> String {
        format!("{},{}", self.lat_text, self.lon_text)
    }
}

/// Accepts surrounding whitespace and `_` between digits, e.g. `" 1_000.5"`.
fn parse_finite(text: &str) -> Option<f64> {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut number = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            number.push(c);
            continue;
        }
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit);
        if !between_digits {
            return None;
        }
    }

    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Condensed view of the current forecast period returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub temperature: serde_json::Number,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

impl From<ForecastPeriod> for ForecastSummary {
    fn from(period: ForecastPeriod) -> Self {
        Self {
            temperature: period.temperature,
            temperature_unit: period.temperature_unit,
            wind_speed: period.wind_speed,
            wind_direction: period.wind_direction,
            short_forecast: period.short_forecast,
            detailed_forecast: period.detailed_forecast,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}
