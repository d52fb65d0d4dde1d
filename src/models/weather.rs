//! Weather snapshot model and display methods

use serde::{Deserialize, Serialize};

/// Temperature assumed when a snapshot carries no current conditions
pub const FALLBACK_TEMPERATURE_C: f64 = 18.0;
/// Condition assumed when a snapshot carries no current conditions
pub const FALLBACK_CONDITION: &str = "Clear";

/// Current weather at one end of the trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: WeatherLocation,
    /// Absent when the provider answered without live conditions
    #[serde(default)]
    pub current: Option<CurrentWeather>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WeatherLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    /// Provider-local time, display only
    #[serde(default)]
    pub localtime: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Temperature in Fahrenheit
    pub temp_f: f64,
    pub condition: WeatherCondition,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Wind direction in degrees (0-360, where 0/360 is North)
    pub wind_degree: u16,
    /// Cardinal wind direction, e.g. "W"
    pub wind_dir: String,
    /// Atmospheric pressure in millibar
    pub pressure_mb: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Cloud cover percentage
    pub cloud: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    /// Visibility in kilometers
    pub vis_km: f64,
    pub uv: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherCondition {
    /// Free-form description such as "Partly cloudy" or "Light rain"
    pub text: String,
    #[serde(default)]
    pub icon: String,
}

impl WeatherSnapshot {
    /// Snapshot substituted when the weather provider is unavailable.
    /// Carries no current conditions, so readers fall back to 18 °C / "Clear".
    #[must_use]
    pub fn fallback(location: &str) -> Self {
        Self {
            location: WeatherLocation {
                name: location.to_string(),
                ..Default::default()
            },
            current: None,
        }
    }

    /// Current temperature in Celsius, or the fallback
    #[must_use]
    pub fn temperature_c(&self) -> f64 {
        self.current
            .as_ref()
            .map_or(FALLBACK_TEMPERATURE_C, |current| current.temp_c)
    }

    /// Current condition text, or the fallback
    #[must_use]
    pub fn condition_text(&self) -> &str {
        self.current
            .as_ref()
            .map_or(FALLBACK_CONDITION, |current| current.condition.text.as_str())
    }
}

impl CurrentWeather {
    /// Convert temperature from Celsius to Fahrenheit
    #[must_use]
    pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
        celsius * 9.0 / 5.0 + 32.0
    }
}

/// Whether a condition text describes rain or snow
#[must_use]
pub fn is_wet(condition: &str) -> bool {
    let condition = condition.to_lowercase();
    condition.contains("rain") || condition.contains("snow")
}

/// Whether a condition text describes rain, snow or a storm
#[must_use]
pub fn is_severe(condition: &str) -> bool {
    is_wet(condition) || condition.to_lowercase().contains("storm")
}
