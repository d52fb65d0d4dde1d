//! Reduce raw provider snapshots to the facts the rules read

use crate::models::{
    AirQualitySnapshot, Directions, RouteLeg, WeatherSnapshot, air_quality, weather,
};

/// Conditions at both ends of the trip with every fallback applied
#[derive(Debug, Clone, PartialEq)]
pub struct TripConditions {
    pub origin_temperature_c: f64,
    pub origin_condition: String,
    pub destination_temperature_c: f64,
    pub destination_condition: String,
    pub origin_aqi: u32,
    pub origin_aqi_category: String,
    pub destination_aqi: u32,
    pub destination_aqi_category: String,
    pub leg: RouteLeg,
}

impl TripConditions {
    /// Missing snapshots read as 18 °C / "Clear", AQI 50 / "Good" and the
    /// placeholder leg.
    #[must_use]
    pub fn resolve(
        directions: Option<&Directions>,
        origin_weather: Option<&WeatherSnapshot>,
        destination_weather: Option<&WeatherSnapshot>,
        origin_air_quality: Option<&AirQualitySnapshot>,
        destination_air_quality: Option<&AirQualitySnapshot>,
    ) -> Self {
        let temperature = |snapshot: Option<&WeatherSnapshot>| {
            snapshot.map_or(weather::FALLBACK_TEMPERATURE_C, WeatherSnapshot::temperature_c)
        };
        let condition = |snapshot: Option<&WeatherSnapshot>| {
            snapshot
                .map_or(weather::FALLBACK_CONDITION, WeatherSnapshot::condition_text)
                .to_string()
        };
        let aqi = |snapshot: Option<&AirQualitySnapshot>| {
            snapshot.map_or(air_quality::FALLBACK_AQI, AirQualitySnapshot::aqi)
        };
        let category = |snapshot: Option<&AirQualitySnapshot>| {
            snapshot
                .map_or(air_quality::FALLBACK_AQI_CATEGORY, AirQualitySnapshot::category)
                .to_string()
        };

        Self {
            origin_temperature_c: temperature(origin_weather),
            origin_condition: condition(origin_weather),
            destination_temperature_c: temperature(destination_weather),
            destination_condition: condition(destination_weather),
            origin_aqi: aqi(origin_air_quality),
            origin_aqi_category: category(origin_air_quality),
            destination_aqi: aqi(destination_air_quality),
            destination_aqi_category: category(destination_air_quality),
            leg: directions.map_or_else(RouteLeg::placeholder, Directions::leg_or_placeholder),
        }
    }

    /// Rain or snow at either end
    #[must_use]
    pub fn is_wet(&self) -> bool {
        weather::is_wet(&self.origin_condition) || weather::is_wet(&self.destination_condition)
    }

    /// Rain, snow or storm at either end
    #[must_use]
    pub fn is_severe_weather(&self) -> bool {
        weather::is_severe(&self.origin_condition)
            || weather::is_severe(&self.destination_condition)
    }

    /// Either AQI above the given value
    #[must_use]
    pub fn aqi_exceeds(&self, threshold: u32) -> bool {
        self.origin_aqi > threshold || self.destination_aqi > threshold
    }

    /// Unhealthy or hazardous category at either end
    #[must_use]
    pub fn is_poor_air(&self) -> bool {
        air_quality::is_poor_category(&self.origin_aqi_category)
            || air_quality::is_poor_category(&self.destination_aqi_category)
    }
}

impl Default for TripConditions {
    fn default() -> Self {
        Self::resolve(None, None, None, None, None)
    }
}
