//! Request and response shapes of the recommendation endpoint

use serde::{Deserialize, Serialize};

use super::{AirQualitySnapshot, Directions, TravelMode, TravelPreferences, WeatherSnapshot};

/// Body of `POST /api/travel-recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(default)]
    pub preferences: Option<TravelPreferences>,
}

impl TravelRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
            destination: Some(destination.into()),
            preferences: None,
        }
    }

    #[must_use]
    pub fn with_preferences(mut self, preferences: TravelPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

/// A value observed at both ends of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEnds<T> {
    pub origin: T,
    pub destination: T,
}

/// Everything the client needs to display a recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRecommendation {
    pub success: bool,
    pub origin: String,
    pub destination: String,
    /// Rendered recommendation block
    pub recommendations: String,
    pub primary_mode: TravelMode,
    pub alternative_modes: [TravelMode; 2],
    pub weather_data: TripEnds<WeatherSnapshot>,
    pub air_quality_data: TripEnds<AirQualitySnapshot>,
    /// The directions the recommendation was computed from
    pub directions_data: Directions,
    pub eco_route: Directions,
    pub standard_route: Directions,
}
