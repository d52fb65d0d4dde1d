//! Data models for the EcoTravel service
//!
//! This module contains the domain models organized by concern:
//! - Preferences: rider preferences and the travel mode vocabulary
//! - Weather: current conditions per location
//! - Air quality: AQI indexes and pollutants per location
//! - Route: directions, legs and steps
//! - Trip: request and response shapes of the API

pub mod air_quality;
pub mod preferences;
pub mod route;
pub mod trip;
pub mod weather;

// Re-export all public types for convenient access
pub use air_quality::{AirQualitySnapshot, AqiIndex, HealthRecommendations, Pollutant};
pub use preferences::{
    LuggageAmount, PreferredMode, ResolvedPreferences, TravelMode, TravelPreferences,
};
pub use route::{Directions, Route, RouteLeg, RouteStep, TextValue};
pub use trip::{TravelRecommendation, TravelRequest, TripEnds};
pub use weather::{CurrentWeather, WeatherCondition, WeatherLocation, WeatherSnapshot};
