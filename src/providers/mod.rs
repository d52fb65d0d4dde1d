//! Data providers the recommendation service consumes
//!
//! Each provider sits behind an async trait so a live integration can replace
//! the mocks without touching the service or the engine.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::models::{AirQualitySnapshot, Directions, WeatherSnapshot};

pub mod mock;

pub use mock::{MockAirQualityProvider, MockDirectionsProvider, MockWeatherProvider};

/// Which flavour of route to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteProfile {
    /// Lowest-emission route, usually transit
    Eco,
    /// Fastest route, usually driving
    Standard,
}

#[derive(Debug, Clone)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub profile: RouteProfile,
    pub avoid_highways: bool,
    pub avoid_tolls: bool,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot>;
}

#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    async fn current(&self, location: &str) -> Result<AirQualitySnapshot>;
}

#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn directions(&self, query: &RouteQuery) -> Result<Directions>;
}

/// The providers one service instance talks to
#[derive(Clone)]
pub struct Providers {
    pub weather: Arc<dyn WeatherProvider>,
    pub air_quality: Arc<dyn AirQualityProvider>,
    pub directions: Arc<dyn DirectionsProvider>,
}

impl Providers {
    /// The fixed mock data set
    #[must_use]
    pub fn mock() -> Self {
        Self {
            weather: Arc::new(MockWeatherProvider),
            air_quality: Arc::new(MockAirQualityProvider),
            directions: Arc::new(MockDirectionsProvider),
        }
    }
}

impl Default for Providers {
    fn default() -> Self {
        Self::mock()
    }
}
