//! `EcoTravel` - rule-based eco-friendly travel recommendations
//!
//! This library provides the recommendation rule engine, the data providers
//! it draws weather, air quality and directions from, and the HTTP service
//! that exposes it.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod providers;
pub mod service;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use engine::{Recommendation, TripInputs, generate_recommendation};
pub use error::TravelError;
pub use models::{TravelMode, TravelPreferences, TravelRecommendation, TravelRequest};
pub use service::RecommendationService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
