//! Request handling between the HTTP layer and the rule engine

use tracing::{info, instrument, warn};

use crate::Result;
use crate::TravelError;
use crate::engine::{self, TripInputs};
use crate::models::{
    AirQualitySnapshot, Directions, TravelRecommendation, TravelRequest, TripEnds,
    WeatherSnapshot,
};
use crate::providers::{Providers, RouteProfile, RouteQuery};

pub const MISSING_ENDPOINTS_MESSAGE: &str = "Origin and destination are required";

/// Validates requests, gathers provider data and runs the engine
#[derive(Clone)]
pub struct RecommendationService {
    providers: Providers,
}

impl RecommendationService {
    #[must_use]
    pub fn new(providers: Providers) -> Self {
        Self { providers }
    }

    #[must_use]
    pub fn with_mocks() -> Self {
        Self::new(Providers::mock())
    }

    #[instrument(skip_all)]
    pub async fn recommend(&self, request: TravelRequest) -> Result<TravelRecommendation> {
        let (origin, destination) = required_endpoints(&request)?;
        let preferences = request.preferences.unwrap_or_default();
        preferences.validate()?;

        info!(%origin, %destination, "processing travel recommendation");

        let query = |profile| RouteQuery {
            origin: origin.clone(),
            destination: destination.clone(),
            profile,
            avoid_highways: preferences.avoid_highways.unwrap_or(false),
            avoid_tolls: preferences.avoid_tolls.unwrap_or(false),
        };
        let eco_query = query(RouteProfile::Eco);
        let standard_query = query(RouteProfile::Standard);

        let (
            origin_weather,
            destination_weather,
            origin_air_quality,
            destination_air_quality,
            eco_route,
            standard_route,
        ) = tokio::join!(
            self.providers.weather.current(&origin),
            self.providers.weather.current(&destination),
            self.providers.air_quality.current(&origin),
            self.providers.air_quality.current(&destination),
            self.providers.directions.directions(&eco_query),
            self.providers.directions.directions(&standard_query),
        );

        let origin_weather = or_fallback(origin_weather, "weather", || {
            WeatherSnapshot::fallback(&origin)
        });
        let destination_weather = or_fallback(destination_weather, "weather", || {
            WeatherSnapshot::fallback(&destination)
        });
        let origin_air_quality =
            or_fallback(origin_air_quality, "air quality", AirQualitySnapshot::fallback);
        let destination_air_quality = or_fallback(
            destination_air_quality,
            "air quality",
            AirQualitySnapshot::fallback,
        );
        let eco_route = or_fallback(eco_route, "directions", Directions::fallback);
        let standard_route = or_fallback(standard_route, "directions", Directions::fallback);

        let resolved = preferences.resolve();
        let recommendation = engine::generate_recommendation(&TripInputs {
            origin: &origin,
            destination: &destination,
            directions: Some(&eco_route),
            origin_weather: Some(&origin_weather),
            destination_weather: Some(&destination_weather),
            origin_air_quality: Some(&origin_air_quality),
            destination_air_quality: Some(&destination_air_quality),
            preferences: &resolved,
        })?;

        info!(
            primary_mode = %recommendation.primary_mode,
            alternatives = ?recommendation.alternative_modes(),
            "recommendation generated"
        );

        Ok(TravelRecommendation {
            success: true,
            recommendations: recommendation.to_html()?,
            primary_mode: recommendation.primary_mode,
            alternative_modes: recommendation.alternative_modes(),
            weather_data: TripEnds {
                origin: origin_weather,
                destination: destination_weather,
            },
            air_quality_data: TripEnds {
                origin: origin_air_quality,
                destination: destination_air_quality,
            },
            directions_data: eco_route.clone(),
            eco_route,
            standard_route,
            origin,
            destination,
        })
    }
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::with_mocks()
    }
}

fn required_endpoints(request: &TravelRequest) -> Result<(String, String)> {
    let non_blank = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };
    match (non_blank(&request.origin), non_blank(&request.destination)) {
        (Some(origin), Some(destination)) => Ok((origin, destination)),
        _ => Err(TravelError::validation(MISSING_ENDPOINTS_MESSAGE)),
    }
}

fn or_fallback<T>(result: Result<T>, provider: &str, fallback: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|e| {
        warn!(provider, error = %e, "provider failed, using fallback data");
        fallback()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LuggageAmount, PreferredMode, TravelMode, TravelPreferences};
    use crate::providers::{AirQualityProvider, DirectionsProvider, WeatherProvider};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Unavailable;

    #[async_trait]
    impl WeatherProvider for Unavailable {
        async fn current(&self, _location: &str) -> Result<WeatherSnapshot> {
            Err(TravelError::upstream("weather", "connection refused"))
        }
    }

    #[async_trait]
    impl AirQualityProvider for Unavailable {
        async fn current(&self, _location: &str) -> Result<AirQualitySnapshot> {
            Err(TravelError::upstream("air quality", "503"))
        }
    }

    #[async_trait]
    impl DirectionsProvider for Unavailable {
        async fn directions(&self, _query: &RouteQuery) -> Result<Directions> {
            Err(TravelError::upstream("directions", "quota exceeded"))
        }
    }

    fn form_preferences() -> TravelPreferences {
        TravelPreferences {
            preferred_mode: Some(PreferredMode::Any),
            max_walking_distance: Some(2.0),
            max_travel_time: Some(60),
            environmental_impact_priority: Some(5),
            luggage_amount: Some(LuggageAmount::None),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_mock_trip_recommends_transit() {
        let service = RecommendationService::with_mocks();
        let request =
            TravelRequest::new("Berkeley", "Oakland").with_preferences(form_preferences());
        let response = service.recommend(request).await.unwrap();

        assert!(response.success);
        assert_eq!(response.primary_mode, TravelMode::Transit);
        assert_eq!(
            response.alternative_modes,
            [TravelMode::Walking, TravelMode::Bicycling]
        );
        assert!(response.recommendations.contains("0.5 kg CO2"));
        assert_eq!(response.directions_data, response.eco_route);
        assert_eq!(response.standard_route.first_leg().unwrap().distance.value, 19_312);
        assert_eq!(response.weather_data.origin.location.name, "Berkeley");
        assert_eq!(response.air_quality_data.destination.aqi(), 42);
    }

    #[tokio::test]
    async fn test_endpoints_are_trimmed() {
        let service = RecommendationService::with_mocks();
        let response = service
            .recommend(TravelRequest::new("  Berkeley ", "Oakland\n"))
            .await
            .unwrap();
        assert_eq!(response.origin, "Berkeley");
        assert_eq!(response.destination, "Oakland");
    }

    #[tokio::test]
    async fn test_missing_or_blank_endpoints_are_rejected() {
        let service = RecommendationService::with_mocks();
        for request in [
            TravelRequest::default(),
            TravelRequest::new("Berkeley", "   "),
            TravelRequest {
                destination: Some("Oakland".to_string()),
                ..Default::default()
            },
        ] {
            let err = service.recommend(request).await.unwrap_err();
            assert!(err.is_client_error());
            assert_eq!(err.user_message(), MISSING_ENDPOINTS_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_preferences_are_rejected() {
        let service = RecommendationService::with_mocks();
        let request = TravelRequest::new("Berkeley", "Oakland").with_preferences(TravelPreferences {
            environmental_impact_priority: Some(0),
            ..Default::default()
        });
        let err = service.recommend(request).await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_provider_failures_fall_back() {
        let unavailable = Arc::new(Unavailable);
        let service = RecommendationService::new(Providers {
            weather: unavailable.clone(),
            air_quality: unavailable.clone(),
            directions: unavailable,
        });
        let response = service
            .recommend(TravelRequest::new("Berkeley", "Oakland"))
            .await
            .unwrap();

        assert_eq!(response.primary_mode, TravelMode::Transit);
        assert!(response.weather_data.origin.current.is_none());
        assert_eq!(response.air_quality_data.origin.aqi(), 50);
        assert!(response.eco_route.routes.is_empty());
        assert!(response.recommendations.contains("Berkeley is clear with temperatures of 18°C"));
        assert!(response.recommendations.contains("approximately 30 mins"));
    }

    #[tokio::test]
    async fn test_explicit_mode_wins_over_conditions() {
        let service = RecommendationService::with_mocks();
        let request = TravelRequest::new("Berkeley", "Oakland").with_preferences(TravelPreferences {
            preferred_mode: Some(PreferredMode::Walking),
            luggage_amount: Some(LuggageAmount::Heavy),
            ..Default::default()
        });
        let response = service.recommend(request).await.unwrap();
        assert_eq!(response.primary_mode, TravelMode::Walking);
    }
}
