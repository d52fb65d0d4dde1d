//! Fixed data standing in for live weather, air quality and directions APIs

use async_trait::async_trait;
use chrono::Local;
use tracing::debug;

use super::{AirQualityProvider, DirectionsProvider, RouteProfile, RouteQuery, WeatherProvider};
use crate::Result;
use crate::models::{
    AirQualitySnapshot, CurrentWeather, Directions, HealthRecommendations, Pollutant, Route,
    RouteLeg, RouteStep, TextValue, WeatherCondition, WeatherLocation, WeatherSnapshot,
    air_quality::{AqiIndex, Color, Concentration, PollutantInfo},
    route::Polyline,
};

const DEFAULT_REGION: &str = "California";
const DEFAULT_COUNTRY: &str = "United States of America";
const MOCK_TEMPERATURE_C: f64 = 18.0;

/// Partly cloudy and 18 °C everywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeatherProvider;

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot> {
        debug!(location, "serving mock weather");
        Ok(mock_weather(location))
    }
}

/// "City, Region, Country" with region and country defaulted when absent
fn split_location(location: &str) -> (String, String, String) {
    let mut parts = location.split(',').map(str::trim);
    let name = parts.next().unwrap_or_default().to_string();
    let mut next_or = |fallback: &str| {
        parts
            .next()
            .filter(|part| !part.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };
    let region = next_or(DEFAULT_REGION);
    let country = next_or(DEFAULT_COUNTRY);
    (name, region, country)
}

pub fn mock_weather(location: &str) -> WeatherSnapshot {
    let (name, region, country) = split_location(location);
    WeatherSnapshot {
        location: WeatherLocation {
            name,
            region,
            country,
            localtime: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        },
        current: Some(CurrentWeather {
            temp_c: MOCK_TEMPERATURE_C,
            temp_f: CurrentWeather::celsius_to_fahrenheit(MOCK_TEMPERATURE_C),
            condition: WeatherCondition {
                text: "Partly cloudy".to_string(),
                icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
            },
            wind_kph: 12.0,
            wind_degree: 270,
            wind_dir: "W".to_string(),
            pressure_mb: 1015.0,
            humidity: 65,
            cloud: 25,
            feelslike_c: MOCK_TEMPERATURE_C,
            feelslike_f: CurrentWeather::celsius_to_fahrenheit(MOCK_TEMPERATURE_C),
            vis_km: 16.0,
            uv: 5.0,
        }),
    }
}

/// US AQI 42, "Good", everywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAirQualityProvider;

#[async_trait]
impl AirQualityProvider for MockAirQualityProvider {
    async fn current(&self, location: &str) -> Result<AirQualitySnapshot> {
        debug!(location, "serving mock air quality");
        Ok(mock_air_quality())
    }
}

pub fn mock_air_quality() -> AirQualitySnapshot {
    AirQualitySnapshot {
        indexes: vec![AqiIndex {
            code: "us_aqi".to_string(),
            display_name: "US AQI".to_string(),
            aqi: 42,
            aqi_display: "42".to_string(),
            color: Color {
                red: 118,
                green: 211,
                blue: 94,
            },
            category: "Good".to_string(),
            dominant_pollutant: "PM2.5".to_string(),
        }],
        pollutants: vec![
            Pollutant {
                code: "pm25".to_string(),
                display_name: "PM2.5".to_string(),
                full_name: "Fine particulate matter (<2.5µm)".to_string(),
                concentration: Concentration {
                    value: 10.2,
                    units: "µg/m³".to_string(),
                },
                additional_info: PollutantInfo {
                    sources: "Dust, vehicle emissions, industrial activities".to_string(),
                    effects: "Respiratory issues, heart problems".to_string(),
                },
            },
            Pollutant {
                code: "o3".to_string(),
                display_name: "O₃".to_string(),
                full_name: "Ozone".to_string(),
                concentration: Concentration {
                    value: 38.5,
                    units: "µg/m³".to_string(),
                },
                additional_info: PollutantInfo {
                    sources: "Formed by chemical reactions between oxides of nitrogen and volatile organic compounds in sunlight".to_string(),
                    effects: "Breathing problems, reduced lung function, asthma aggravation".to_string(),
                },
            },
        ],
        health_recommendations: Some(HealthRecommendations::uniform(
            "Enjoy your usual outdoor activities.",
        )),
    }
}

/// One-leg routes: 9.5 mi by transit (eco) or 12 mi by car (standard)
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDirectionsProvider;

#[async_trait]
impl DirectionsProvider for MockDirectionsProvider {
    async fn directions(&self, query: &RouteQuery) -> Result<Directions> {
        debug!(
            origin = %query.origin,
            destination = %query.destination,
            profile = ?query.profile,
            avoid_highways = query.avoid_highways,
            avoid_tolls = query.avoid_tolls,
            "serving mock directions"
        );
        Ok(mock_directions(query.profile))
    }
}

pub fn mock_directions(profile: RouteProfile) -> Directions {
    let (distance, duration, travel_mode, instructions) = match profile {
        RouteProfile::Eco => (
            TextValue::new("9.5 mi", 15_290),
            TextValue::new("35 mins", 2100),
            "TRANSIT",
            "Take public transit",
        ),
        RouteProfile::Standard => (
            TextValue::new("12 mi", 19_312),
            TextValue::new("25 mins", 1500),
            "DRIVING",
            "Drive to destination",
        ),
    };

    Directions {
        routes: vec![Route {
            legs: vec![RouteLeg {
                steps: vec![RouteStep {
                    travel_mode: travel_mode.to_string(),
                    distance: distance.clone(),
                    duration: duration.clone(),
                    html_instructions: instructions.to_string(),
                }],
                duration,
                distance,
            }],
            overview_polyline: Polyline {
                points: "abc123".to_string(),
            },
        }],
    }
}
