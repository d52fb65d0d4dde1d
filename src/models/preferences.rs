//! Rider preferences and the transportation mode vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TravelError;

/// Walking limit used when the rider gives none, in kilometers
pub const DEFAULT_MAX_WALKING_KM: f64 = 2.0;
/// Mid-scale priority, which leaves the default mode untouched
pub const DEFAULT_ENVIRONMENTAL_PRIORITY: u8 = 5;

/// A concrete way of getting from origin to destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Bicycling,
    Transit,
    Driving,
}

impl TravelMode {
    /// Escalation ladder, slowest first
    pub const LADDER: [TravelMode; 4] = [
        TravelMode::Walking,
        TravelMode::Bicycling,
        TravelMode::Transit,
        TravelMode::Driving,
    ];

    /// Next faster mode on the ladder. `Driving` is a fixed point.
    #[must_use]
    pub fn escalate(self) -> Self {
        match self {
            TravelMode::Walking => TravelMode::Bicycling,
            TravelMode::Bicycling => TravelMode::Transit,
            TravelMode::Transit | TravelMode::Driving => TravelMode::Driving,
        }
    }

    /// Human-powered modes that expose the rider to weather and luggage strain
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, TravelMode::Walking | TravelMode::Bicycling)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
            TravelMode::Driving => "driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mode the rider asked for; `Any` lets the rule engine decide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredMode {
    #[default]
    Any,
    Transit,
    Walking,
    Bicycling,
    Driving,
}

impl PreferredMode {
    /// The explicitly requested mode, if any
    #[must_use]
    pub fn as_mode(self) -> Option<TravelMode> {
        match self {
            PreferredMode::Any => None,
            PreferredMode::Transit => Some(TravelMode::Transit),
            PreferredMode::Walking => Some(TravelMode::Walking),
            PreferredMode::Bicycling => Some(TravelMode::Bicycling),
            PreferredMode::Driving => Some(TravelMode::Driving),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuggageAmount {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

impl LuggageAmount {
    /// Medium and heavy luggage rule out walking and cycling
    #[must_use]
    pub fn is_bulky(self) -> bool {
        matches!(self, LuggageAmount::Medium | LuggageAmount::Heavy)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LuggageAmount::None => "none",
            LuggageAmount::Light => "light",
            LuggageAmount::Medium => "medium",
            LuggageAmount::Heavy => "heavy",
        }
    }
}

/// Preferences as they arrive on the wire; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    pub preferred_mode: Option<PreferredMode>,
    /// Kilometers
    pub max_walking_distance: Option<f64>,
    /// Minutes
    pub max_travel_time: Option<u32>,
    /// 1 (convenience first) to 10 (planet first)
    pub environmental_impact_priority: Option<u8>,
    pub prioritize_weather: Option<bool>,
    pub prioritize_air_quality: Option<bool>,
    pub accessibility_needed: Option<bool>,
    pub luggage_amount: Option<LuggageAmount>,
    pub additional_prompt: Option<String>,
    /// Routing hint for the directions provider
    pub avoid_highways: Option<bool>,
    /// Routing hint for the directions provider
    pub avoid_tolls: Option<bool>,
}

impl TravelPreferences {
    /// Reject values outside their documented ranges
    pub fn validate(&self) -> Result<(), TravelError> {
        if let Some(priority) = self.environmental_impact_priority {
            if !(1..=10).contains(&priority) {
                return Err(TravelError::validation(format!(
                    "environmentalImpactPriority must be between 1 and 10, got {priority}"
                )));
            }
        }

        if let Some(distance) = self.max_walking_distance {
            if !distance.is_finite() || distance <= 0.0 {
                return Err(TravelError::validation(format!(
                    "maxWalkingDistance must be a positive number of kilometers, got {distance}"
                )));
            }
        }

        if self.max_travel_time == Some(0) {
            return Err(TravelError::validation(
                "maxTravelTime must be a positive number of minutes",
            ));
        }

        Ok(())
    }

    /// Fill every absent field with its default
    #[must_use]
    pub fn resolve(&self) -> ResolvedPreferences {
        ResolvedPreferences {
            preferred_mode: self.preferred_mode.unwrap_or_default(),
            max_walking_distance_km: self
                .max_walking_distance
                .unwrap_or(DEFAULT_MAX_WALKING_KM),
            max_travel_time_minutes: self.max_travel_time,
            environmental_impact_priority: self
                .environmental_impact_priority
                .unwrap_or(DEFAULT_ENVIRONMENTAL_PRIORITY),
            prioritize_weather: self.prioritize_weather.unwrap_or(false),
            prioritize_air_quality: self.prioritize_air_quality.unwrap_or(false),
            accessibility_needed: self.accessibility_needed.unwrap_or(false),
            luggage_amount: self.luggage_amount.unwrap_or_default(),
            additional_prompt: self
                .additional_prompt
                .clone()
                .filter(|prompt| !prompt.is_empty()),
        }
    }
}

/// Preferences after defaults have been applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPreferences {
    pub preferred_mode: PreferredMode,
    pub max_walking_distance_km: f64,
    /// `None` means the rider has no time budget
    pub max_travel_time_minutes: Option<u32>,
    pub environmental_impact_priority: u8,
    pub prioritize_weather: bool,
    pub prioritize_air_quality: bool,
    pub accessibility_needed: bool,
    pub luggage_amount: LuggageAmount,
    pub additional_prompt: Option<String>,
}

impl Default for ResolvedPreferences {
    fn default() -> Self {
        TravelPreferences::default().resolve()
    }
}
