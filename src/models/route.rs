//! Directions model: routes, legs and steps

use serde::{Deserialize, Serialize};

/// A label plus its numeric value, e.g. `{"text": "9.5 mi", "value": 15290}`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

impl TextValue {
    pub fn new(text: impl Into<String>, value: u64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Directions {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
    pub overview_polyline: Polyline,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Polyline {
    pub points: String,
}

/// A single origin-to-destination segment
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RouteLeg {
    #[serde(default)]
    pub steps: Vec<RouteStep>,
    /// Seconds
    pub duration: TextValue,
    /// Meters
    pub distance: TextValue,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RouteStep {
    /// Provider tag such as "TRANSIT" or "DRIVING"
    pub travel_mode: String,
    pub distance: TextValue,
    pub duration: TextValue,
    pub html_instructions: String,
}

impl Directions {
    /// Directions substituted when the directions provider is unavailable.
    /// Has no routes, so readers fall back to [`RouteLeg::placeholder`].
    #[must_use]
    pub fn fallback() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first_leg(&self) -> Option<&RouteLeg> {
        self.routes.first().and_then(|route| route.legs.first())
    }

    /// First leg of the first route, or the placeholder leg
    #[must_use]
    pub fn leg_or_placeholder(&self) -> RouteLeg {
        self.first_leg()
            .cloned()
            .unwrap_or_else(RouteLeg::placeholder)
    }
}

impl RouteLeg {
    /// 10 mile / 30 minute leg used when no route is known
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            steps: Vec::new(),
            duration: TextValue::new("30 mins", 1800),
            distance: TextValue::new("10 mi", 16093),
        }
    }

    #[must_use]
    pub fn distance_meters(&self) -> f64 {
        self.distance.value as f64
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u64 {
        self.duration.value
    }

    /// First step travelled with the given provider tag
    #[must_use]
    pub fn first_step_with_mode(&self, travel_mode: &str) -> Option<&RouteStep> {
        self.steps
            .iter()
            .find(|step| step.travel_mode.eq_ignore_ascii_case(travel_mode))
    }
}
