//! The engine's output

use serde::Serialize;

use crate::Result;
use crate::models::TravelMode;

use super::impact::CarbonEstimate;
use super::render;

/// A mode offered next to the primary recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeOption {
    pub mode: TravelMode,
    pub title: String,
    pub description: String,
    pub pros: String,
    pub cons: String,
}

/// A complete recommendation, section by section, as plain text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub primary_mode: TravelMode,
    pub title: String,
    pub description: String,
    pub carbon: CarbonEstimate,
    pub environmental_impact: Vec<String>,
    pub weather: String,
    pub air_quality: String,
    pub practical_tips: Vec<String>,
    /// Present only when the rider wrote something
    pub additional_info: Option<String>,
    pub alternatives: [AlternativeOption; 2],
}

impl Recommendation {
    #[must_use]
    pub fn alternative_modes(&self) -> [TravelMode; 2] {
        [self.alternatives[0].mode, self.alternatives[1].mode]
    }

    /// Render as the HTML fragment block clients insert verbatim.
    /// Every section is HTML-escaped on the way in.
    pub fn to_html(&self) -> Result<String> {
        render::block(self)
    }
}
