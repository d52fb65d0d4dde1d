//! Air quality snapshot model

use serde::{Deserialize, Serialize};

/// AQI assumed when a snapshot carries no index
pub const FALLBACK_AQI: u32 = 50;
/// Category assumed when a snapshot carries no index
pub const FALLBACK_AQI_CATEGORY: &str = "Good";

/// Air quality at one end of the trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySnapshot {
    /// The first index is authoritative
    #[serde(default)]
    pub indexes: Vec<AqiIndex>,
    #[serde(default)]
    pub pollutants: Vec<Pollutant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_recommendations: Option<HealthRecommendations>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AqiIndex {
    pub code: String,
    pub display_name: String,
    pub aqi: u32,
    pub aqi_display: String,
    pub color: Color,
    /// Provider category such as "Good" or "Unhealthy for Sensitive Groups"
    pub category: String,
    pub dominant_pollutant: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pollutant {
    pub code: String,
    pub display_name: String,
    pub full_name: String,
    pub concentration: Concentration,
    pub additional_info: PollutantInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Concentration {
    pub value: f64,
    pub units: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PollutantInfo {
    pub sources: String,
    pub effects: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecommendations {
    pub general_population: String,
    pub elderly: String,
    pub lung_disease_population: String,
    pub heart_disease_population: String,
    pub athletes: String,
    pub pregnant_women: String,
    pub children: String,
}

impl HealthRecommendations {
    /// The same advice for every group
    #[must_use]
    pub fn uniform(advice: &str) -> Self {
        Self {
            general_population: advice.to_string(),
            elderly: advice.to_string(),
            lung_disease_population: advice.to_string(),
            heart_disease_population: advice.to_string(),
            athletes: advice.to_string(),
            pregnant_women: advice.to_string(),
            children: advice.to_string(),
        }
    }
}

impl AirQualitySnapshot {
    /// Snapshot substituted when the air quality provider is unavailable.
    /// Has no index, so readers fall back to AQI 50 / "Good".
    #[must_use]
    pub fn fallback() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn primary_index(&self) -> Option<&AqiIndex> {
        self.indexes.first()
    }

    /// AQI of the primary index, or the fallback
    #[must_use]
    pub fn aqi(&self) -> u32 {
        self.primary_index().map_or(FALLBACK_AQI, |index| index.aqi)
    }

    /// Category of the primary index, or the fallback
    #[must_use]
    pub fn category(&self) -> &str {
        self.primary_index()
            .map_or(FALLBACK_AQI_CATEGORY, |index| index.category.as_str())
    }
}

/// Whether a provider category signals a health risk
#[must_use]
pub fn is_poor_category(category: &str) -> bool {
    category.contains("Unhealthy") || category.contains("Hazardous")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_reads_defaults() {
        let air = AirQualitySnapshot::fallback();
        assert_eq!(air.aqi(), 50);
        assert_eq!(air.category(), "Good");
    }

    #[test]
    fn test_first_index_is_authoritative() {
        let index = |aqi, category: &str| AqiIndex {
            code: "us_aqi".to_string(),
            display_name: "US AQI".to_string(),
            aqi,
            aqi_display: aqi.to_string(),
            color: Color { red: 0, green: 0, blue: 0 },
            category: category.to_string(),
            dominant_pollutant: "PM2.5".to_string(),
        };
        let air = AirQualitySnapshot {
            indexes: vec![index(155, "Unhealthy"), index(20, "Good")],
            ..Default::default()
        };
        assert_eq!(air.aqi(), 155);
        assert_eq!(air.category(), "Unhealthy");
    }

    #[test]
    fn test_poor_category_matching() {
        assert!(is_poor_category("Unhealthy for Sensitive Groups"));
        assert!(is_poor_category("Hazardous"));
        assert!(!is_poor_category("Moderate"));
        // provider categories are capitalized; the match is exact-case
        assert!(!is_poor_category("unhealthy"));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(AirQualitySnapshot {
            health_recommendations: Some(HealthRecommendations::uniform("Stay in")),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["healthRecommendations"]["pregnantWomen"], "Stay in");
        assert!(json["indexes"].as_array().unwrap().is_empty());
    }
}
