//! Recommendation rule engine
//!
//! Pure and synchronous: given a location pair, directions, weather and air
//! quality at both ends and the rider's preferences, it produces a
//! [`Recommendation`]. Missing data is replaced by fixed fallbacks, so no
//! input can make it fail; the only error is a template that fails to render.

pub mod advice;
pub mod conditions;
pub mod impact;
pub mod mode;
pub mod recommendation;
pub mod render;
pub mod templates;

pub use conditions::TripConditions;
pub use impact::CarbonEstimate;
pub use mode::{ModeDecision, select_modes};
pub use recommendation::{AlternativeOption, Recommendation};

use tracing::instrument;

use crate::Result;
use crate::models::{
    AirQualitySnapshot, Directions, ResolvedPreferences, TravelMode, WeatherSnapshot,
};

use templates::{CONGESTION_NOTE, Placeholders, template_for};

/// Everything the engine reads for one trip
#[derive(Debug, Clone, Copy)]
pub struct TripInputs<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub directions: Option<&'a Directions>,
    pub origin_weather: Option<&'a WeatherSnapshot>,
    pub destination_weather: Option<&'a WeatherSnapshot>,
    pub origin_air_quality: Option<&'a AirQualitySnapshot>,
    pub destination_air_quality: Option<&'a AirQualitySnapshot>,
    pub preferences: &'a ResolvedPreferences,
}

#[instrument(
    skip_all,
    fields(origin = inputs.origin, destination = inputs.destination)
)]
pub fn generate_recommendation(inputs: &TripInputs<'_>) -> Result<Recommendation> {
    let conditions = TripConditions::resolve(
        inputs.directions,
        inputs.origin_weather,
        inputs.destination_weather,
        inputs.origin_air_quality,
        inputs.destination_air_quality,
    );
    let decision = select_modes(&conditions, inputs.preferences);
    compose(inputs, &conditions, decision)
}

/// Render the sections for an already decided set of modes
pub fn compose(
    inputs: &TripInputs<'_>,
    conditions: &TripConditions,
    decision: ModeDecision,
) -> Result<Recommendation> {
    let leg = &conditions.leg;
    let placeholders = Placeholders {
        origin: inputs.origin,
        destination: inputs.destination,
        distance: &leg.distance.text,
    };
    let template = template_for(decision.primary);
    let carbon = CarbonEstimate::new(decision.primary, leg.distance_meters());
    let [first, second] = decision.alternatives;

    Ok(Recommendation {
        primary_mode: decision.primary,
        title: template.title.to_string(),
        description: render::description(decision.primary, &placeholders)?,
        carbon,
        environmental_impact: vec![
            carbon.footprint_line(),
            CONGESTION_NOTE.to_string(),
            carbon.savings_line(),
        ],
        weather: advice::weather_paragraph(
            template,
            conditions,
            inputs.origin,
            inputs.destination,
        ),
        air_quality: advice::air_quality_paragraph(
            template,
            conditions,
            inputs.origin,
            inputs.destination,
        ),
        practical_tips: advice::practical_tips(template, leg, inputs.preferences),
        additional_info: inputs
            .preferences
            .additional_prompt
            .as_deref()
            .map(|prompt| advice::additional_prompt_response(template, prompt)),
        alternatives: [
            alternative(first, &placeholders)?,
            alternative(second, &placeholders)?,
        ],
    })
}

fn alternative(mode: TravelMode, placeholders: &Placeholders<'_>) -> Result<AlternativeOption> {
    let template = template_for(mode);
    Ok(AlternativeOption {
        mode,
        title: template.alternative_title.to_string(),
        description: render::alternative_description(mode, placeholders)?,
        pros: template.pros.to_string(),
        cons: template.cons.to_string(),
    })
}
