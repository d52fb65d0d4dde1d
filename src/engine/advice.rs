//! Weather, air quality, tips and prompt paragraphs

use crate::models::{LuggageAmount, ResolvedPreferences, RouteLeg};

use super::conditions::TripConditions;
use super::templates::{
    ACCESSIBILITY_TIP, GENERIC_PROMPT_RESPONSE, ModeTemplate, PromptTopic,
};

pub fn weather_paragraph(
    template: &ModeTemplate,
    conditions: &TripConditions,
    origin: &str,
    destination: &str,
) -> String {
    let advice = if conditions.is_severe_weather() {
        template.weather_severe
    } else {
        template.weather_fair
    };
    format!(
        "Current weather in {origin} is {} with temperatures of {}°C, and {destination} is {} with temperatures of {}°C. {advice}",
        conditions.origin_condition.to_lowercase(),
        conditions.origin_temperature_c,
        conditions.destination_condition.to_lowercase(),
        conditions.destination_temperature_c,
    )
}

pub fn air_quality_paragraph(
    template: &ModeTemplate,
    conditions: &TripConditions,
    origin: &str,
    destination: &str,
) -> String {
    let advice = if conditions.is_poor_air() {
        template.air_poor
    } else {
        template.air_clean
    };
    format!(
        "Air quality is {} in {origin} (AQI {}) and {} in {destination} (AQI {}). {advice}",
        conditions.origin_aqi_category,
        conditions.origin_aqi,
        conditions.destination_aqi_category,
        conditions.destination_aqi,
    )
}

/// Mode tips in display order: totals, the highlighted step, leading tips,
/// rider-specific notices, trailing tips.
pub fn practical_tips(
    template: &ModeTemplate,
    leg: &RouteLeg,
    preferences: &ResolvedPreferences,
) -> Vec<String> {
    let mut tips = vec![
        format!(
            "Total {} time: approximately {}",
            template.time_label, leg.duration.text
        ),
        format!("Total distance: {}", leg.distance.text),
    ];

    if let Some(step) = template
        .highlighted_step
        .and_then(|tag| leg.first_step_with_mode(tag))
    {
        tips.push(format!("Take {}", step.html_instructions));
    }

    tips.extend(template.leading_tips.iter().map(|tip| (*tip).to_string()));

    if preferences.accessibility_needed {
        tips.push(ACCESSIBILITY_TIP.to_string());
    }

    if preferences.luggage_amount != LuggageAmount::None {
        tips.push(format!(
            "Plan for {} luggage: {}",
            preferences.luggage_amount.as_str(),
            template.luggage_hint
        ));
    }

    if let Some(minutes) = preferences.max_travel_time_minutes {
        let verdict = if leg.duration_seconds() > u64::from(minutes) * 60 {
            "exceeds"
        } else {
            "is within"
        };
        tips.push(format!(
            "Your trip should take approximately {}, which {verdict} your maximum travel time of {minutes} minutes",
            leg.duration.text
        ));
    }

    tips.extend(template.trailing_tips.iter().map(|tip| (*tip).to_string()));
    tips
}

/// First topic whose keyword appears in the prompt, case-insensitively
#[must_use]
pub fn prompt_topic(prompt: &str) -> Option<PromptTopic> {
    let prompt = prompt.to_lowercase();
    PromptTopic::ALL.into_iter().find(|topic| {
        topic
            .keywords()
            .iter()
            .any(|keyword| prompt.contains(keyword))
    })
}

pub fn additional_prompt_response(template: &ModeTemplate, prompt: &str) -> String {
    match prompt_topic(prompt) {
        Some(topic) => format!("{}{}", topic.lead_in(), template.prompt_advice(topic)),
        None => GENERIC_PROMPT_RESPONSE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::templates::template_for;
    use crate::models::{RouteStep, TextValue, TravelMode};
    use rstest::rstest;

    fn eco_leg() -> RouteLeg {
        RouteLeg {
            steps: vec![RouteStep {
                travel_mode: "TRANSIT".to_string(),
                distance: TextValue::new("9.5 mi", 15_290),
                duration: TextValue::new("35 mins", 2100),
                html_instructions: "Take public transit".to_string(),
            }],
            duration: TextValue::new("35 mins", 2100),
            distance: TextValue::new("9.5 mi", 15_290),
        }
    }

    #[rstest]
    #[case("Can I bring my kid? I'm also in a hurry", Some(PromptTopic::Children))]
    #[case("Travelling with CHILDREN", Some(PromptTopic::Children))]
    #[case("running late, it may rain", Some(PromptTopic::Time))]
    #[case("what if it snows", Some(PromptTopic::Weather))]
    #[case("Scenic route please", None)]
    fn test_prompt_topic_routing(#[case] prompt: &str, #[case] expected: Option<PromptTopic>) {
        assert_eq!(prompt_topic(prompt), expected);
    }

    #[test]
    fn test_kid_prompt_selects_child_paragraph() {
        let response = additional_prompt_response(
            template_for(TravelMode::Transit),
            "kid in tow, rain expected, running late",
        );
        assert!(response.starts_with("When traveling with children, public transit"));
    }

    #[test]
    fn test_unmatched_prompt_gets_generic_paragraph() {
        let response = additional_prompt_response(template_for(TravelMode::Driving), "scenic please");
        assert_eq!(response, GENERIC_PROMPT_RESPONSE);
    }

    #[test]
    fn test_weather_paragraph_mentions_both_ends() {
        let conditions = TripConditions {
            origin_condition: "Partly cloudy".to_string(),
            destination_condition: "Light rain".to_string(),
            destination_temperature_c: 12.5,
            ..Default::default()
        };
        let text = weather_paragraph(template_for(TravelMode::Walking), &conditions, "Berkeley", "Oakland");
        assert_eq!(
            text,
            "Current weather in Berkeley is partly cloudy with temperatures of 18°C, and Oakland is light rain with temperatures of 12.5°C. Consider bringing rain gear or choosing an alternative mode due to the weather."
        );
    }

    #[test]
    fn test_air_quality_paragraph_for_poor_air() {
        let conditions = TripConditions {
            origin_aqi: 160,
            origin_aqi_category: "Unhealthy".to_string(),
            ..Default::default()
        };
        let text = air_quality_paragraph(template_for(TravelMode::Transit), &conditions, "A", "B");
        assert!(text.starts_with("Air quality is Unhealthy in A (AQI 160) and Good in B (AQI 50)."));
        assert!(text.ends_with("compared to walking or cycling."));
    }

    #[test]
    fn test_transit_tips_quote_first_transit_step() {
        let tips = practical_tips(
            template_for(TravelMode::Transit),
            &eco_leg(),
            &ResolvedPreferences::default(),
        );
        assert_eq!(tips[0], "Total travel time: approximately 35 mins");
        assert_eq!(tips[1], "Total distance: 9.5 mi");
        assert_eq!(tips[2], "Take Take public transit");
        assert_eq!(tips.len(), 7);
    }

    #[test]
    fn test_rider_notices_are_included() {
        let preferences = ResolvedPreferences {
            accessibility_needed: true,
            luggage_amount: LuggageAmount::Light,
            max_travel_time_minutes: Some(30),
            ..Default::default()
        };
        let tips = practical_tips(template_for(TravelMode::Bicycling), &eco_leg(), &preferences);
        assert!(tips.contains(&ACCESSIBILITY_TIP.to_string()));
        assert!(tips.contains(
            &"Plan for light luggage: use panniers or a backpack for carrying items".to_string()
        ));
        assert!(tips.contains(
            &"Your trip should take approximately 35 mins, which exceeds your maximum travel time of 30 minutes".to_string()
        ));
        assert_eq!(tips.last().unwrap(), "Check your bike's tire pressure and brakes before departing");
    }

    #[test]
    fn test_time_notice_within_budget() {
        let preferences = ResolvedPreferences {
            max_travel_time_minutes: Some(60),
            ..Default::default()
        };
        let tips = practical_tips(template_for(TravelMode::Driving), &eco_leg(), &preferences);
        assert!(tips.iter().any(|tip| tip.ends_with("is within your maximum travel time of 60 minutes")));
    }
}
