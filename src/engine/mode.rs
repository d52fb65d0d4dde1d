//! Primary/alternative mode selection
//!
//! When the rider has no preferred mode, the decision starts at transit and
//! is folded through [`RULES`] in order. Every rule sees the decision left by
//! the previous one and may override it, so a later rule always wins.

use tracing::debug;

use crate::models::{ResolvedPreferences, TravelMode};

use super::conditions::TripConditions;

/// Priority above this favours zero-emission modes
const HIGH_PRIORITY_ABOVE: u8 = 7;
/// Priority below this favours convenience
const LOW_PRIORITY_BELOW: u8 = 4;
/// Longest leg considered for cycling at low priority, about 5 miles
const BICYCLING_LIMIT_METERS: f64 = 8000.0;
/// AQI above which outdoor modes are avoided
const AQI_LIMIT: u32 = 100;

/// The primary mode and the two alternatives offered next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDecision {
    pub primary: TravelMode,
    pub alternatives: [TravelMode; 2],
}

impl ModeDecision {
    /// Starting point of the rule fold, also the alternatives for an
    /// explicitly preferred mode
    pub const DEFAULT: Self = Self {
        primary: TravelMode::Transit,
        alternatives: [TravelMode::Walking, TravelMode::Bicycling],
    };

    fn with_primary(self, primary: TravelMode) -> Self {
        Self { primary, ..self }
    }

    fn with_first_alternative(self, alternative: TravelMode) -> Self {
        Self {
            alternatives: [alternative, self.alternatives[1]],
            ..self
        }
    }
}

impl Default for ModeDecision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single override step
pub type Rule = fn(ModeDecision, &TripConditions, &ResolvedPreferences) -> ModeDecision;

/// Override rules in application order
pub const RULES: [(&str, Rule); 6] = [
    ("environmental_priority", environmental_priority),
    ("air_quality", air_quality),
    ("weather", weather),
    ("luggage", luggage),
    ("accessibility", accessibility),
    ("time_budget", time_budget),
];

/// Pick the primary mode and two alternatives
pub fn select_modes(conditions: &TripConditions, preferences: &ResolvedPreferences) -> ModeDecision {
    if let Some(mode) = preferences.preferred_mode.as_mode() {
        return ModeDecision::DEFAULT.with_primary(mode);
    }

    RULES
        .iter()
        .fold(ModeDecision::DEFAULT, |decision, (name, rule)| {
            let next = rule(decision, conditions, preferences);
            if next != decision {
                debug!(
                    rule = *name,
                    from = %decision.primary,
                    to = %next.primary,
                    "mode rule applied"
                );
            }
            next
        })
}

fn within_walking_distance(conditions: &TripConditions, preferences: &ResolvedPreferences) -> bool {
    conditions.leg.distance_meters() <= preferences.max_walking_distance_km * 1000.0
}

pub fn environmental_priority(
    decision: ModeDecision,
    conditions: &TripConditions,
    preferences: &ResolvedPreferences,
) -> ModeDecision {
    let priority = preferences.environmental_impact_priority;
    let walkable = within_walking_distance(conditions, preferences);

    if priority > HIGH_PRIORITY_ABOVE {
        let primary = if walkable {
            TravelMode::Walking
        } else {
            TravelMode::Bicycling
        };
        ModeDecision {
            primary,
            alternatives: [TravelMode::Transit, TravelMode::Driving],
        }
    } else if priority < LOW_PRIORITY_BELOW {
        let primary = if walkable {
            TravelMode::Walking
        } else if conditions.leg.distance_meters() <= BICYCLING_LIMIT_METERS {
            TravelMode::Bicycling
        } else {
            TravelMode::Transit
        };
        ModeDecision {
            primary,
            alternatives: [TravelMode::Driving, TravelMode::Bicycling],
        }
    } else {
        decision
    }
}

pub fn air_quality(
    decision: ModeDecision,
    conditions: &TripConditions,
    preferences: &ResolvedPreferences,
) -> ModeDecision {
    if preferences.prioritize_air_quality && conditions.aqi_exceeds(AQI_LIMIT) {
        decision
            .with_primary(TravelMode::Driving)
            .with_first_alternative(TravelMode::Transit)
    } else {
        decision
    }
}

pub fn weather(
    decision: ModeDecision,
    conditions: &TripConditions,
    preferences: &ResolvedPreferences,
) -> ModeDecision {
    if preferences.prioritize_weather && conditions.is_wet() {
        decision
            .with_primary(TravelMode::Driving)
            .with_first_alternative(TravelMode::Transit)
    } else {
        decision
    }
}

pub fn luggage(
    decision: ModeDecision,
    _conditions: &TripConditions,
    preferences: &ResolvedPreferences,
) -> ModeDecision {
    if preferences.luggage_amount.is_bulky() && decision.primary.is_active() {
        decision
            .with_primary(TravelMode::Transit)
            .with_first_alternative(TravelMode::Driving)
    } else {
        decision
    }
}

pub fn accessibility(
    decision: ModeDecision,
    _conditions: &TripConditions,
    preferences: &ResolvedPreferences,
) -> ModeDecision {
    if preferences.accessibility_needed && decision.primary.is_active() {
        decision
            .with_primary(TravelMode::Transit)
            .with_first_alternative(TravelMode::Driving)
    } else {
        decision
    }
}

/// One step up the ladder when the leg is over budget. Deliberately a single
/// step: the faster mode's own duration is not re-checked.
pub fn time_budget(
    decision: ModeDecision,
    conditions: &TripConditions,
    preferences: &ResolvedPreferences,
) -> ModeDecision {
    match preferences.max_travel_time_minutes {
        Some(minutes) if conditions.leg.duration_seconds() > u64::from(minutes) * 60 => {
            decision.with_primary(decision.primary.escalate())
        }
        _ => decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LuggageAmount, PreferredMode, RouteLeg, TextValue};
    use rstest::rstest;

    fn leg(distance_meters: u64, duration_seconds: u64) -> RouteLeg {
        RouteLeg {
            steps: Vec::new(),
            duration: TextValue::new(format!("{} mins", duration_seconds / 60), duration_seconds),
            distance: TextValue::new(format!("{distance_meters} m"), distance_meters),
        }
    }

    fn conditions(distance_meters: u64, duration_seconds: u64) -> TripConditions {
        TripConditions {
            origin_condition: "Partly cloudy".to_string(),
            destination_condition: "Partly cloudy".to_string(),
            origin_aqi: 42,
            destination_aqi: 42,
            leg: leg(distance_meters, duration_seconds),
            ..Default::default()
        }
    }

    fn preferences(priority: u8) -> ResolvedPreferences {
        ResolvedPreferences {
            environmental_impact_priority: priority,
            max_walking_distance_km: 2.0,
            max_travel_time_minutes: Some(60),
            ..Default::default()
        }
    }

    #[test]
    fn test_mid_priority_keeps_transit_default() {
        let decision = select_modes(&conditions(15_290, 2100), &preferences(5));
        assert_eq!(decision.primary, TravelMode::Transit);
        assert_eq!(
            decision.alternatives,
            [TravelMode::Walking, TravelMode::Bicycling]
        );
    }

    #[test]
    fn test_high_priority_walkable_leg_walks() {
        let decision = select_modes(&conditions(1500, 2100), &preferences(9));
        assert_eq!(decision.primary, TravelMode::Walking);
        assert_eq!(decision.alternatives, [TravelMode::Transit, TravelMode::Driving]);
    }

    #[rstest]
    #[case::high_walkable(9, 2000, TravelMode::Walking)]
    #[case::high_too_far(8, 2001, TravelMode::Bicycling)]
    #[case::low_walkable(3, 1200, TravelMode::Walking)]
    #[case::low_cyclable(1, 8000, TravelMode::Bicycling)]
    #[case::low_too_far(2, 8001, TravelMode::Transit)]
    #[case::mid_lower_edge(4, 500, TravelMode::Transit)]
    #[case::mid_upper_edge(7, 500, TravelMode::Transit)]
    fn test_environmental_priority_bands(
        #[case] priority: u8,
        #[case] distance: u64,
        #[case] expected: TravelMode,
    ) {
        let decision = environmental_priority(
            ModeDecision::DEFAULT,
            &conditions(distance, 600),
            &preferences(priority),
        );
        assert_eq!(decision.primary, expected);
    }

    #[test]
    fn test_low_priority_alternatives() {
        let decision = environmental_priority(
            ModeDecision::DEFAULT,
            &conditions(20_000, 600),
            &preferences(2),
        );
        assert_eq!(decision.alternatives, [TravelMode::Driving, TravelMode::Bicycling]);
    }

    #[test]
    fn test_explicit_mode_is_used_verbatim() {
        let mut trip = conditions(1500, 9000);
        trip.origin_condition = "Heavy snow".to_string();
        trip.destination_aqi = 300;
        let prefs = ResolvedPreferences {
            preferred_mode: PreferredMode::Walking,
            prioritize_weather: true,
            prioritize_air_quality: true,
            accessibility_needed: true,
            luggage_amount: LuggageAmount::Heavy,
            max_travel_time_minutes: Some(5),
            ..preferences(9)
        };

        let decision = select_modes(&trip, &prefs);
        assert_eq!(decision.primary, TravelMode::Walking);
        assert_eq!(
            decision.alternatives,
            [TravelMode::Walking, TravelMode::Bicycling]
        );
    }

    #[test]
    fn test_poor_air_switches_to_driving() {
        let mut trip = conditions(1500, 600);
        trip.destination_aqi = 151;
        let prefs = ResolvedPreferences {
            prioritize_air_quality: true,
            ..preferences(9)
        };
        let decision = select_modes(&trip, &prefs);
        assert_eq!(decision.primary, TravelMode::Driving);
        assert_eq!(decision.alternatives, [TravelMode::Transit, TravelMode::Driving]);
    }

    #[test]
    fn test_poor_air_ignored_without_priority_flag() {
        let mut trip = conditions(1500, 600);
        trip.origin_aqi = 250;
        let decision = select_modes(&trip, &preferences(9));
        assert_eq!(decision.primary, TravelMode::Walking);
    }

    #[rstest]
    #[case("Light rain")]
    #[case("Moderate or heavy snow")]
    fn test_wet_weather_switches_to_driving(#[case] condition: &str) {
        let mut trip = conditions(15_290, 2100);
        trip.origin_condition = condition.to_string();
        let prefs = ResolvedPreferences {
            prioritize_weather: true,
            ..preferences(5)
        };
        let decision = select_modes(&trip, &prefs);
        assert_eq!(decision.primary, TravelMode::Driving);
        assert_eq!(decision.alternatives[0], TravelMode::Transit);
    }

    #[test]
    fn test_storm_alone_does_not_trigger_weather_rule() {
        let mut trip = conditions(1500, 600);
        trip.origin_condition = "Thunderstorm".to_string();
        let prefs = ResolvedPreferences {
            prioritize_weather: true,
            ..preferences(9)
        };
        assert_eq!(select_modes(&trip, &prefs).primary, TravelMode::Walking);
    }

    #[rstest]
    #[case(LuggageAmount::Medium, TravelMode::Transit)]
    #[case(LuggageAmount::Heavy, TravelMode::Transit)]
    #[case(LuggageAmount::Light, TravelMode::Walking)]
    #[case(LuggageAmount::None, TravelMode::Walking)]
    fn test_luggage_rule(#[case] luggage: LuggageAmount, #[case] expected: TravelMode) {
        let prefs = ResolvedPreferences {
            luggage_amount: luggage,
            ..preferences(9)
        };
        assert_eq!(select_modes(&conditions(1500, 600), &prefs).primary, expected);
    }

    #[test]
    fn test_luggage_moves_first_alternative_to_driving() {
        let prefs = ResolvedPreferences {
            luggage_amount: LuggageAmount::Heavy,
            ..preferences(9)
        };
        let decision = select_modes(&conditions(1500, 600), &prefs);
        assert_eq!(decision.alternatives, [TravelMode::Driving, TravelMode::Driving]);
    }

    #[test]
    fn test_accessibility_leaves_driving_alone() {
        let decision = ModeDecision {
            primary: TravelMode::Driving,
            alternatives: [TravelMode::Transit, TravelMode::Driving],
        };
        let prefs = ResolvedPreferences {
            accessibility_needed: true,
            ..preferences(5)
        };
        assert_eq!(accessibility(decision, &conditions(1500, 600), &prefs), decision);
    }

    #[test]
    fn test_accessibility_replaces_bicycling() {
        let prefs = ResolvedPreferences {
            accessibility_needed: true,
            ..preferences(9)
        };
        let decision = select_modes(&conditions(5000, 600), &prefs);
        assert_eq!(decision.primary, TravelMode::Transit);
        assert_eq!(decision.alternatives[0], TravelMode::Driving);
    }

    #[test]
    fn test_time_budget_escalates_exactly_one_step() {
        let prefs = ResolvedPreferences {
            max_travel_time_minutes: Some(10),
            ..preferences(9)
        };
        let decision = select_modes(&conditions(1500, 2100), &prefs);
        assert_eq!(decision.primary, TravelMode::Bicycling);
    }

    #[rstest]
    #[case::at_budget(3600, TravelMode::Transit)]
    #[case::over_budget(3601, TravelMode::Driving)]
    fn test_time_budget_boundary(#[case] duration: u64, #[case] expected: TravelMode) {
        let decision = time_budget(
            ModeDecision::DEFAULT,
            &conditions(15_290, duration),
            &preferences(5),
        );
        assert_eq!(decision.primary, expected);
    }

    #[test]
    fn test_time_budget_is_idempotent_at_driving() {
        let mut decision = ModeDecision::DEFAULT.with_primary(TravelMode::Driving);
        let trip = conditions(15_290, 99_999);
        for _ in 0..3 {
            decision = time_budget(decision, &trip, &preferences(5));
            assert_eq!(decision.primary, TravelMode::Driving);
        }
    }

    #[test]
    fn test_no_time_budget_never_escalates() {
        let prefs = ResolvedPreferences {
            max_travel_time_minutes: None,
            ..preferences(9)
        };
        let decision = select_modes(&conditions(1500, 99_999), &prefs);
        assert_eq!(decision.primary, TravelMode::Walking);
    }

    #[test]
    fn test_later_rules_override_earlier_ones() {
        // air quality picks driving, then the time budget cannot go further
        let mut trip = conditions(1500, 9000);
        trip.origin_aqi = 180;
        let prefs = ResolvedPreferences {
            prioritize_air_quality: true,
            max_travel_time_minutes: Some(30),
            ..preferences(9)
        };
        assert_eq!(select_modes(&trip, &prefs).primary, TravelMode::Driving);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let trip = conditions(4200, 1300);
        let prefs = ResolvedPreferences {
            luggage_amount: LuggageAmount::Medium,
            ..preferences(2)
        };
        let first = select_modes(&trip, &prefs);
        for _ in 0..10 {
            assert_eq!(select_modes(&trip, &prefs), first);
        }
    }
}
