//! Carbon footprint estimates, linear in leg distance

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::TravelMode;

use super::templates::template_for;

/// Solo driving, the baseline every saving is measured against
pub const BASELINE_KG_PER_KM: f64 = 0.12;

/// kg CO2 per km for a mode. Driving assumes a car shared by two.
#[must_use]
pub fn emission_factor(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Transit => 0.03,
        TravelMode::Walking | TravelMode::Bicycling => 0.0,
        TravelMode::Driving => 0.07,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarbonEstimate {
    pub mode: TravelMode,
    pub distance_km: f64,
    /// Emissions of the chosen mode
    pub mode_kg: f64,
    /// Emissions of the same leg driven alone
    pub baseline_kg: f64,
}

impl CarbonEstimate {
    #[must_use]
    pub fn new(mode: TravelMode, distance_meters: f64) -> Self {
        let distance_km = distance_meters / 1000.0;
        Self {
            mode,
            distance_km,
            mode_kg: distance_km * emission_factor(mode),
            baseline_kg: distance_km * BASELINE_KG_PER_KM,
        }
    }

    #[must_use]
    pub fn saved_kg(&self) -> f64 {
        self.baseline_kg - self.mode_kg
    }

    #[must_use]
    pub fn is_zero_emission(&self) -> bool {
        emission_factor(self.mode) == 0.0
    }

    #[must_use]
    pub fn footprint_line(&self) -> String {
        if self.is_zero_emission() {
            return "Carbon footprint: Zero emissions".to_string();
        }
        format!(
            "Carbon footprint: Approximately {} kg CO2 ({}compared to {} kg for driving alone)",
            one_decimal(self.mode_kg),
            template_for(self.mode).footprint_qualifier,
            one_decimal(self.baseline_kg)
        )
    }

    #[must_use]
    pub fn savings_line(&self) -> String {
        format!(
            "Saves approximately {} kg of CO2 emissions compared to driving alone",
            one_decimal(self.saved_kg())
        )
    }
}

/// One decimal place, exact halves rounded away from zero
fn one_decimal(kg: f64) -> String {
    match Decimal::from_f64_retain(kg) {
        Some(kg) => format!(
            "{:.1}",
            kg.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{kg:.1}"),
    }
}
