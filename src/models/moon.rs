use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Sign;
use crate::utils::astro;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Phase for a Moon-minus-Sun elongation in degrees.
    pub fn from_elongation(elongation: f64) -> Self {
        let e = astro::normalize_degrees(elongation);
        match e {
            e if !(22.5..337.5).contains(&e) => MoonPhase::NewMoon,
            e if e < 67.5 => MoonPhase::WaxingCrescent,
            e if e < 112.5 => MoonPhase::FirstQuarter,
            e if e < 157.5 => MoonPhase::WaxingGibbous,
            e if e < 202.5 => MoonPhase::FullMoon,
            e if e < 247.5 => MoonPhase::WaningGibbous,
            e if e < 292.5 => MoonPhase::LastQuarter,
            _ => MoonPhase::WaningCrescent,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// The broad phase name correspondence tables are keyed by.
    pub fn family(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous => {
                "Waxing Moon"
            }
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous | MoonPhase::LastQuarter | MoonPhase::WaningCrescent => {
                "Waning Moon"
            }
        }
    }
}

/// The sky's Moon at a given instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonState {
    pub phase: MoonPhase,
    pub sign: Sign,
    pub longitude: f64,
    pub illumination: f64,
}

impl MoonState {
    pub fn at(instant: DateTime<Utc>) -> Self {
        let longitude = astro::moon_longitude(instant);
        let elongation = astro::lunar_elongation(instant);
        Self {
            phase: MoonPhase::from_elongation(elongation),
            sign: Sign::from_longitude(longitude),
            longitude,
            illumination: (1.0 - elongation.to_radians().cos()) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn elongation_boundaries() {
        assert_eq!(MoonPhase::from_elongation(0.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_elongation(350.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_elongation(90.0), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_elongation(180.0), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_elongation(300.0), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::WaxingGibbous.family(), "Waxing Moon");
    }

    #[test]
    fn moon_is_full_at_a_lunar_eclipse() {
        let state = MoonState::at(Utc.with_ymd_and_hms(2025, 3, 14, 6, 58, 0).unwrap());
        assert_eq!(state.phase, MoonPhase::FullMoon);
        assert!(state.illumination > 0.99);
        assert_eq!(state.sign, Sign::Virgo);
    }
}
