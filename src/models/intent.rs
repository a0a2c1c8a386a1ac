use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::models::Sign;

/// Which knowledge domains one utterance calls for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryContext {
    pub needs_crystals: bool,
    pub needs_spells: bool,
    pub needs_numerology: bool,
    pub needs_aspects: bool,
    pub needs_retrogrades: bool,
    pub needs_eclipses: bool,
    pub needs_sabbats: bool,
    pub needs_tarot: bool,
    pub needs_runes: bool,
    pub needs_lunar_nodes: bool,
    pub needs_synastry: bool,
    pub needs_decans: bool,
    pub needs_witch_types: bool,
    pub needs_divination: bool,
    pub needs_meditation: bool,
    pub needs_planetary_day: bool,
    pub needs_moon: bool,

    pub suggest_tarot: bool,
    pub suggest_runes: bool,
    pub suggest_divination: bool,
    pub suggest_sabbat: bool,
    pub suggest_meditation: bool,

    /// Rune named in the utterance, canonical spelling.
    pub specific_rune: Option<String>,
    /// Sign named in a relationship question.
    pub partner_sign: Option<Sign>,
}

impl QueryContext {
    /// Stable hash of the whole flag set, for upstream cache keys.
    pub fn cache_key(&self) -> u64 {
        let mut hasher = twox_hash::XxHash64::with_seed(0);
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// The five expensive derivations a turn may run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRequirements {
    pub needs_personal_transits: bool,
    pub needs_natal_patterns: bool,
    pub needs_planetary_returns: bool,
    pub needs_progressed_chart: bool,
    pub needs_eclipses: bool,
}

const BASIC_COSMIC_TOKENS: usize = 150;

impl ContextRequirements {
    pub fn all() -> Self {
        Self {
            needs_personal_transits: true,
            needs_natal_patterns: true,
            needs_planetary_returns: true,
            needs_progressed_chart: true,
            needs_eclipses: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.needs_personal_transits
            || self.needs_natal_patterns
            || self.needs_planetary_returns
            || self.needs_progressed_chart
            || self.needs_eclipses
    }

    /// Rough prompt cost of the context these flags produce.
    pub fn estimated_tokens(&self) -> usize {
        let mut total = BASIC_COSMIC_TOKENS;
        if self.needs_personal_transits {
            total += 300;
        }
        if self.needs_natal_patterns {
            total += 200;
        }
        if self.needs_planetary_returns {
            total += 100;
        }
        if self.needs_progressed_chart {
            total += 250;
        }
        if self.needs_eclipses {
            total += 200;
        }
        total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextPreset {
    QuickCosmic,
    TransitFocus,
    NatalStudy,
    DeepAnalysis,
}

impl ContextPreset {
    pub fn requirements(&self) -> ContextRequirements {
        match self {
            ContextPreset::QuickCosmic => ContextRequirements::none(),
            ContextPreset::TransitFocus => ContextRequirements {
                needs_personal_transits: true,
                needs_eclipses: true,
                ..ContextRequirements::none()
            },
            ContextPreset::NatalStudy => ContextRequirements {
                needs_natal_patterns: true,
                needs_progressed_chart: true,
                ..ContextRequirements::none()
            },
            ContextPreset::DeepAnalysis => ContextRequirements::all(),
        }
    }
}

impl std::str::FromStr for ContextPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick_cosmic" => Ok(ContextPreset::QuickCosmic),
            "transit_focus" => Ok(ContextPreset::TransitFocus),
            "natal_study" => Ok(ContextPreset::NatalStudy),
            "deep_analysis" => Ok(ContextPreset::DeepAnalysis),
            other => Err(format!("unknown context preset: {}", other)),
        }
    }
}

/// Caller overrides; a `Some` always wins over the heuristics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementOverrides {
    pub needs_personal_transits: Option<bool>,
    pub needs_natal_patterns: Option<bool>,
    pub needs_planetary_returns: Option<bool>,
    pub needs_progressed_chart: Option<bool>,
    pub needs_eclipses: Option<bool>,
}

impl RequirementOverrides {
    pub fn apply(&self, base: ContextRequirements) -> ContextRequirements {
        ContextRequirements {
            needs_personal_transits: self
                .needs_personal_transits
                .unwrap_or(base.needs_personal_transits),
            needs_natal_patterns: self.needs_natal_patterns.unwrap_or(base.needs_natal_patterns),
            needs_planetary_returns: self
                .needs_planetary_returns
                .unwrap_or(base.needs_planetary_returns),
            needs_progressed_chart: self
                .needs_progressed_chart
                .unwrap_or(base.needs_progressed_chart),
            needs_eclipses: self.needs_eclipses.unwrap_or(base.needs_eclipses),
        }
    }
}

impl From<ContextPreset> for RequirementOverrides {
    fn from(preset: ContextPreset) -> Self {
        let r = preset.requirements();
        Self {
            needs_personal_transits: Some(r.needs_personal_transits),
            needs_natal_patterns: Some(r.needs_natal_patterns),
            needs_planetary_returns: Some(r.needs_planetary_returns),
            needs_progressed_chart: Some(r.needs_progressed_chart),
            needs_eclipses: Some(r.needs_eclipses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_estimates() {
        assert_eq!(ContextRequirements::none().estimated_tokens(), 150);
        let some = ContextRequirements {
            needs_personal_transits: true,
            needs_natal_patterns: true,
            ..ContextRequirements::none()
        };
        assert_eq!(some.estimated_tokens(), 650);
        assert_eq!(ContextRequirements::all().estimated_tokens(), 1200);
    }

    #[test]
    fn overrides_replace_rather_than_merge() {
        let base = ContextRequirements::all();
        let overrides = RequirementOverrides {
            needs_eclipses: Some(false),
            ..RequirementOverrides::default()
        };
        let merged = overrides.apply(base);
        assert!(!merged.needs_eclipses);
        assert!(merged.needs_personal_transits);
    }

    #[test]
    fn presets_parse_and_expand() {
        let preset: ContextPreset = "deep_analysis".parse().unwrap();
        assert_eq!(preset.requirements(), ContextRequirements::all());
        assert!(!"quick_cosmic"
            .parse::<ContextPreset>()
            .unwrap()
            .requirements()
            .any());
        assert!("tarot".parse::<ContextPreset>().is_err());
    }

    #[test]
    fn cache_key_tracks_flags() {
        let a = QueryContext {
            needs_crystals: true,
            ..QueryContext::default()
        };
        let b = a.clone();
        assert_eq!(a.cache_key(), b.cache_key());
        let c = QueryContext {
            needs_spells: true,
            ..a.clone()
        };
        assert_ne!(a.cache_key(), c.cache_key());
    }
}
