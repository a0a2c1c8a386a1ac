use std::collections::BTreeMap;

use serde::Serialize;

use crate::correspondences::signs::{Compatibility, DecanInfo};
use crate::correspondences::{Crystal, DivinationMethod, Rune, Spell, TarotCard, WitchArchetype};
use crate::models::{Body, Element, Sign};

/// Ordering puts `High` first, so an ascending sort lists the strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A pointer into a correspondence table with the reason it was chosen.
#[derive(Debug, Serialize)]
pub struct Recommendation<T: 'static> {
    pub entry: &'static T,
    pub reason: String,
    pub priority: Priority,
}

impl<T: 'static> Clone for Recommendation<T> {
    fn clone(&self) -> Self {
        Self {
            entry: self.entry,
            reason: self.reason.clone(),
            priority: self.priority,
        }
    }
}

impl<T: 'static> Recommendation<T> {
    pub fn new(entry: &'static T, reason: impl Into<String>, priority: Priority) -> Self {
        Self {
            entry,
            reason: reason.into(),
            priority,
        }
    }
}

/// Every recommendation kind, for code that walks them all.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationRef {
    Crystal(Recommendation<Crystal>),
    Spell(Recommendation<Spell>),
    Tarot(Recommendation<TarotCard>),
    Rune(Recommendation<Rune>),
    Divination(Recommendation<DivinationMethod>),
    WitchArchetype(Recommendation<WitchArchetype>),
}

impl RecommendationRef {
    pub fn name(&self) -> &'static str {
        match self {
            RecommendationRef::Crystal(r) => r.entry.name,
            RecommendationRef::Spell(r) => r.entry.title,
            RecommendationRef::Tarot(r) => r.entry.name,
            RecommendationRef::Rune(r) => r.entry.name,
            RecommendationRef::Divination(r) => r.entry.method,
            RecommendationRef::WitchArchetype(r) => r.entry.name,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            RecommendationRef::Crystal(r) => r.priority,
            RecommendationRef::Spell(r) => r.priority,
            RecommendationRef::Tarot(r) => r.priority,
            RecommendationRef::Rune(r) => r.priority,
            RecommendationRef::Divination(r) => r.priority,
            RecommendationRef::WitchArchetype(r) => r.priority,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            RecommendationRef::Crystal(r) => &r.reason,
            RecommendationRef::Spell(r) => &r.reason,
            RecommendationRef::Tarot(r) => &r.reason,
            RecommendationRef::Rune(r) => &r.reason,
            RecommendationRef::Divination(r) => &r.reason,
            RecommendationRef::WitchArchetype(r) => &r.reason,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KarmicDebtInsight {
    pub number: u32,
    pub meaning: &'static str,
    pub life_lesson: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AngelNumberInsight {
    pub number: String,
    pub meaning: &'static str,
    pub guidance: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MirrorHourInsight {
    pub time: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumerologyInsight {
    pub life_path: u32,
    pub personal_year: u32,
    pub planet: Body,
    pub zodiac_sign: Sign,
    pub meaning: &'static str,
    pub personal_year_guidance: &'static str,
    pub correlations: Vec<String>,
    pub karmic_debt: Option<KarmicDebtInsight>,
    pub angel_number: Option<AngelNumberInsight>,
    pub mirror_hour: Option<MirrorHourInsight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AspectGuidance {
    pub aspect: String,
    pub nature: crate::correspondences::aspects::AspectNature,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub crystals: Vec<&'static str>,
    pub practices: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RetrogradeGuidance {
    pub planet: Body,
    pub description: &'static str,
    pub what_to_do: &'static [&'static str],
    pub what_to_avoid: &'static [&'static str],
    pub crystals: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SabbatRecommendation {
    pub sabbat: &'static str,
    pub date: chrono::NaiveDate,
    pub days_until: i64,
    pub description: &'static str,
    pub colors: &'static [&'static str],
    pub crystals: &'static [&'static str],
    pub herbs: &'static [&'static str],
    pub rituals: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetaryDayRecommendation {
    pub day: &'static str,
    pub planet: Body,
    pub best_for: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub crystals: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeDetail {
    pub sign: Sign,
    pub house: Option<u8>,
    pub lesson: &'static str,
    pub area: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LunarNodeGuidance {
    pub north_node: NodeDetail,
    pub south_node: NodeDetail,
    pub axis: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynastryInsight {
    pub sun_sign: Sign,
    pub partner_sign: Option<Sign>,
    pub compatibility: Option<Compatibility>,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub element_dynamic: String,
    pub recommended_crystals: Vec<&'static str>,
    pub relationship_rituals: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RitualTiming {
    pub day: &'static str,
    pub moon_phase: &'static str,
    pub planetary_hour: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RitualRecommendation {
    pub purpose: String,
    pub timing: RitualTiming,
    pub element: Element,
    pub element_qualities: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub color_meanings: Vec<&'static str>,
    pub herbs: &'static [&'static str],
    pub herb_properties: Vec<&'static str>,
    pub crystals: Vec<&'static str>,
    pub steps: Vec<String>,
}

/// Domains that can carry a soft nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionDomain {
    Tarot,
    Runes,
    Divination,
    Sabbat,
    Meditation,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CosmicRecommendations {
    pub crystals: Vec<Recommendation<Crystal>>,
    pub spells: Vec<Recommendation<Spell>>,
    pub numerology: Option<NumerologyInsight>,

    pub aspect_guidance: Vec<AspectGuidance>,
    pub retrograde_guidance: Vec<RetrogradeGuidance>,
    pub sabbat: Option<SabbatRecommendation>,
    pub tarot_cards: Vec<Recommendation<TarotCard>>,
    pub planetary_day: Option<PlanetaryDayRecommendation>,

    pub runes: Vec<Recommendation<Rune>>,
    pub lunar_nodes: Option<LunarNodeGuidance>,
    pub synastry: Option<SynastryInsight>,
    pub decan: Option<DecanInfo>,
    pub witch_types: Vec<Recommendation<WitchArchetype>>,
    pub divination: Vec<Recommendation<DivinationMethod>>,

    pub suggestions: BTreeMap<SuggestionDomain, String>,
    pub ritual: Option<RitualRecommendation>,
    pub synthesis: String,
}

impl CosmicRecommendations {
    pub fn all(&self) -> Vec<RecommendationRef> {
        let mut out = Vec::new();
        out.extend(self.crystals.iter().cloned().map(RecommendationRef::Crystal));
        out.extend(self.spells.iter().cloned().map(RecommendationRef::Spell));
        out.extend(self.tarot_cards.iter().cloned().map(RecommendationRef::Tarot));
        out.extend(self.runes.iter().cloned().map(RecommendationRef::Rune));
        out.extend(self.divination.iter().cloned().map(RecommendationRef::Divination));
        out.extend(
            self.witch_types
                .iter()
                .cloned()
                .map(RecommendationRef::WitchArchetype),
        );
        out
    }
}

/// Stable sort by priority, strongest first; ties keep discovery order.
pub fn sort_by_priority<T: 'static>(items: &mut [Recommendation<T>]) {
    items.sort_by_key(|r| r.priority);
}
