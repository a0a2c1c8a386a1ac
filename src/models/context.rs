use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    AspectPattern, BirthChartPlacement, Citation, ContextRequirements, CosmicRecommendations,
    EclipseRelevance, MoonState, PersonalTransitImpact, PlanetaryReturn, ProgressedChart,
    QueryContext, RequirementOverrides,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRequest {
    pub user_id: String,
    pub utterance: Option<String>,
    #[serde(default)]
    pub overrides: Option<RequirementOverrides>,
    #[serde(default)]
    pub intentions: Vec<String>,
    pub now: DateTime<Utc>,
}

impl ContextRequest {
    pub fn new(user_id: impl Into<String>, utterance: Option<&str>) -> Self {
        Self {
            user_id: user_id.into(),
            utterance: utterance.map(str::to_string),
            overrides: None,
            intentions: Vec::new(),
            now: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OmittedDerivation {
    pub derivation: String,
    pub reason: String,
}

/// Everything assembled for one turn.
#[derive(Debug, Clone, Serialize)]
pub struct CosmicContext {
    pub turn_id: Uuid,
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
    pub query: Option<QueryContext>,
    pub requirements: ContextRequirements,
    pub estimated_tokens: usize,
    pub moon: MoonState,
    pub natal_placements: Vec<BirthChartPlacement>,

    pub personal_transits: Option<Vec<PersonalTransitImpact>>,
    pub natal_patterns: Option<Vec<AspectPattern>>,
    pub pending_detectors: Vec<&'static str>,
    pub planetary_returns: Option<Vec<PlanetaryReturn>>,
    pub progressed_chart: Option<ProgressedChart>,
    pub eclipses: Option<Vec<EclipseRelevance>>,

    pub recommendations: CosmicRecommendations,
    pub citations: Vec<Citation>,

    pub missing: Vec<String>,
    pub omitted: Vec<OmittedDerivation>,
    pub degraded: bool,
}
