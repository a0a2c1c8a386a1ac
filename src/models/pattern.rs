use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BirthChart, Body, Sign};

/// Lifetime class of a stored pattern; fixes its TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Natal,
    Cyclical,
    Transient,
    Progression,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 4] = [
        PatternCategory::Natal,
        PatternCategory::Cyclical,
        PatternCategory::Transient,
        PatternCategory::Progression,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Natal => "natal",
            PatternCategory::Cyclical => "cyclical",
            PatternCategory::Transient => "transient",
            PatternCategory::Progression => "progression",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "natal" => Some(PatternCategory::Natal),
            "cyclical" => Some(PatternCategory::Cyclical),
            "transient" => Some(PatternCategory::Transient),
            "progression" => Some(PatternCategory::Progression),
            _ => None,
        }
    }

    /// `None` means the pattern never expires.
    pub fn ttl(&self) -> Option<Duration> {
        match self {
            PatternCategory::Natal => None,
            PatternCategory::Cyclical => Some(Duration::days(90)),
            PatternCategory::Transient => Some(Duration::days(7)),
            PatternCategory::Progression => Some(Duration::days(365)),
        }
    }

    pub fn expires_at(&self, observed: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.ttl().map(|ttl| observed + ttl)
    }

    pub fn for_pattern_type(pattern_type: &str) -> Self {
        match pattern_type {
            "stellium" | "grand_trine" | "t_square" | "yod" => PatternCategory::Natal,
            "planetary_return" | "lunar_cycle" | "mood_cycle" | "recurring_theme" => {
                PatternCategory::Cyclical
            }
            t if t.starts_with("progressed") || t == "progression" => PatternCategory::Progression,
            _ => PatternCategory::Transient,
        }
    }
}

/// Bodies, signs and houses taking part in a natal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternShape {
    pub bodies: Vec<Body>,
    pub signs: Vec<Sign>,
    pub houses: Vec<u8>,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AspectPattern {
    Stellium(PatternShape),
    GrandTrine(PatternShape),
    TSquare(PatternShape),
    Yod(PatternShape),
}

impl AspectPattern {
    pub fn pattern_type(&self) -> &'static str {
        match self {
            AspectPattern::Stellium(_) => "stellium",
            AspectPattern::GrandTrine(_) => "grand_trine",
            AspectPattern::TSquare(_) => "t_square",
            AspectPattern::Yod(_) => "yod",
        }
    }

    pub fn shape(&self) -> &PatternShape {
        match self {
            AspectPattern::Stellium(s)
            | AspectPattern::GrandTrine(s)
            | AspectPattern::TSquare(s)
            | AspectPattern::Yod(s) => s,
        }
    }

    /// Versioned key: `v1:<type>:<signs>:<bodies>`, each list sorted.
    pub fn identity_key(&self) -> String {
        let shape = self.shape();
        let mut signs: Vec<Sign> = shape.signs.clone();
        signs.sort();
        signs.dedup();
        let mut bodies: Vec<String> = shape
            .bodies
            .iter()
            .map(|b| b.name().to_lowercase().replace(' ', "_"))
            .collect();
        bodies.sort();
        let signs: Vec<String> = signs.iter().map(|s| s.name().to_lowercase()).collect();
        format!(
            "v1:{}:{}:{}",
            self.pattern_type(),
            signs.join(","),
            bodies.join(",")
        )
    }

    pub fn describe(&self) -> String {
        let shape = self.shape();
        let bodies: Vec<&str> = shape.bodies.iter().map(|b| b.name()).collect();
        match self {
            AspectPattern::Stellium(_) => {
                let sign = shape.signs.first().map(|s| s.name()).unwrap_or("one sign");
                format!("Stellium in {}: {}", sign, bodies.join(", "))
            }
            AspectPattern::GrandTrine(_) => format!("Grand Trine: {}", bodies.join(", ")),
            AspectPattern::TSquare(_) => format!("T-Square: {}", bodies.join(", ")),
            AspectPattern::Yod(_) => format!("Yod: {}", bodies.join(", ")),
        }
    }

    /// Whether every member body still sits in one of the pattern's signs.
    pub fn fits(&self, chart: &BirthChart) -> bool {
        let shape = self.shape();
        shape.bodies.iter().all(|body| {
            chart
                .find(*body)
                .map(|p| shape.signs.contains(&p.sign))
                .unwrap_or(false)
        })
    }

    pub fn to_new_pattern(&self) -> Result<NewPattern, serde_json::Error> {
        Ok(NewPattern {
            pattern_type: self.pattern_type().to_string(),
            identity_key: self.identity_key(),
            payload: serde_json::to_value(self)?,
            confidence: self.shape().confidence,
        })
    }
}

/// Outcome of one named natal detector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum DetectorResult {
    Detected(Vec<AspectPattern>),
    NotImplemented(&'static str),
}

impl DetectorResult {
    pub fn patterns(&self) -> &[AspectPattern] {
        match self {
            DetectorResult::Detected(found) => found,
            DetectorResult::NotImplemented(_) => &[],
        }
    }
}

/// A pattern about to be saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPattern {
    pub pattern_type: String,
    pub identity_key: String,
    pub payload: serde_json::Value,
    pub confidence: f64,
}

impl NewPattern {
    pub fn category(&self) -> PatternCategory {
        PatternCategory::for_pattern_type(&self.pattern_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPattern {
    pub id: i64,
    pub user_id: String,
    pub pattern_type: String,
    pub category: PatternCategory,
    pub identity_key: String,
    pub payload: serde_json::Value,
    pub confidence: f64,
    pub generated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub first_detected: DateTime<Utc>,
    pub last_observed: DateTime<Utc>,
}

impl StoredPattern {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|at| at <= now).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternFilter {
    pub category: Option<PatternCategory>,
    pub pattern_type: Option<String>,
    /// Analytics and debugging only.
    pub include_expired: bool,
}

impl PatternFilter {
    pub fn category(category: PatternCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReport {
    pub saved: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternStats {
    pub total: usize,
    pub by_category: std::collections::BTreeMap<String, usize>,
    pub expired_pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stellium() -> AspectPattern {
        AspectPattern::Stellium(PatternShape {
            bodies: vec![Body::Venus, Body::Sun, Body::Mercury],
            signs: vec![Sign::Gemini],
            houses: vec![3],
            confidence: 0.95,
        })
    }

    #[test]
    fn identity_key_is_sorted_and_versioned() {
        assert_eq!(
            stellium().identity_key(),
            "v1:stellium:gemini:mercury,sun,venus"
        );
    }

    #[test]
    fn pattern_only_fits_the_chart_it_came_from() {
        use crate::models::RawPlacement;
        let raw = |entries: &[(&str, &str)]| -> BirthChart {
            let placements: Vec<RawPlacement> = entries
                .iter()
                .map(|(body, sign)| RawPlacement {
                    body: body.to_string(),
                    sign: sign.to_string(),
                    degree: 1.0,
                    ecliptic_longitude: None,
                    house: None,
                })
                .collect();
            BirthChart::from_raw(&placements)
        };

        let gemini = raw(&[("Sun", "Gemini"), ("Mercury", "Gemini"), ("Venus", "Gemini")]);
        assert!(stellium().fits(&gemini));

        let moved = raw(&[("Sun", "Gemini"), ("Mercury", "Gemini"), ("Venus", "Cancer")]);
        assert!(!stellium().fits(&moved));

        let dropped = raw(&[("Sun", "Gemini"), ("Mercury", "Gemini")]);
        assert!(!stellium().fits(&dropped));
    }

    #[test]
    fn category_follows_pattern_type() {
        assert_eq!(PatternCategory::for_pattern_type("stellium"), PatternCategory::Natal);
        assert_eq!(
            PatternCategory::for_pattern_type("planetary_return"),
            PatternCategory::Cyclical
        );
        assert_eq!(
            PatternCategory::for_pattern_type("progressed_chart"),
            PatternCategory::Progression
        );
        assert_eq!(PatternCategory::for_pattern_type("eclipse"), PatternCategory::Transient);
        assert_eq!(PatternCategory::for_pattern_type("mystery"), PatternCategory::Transient);
    }

    #[test]
    fn ttls() {
        assert!(PatternCategory::Natal.ttl().is_none());
        assert_eq!(PatternCategory::Cyclical.ttl(), Some(Duration::days(90)));
        assert_eq!(PatternCategory::Transient.ttl(), Some(Duration::days(7)));
        assert_eq!(PatternCategory::Progression.ttl(), Some(Duration::days(365)));
    }

    #[test]
    fn payload_round_trips_through_json() {
        let new = stellium().to_new_pattern().unwrap();
        let back: AspectPattern = serde_json::from_value(new.payload).unwrap();
        assert_eq!(back, stellium());
    }
}
