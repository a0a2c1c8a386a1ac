use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AspectKind, Body, MoonPhase, Sign};

/// One entry from the external transit feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingTransit {
    pub planet: String,
    pub event: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub sign: Option<String>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitWindow {
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalContact {
    pub kind: AspectKind,
    pub natal_planet: Body,
    /// `None` for whole-sign contacts.
    pub orb: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalTransitImpact {
    pub planet: Body,
    pub event: String,
    pub sign: Option<Sign>,
    pub aspect_to_natal: Option<NatalContact>,
    pub house: Option<u8>,
    pub date: DateTime<Utc>,
    pub window: TransitWindow,
    pub relevance: f64,
}

impl PersonalTransitImpact {
    pub fn is_retrograde(&self) -> bool {
        self.event.to_lowercase().contains("retrograde")
    }

    /// Short label such as "Mars square natal Sun".
    pub fn label(&self) -> String {
        match &self.aspect_to_natal {
            Some(contact) => format!(
                "{} {} natal {}",
                self.planet.name(),
                contact.kind.name(),
                contact.natal_planet.name()
            ),
            None => format!("{} {}", self.planet.name(), self.event),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnPhase {
    Pre,
    Exact,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    Exact,
    Approaching,
    Recent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryReturn {
    pub planet: Body,
    pub return_number: u32,
    pub return_date: DateTime<Utc>,
    /// Positive before the return, negative after.
    pub proximity_days: f64,
    pub phase: ReturnPhase,
    pub return_type: ReturnType,
    pub is_active: bool,
}

impl PlanetaryReturn {
    pub fn identity_key(&self) -> String {
        format!(
            "v1:planetary_return:{}:{}",
            self.planet.name().to_lowercase(),
            self.return_number
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseKind {
    Solar,
    Lunar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EclipseContact {
    pub natal_body: Body,
    pub kind: AspectKind,
    pub orb: f64,
    pub houses: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EclipseRelevance {
    pub date: DateTime<Utc>,
    pub kind: EclipseKind,
    pub description: String,
    pub longitude: f64,
    pub sign: Sign,
    pub contacts: Vec<EclipseContact>,
    pub houses: Vec<u8>,
}

impl EclipseRelevance {
    pub fn identity_key(&self) -> String {
        format!("v1:eclipse:{}", self.date.format("%Y-%m-%dT%H:%M"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressedBody {
    pub body: Body,
    pub longitude: f64,
    pub sign: Sign,
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignChange {
    pub body: Body,
    pub natal_sign: Sign,
    pub progressed_sign: Sign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressedChart {
    pub age_years: f64,
    pub sun: Option<ProgressedBody>,
    pub moon: Option<ProgressedBody>,
    pub lunation_phase: Option<MoonPhase>,
    pub bodies: Vec<ProgressedBody>,
    pub sign_changes: Vec<SignChange>,
}

impl ProgressedChart {
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(sun) = &self.sun {
            parts.push(format!("Progressed Sun {:.0}° {}", sun.degree, sun.sign.name()));
        }
        if let Some(moon) = &self.moon {
            parts.push(format!("Progressed Moon {:.0}° {}", moon.degree, moon.sign.name()));
        }
        if let Some(phase) = self.lunation_phase {
            parts.push(format!("{} progressed lunation", phase.name()));
        }
        for change in &self.sign_changes {
            parts.push(format!(
                "{} moved from {} to {}",
                change.body.name(),
                change.natal_sign.name(),
                change.progressed_sign.name()
            ));
        }
        parts.join("; ")
    }
}
