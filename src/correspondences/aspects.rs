use serde::Serialize;

use crate::models::{AspectKind, Body};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Harmonious,
    Challenging,
    Neutral,
}

#[derive(Debug, Serialize)]
pub struct AspectMeaning {
    pub kind: AspectKind,
    pub nature: AspectNature,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub static ASPECTS: &[AspectMeaning] = &[
    AspectMeaning {
        kind: AspectKind::Conjunction,
        nature: AspectNature::Neutral,
        description: "Two energies fuse and act as one, amplifying each other",
        keywords: &["Intensity", "Fusion", "New cycle"],
    },
    AspectMeaning {
        kind: AspectKind::Sextile,
        nature: AspectNature::Harmonious,
        description: "An opening that rewards a little effort with real opportunity",
        keywords: &["Opportunity", "Cooperation", "Ease"],
    },
    AspectMeaning {
        kind: AspectKind::Square,
        nature: AspectNature::Challenging,
        description: "Friction that demands action and builds strength",
        keywords: &["Tension", "Action", "Growth through challenge"],
    },
    AspectMeaning {
        kind: AspectKind::Trine,
        nature: AspectNature::Harmonious,
        description: "Natural flow and talent between two energies",
        keywords: &["Flow", "Harmony", "Gifts"],
    },
    AspectMeaning {
        kind: AspectKind::Opposition,
        nature: AspectNature::Challenging,
        description: "Polarity that asks for balance and awareness of others",
        keywords: &["Polarity", "Awareness", "Balance"],
    },
];

pub fn meaning(kind: AspectKind) -> &'static AspectMeaning {
    match kind {
        AspectKind::Conjunction => &ASPECTS[0],
        AspectKind::Sextile => &ASPECTS[1],
        AspectKind::Square => &ASPECTS[2],
        AspectKind::Trine => &ASPECTS[3],
        AspectKind::Opposition => &ASPECTS[4],
    }
}

#[derive(Debug, Serialize)]
pub struct RetrogradeMeaning {
    pub planet: Body,
    pub description: &'static str,
    pub what_to_do: &'static [&'static str],
    pub what_to_avoid: &'static [&'static str],
}

pub static RETROGRADES: &[RetrogradeMeaning] = &[
    RetrogradeMeaning {
        planet: Body::Mercury,
        description: "Communication, travel and technology slow down and ask for review",
        what_to_do: &["Review and edit", "Reconnect with old friends", "Back up your files"],
        what_to_avoid: &["Signing contracts", "Buying electronics", "Launching projects"],
    },
    RetrogradeMeaning {
        planet: Body::Venus,
        description: "Love and values turn inward for reassessment",
        what_to_do: &["Reflect on relationships", "Revisit your values", "Practice self-love"],
        what_to_avoid: &["Starting new relationships", "Major beauty changes", "Large purchases"],
    },
    RetrogradeMeaning {
        planet: Body::Mars,
        description: "Drive and assertion are redirected toward strategy",
        what_to_do: &["Rethink goals", "Finish old projects", "Channel anger mindfully"],
        what_to_avoid: &["Starting conflicts", "Risky physical feats", "Rash decisions"],
    },
    RetrogradeMeaning {
        planet: Body::Jupiter,
        description: "Growth turns inward toward faith and personal philosophy",
        what_to_do: &["Study", "Reassess beliefs", "Practice gratitude"],
        what_to_avoid: &["Overextending", "Blind optimism"],
    },
    RetrogradeMeaning {
        planet: Body::Saturn,
        description: "Structures and responsibilities come up for review",
        what_to_do: &["Audit commitments", "Strengthen foundations", "Honor boundaries"],
        what_to_avoid: &["Avoiding responsibility", "Cutting corners"],
    },
    RetrogradeMeaning {
        planet: Body::Uranus,
        description: "Inner revolution precedes outer change",
        what_to_do: &["Explore inner freedom", "Question routines"],
        what_to_avoid: &["Impulsive rebellion"],
    },
    RetrogradeMeaning {
        planet: Body::Neptune,
        description: "Illusions lift and intuition clarifies",
        what_to_do: &["Dream work", "Spiritual retreat", "Honest reality checks"],
        what_to_avoid: &["Escapism", "Self-deception"],
    },
    RetrogradeMeaning {
        planet: Body::Pluto,
        description: "Deep inner transformation and reclaiming of power",
        what_to_do: &["Shadow work", "Release what is finished"],
        what_to_avoid: &["Power struggles", "Obsession"],
    },
];

pub fn retrograde(planet: Body) -> Option<&'static RetrogradeMeaning> {
    RETROGRADES.iter().find(|r| r.planet == planet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meaning_matches_kind() {
        for kind in AspectKind::ALL {
            assert_eq!(meaning(kind).kind, kind);
        }
        assert_eq!(meaning(AspectKind::Square).nature, AspectNature::Challenging);
    }

    #[test]
    fn luminaries_never_retrograde() {
        assert!(retrograde(Body::Sun).is_none());
        assert!(retrograde(Body::Mercury).is_some());
    }
}
