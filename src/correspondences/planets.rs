use serde::Serialize;

use crate::models::{Body, Element};

#[derive(Debug, Serialize)]
pub struct PlanetInfo {
    pub body: Body,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub chakra: &'static str,
}

pub static PLANETS: &[PlanetInfo] = &[
    PlanetInfo { body: Body::Sun, keywords: &["Identity", "Vitality", "Purpose"], description: "Your core self and the light you radiate", chakra: "Solar Plexus" },
    PlanetInfo { body: Body::Moon, keywords: &["Emotion", "Instinct", "Comfort"], description: "Your emotional nature and what makes you feel safe", chakra: "Sacral" },
    PlanetInfo { body: Body::Mercury, keywords: &["Mind", "Communication", "Learning"], description: "How you think, speak and connect ideas", chakra: "Throat" },
    PlanetInfo { body: Body::Venus, keywords: &["Love", "Beauty", "Values"], description: "What you love and how you relate", chakra: "Heart" },
    PlanetInfo { body: Body::Mars, keywords: &["Drive", "Courage", "Desire"], description: "How you act, assert and pursue", chakra: "Sacral" },
    PlanetInfo { body: Body::Jupiter, keywords: &["Growth", "Luck", "Wisdom"], description: "Where you expand and find meaning", chakra: "Third Eye" },
    PlanetInfo { body: Body::Saturn, keywords: &["Structure", "Discipline", "Time"], description: "Where you meet limits and build mastery", chakra: "Root" },
    PlanetInfo { body: Body::Uranus, keywords: &["Change", "Freedom", "Innovation"], description: "Where you break free and awaken", chakra: "Crown" },
    PlanetInfo { body: Body::Neptune, keywords: &["Dreams", "Intuition", "Spirit"], description: "Where boundaries dissolve into imagination", chakra: "Crown" },
    PlanetInfo { body: Body::Pluto, keywords: &["Power", "Transformation", "Rebirth"], description: "Where you undergo deep transformation", chakra: "Root" },
];

pub fn info(body: Body) -> Option<&'static PlanetInfo> {
    PLANETS.iter().find(|p| p.body == body)
}

/// Energy center for a planet, falling back to the element's center.
pub fn chakra_for(planet: Option<Body>, element: Option<Element>) -> &'static str {
    if let Some(chakra) = planet.and_then(info).map(|p| p.chakra) {
        return chakra;
    }
    match element {
        Some(Element::Earth) => "Root",
        Some(Element::Water) => "Sacral",
        Some(Element::Fire) => "Solar Plexus",
        Some(Element::Air) => "Heart",
        None => "All Chakras",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chakra_mapping() {
        assert_eq!(chakra_for(Some(Body::Mercury), None), "Throat");
        assert_eq!(chakra_for(Some(Body::Chiron), Some(Element::Water)), "Sacral");
        assert_eq!(chakra_for(None, None), "All Chakras");
    }
}
