use serde::{Deserialize, Serialize};

use crate::utils::astro::{angular_separation, normalize_degrees};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Chiron,
    Ascendant,
    Midheaven,
}

impl Body {
    /// The ten bodies used for pattern detection.
    pub const MAJOR: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::NorthNode => "North Node",
            Body::Chiron => "Chiron",
            Body::Ascendant => "Ascendant",
            Body::Midheaven => "Midheaven",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "sun" => Some(Body::Sun),
            "moon" => Some(Body::Moon),
            "mercury" => Some(Body::Mercury),
            "venus" => Some(Body::Venus),
            "mars" => Some(Body::Mars),
            "jupiter" => Some(Body::Jupiter),
            "saturn" => Some(Body::Saturn),
            "uranus" => Some(Body::Uranus),
            "neptune" => Some(Body::Neptune),
            "pluto" => Some(Body::Pluto),
            "northnode" | "truenode" | "meannode" => Some(Body::NorthNode),
            "chiron" => Some(Body::Chiron),
            "ascendant" | "asc" | "rising" => Some(Body::Ascendant),
            "midheaven" | "mc" => Some(Body::Midheaven),
            _ => None,
        }
    }

    pub fn is_major(&self) -> bool {
        Self::MAJOR.contains(self)
    }

    /// Personal points weigh more when a transit touches them.
    pub fn is_personal_point(&self) -> bool {
        matches!(
            self,
            Body::Sun | Body::Moon | Body::Mercury | Body::Venus | Body::Mars | Body::Ascendant
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "earth" => Some(Element::Earth),
            "air" => Some(Element::Air),
            "water" => Some(Element::Water),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }

    pub fn from_longitude(longitude: f64) -> Sign {
        Self::from_index((normalize_degrees(longitude) / 30.0).floor() as usize)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name().to_lowercase() == lower)
    }

    pub fn element(&self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn modality(&self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Traditional ruler, with the modern outer planets for Scorpio, Aquarius and Pisces.
    pub fn ruler(&self) -> Body {
        match self {
            Sign::Aries => Body::Mars,
            Sign::Taurus => Body::Venus,
            Sign::Gemini => Body::Mercury,
            Sign::Cancer => Body::Moon,
            Sign::Leo => Body::Sun,
            Sign::Virgo => Body::Mercury,
            Sign::Libra => Body::Venus,
            Sign::Scorpio => Body::Pluto,
            Sign::Sagittarius => Body::Jupiter,
            Sign::Capricorn => Body::Saturn,
            Sign::Aquarius => Body::Uranus,
            Sign::Pisces => Body::Neptune,
        }
    }

    pub fn opposite(&self) -> Sign {
        Self::from_index(self.index() + 6)
    }

    /// Signs counted forward from `self` to `other`, 0..=11.
    pub fn distance_to(&self, other: Sign) -> usize {
        (other.index() + 12 - self.index()) % 12
    }
}

/// Placement shape handed over by the birth chart accessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlacement {
    pub body: String,
    pub sign: String,
    pub degree: f64,
    #[serde(default)]
    pub ecliptic_longitude: Option<f64>,
    #[serde(default)]
    pub house: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChartPlacement {
    pub body: Body,
    pub sign: Sign,
    pub degree: f64,
    pub house: u8,
    pub ecliptic_longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub placements: Vec<BirthChartPlacement>,
}

impl BirthChart {
    pub fn from_raw(raw: &[RawPlacement]) -> Self {
        let ascendant_sign = raw
            .iter()
            .find(|p| Body::from_name(&p.body) == Some(Body::Ascendant))
            .and_then(|p| Sign::from_name(&p.sign));

        let placements = raw
            .iter()
            .filter_map(|p| {
                let body = Body::from_name(&p.body);
                let sign = Sign::from_name(&p.sign);
                match (body, sign) {
                    (Some(body), Some(sign)) => {
                        let degree = p.degree.rem_euclid(30.0);
                        let ecliptic_longitude = p
                            .ecliptic_longitude
                            .map(normalize_degrees)
                            .unwrap_or(sign.index() as f64 * 30.0 + degree);
                        let house = p
                            .house
                            .filter(|h| (1..=12).contains(h))
                            .unwrap_or_else(|| whole_sign_house(ascendant_sign, sign));
                        Some(BirthChartPlacement {
                            body,
                            sign,
                            degree,
                            house,
                            ecliptic_longitude,
                        })
                    }
                    _ => {
                        log::warn!(
                            "[Chart] Skipping unrecognized placement {} in {}",
                            p.body,
                            p.sign
                        );
                        None
                    }
                }
            })
            .collect();

        Self { placements }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn find(&self, body: Body) -> Option<&BirthChartPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }

    pub fn sun(&self) -> Option<&BirthChartPlacement> {
        self.find(Body::Sun)
    }

    pub fn moon(&self) -> Option<&BirthChartPlacement> {
        self.find(Body::Moon)
    }

    /// House a sign falls in for this chart, taken from any natal body in that sign.
    pub fn house_of_sign(&self, sign: Sign) -> Option<u8> {
        if let Some(asc) = self.find(Body::Ascendant) {
            return Some(whole_sign_house(Some(asc.sign), sign));
        }
        self.placements
            .iter()
            .find(|p| p.sign == sign)
            .map(|p| p.house)
    }

    /// Elements ranked by how many major bodies occupy them, strongest first.
    pub fn dominant_elements(&self) -> Vec<Element> {
        let mut counts: Vec<(Element, usize)> = [Element::Fire, Element::Earth, Element::Air, Element::Water]
            .iter()
            .map(|e| {
                let n = self
                    .placements
                    .iter()
                    .filter(|p| p.body.is_major() && p.sign.element() == *e)
                    .count();
                (*e, n)
            })
            .filter(|(_, n)| *n > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().map(|(e, _)| e).collect()
    }

    /// Number of major aspects a body makes to the other major bodies.
    pub fn aspect_count(&self, body: Body) -> usize {
        let Some(target) = self.find(body) else {
            return 0;
        };
        self.placements
            .iter()
            .filter(|p| p.body != body && p.body.is_major())
            .filter(|p| AspectKind::between(target.ecliptic_longitude, p.ecliptic_longitude).is_some())
            .count()
    }
}

fn whole_sign_house(ascendant: Option<Sign>, sign: Sign) -> u8 {
    let first = ascendant.unwrap_or(Sign::Aries);
    (first.distance_to(sign) + 1) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn orb(&self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Opposition => 8.0,
            AspectKind::Square | AspectKind::Trine => 7.0,
            AspectKind::Sextile => 5.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }

    pub fn is_challenging(&self) -> bool {
        matches!(self, AspectKind::Square | AspectKind::Opposition)
    }

    /// Exact aspect between two longitudes within orb, with the orb used.
    pub fn between(a: f64, b: f64) -> Option<(AspectKind, f64)> {
        let separation = angular_separation(a, b);
        Self::ALL
            .iter()
            .map(|k| (*k, (separation - k.angle()).abs()))
            .filter(|(k, orb)| *orb <= k.orb())
            .min_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Whole-sign aspect between two signs.
    pub fn between_signs(a: Sign, b: Sign) -> Option<AspectKind> {
        match a.distance_to(b) {
            0 => Some(AspectKind::Conjunction),
            2 | 10 => Some(AspectKind::Sextile),
            3 | 9 => Some(AspectKind::Square),
            4 | 8 => Some(AspectKind::Trine),
            6 => Some(AspectKind::Opposition),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(body: &str, sign: &str, degree: f64, house: Option<u8>) -> RawPlacement {
        RawPlacement {
            body: body.to_string(),
            sign: sign.to_string(),
            degree,
            ecliptic_longitude: None,
            house,
        }
    }

    #[test]
    fn raw_placements_fill_in_longitude_and_house() {
        let chart = BirthChart::from_raw(&[
            raw("Ascendant", "Taurus", 4.0, None),
            raw("Mercury", "Gemini", 12.5, Some(3)),
            raw("Venus", "Cancer", 2.0, None),
        ]);
        let mercury = chart.find(Body::Mercury).unwrap();
        assert_eq!(mercury.house, 3);
        assert!((mercury.ecliptic_longitude - 72.5).abs() < 1e-9);
        let venus = chart.find(Body::Venus).unwrap();
        assert_eq!(venus.house, 3);
    }

    #[test]
    fn unknown_bodies_are_skipped() {
        let chart = BirthChart::from_raw(&[raw("Lilith", "Leo", 3.0, None), raw("Sun", "Leo", 3.0, None)]);
        assert_eq!(chart.placements.len(), 1);
    }

    #[test]
    fn sign_attributes() {
        assert_eq!(Sign::Gemini.element(), Element::Air);
        assert_eq!(Sign::Scorpio.modality(), Modality::Fixed);
        assert_eq!(Sign::Libra.opposite(), Sign::Aries);
        assert_eq!(Sign::from_longitude(359.9), Sign::Pisces);
    }

    #[test]
    fn exact_aspect_prefers_tightest_orb() {
        let (kind, orb) = AspectKind::between(10.0, 131.0).unwrap();
        assert_eq!(kind, AspectKind::Trine);
        assert!((orb - 1.0).abs() < 1e-9);
        assert!(AspectKind::between(0.0, 40.0).is_none());
    }

    #[test]
    fn whole_sign_aspects() {
        assert_eq!(AspectKind::between_signs(Sign::Aries, Sign::Leo), Some(AspectKind::Trine));
        assert_eq!(AspectKind::between_signs(Sign::Aries, Sign::Taurus), None);
    }
}
