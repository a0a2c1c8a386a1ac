use serde::Serialize;

use crate::models::{Body, Element, Sign};

#[derive(Debug, Serialize)]
pub struct SignInfo {
    pub sign: Sign,
    pub symbol: &'static str,
    pub keywords: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub description: &'static str,
}

pub static SIGNS: &[SignInfo] = &[
    SignInfo { sign: Sign::Aries, symbol: "♈", keywords: &["Bold", "Pioneering", "Direct"], strengths: &["Courage", "Enthusiasm", "Initiative"], weaknesses: &["Impatience", "Impulsiveness", "Temper"], description: "The cardinal fire sign that begins the zodiac with raw drive" },
    SignInfo { sign: Sign::Taurus, symbol: "♉", keywords: &["Steady", "Sensual", "Loyal"], strengths: &["Reliability", "Patience", "Devotion"], weaknesses: &["Stubbornness", "Possessiveness", "Inflexibility"], description: "The fixed earth sign of comfort, value and persistence" },
    SignInfo { sign: Sign::Gemini, symbol: "♊", keywords: &["Curious", "Witty", "Adaptable"], strengths: &["Communication", "Versatility", "Quick thinking"], weaknesses: &["Restlessness", "Inconsistency", "Nervousness"], description: "The mutable air sign of ideas, talk and connection" },
    SignInfo { sign: Sign::Cancer, symbol: "♋", keywords: &["Nurturing", "Protective", "Intuitive"], strengths: &["Loyalty", "Empathy", "Tenacity"], weaknesses: &["Moodiness", "Insecurity", "Clinginess"], description: "The cardinal water sign of home, family and feeling" },
    SignInfo { sign: Sign::Leo, symbol: "♌", keywords: &["Radiant", "Generous", "Creative"], strengths: &["Warmth", "Confidence", "Leadership"], weaknesses: &["Pride", "Stubbornness", "Need for attention"], description: "The fixed fire sign of heart, play and self-expression" },
    SignInfo { sign: Sign::Virgo, symbol: "♍", keywords: &["Precise", "Helpful", "Analytical"], strengths: &["Diligence", "Practicality", "Kindness"], weaknesses: &["Worry", "Criticism", "Perfectionism"], description: "The mutable earth sign of craft, health and service" },
    SignInfo { sign: Sign::Libra, symbol: "♎", keywords: &["Harmonious", "Fair", "Charming"], strengths: &["Diplomacy", "Grace", "Cooperation"], weaknesses: &["Indecision", "People-pleasing", "Avoidance"], description: "The cardinal air sign of balance, beauty and partnership" },
    SignInfo { sign: Sign::Scorpio, symbol: "♏", keywords: &["Intense", "Magnetic", "Transformative"], strengths: &["Resourcefulness", "Passion", "Loyalty"], weaknesses: &["Jealousy", "Secrecy", "Control"], description: "The fixed water sign of depth, intimacy and rebirth" },
    SignInfo { sign: Sign::Sagittarius, symbol: "♐", keywords: &["Adventurous", "Optimistic", "Philosophical"], strengths: &["Generosity", "Humor", "Idealism"], weaknesses: &["Impatience", "Tactlessness", "Overpromising"], description: "The mutable fire sign of meaning, travel and faith" },
    SignInfo { sign: Sign::Capricorn, symbol: "♑", keywords: &["Ambitious", "Disciplined", "Practical"], strengths: &["Responsibility", "Self-control", "Endurance"], weaknesses: &["Pessimism", "Rigidity", "Workaholism"], description: "The cardinal earth sign of structure and achievement" },
    SignInfo { sign: Sign::Aquarius, symbol: "♒", keywords: &["Inventive", "Independent", "Humanitarian"], strengths: &["Originality", "Vision", "Friendship"], weaknesses: &["Detachment", "Contrarianism", "Aloofness"], description: "The fixed air sign of community, ideals and innovation" },
    SignInfo { sign: Sign::Pisces, symbol: "♓", keywords: &["Compassionate", "Dreamy", "Artistic"], strengths: &["Empathy", "Imagination", "Intuition"], weaknesses: &["Escapism", "Over-sensitivity", "Vagueness"], description: "The mutable water sign of spirit, art and dissolving boundaries" },
];

pub fn info(sign: Sign) -> &'static SignInfo {
    &SIGNS[sign.index()]
}

#[derive(Debug, Clone, Serialize)]
pub struct Compatibility {
    pub first: Sign,
    pub second: Sign,
    pub score: u8,
    pub summary: String,
    pub element_dynamic: &'static str,
}

fn element_dynamic(a: Element, b: Element) -> &'static str {
    use Element::*;
    match (a, b) {
        (x, y) if x == y => "Shared element: instant understanding, though you may amplify each other's excesses",
        (Fire, Air) | (Air, Fire) => "Air feeds fire: inspiration and lively momentum",
        (Earth, Water) | (Water, Earth) => "Water nourishes earth: emotional security and steady growth",
        (Fire, Water) | (Water, Fire) => "Fire and water: passion and steam that need patience",
        (Fire, Earth) | (Earth, Fire) => "Fire and earth: drive meets caution; pace each other",
        (Air, Water) | (Water, Air) => "Air and water: head meets heart; translate feelings into words",
        _ => "Air and earth: ideas meet practicality; build a shared plan",
    }
}

/// Sun-sign compatibility by element and sign distance.
pub fn compatibility(first: Sign, second: Sign) -> Compatibility {
    let score = match first.distance_to(second) {
        0 => 80,
        4 | 8 => 90,
        2 | 10 => 80,
        6 => 70,
        3 | 9 => 55,
        _ => 60,
    };
    let summary = format!(
        "{} and {}: {}",
        first.name(),
        second.name(),
        match score {
            90 => "a natural, flowing match",
            80 => "an easy, supportive bond",
            70 => "magnetic opposites who complete each other",
            60 => "a growth-oriented pairing",
            _ => "a dynamic pairing that builds strength through friction",
        }
    );
    Compatibility {
        first,
        second,
        score,
        summary,
        element_dynamic: element_dynamic(first.element(), second.element()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecanInfo {
    pub sign: Sign,
    pub decan: u8,
    pub ruling_planet: Body,
    pub sub_ruler: Sign,
    pub degrees: String,
    pub interpretation: String,
}

/// Decan of a degree within a sign, sub-ruled by the signs of the same element.
pub fn decan(sign: Sign, degree: f64) -> Option<DecanInfo> {
    if !(0.0..30.0).contains(&degree) {
        return None;
    }
    let decan = (degree / 10.0).floor() as usize + 1;
    let sub_ruler = Sign::from_index(sign.index() + 4 * (decan - 1));
    let ordinal = match decan {
        1 => "1st",
        2 => "2nd",
        _ => "3rd",
    };
    Some(DecanInfo {
        sign,
        decan: decan as u8,
        ruling_planet: sign.ruler(),
        sub_ruler,
        degrees: format!("{}-{}°", decan * 10 - 10, decan * 10 - 1),
        interpretation: format!(
            "The {} decan of {} is sub-ruled by {}, adding {} flavoring to {} energy.",
            ordinal,
            sign.name(),
            sub_ruler.name(),
            sub_ruler.name(),
            sign.name()
        ),
    })
}
