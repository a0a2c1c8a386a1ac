use serde::Serialize;

use crate::models::{Element, Sign};

#[derive(Debug, Serialize)]
pub struct WitchArchetype {
    pub name: &'static str,
    pub description: &'static str,
    pub elements: &'static [Element],
    pub zodiac_signs: &'static [Sign],
    pub practices: &'static [&'static str],
    pub tools: &'static [&'static str],
}

pub static WITCH_ARCHETYPES: &[WitchArchetype] = &[
    WitchArchetype {
        name: "Green Witch",
        description: "Works with plants, herbs and the living land",
        elements: &[Element::Earth],
        zodiac_signs: &[Sign::Taurus, Sign::Virgo],
        practices: &["Herbalism", "Gardening magic", "Seasonal rites"],
        tools: &["Mortar and pestle", "Dried herbs"],
    },
    WitchArchetype {
        name: "Sea Witch",
        description: "Draws power from water, tides and the moon",
        elements: &[Element::Water],
        zodiac_signs: &[Sign::Cancer, Sign::Pisces, Sign::Scorpio],
        practices: &["Tide magic", "Shell divination", "Moon water"],
        tools: &["Sea salt", "Shells"],
    },
    WitchArchetype {
        name: "Cosmic Witch",
        description: "Times spells by the planets and the stars",
        elements: &[Element::Air, Element::Fire],
        zodiac_signs: &[Sign::Aquarius, Sign::Sagittarius],
        practices: &["Astrological timing", "Planetary magic", "Star gazing"],
        tools: &["Ephemeris", "Star charts"],
    },
    WitchArchetype {
        name: "Kitchen Witch",
        description: "Brings magic to hearth, home and food",
        elements: &[Element::Earth, Element::Fire],
        zodiac_signs: &[Sign::Cancer, Sign::Taurus],
        practices: &["Spell cooking", "Home blessings", "Tea magic"],
        tools: &["Wooden spoon", "Cast iron"],
    },
    WitchArchetype {
        name: "Hedge Witch",
        description: "Walks between worlds through trance and spirit work",
        elements: &[Element::Air, Element::Water],
        zodiac_signs: &[Sign::Pisces, Sign::Scorpio, Sign::Gemini],
        practices: &["Trance work", "Spirit communication", "Dream travel"],
        tools: &["Besom", "Flying ointment"],
    },
    WitchArchetype {
        name: "Fire Witch",
        description: "Works with candle, flame and transformation",
        elements: &[Element::Fire],
        zodiac_signs: &[Sign::Aries, Sign::Leo],
        practices: &["Candle magic", "Fire scrying", "Burning releases"],
        tools: &["Candles", "Cauldron"],
    },
    WitchArchetype {
        name: "Crystal Witch",
        description: "Channels the energy of stones and grids",
        elements: &[Element::Earth, Element::Water],
        zodiac_signs: &[Sign::Capricorn, Sign::Libra],
        practices: &["Crystal grids", "Gem elixirs", "Stone charging"],
        tools: &["Crystal collection", "Grid cloth"],
    },
];

#[derive(Debug, Serialize)]
pub struct DivinationMethod {
    pub method: &'static str,
    pub description: &'static str,
    pub best_for: &'static [&'static str],
    pub how_to: &'static [&'static str],
}

pub static DIVINATION_METHODS: &[DivinationMethod] = &[
    DivinationMethod {
        method: "Tarot",
        description: "Symbolic card system for deep insight",
        best_for: &["Decision-making", "Understanding patterns", "Spiritual guidance"],
        how_to: &["Pull a daily card", "Three-card spread", "Celtic Cross for deep questions"],
    },
    DivinationMethod {
        method: "Water Scrying",
        description: "Gazing into water to receive visions",
        best_for: &["Accessing the subconscious", "Psychic visions"],
        how_to: &["Fill a black bowl with water", "Gaze softly and receive images"],
    },
    DivinationMethod {
        method: "Rune Casting",
        description: "Norse symbols for practical wisdom",
        best_for: &["Grounded guidance", "Practical decisions"],
        how_to: &["Draw a single rune", "Three-rune spread"],
    },
    DivinationMethod {
        method: "Pendulum",
        description: "A tool for yes/no questions and energy detection",
        best_for: &["Quick answers", "Chakra balancing"],
        how_to: &["Hold the pendulum steady", "Ask clear yes/no questions"],
    },
    DivinationMethod {
        method: "Dream Interpretation",
        description: "Working with subconscious messages during sleep",
        best_for: &["Processing emotions", "Receiving guidance"],
        how_to: &["Keep a dream journal", "Record immediately upon waking"],
    },
];

pub fn divination(method: &str) -> Option<&'static DivinationMethod> {
    DIVINATION_METHODS.iter().find(|d| d.method == method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_archetype_has_an_element() {
        assert!(WITCH_ARCHETYPES.iter().all(|w| !w.elements.is_empty()));
        assert!(divination("Pendulum").is_some());
        assert!(divination("Tea Leaves").is_none());
    }
}
