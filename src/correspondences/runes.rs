use serde::Serialize;

use crate::models::Element;

#[derive(Debug, Serialize)]
pub struct Rune {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub meaning: &'static str,
    pub keywords: &'static [&'static str],
    pub magical_uses: &'static [&'static str],
}

macro_rules! rune {
    ($name:expr, $sym:expr, $el:ident, $meaning:expr, [$($kw:expr),*], [$($use:expr),*]) => {
        Rune {
            name: $name,
            symbol: $sym,
            element: Element::$el,
            meaning: $meaning,
            keywords: &[$($kw),*],
            magical_uses: &[$($use),*],
        }
    };
}

/// The Elder Futhark in traditional order.
pub static ELDER_FUTHARK: &[Rune] = &[
    rune!("Fehu", "ᚠ", Fire, "Wealth earned and shared", ["wealth", "abundance"], ["prosperity charms", "business success"]),
    rune!("Uruz", "ᚢ", Earth, "Raw strength and vitality", ["strength", "health"], ["healing", "endurance"]),
    rune!("Thurisaz", "ᚦ", Fire, "Defensive force and a threshold", ["protection", "conflict"], ["warding", "breaking obstacles"]),
    rune!("Ansuz", "ᚨ", Air, "Divine breath and inspired speech", ["communication", "wisdom"], ["eloquence", "divination"]),
    rune!("Raidho", "ᚱ", Air, "The journey and right rhythm", ["travel", "order"], ["safe travel", "timing"]),
    rune!("Kenaz", "ᚲ", Fire, "The torch of knowledge and craft", ["clarity", "creativity"], ["illumination", "creative work"]),
    rune!("Gebo", "ᚷ", Air, "A gift that binds in exchange", ["partnership", "generosity"], ["love", "contracts"]),
    rune!("Wunjo", "ᚹ", Earth, "Joy and belonging", ["joy", "harmony"], ["happiness", "group harmony"]),
    rune!("Hagalaz", "ᚺ", Water, "Hail: disruption that clears", ["disruption", "change"], ["breaking patterns", "release"]),
    rune!("Nauthiz", "ᚾ", Fire, "Need, constraint and resilience", ["necessity", "endurance"], ["patience", "manifesting needs"]),
    rune!("Isa", "ᛁ", Water, "Ice: stillness and pause", ["stillness", "focus"], ["freezing situations", "concentration"]),
    rune!("Jera", "ᛃ", Earth, "Harvest after patient effort", ["harvest", "cycles"], ["reward", "good timing"]),
    rune!("Eihwaz", "ᛇ", Earth, "The yew: endurance through change", ["transformation", "resilience"], ["protection", "spirit work"]),
    rune!("Perthro", "ᛈ", Water, "The lot cup of fate", ["mystery", "chance"], ["divination", "luck"]),
    rune!("Algiz", "ᛉ", Air, "Protection and higher connection", ["protection", "sanctuary"], ["shielding", "spiritual connection"]),
    rune!("Sowilo", "ᛊ", Fire, "The sun's victory", ["success", "vitality"], ["healing", "victory"]),
    rune!("Tiwaz", "ᛏ", Air, "Just sacrifice and courage", ["justice", "courage"], ["legal matters", "victory"]),
    rune!("Berkano", "ᛒ", Earth, "Birch: birth and growth", ["growth", "fertility"], ["new beginnings", "nurture"]),
    rune!("Ehwaz", "ᛖ", Earth, "The horse: trust and progress", ["partnership", "movement"], ["teamwork", "progress"]),
    rune!("Mannaz", "ᛗ", Air, "The self among others", ["humanity", "self"], ["self-knowledge", "cooperation"]),
    rune!("Laguz", "ᛚ", Water, "Water and the flow of intuition", ["intuition", "flow"], ["psychic work", "emotional healing"]),
    rune!("Ingwaz", "ᛜ", Earth, "Seed and gestation", ["potential", "completion"], ["fertility", "sealing work"]),
    rune!("Dagaz", "ᛞ", Fire, "Daybreak and breakthrough", ["awakening", "breakthrough"], ["transformation", "clarity"]),
    rune!("Othala", "ᛟ", Earth, "Inheritance and home", ["heritage", "home"], ["ancestral work", "protecting property"]),
];

pub fn by_name(name: &str) -> Option<&'static Rune> {
    ELDER_FUTHARK
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
}

pub fn by_element(element: Element) -> impl Iterator<Item = &'static Rune> {
    ELDER_FUTHARK.iter().filter(move |r| r.element == element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn futhark_is_complete() {
        assert_eq!(ELDER_FUTHARK.len(), 24);
        assert_eq!(by_name("fehu").map(|r| r.symbol), Some("ᚠ"));
        assert!(by_element(Element::Water).count() >= 3);
    }
}
