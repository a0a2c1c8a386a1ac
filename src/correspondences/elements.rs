use serde::Serialize;

use crate::models::Element;

#[derive(Debug, Serialize)]
pub struct ElementCorrespondence {
    pub element: Element,
    pub direction: &'static str,
    pub qualities: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub herbs: &'static [&'static str],
}

pub static ELEMENTS: &[ElementCorrespondence] = &[
    ElementCorrespondence {
        element: Element::Fire,
        direction: "South",
        qualities: &["Passion", "Courage", "Transformation"],
        colors: &["Red", "Orange", "Gold"],
        herbs: &["Cinnamon", "Basil", "Bay"],
    },
    ElementCorrespondence {
        element: Element::Earth,
        direction: "North",
        qualities: &["Stability", "Abundance", "Grounding"],
        colors: &["Green", "Brown", "Black"],
        herbs: &["Patchouli", "Sage", "Vetiver"],
    },
    ElementCorrespondence {
        element: Element::Air,
        direction: "East",
        qualities: &["Intellect", "Communication", "Freedom"],
        colors: &["Yellow", "White", "Lavender"],
        herbs: &["Lavender", "Peppermint", "Lemongrass"],
    },
    ElementCorrespondence {
        element: Element::Water,
        direction: "West",
        qualities: &["Emotion", "Intuition", "Healing"],
        colors: &["Blue", "Silver", "Sea Green"],
        herbs: &["Jasmine", "Chamomile", "Mugwort"],
    },
];

pub fn for_element(element: Element) -> &'static ElementCorrespondence {
    match element {
        Element::Fire => &ELEMENTS[0],
        Element::Earth => &ELEMENTS[1],
        Element::Air => &ELEMENTS[2],
        Element::Water => &ELEMENTS[3],
    }
}

pub static COLORS: &[(&str, &str)] = &[
    ("Red", "passion and courage"),
    ("Orange", "creativity and success"),
    ("Gold", "victory and solar power"),
    ("Green", "growth and prosperity"),
    ("Brown", "stability and home"),
    ("Black", "protection and banishing"),
    ("Yellow", "intellect and joy"),
    ("White", "purity and all purposes"),
    ("Lavender", "peace and intuition"),
    ("Blue", "calm and truth"),
    ("Silver", "lunar and psychic work"),
    ("Sea Green", "emotional healing"),
    ("Pink", "love and friendship"),
    ("Purple", "spiritual power"),
];

pub fn color_meaning(color: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map(|(_, meaning)| *meaning)
}

pub static HERBS: &[(&str, &str)] = &[
    ("Cinnamon", "success and speed"),
    ("Basil", "prosperity and protection"),
    ("Bay", "wishes and victory"),
    ("Patchouli", "money and grounding"),
    ("Sage", "cleansing and wisdom"),
    ("Vetiver", "stability and calm"),
    ("Lavender", "peace and purification"),
    ("Peppermint", "clarity and renewal"),
    ("Lemongrass", "opening paths"),
    ("Jasmine", "love and dreams"),
    ("Chamomile", "calm and luck"),
    ("Mugwort", "dreams and divination"),
];

pub fn herb_property(herb: &str) -> Option<&'static str> {
    HERBS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(herb))
        .map(|(_, property)| *property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_color_and_herb_has_a_meaning() {
        for e in ELEMENTS {
            assert!(e.colors.iter().all(|c| color_meaning(c).is_some()), "{:?}", e.element);
            assert!(e.herbs.iter().all(|h| herb_property(h).is_some()), "{:?}", e.element);
        }
        assert_eq!(for_element(Element::Water).direction, "West");
    }
}
