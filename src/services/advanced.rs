//! Table-driven recommenders for the opt-in domains: runes, lunar nodes,
//! synastry, decans, witch archetypes, divination and the personalized
//! ritual. Each one returns nothing rather than guessing when its chart
//! input is missing.

use crate::correspondences::planetary_days::PlanetaryDay;
use crate::correspondences::signs::{self, DecanInfo};
use crate::correspondences::witchcraft::{self, WITCH_ARCHETYPES};
use crate::correspondences::{crystals, elements, lunar_nodes, runes, Crystal, DivinationMethod, Rune, WitchArchetype};
use crate::models::{
    BirthChart, Body, Element, LunarNodeGuidance, MoonState, NodeDetail, Priority, Recommendation,
    RitualRecommendation, RitualTiming, Sign, SynastryInsight,
};

const MAX_RUNES: usize = 3;
const MAX_WITCH_TYPES: usize = 3;
const MAX_DIVINATION: usize = 3;
/// More natal aspects than this marks a planet as strong.
const STRONG_ASPECT_COUNT: usize = 2;

/// The chart's leading element, falling back to the natal Moon, then the sky's Moon.
pub fn primary_element(chart: Option<&BirthChart>, moon: &MoonState) -> Element {
    chart
        .and_then(|c| {
            c.dominant_elements()
                .first()
                .copied()
                .or_else(|| c.moon().map(|m| m.sign.element()))
        })
        .unwrap_or_else(|| moon.sign.element())
}

pub fn runes(specific: Option<&str>, element: Element) -> Vec<Recommendation<Rune>> {
    if let Some(rune) = specific.and_then(runes::by_name) {
        return vec![Recommendation::new(
            rune,
            format!("You asked about {}", rune.name),
            Priority::High,
        )];
    }
    runes::by_element(element)
        .take(MAX_RUNES)
        .map(|r| {
            Recommendation::new(
                r,
                format!("Balances {} element energy", element.name()),
                Priority::Medium,
            )
        })
        .collect()
}

fn opposite_house(house: u8) -> u8 {
    (house + 5) % 12 + 1
}

pub fn lunar_nodes(chart: &BirthChart) -> Option<LunarNodeGuidance> {
    let north = chart.find(Body::NorthNode)?;
    let south_sign = north.sign.opposite();
    let (lesson, area) = lunar_nodes::north_node(north.sign);
    let (pattern, release) = lunar_nodes::south_node(south_sign);
    Some(LunarNodeGuidance {
        north_node: NodeDetail {
            sign: north.sign,
            house: Some(north.house),
            lesson,
            area,
        },
        south_node: NodeDetail {
            sign: south_sign,
            house: Some(opposite_house(north.house)),
            lesson: pattern,
            area: release,
        },
        axis: format!(
            "Growing from {} comfort toward {} purpose",
            south_sign.name(),
            north.sign.name()
        ),
    })
}

fn first_three(items: &'static [&'static str]) -> &'static [&'static str] {
    &items[..items.len().min(3)]
}

pub fn synastry(chart: &BirthChart, partner: Option<Sign>) -> Option<SynastryInsight> {
    let sun = chart.sun()?.sign;
    let info = signs::info(sun);

    let Some(partner) = partner else {
        return Some(SynastryInsight {
            sun_sign: sun,
            partner_sign: None,
            compatibility: None,
            strengths: first_three(info.strengths),
            challenges: first_three(info.weaknesses),
            element_dynamic: format!(
                "You thrive with partners who complement your {} energy",
                sun.element().name()
            ),
            recommended_crystals: crystals::by_zodiac_sign(sun).take(3).map(|c| c.name).collect(),
            relationship_rituals: vec![
                "New Moon intention setting for the relationship",
                "Rose Quartz crystal grid for love",
                "Venus day (Friday) love spell",
            ],
        });
    };

    let compatibility = signs::compatibility(sun, partner);
    let mut recommended: Vec<&'static str> = Vec::new();
    for c in crystals::by_zodiac_sign(sun).take(2).chain(crystals::by_zodiac_sign(partner).take(2)) {
        if !recommended.contains(&c.name) {
            recommended.push(c.name);
        }
    }

    Some(SynastryInsight {
        sun_sign: sun,
        partner_sign: Some(partner),
        strengths: first_three(info.strengths),
        challenges: first_three(info.weaknesses),
        element_dynamic: compatibility.element_dynamic.to_string(),
        compatibility: Some(compatibility),
        recommended_crystals: recommended,
        relationship_rituals: vec![
            "Couple's New Moon intention ritual",
            "Crystal grid with both partners' stones",
            "Venus retrograde relationship review",
        ],
    })
}

pub fn sun_decan(chart: &BirthChart) -> Option<DecanInfo> {
    let sun = chart.sun()?;
    signs::decan(sun.sign, sun.degree)
}

/// Archetypes scored +2 per dominant element shared and +1 for a Sun or Moon
/// sign match, best first.
pub fn witch_types(chart: &BirthChart) -> Vec<Recommendation<WitchArchetype>> {
    let dominant = chart.dominant_elements();
    let sun = chart.sun().map(|p| p.sign);
    let moon = chart.moon().map(|p| p.sign);

    let mut scored: Vec<(u32, &'static WitchArchetype, Vec<String>)> = WITCH_ARCHETYPES
        .iter()
        .filter_map(|archetype| {
            let mut score = 0;
            let mut reasons = Vec::new();
            for element in &dominant {
                if archetype.elements.contains(element) {
                    score += 2;
                    reasons.push(format!("{} element alignment", element.name()));
                }
            }
            let sign_match = [sun, moon]
                .iter()
                .flatten()
                .any(|s| archetype.zodiac_signs.contains(s));
            if sign_match {
                score += 1;
                reasons.push("zodiac sign resonance".to_string());
            }
            (score > 0).then_some((score, archetype, reasons))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(MAX_WITCH_TYPES)
        .map(|(score, archetype, reasons)| {
            let priority = match score {
                s if s >= 3 => Priority::High,
                2 => Priority::Medium,
                _ => Priority::Low,
            };
            Recommendation::new(archetype, reasons.join(", "), priority)
        })
        .collect()
}

pub fn divination(chart: Option<&BirthChart>) -> Vec<Recommendation<DivinationMethod>> {
    let strong = |body: Body| chart.map(|c| c.aspect_count(body) > STRONG_ASPECT_COUNT).unwrap_or(false);
    let neptune = strong(Body::Neptune);
    let moon = strong(Body::Moon);
    let mercury = strong(Body::Mercury);
    let element = chart.and_then(|c| c.dominant_elements().first().copied());

    let mut picks: Vec<(&str, &str)> = Vec::new();
    if mercury || element == Some(Element::Air) {
        picks.push((
            "Tarot",
            if mercury {
                "Mercury energy enhances intuitive communication"
            } else {
                "Air element supports mental clarity"
            },
        ));
    }
    if neptune || element == Some(Element::Water) {
        picks.push((
            "Water Scrying",
            if neptune {
                "Neptune enhances psychic receptivity"
            } else {
                "Water element deepens intuitive flow"
            },
        ));
    }
    if element == Some(Element::Earth) {
        picks.push(("Rune Casting", "Earth element grounds divination in practical reality"));
    }
    if moon {
        picks.push(("Pendulum", "Moon energy enhances receptivity to subtle vibrations"));
    }
    if neptune {
        picks.push((
            "Dream Interpretation",
            "Neptune dissolves the boundary between conscious and unconscious",
        ));
    }

    picks
        .into_iter()
        .filter_map(|(method, reason)| {
            witchcraft::divination(method).map(|m| Recommendation::new(m, reason, Priority::Medium))
        })
        .take(MAX_DIVINATION)
        .collect()
}

/// A ritual assembled from element, color, herb and day correspondences.
pub fn ritual(
    element: Element,
    intention: &str,
    moon: &MoonState,
    day: &PlanetaryDay,
    crystals: &[&'static Crystal],
) -> RitualRecommendation {
    let data = elements::for_element(element);
    let color_meanings: Vec<&'static str> = data
        .colors
        .iter()
        .map(|c| elements::color_meaning(c).unwrap_or(*c))
        .collect();
    let herbs = first_three(data.herbs);
    let herb_properties: Vec<&'static str> = herbs.iter().filter_map(|h| elements::herb_property(h)).collect();

    let steps = vec![
        format!("Cleanse your space with {} incense", herbs.first().unwrap_or(&"sage")),
        format!(
            "Set up your altar with a {} candle ({})",
            data.colors.first().unwrap_or(&"white").to_lowercase(),
            color_meanings.first().unwrap_or(&"purity").to_lowercase()
        ),
        format!(
            "Place {} in the {}",
            crystals.first().map(|c| c.name).unwrap_or("a crystal"),
            data.direction
        ),
        format!("Call upon {} element energy", element.name()),
        format!("State your intention: \"{}\"", intention),
        format!(
            "Meditate on {} qualities: {}",
            element.name(),
            data.qualities.iter().take(2).copied().collect::<Vec<_>>().join(", ")
        ),
        "Close the ritual with gratitude".to_string(),
    ];

    RitualRecommendation {
        purpose: intention.to_string(),
        timing: RitualTiming {
            day: day.day,
            moon_phase: moon.phase.name(),
            planetary_hour: day.planetary_hours.first().copied(),
        },
        element,
        element_qualities: data.qualities,
        colors: data.colors,
        color_meanings,
        herbs,
        herb_properties,
        crystals: crystals.iter().take(3).map(|c| c.name).collect(),
        steps,
    }
}
