use serde::Serialize;

use crate::models::{AspectKind, Body, Sign};

#[derive(Debug, Serialize)]
pub struct Crystal {
    pub id: &'static str,
    pub name: &'static str,
    pub properties: &'static [&'static str],
    pub chakras: &'static [&'static str],
    pub elements: &'static [&'static str],
    pub zodiac_signs: &'static [Sign],
    pub moon_phases: &'static [&'static str],
    pub planets: &'static [Body],
    pub aspects: &'static [AspectKind],
    pub intentions: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub description: &'static str,
    pub spellwork: &'static str,
    pub healing: &'static str,
    pub manifestation: &'static str,
}

const ALL_PHASES: &[&str] = &["New Moon", "Waxing Moon", "Full Moon", "Waning Moon"];

pub static CRYSTALS: &[Crystal] = &[
    Crystal {
        id: "amethyst",
        name: "Amethyst",
        properties: &["intuition", "spiritual growth", "calming", "protection", "clarity"],
        chakras: &["Crown", "Third Eye"],
        elements: &["Air", "Water"],
        zodiac_signs: &[Sign::Pisces, Sign::Aquarius, Sign::Sagittarius, Sign::Capricorn],
        moon_phases: &["Full Moon", "New Moon", "Waning Moon"],
        planets: &[Body::Neptune, Body::Jupiter, Body::Moon],
        aspects: &[AspectKind::Square],
        intentions: &["spiritual awakening", "meditation", "psychic protection", "stress relief", "sleep"],
        colors: &["Purple", "Violet"],
        description: "A spiritual stone that opens the third eye and connects you to higher wisdom",
        spellwork: "Use in protection spells, dream work and psychic development rituals",
        healing: "Place on the third eye or crown for spiritual healing and mental clarity",
        manifestation: "Helps manifest spiritual goals and higher purpose alignment",
    },
    Crystal {
        id: "rose-quartz",
        name: "Rose Quartz",
        properties: &["love", "emotional healing", "self-compassion", "forgiveness"],
        chakras: &["Heart"],
        elements: &["Water", "Earth"],
        zodiac_signs: &[Sign::Taurus, Sign::Libra, Sign::Cancer, Sign::Pisces],
        moon_phases: &["Full Moon", "Waxing Moon", "New Moon"],
        planets: &[Body::Venus, Body::Moon],
        aspects: &[AspectKind::Trine, AspectKind::Opposition],
        intentions: &["self-love", "attracting love", "healing relationships", "emotional balance", "compassion"],
        colors: &["Pink"],
        description: "The stone of unconditional love that soothes emotional wounds",
        spellwork: "Essential for love spells, self-love rituals and relationship healing",
        healing: "Use for emotional healing and heart chakra balancing",
        manifestation: "Helps manifest loving relationships and self-acceptance",
    },
    Crystal {
        id: "clear-quartz",
        name: "Clear Quartz",
        properties: &["amplification", "clarity", "universal healing", "energy enhancement"],
        chakras: &["Crown"],
        elements: &["Fire", "Earth", "Air", "Water"],
        zodiac_signs: &Sign::ALL,
        moon_phases: ALL_PHASES,
        planets: &[Body::Sun, Body::Moon],
        aspects: &[AspectKind::Conjunction],
        intentions: &["amplification", "clarity", "healing", "manifestation", "focus"],
        colors: &["Clear", "White"],
        description: "The master healer that amplifies energy and intention",
        spellwork: "Amplifies intentions and other crystal energies in any working",
        healing: "Can be used for any healing purpose and chakra work",
        manifestation: "Programs easily for any manifestation goal",
    },
    Crystal {
        id: "black-tourmaline",
        name: "Black Tourmaline",
        properties: &["protection", "grounding", "negativity clearing", "psychic shield"],
        chakras: &["Root"],
        elements: &["Earth"],
        zodiac_signs: &[Sign::Scorpio, Sign::Capricorn, Sign::Virgo],
        moon_phases: &["Waning Moon", "New Moon"],
        planets: &[Body::Saturn, Body::Mars, Body::Pluto],
        aspects: &[AspectKind::Square, AspectKind::Opposition],
        intentions: &["psychic protection", "grounding", "negativity removal", "energetic boundaries"],
        colors: &["Black"],
        description: "A protection stone that creates an energetic shield and grounds excess energy",
        spellwork: "Essential for protection spells, banishing rituals and boundary work",
        healing: "Use for energetic protection and grounding scattered energy",
        manifestation: "Grounds manifestation work and protects it from interference",
    },
    Crystal {
        id: "citrine",
        name: "Citrine",
        properties: &["abundance", "confidence", "joy", "creativity"],
        chakras: &["Solar Plexus", "Sacral"],
        elements: &["Fire"],
        zodiac_signs: &[Sign::Leo, Sign::Aries, Sign::Gemini, Sign::Libra],
        moon_phases: &["Waxing Moon", "New Moon"],
        planets: &[Body::Sun, Body::Jupiter],
        aspects: &[AspectKind::Trine, AspectKind::Sextile],
        intentions: &["prosperity", "abundance", "confidence", "success", "creativity"],
        colors: &["Yellow", "Gold"],
        description: "The merchant's stone, radiating solar warmth and abundance",
        spellwork: "Use in prosperity and success spells",
        healing: "Lifts mood and restores self-worth",
        manifestation: "Attracts wealth and opportunity",
    },
    Crystal {
        id: "moonstone",
        name: "Moonstone",
        properties: &["intuition", "new beginnings", "emotional balance", "feminine energy"],
        chakras: &["Sacral", "Third Eye"],
        elements: &["Water"],
        zodiac_signs: &[Sign::Cancer, Sign::Libra, Sign::Scorpio],
        moon_phases: ALL_PHASES,
        planets: &[Body::Moon],
        aspects: &[AspectKind::Opposition],
        intentions: &["intuition", "new beginnings", "fertility", "emotional balance"],
        colors: &["White", "Peach"],
        description: "A lunar stone of cycles, intuition and gentle beginnings",
        spellwork: "Use in moon rituals and intuition work",
        healing: "Soothes emotional tides and hormonal cycles",
        manifestation: "Supports beginnings planted at the new moon",
    },
    Crystal {
        id: "labradorite",
        name: "Labradorite",
        properties: &["transformation", "magic", "intuition", "protection"],
        chakras: &["Third Eye", "Throat"],
        elements: &["Water", "Air"],
        zodiac_signs: &[Sign::Scorpio, Sign::Sagittarius, Sign::Leo],
        moon_phases: &["New Moon", "Full Moon"],
        planets: &[Body::Uranus, Body::Neptune, Body::Pluto],
        aspects: &[AspectKind::Conjunction, AspectKind::Square],
        intentions: &["transformation", "psychic ability", "change", "protection"],
        colors: &["Grey", "Blue", "Green"],
        description: "A stone of magic that reveals hidden light during change",
        spellwork: "Use in transformation work and eclipse rituals",
        healing: "Shields the aura while you move through change",
        manifestation: "Manifests change and awakens latent gifts",
    },
    Crystal {
        id: "carnelian",
        name: "Carnelian",
        properties: &["courage", "motivation", "vitality", "creativity"],
        chakras: &["Sacral"],
        elements: &["Fire"],
        zodiac_signs: &[Sign::Aries, Sign::Leo, Sign::Virgo],
        moon_phases: &["Waxing Moon", "Full Moon"],
        planets: &[Body::Mars, Body::Sun],
        aspects: &[AspectKind::Square, AspectKind::Conjunction],
        intentions: &["courage", "motivation", "creativity", "action"],
        colors: &["Orange", "Red"],
        description: "A fiery stone of courage and creative drive",
        spellwork: "Use in courage, success and creativity spells",
        healing: "Restores vitality and motivation",
        manifestation: "Fuels the action that manifestation needs",
    },
    Crystal {
        id: "fluorite",
        name: "Fluorite",
        properties: &["clarity", "focus", "mental order", "learning", "reflection"],
        chakras: &["Third Eye", "Throat"],
        elements: &["Air"],
        zodiac_signs: &[Sign::Gemini, Sign::Virgo, Sign::Pisces, Sign::Capricorn],
        moon_phases: &["Waning Moon", "Waxing Moon"],
        planets: &[Body::Mercury, Body::Neptune],
        aspects: &[AspectKind::Square, AspectKind::Opposition],
        intentions: &["focus", "study", "clarity", "decision making", "communication"],
        colors: &["Green", "Purple"],
        description: "A stone of mental order that untangles confusion",
        spellwork: "Use in study charms and clarity workings",
        healing: "Clears mental fog and calms scattered thought",
        manifestation: "Brings structure to plans and ideas",
    },
    Crystal {
        id: "blue-lace-agate",
        name: "Blue Lace Agate",
        properties: &["calm communication", "patience", "clarity", "soothing"],
        chakras: &["Throat"],
        elements: &["Air", "Water"],
        zodiac_signs: &[Sign::Gemini, Sign::Pisces, Sign::Aquarius],
        moon_phases: &["Waning Moon", "Full Moon"],
        planets: &[Body::Mercury, Body::Neptune],
        aspects: &[AspectKind::Opposition, AspectKind::Sextile],
        intentions: &["communication", "calm", "peace", "self-expression"],
        colors: &["Blue"],
        description: "A gentle stone of patient, truthful speech",
        spellwork: "Use in communication and peace spells",
        healing: "Eases tension in the throat and tight words",
        manifestation: "Helps speak intentions clearly",
    },
    Crystal {
        id: "hematite",
        name: "Hematite",
        properties: &["grounding", "focus", "patience", "protection"],
        chakras: &["Root"],
        elements: &["Earth", "Fire"],
        zodiac_signs: &[Sign::Aries, Sign::Aquarius, Sign::Capricorn],
        moon_phases: &["Waning Moon"],
        planets: &[Body::Saturn, Body::Mars],
        aspects: &[AspectKind::Square, AspectKind::Opposition],
        intentions: &["grounding", "focus", "stability", "boundaries"],
        colors: &["Silver", "Black"],
        description: "A heavy grounding stone that steadies scattered energy",
        spellwork: "Use in grounding and binding work",
        healing: "Anchors anxious or overstimulated energy",
        manifestation: "Keeps goals practical and grounded",
    },
    Crystal {
        id: "selenite",
        name: "Selenite",
        properties: &["cleansing", "peace", "clarity", "higher guidance"],
        chakras: &["Crown"],
        elements: &["Air", "Water"],
        zodiac_signs: &[Sign::Taurus, Sign::Cancer],
        moon_phases: &["Full Moon", "Waxing Moon"],
        planets: &[Body::Moon],
        aspects: &[AspectKind::Trine],
        intentions: &["cleansing", "peace", "meditation", "charging crystals"],
        colors: &["White"],
        description: "A luminous stone that clears and charges other crystals",
        spellwork: "Use to cleanse altars and tools",
        healing: "Clears stagnant energy from the aura",
        manifestation: "Opens a clear channel for intentions",
    },
    Crystal {
        id: "lapis-lazuli",
        name: "Lapis Lazuli",
        properties: &["truth", "wisdom", "communication", "insight"],
        chakras: &["Throat", "Third Eye"],
        elements: &["Water", "Air"],
        zodiac_signs: &[Sign::Sagittarius, Sign::Libra, Sign::Virgo],
        moon_phases: &["Full Moon", "Waxing Moon"],
        planets: &[Body::Jupiter, Body::Venus, Body::Mercury],
        aspects: &[AspectKind::Trine, AspectKind::Conjunction],
        intentions: &["wisdom", "truth", "communication", "study"],
        colors: &["Blue", "Gold"],
        description: "A royal stone of wisdom and honest expression",
        spellwork: "Use in truth-seeking and wisdom workings",
        healing: "Releases stress held in unspoken words",
        manifestation: "Aligns goals with inner truth",
    },
    Crystal {
        id: "smoky-quartz",
        name: "Smoky Quartz",
        properties: &["grounding", "release", "detox", "calm"],
        chakras: &["Root", "Solar Plexus"],
        elements: &["Earth"],
        zodiac_signs: &[Sign::Capricorn, Sign::Scorpio, Sign::Sagittarius],
        moon_phases: &["Waning Moon"],
        planets: &[Body::Saturn, Body::Pluto],
        aspects: &[AspectKind::Opposition, AspectKind::Square],
        intentions: &["release", "letting go", "grounding", "stress relief"],
        colors: &["Brown", "Grey"],
        description: "A grounding stone that transmutes heavy energy",
        spellwork: "Use in release and banishing work at the waning moon",
        healing: "Draws off stress and negativity",
        manifestation: "Clears what blocks new growth",
    },
    Crystal {
        id: "green-aventurine",
        name: "Green Aventurine",
        properties: &["luck", "opportunity", "growth", "optimism"],
        chakras: &["Heart"],
        elements: &["Earth"],
        zodiac_signs: &[Sign::Taurus, Sign::Virgo, Sign::Libra],
        moon_phases: &["Waxing Moon", "New Moon"],
        planets: &[Body::Venus, Body::Jupiter, Body::Mercury],
        aspects: &[AspectKind::Sextile, AspectKind::Trine],
        intentions: &["luck", "prosperity", "opportunity", "career"],
        colors: &["Green"],
        description: "The stone of opportunity and good fortune",
        spellwork: "Use in luck and prosperity charms",
        healing: "Soothes the heart and restores optimism",
        manifestation: "Opens doors to new opportunity",
    },
    Crystal {
        id: "tigers-eye",
        name: "Tiger's Eye",
        properties: &["courage", "confidence", "discernment", "protection"],
        chakras: &["Solar Plexus"],
        elements: &["Fire", "Earth"],
        zodiac_signs: &[Sign::Leo, Sign::Capricorn],
        moon_phases: &["Waxing Moon", "Full Moon"],
        planets: &[Body::Sun, Body::Mars],
        aspects: &[AspectKind::Square, AspectKind::Conjunction],
        intentions: &["confidence", "courage", "decision making", "career"],
        colors: &["Gold", "Brown"],
        description: "A watchful stone of grounded confidence",
        spellwork: "Use in courage and success spells",
        healing: "Steadies fear and restores willpower",
        manifestation: "Supports bold, well-judged action",
    },
];

pub fn by_id(id: &str) -> Option<&'static Crystal> {
    CRYSTALS.iter().find(|c| c.id == id)
}

pub fn by_name(name: &str) -> Option<&'static Crystal> {
    CRYSTALS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn by_zodiac_sign(sign: Sign) -> impl Iterator<Item = &'static Crystal> {
    CRYSTALS.iter().filter(move |c| c.zodiac_signs.contains(&sign))
}

pub fn by_moon_phase(family: &'static str) -> impl Iterator<Item = &'static Crystal> {
    CRYSTALS.iter().filter(move |c| c.moon_phases.contains(&family))
}

pub fn by_planet(planet: Body) -> impl Iterator<Item = &'static Crystal> {
    CRYSTALS.iter().filter(move |c| c.planets.contains(&planet))
}

pub fn by_intention(intention: &str) -> impl Iterator<Item = &'static Crystal> {
    let needle = intention.trim().to_lowercase();
    CRYSTALS.iter().filter(move |c| {
        !needle.is_empty()
            && c.intentions
                .iter()
                .chain(c.properties.iter())
                .any(|i| i.to_lowercase().contains(&needle))
    })
}

/// Crystals supporting a transiting planet, best fit first.
pub fn by_transit(
    planet: Body,
    aspect: Option<AspectKind>,
    sign: Option<Sign>,
) -> Vec<&'static Crystal> {
    let mut scored: Vec<(&'static Crystal, u8)> = CRYSTALS
        .iter()
        .filter(|c| c.planets.contains(&planet))
        .map(|c| {
            let mut score = 2;
            if aspect.map(|a| c.aspects.contains(&a)).unwrap_or(false) {
                score += 1;
            }
            if sign.map(|s| c.zodiac_signs.contains(&s)).unwrap_or(false) {
                score += 1;
            }
            (c, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(c, _)| c).collect()
}
