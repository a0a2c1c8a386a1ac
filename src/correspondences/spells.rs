use serde::Serialize;

use crate::models::Body;

#[derive(Debug, Serialize)]
pub struct Spell {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub moon_phases: &'static [&'static str],
    pub planets: &'static [Body],
    pub time_of_day: Option<&'static str>,
    pub description: &'static str,
}

pub static SPELLS: &[Spell] = &[
    Spell {
        id: "mercury-clarity-charm",
        title: "Mercury Clarity Charm",
        category: "communication",
        moon_phases: &["Waning Moon", "New Moon"],
        planets: &[Body::Mercury],
        time_of_day: Some("Morning"),
        description: "A written charm to untangle miscommunication and review what was left unsaid",
    },
    Spell {
        id: "new-moon-intention-jar",
        title: "New Moon Intention Jar",
        category: "manifestation",
        moon_phases: &["New Moon"],
        planets: &[Body::Moon, Body::Jupiter],
        time_of_day: Some("Night"),
        description: "Seal written intentions in a jar with herbs to grow through the lunar cycle",
    },
    Spell {
        id: "full-moon-release",
        title: "Full Moon Release Ritual",
        category: "cleansing",
        moon_phases: &["Full Moon", "Waning Moon"],
        planets: &[Body::Moon, Body::Pluto],
        time_of_day: Some("Night"),
        description: "Burn what you are ready to release under the full moon's light",
    },
    Spell {
        id: "venus-self-love-bath",
        title: "Venus Self-Love Bath",
        category: "love",
        moon_phases: &["Waxing Moon", "Full Moon"],
        planets: &[Body::Venus],
        time_of_day: Some("Evening"),
        description: "A rose and salt bath to open the heart to self-compassion",
    },
    Spell {
        id: "saturn-boundary-knot",
        title: "Saturn Boundary Knot",
        category: "protection",
        moon_phases: &["Waning Moon"],
        planets: &[Body::Saturn],
        time_of_day: None,
        description: "Tie black cord in nine knots to set firm energetic boundaries",
    },
    Spell {
        id: "mars-courage-candle",
        title: "Mars Courage Candle",
        category: "courage",
        moon_phases: &["Waxing Moon"],
        planets: &[Body::Mars, Body::Sun],
        time_of_day: Some("Noon"),
        description: "Carve your goal into a red candle and let it burn down for momentum",
    },
    Spell {
        id: "jupiter-abundance-sachet",
        title: "Jupiter Abundance Sachet",
        category: "prosperity",
        moon_phases: &["Waxing Moon", "Full Moon"],
        planets: &[Body::Jupiter],
        time_of_day: Some("Morning"),
        description: "A green sachet of cinnamon, basil and citrine carried for opportunity",
    },
    Spell {
        id: "protective-salt-circle",
        title: "Protective Salt Circle",
        category: "protection",
        moon_phases: &["New Moon", "Waning Moon"],
        planets: &[Body::Mars, Body::Saturn],
        time_of_day: None,
        description: "Cast a salt circle and call the quarters to shield your space",
    },
    Spell {
        id: "neptune-dream-pillow",
        title: "Neptune Dream Pillow",
        category: "divination",
        moon_phases: &["Full Moon", "Waxing Moon"],
        planets: &[Body::Neptune, Body::Moon],
        time_of_day: Some("Bedtime"),
        description: "A mugwort and lavender pillow to invite prophetic dreams",
    },
    Spell {
        id: "eclipse-transformation-rite",
        title: "Eclipse Transformation Rite",
        category: "transformation",
        moon_phases: &["New Moon", "Full Moon"],
        planets: &[Body::Pluto, Body::Uranus],
        time_of_day: None,
        description: "A rite of rebirth to work with the reset energy around eclipses",
    },
    Spell {
        id: "healing-green-candle",
        title: "Healing Green Candle",
        category: "healing",
        moon_phases: &["Waxing Moon", "Full Moon"],
        planets: &[Body::Sun, Body::Venus],
        time_of_day: Some("Morning"),
        description: "Anoint a green candle with eucalyptus to send healing energy",
    },
    Spell {
        id: "uranus-breakthrough-spell",
        title: "Uranus Breakthrough Spell",
        category: "change",
        moon_phases: &["New Moon"],
        planets: &[Body::Uranus],
        time_of_day: None,
        description: "Break a thread between two candles to release a stuck situation",
    },
];

pub fn by_id(id: &str) -> Option<&'static Spell> {
    SPELLS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spell_has_a_phase() {
        assert!(SPELLS.iter().all(|s| !s.moon_phases.is_empty()));
        assert!(by_id("mercury-clarity-charm").is_some());
    }
}
