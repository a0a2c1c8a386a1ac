use serde::Serialize;

use crate::models::{Body, Sign};

#[derive(Debug, Serialize)]
pub struct LifePathMeaning {
    pub number: u32,
    pub planet: Body,
    pub sign: Sign,
    pub title: &'static str,
    pub guidance: &'static str,
}

pub static LIFE_PATHS: &[LifePathMeaning] = &[
    LifePathMeaning { number: 1, planet: Body::Sun, sign: Sign::Leo, title: "The Leader", guidance: "Forge your own path with independence and initiative" },
    LifePathMeaning { number: 2, planet: Body::Moon, sign: Sign::Cancer, title: "The Peacemaker", guidance: "Your gift is partnership, diplomacy and sensitivity" },
    LifePathMeaning { number: 3, planet: Body::Jupiter, sign: Sign::Sagittarius, title: "The Communicator", guidance: "Express yourself creatively and uplift others" },
    LifePathMeaning { number: 4, planet: Body::Uranus, sign: Sign::Aquarius, title: "The Builder", guidance: "Build lasting foundations through steady work" },
    LifePathMeaning { number: 5, planet: Body::Mercury, sign: Sign::Gemini, title: "The Adventurer", guidance: "Embrace change, freedom and experience" },
    LifePathMeaning { number: 6, planet: Body::Venus, sign: Sign::Taurus, title: "The Nurturer", guidance: "Care for home, community and beauty" },
    LifePathMeaning { number: 7, planet: Body::Neptune, sign: Sign::Pisces, title: "The Seeker", guidance: "Seek truth through study and inner wisdom" },
    LifePathMeaning { number: 8, planet: Body::Saturn, sign: Sign::Capricorn, title: "The Powerhouse", guidance: "Master material power with integrity" },
    LifePathMeaning { number: 9, planet: Body::Mars, sign: Sign::Aries, title: "The Humanitarian", guidance: "Serve a cause larger than yourself and let go gracefully" },
    LifePathMeaning { number: 11, planet: Body::Moon, sign: Sign::Pisces, title: "The Intuitive", guidance: "A master number of spiritual insight and inspiration" },
    LifePathMeaning { number: 22, planet: Body::Saturn, sign: Sign::Capricorn, title: "The Master Builder", guidance: "A master number that turns large visions into reality" },
    LifePathMeaning { number: 33, planet: Body::Venus, sign: Sign::Libra, title: "The Master Teacher", guidance: "A master number of compassionate service and teaching" },
];

pub fn life_path(number: u32) -> Option<&'static LifePathMeaning> {
    LIFE_PATHS.iter().find(|l| l.number == number)
}

/// Personal year guidance, indexed 1..=9.
pub static PERSONAL_YEARS: &[&str; 9] = &[
    "New beginnings. Plant seeds and take initiative",
    "Patience and partnership. Let things develop",
    "Creativity and social expansion. Express yourself",
    "Hard work and foundations. Build structure",
    "Change and freedom. Welcome the unexpected",
    "Home and responsibility. Tend your relationships",
    "Reflection and study. Turn inward",
    "Power and achievement. Step into authority",
    "Completion and release. Clear space for the next cycle",
];

pub fn personal_year(number: u32) -> Option<&'static str> {
    (1..=9)
        .contains(&number)
        .then(|| PERSONAL_YEARS[number as usize - 1])
}

#[derive(Debug, Serialize)]
pub struct KarmicDebt {
    pub number: u32,
    pub meaning: &'static str,
    pub life_lesson: &'static str,
}

pub static KARMIC_DEBTS: &[KarmicDebt] = &[
    KarmicDebt { number: 13, meaning: "Past laziness returns as a need for steady effort", life_lesson: "Discipline and follow-through" },
    KarmicDebt { number: 14, meaning: "Past excess returns as a need for moderation", life_lesson: "Temperance and commitment" },
    KarmicDebt { number: 16, meaning: "Past ego returns as humbling upheaval", life_lesson: "Humility and rebuilding" },
    KarmicDebt { number: 19, meaning: "Past misuse of power returns as lessons in independence", life_lesson: "Asking for and accepting help" },
];

pub fn karmic_debt(number: u32) -> Option<&'static KarmicDebt> {
    KARMIC_DEBTS.iter().find(|k| k.number == number)
}

#[derive(Debug, Serialize)]
pub struct AngelNumber {
    pub number: &'static str,
    pub meaning: &'static str,
    pub guidance: &'static str,
}

pub static ANGEL_NUMBERS: &[AngelNumber] = &[
    AngelNumber { number: "111", meaning: "Manifestation gateway", guidance: "Watch your thoughts; they are taking form" },
    AngelNumber { number: "222", meaning: "Balance and trust", guidance: "Keep faith that things are aligning" },
    AngelNumber { number: "333", meaning: "Support of guides", guidance: "Speak and create with confidence" },
    AngelNumber { number: "444", meaning: "Protection and foundation", guidance: "You are supported while you build" },
    AngelNumber { number: "555", meaning: "Major change", guidance: "Release the old and welcome what comes" },
    AngelNumber { number: "666", meaning: "Rebalance", guidance: "Bring the material and spiritual back into harmony" },
    AngelNumber { number: "777", meaning: "Spiritual alignment", guidance: "You are on the right path; keep learning" },
    AngelNumber { number: "888", meaning: "Abundance", guidance: "Receive the rewards of your effort" },
    AngelNumber { number: "999", meaning: "Completion", guidance: "Close the chapter with gratitude" },
];

pub fn angel_number(number: &str) -> Option<&'static AngelNumber> {
    ANGEL_NUMBERS.iter().find(|a| a.number == number)
}

/// Mirror hour messages, indexed by hour (00:00 .. 23:23).
pub static MIRROR_HOURS: &[&str; 24] = &[
    "A fresh start; make a wish",
    "Trust your instincts",
    "Look for balance in a decision",
    "Creativity is calling",
    "Stay grounded and patient",
    "Change is on the way",
    "Tend to someone you love",
    "You are spiritually aligned",
    "Abundance is near",
    "Let go of what is complete",
    "A new cycle opens",
    "Your intuition is heightened",
    "Angels are listening",
    "Transformation through effort",
    "Slow down and reassess",
    "Freedom is near",
    "Seek harmony at home",
    "Wisdom comes through solitude",
    "Success rewards persistence",
    "Independence serves you now",
    "Love is around you",
    "Follow your inner calling",
    "Build something lasting",
    "Rest and integrate the day",
];

pub fn mirror_hour(hour: u32) -> Option<&'static str> {
    MIRROR_HOURS.get(hour as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_cover_their_ranges() {
        for n in (1..=9).chain([11, 22, 33]) {
            assert!(life_path(n).is_some(), "life path {}", n);
        }
        assert!(personal_year(0).is_none());
        assert!(personal_year(9).is_some());
        assert!(karmic_debt(16).is_some());
        assert!(karmic_debt(15).is_none());
        assert_eq!(angel_number("333").map(|a| a.meaning), Some("Support of guides"));
        assert!(mirror_hour(23).is_some());
        assert!(mirror_hour(24).is_none());
    }
}
