use chrono::Weekday;
use serde::Serialize;

use crate::models::Body;

#[derive(Debug, Serialize)]
pub struct PlanetaryDay {
    pub day: &'static str,
    pub planet: Body,
    pub best_for: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub planetary_hours: &'static [&'static str],
}

pub static PLANETARY_DAYS: &[PlanetaryDay] = &[
    PlanetaryDay {
        day: "Sunday",
        planet: Body::Sun,
        best_for: &["Success and vitality", "Leadership", "Healing"],
        colors: &["Gold", "Yellow", "Orange"],
        planetary_hours: &["Sunrise hour of the Sun"],
    },
    PlanetaryDay {
        day: "Monday",
        planet: Body::Moon,
        best_for: &["Intuition and dreams", "Home and family", "Emotional healing"],
        colors: &["Silver", "White"],
        planetary_hours: &["Sunrise hour of the Moon"],
    },
    PlanetaryDay {
        day: "Tuesday",
        planet: Body::Mars,
        best_for: &["Courage and action", "Protection", "Overcoming obstacles"],
        colors: &["Red"],
        planetary_hours: &["Sunrise hour of Mars"],
    },
    PlanetaryDay {
        day: "Wednesday",
        planet: Body::Mercury,
        best_for: &["Communication", "Study and learning", "Travel plans"],
        colors: &["Yellow", "Orange"],
        planetary_hours: &["Sunrise hour of Mercury"],
    },
    PlanetaryDay {
        day: "Thursday",
        planet: Body::Jupiter,
        best_for: &["Prosperity and growth", "Legal matters", "Spiritual expansion"],
        colors: &["Blue", "Purple"],
        planetary_hours: &["Sunrise hour of Jupiter"],
    },
    PlanetaryDay {
        day: "Friday",
        planet: Body::Venus,
        best_for: &["Love and friendship", "Beauty", "Harmony"],
        colors: &["Green", "Pink"],
        planetary_hours: &["Sunrise hour of Venus"],
    },
    PlanetaryDay {
        day: "Saturday",
        planet: Body::Saturn,
        best_for: &["Banishing and boundaries", "Discipline", "Long-term planning"],
        colors: &["Black", "Dark Blue"],
        planetary_hours: &["Sunrise hour of Saturn"],
    },
];

pub fn for_weekday(weekday: Weekday) -> &'static PlanetaryDay {
    &PLANETARY_DAYS[weekday.num_days_from_sunday() as usize]
}

pub fn by_name(day: &str) -> Option<&'static PlanetaryDay> {
    PLANETARY_DAYS.iter().find(|d| d.day.eq_ignore_ascii_case(day))
}
