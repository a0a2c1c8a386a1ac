use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Sabbat {
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
    pub season: &'static str,
    pub description: &'static str,
    pub colors: &'static [&'static str],
    pub crystals: &'static [&'static str],
    pub herbs: &'static [&'static str],
    pub rituals: &'static [&'static str],
    pub deities: &'static [&'static str],
}

/// The Wheel of the Year, in calendar order.
pub static WHEEL_OF_THE_YEAR: &[Sabbat] = &[
    Sabbat {
        name: "Imbolc",
        month: 2,
        day: 1,
        season: "Late Winter",
        description: "The first stirrings of spring and the return of light",
        colors: &["White", "Pale Yellow", "Light Green"],
        crystals: &["Amethyst", "Garnet", "Moonstone"],
        herbs: &["Angelica", "Basil", "Bay"],
        rituals: &["Candle lighting for returning light", "Spring cleaning of the home"],
        deities: &["Brigid"],
    },
    Sabbat {
        name: "Ostara",
        month: 3,
        day: 21,
        season: "Spring Equinox",
        description: "Balance of day and night and the planting of new intentions",
        colors: &["Pastel Green", "Yellow", "Lavender"],
        crystals: &["Rose Quartz", "Green Aventurine", "Moonstone"],
        herbs: &["Jasmine", "Violet", "Lemon Balm"],
        rituals: &["Seed planting for intentions", "Egg decorating"],
        deities: &["Eostre"],
    },
    Sabbat {
        name: "Beltane",
        month: 5,
        day: 1,
        season: "Early Summer",
        description: "Fertility, passion and the full bloom of life",
        colors: &["Red", "White", "Green"],
        crystals: &["Carnelian", "Rose Quartz", "Emerald"],
        herbs: &["Hawthorn", "Rose", "Mint"],
        rituals: &["Bonfire jumping", "Flower crowns and ribbon weaving"],
        deities: &["Flora", "Cernunnos"],
    },
    Sabbat {
        name: "Litha",
        month: 6,
        day: 21,
        season: "Summer Solstice",
        description: "The peak of solar power and abundance",
        colors: &["Gold", "Yellow", "Orange"],
        crystals: &["Citrine", "Tiger's Eye", "Sunstone"],
        herbs: &["St. John's Wort", "Lavender", "Chamomile"],
        rituals: &["Sunrise greeting", "Solar charging of tools"],
        deities: &["Sol", "Apollo"],
    },
    Sabbat {
        name: "Lammas",
        month: 8,
        day: 1,
        season: "Late Summer",
        description: "The first harvest and gratitude for what has ripened",
        colors: &["Gold", "Orange", "Brown"],
        crystals: &["Citrine", "Peridot", "Carnelian"],
        herbs: &["Wheat", "Sunflower", "Basil"],
        rituals: &["Baking bread", "Gratitude offerings"],
        deities: &["Lugh"],
    },
    Sabbat {
        name: "Mabon",
        month: 9,
        day: 21,
        season: "Autumn Equinox",
        description: "Second harvest and balance before the dark half of the year",
        colors: &["Deep Red", "Orange", "Brown"],
        crystals: &["Smoky Quartz", "Amber", "Tiger's Eye"],
        herbs: &["Sage", "Cinnamon", "Apple"],
        rituals: &["Gratitude feast", "Balancing meditation"],
        deities: &["Persephone", "Demeter"],
    },
    Sabbat {
        name: "Samhain",
        month: 10,
        day: 31,
        season: "Late Autumn",
        description: "The witch's new year, when the veil to the ancestors is thinnest",
        colors: &["Black", "Orange", "Purple"],
        crystals: &["Obsidian", "Smoky Quartz", "Carnelian"],
        herbs: &["Mugwort", "Wormwood", "Rosemary"],
        rituals: &["Ancestor altar", "Divination for the coming year"],
        deities: &["Hecate", "The Morrigan"],
    },
    Sabbat {
        name: "Yule",
        month: 12,
        day: 21,
        season: "Winter Solstice",
        description: "The longest night and the rebirth of the sun",
        colors: &["Red", "Green", "Gold"],
        crystals: &["Garnet", "Ruby", "Clear Quartz"],
        herbs: &["Holly", "Pine", "Mistletoe"],
        rituals: &["Yule log burning", "Vigil until sunrise"],
        deities: &["Frigg", "Sol Invictus"],
    },
];

impl Sabbat {
    fn date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// The next sabbat on or after `today`, its date and the days until it.
pub fn next_sabbat(today: NaiveDate) -> Option<(&'static Sabbat, NaiveDate, i64)> {
    [today.year(), today.year() + 1]
        .iter()
        .flat_map(|year| {
            WHEEL_OF_THE_YEAR
                .iter()
                .filter_map(move |s| s.date_in(*year).map(|d| (s, d)))
        })
        .find(|(_, date)| *date >= today)
        .map(|(s, date)| (s, date, (date - today).num_days()))
}

pub fn by_name(name: &str) -> Option<&'static Sabbat> {
    WHEEL_OF_THE_YEAR
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_sabbat_counts_real_days() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 20).unwrap();
        let (sabbat, date, days) = next_sabbat(today).unwrap();
        assert_eq!(sabbat.name, "Samhain");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 10, 31).unwrap());
        assert_eq!(days, 11);
    }

    #[test]
    fn wraps_into_next_year() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let (sabbat, _, days) = next_sabbat(today).unwrap();
        assert_eq!(sabbat.name, "Imbolc");
        assert_eq!(days, 35);
    }

    #[test]
    fn sabbat_day_itself_is_zero_days_out() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let (sabbat, _, days) = next_sabbat(today).unwrap();
        assert_eq!(sabbat.name, "Beltane");
        assert_eq!(days, 0);
    }
}
