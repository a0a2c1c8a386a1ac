use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::correspondences::numerology as table;
use crate::models::{
    AngelNumberInsight, BirthChart, KarmicDebtInsight, MirrorHourInsight, NumerologyInsight,
};

const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];
const KARMIC_NUMBERS: [u32; 4] = [13, 14, 16, 19];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum down to one digit, stopping early on a master number
/// when `keep_master` is set.
fn reduce(mut n: u32, keep_master: bool) -> u32 {
    while n > 9 && !(keep_master && MASTER_NUMBERS.contains(&n)) {
        n = digit_sum(n);
    }
    n
}

pub fn life_path_number(birthday: NaiveDate) -> u32 {
    let year = reduce(birthday.year().unsigned_abs(), true);
    let month = reduce(birthday.month(), true);
    let day = reduce(birthday.day(), true);
    reduce(year + month + day, true)
}

pub fn personal_year_number(birthday: NaiveDate, year: i32) -> u32 {
    reduce(
        digit_sum(birthday.month()) + digit_sum(birthday.day()) + digit_sum(year.unsigned_abs()),
        false,
    )
}

pub fn karmic_debt_number(birthday: NaiveDate) -> Option<u32> {
    let raw = (birthday.year().unsigned_abs() + birthday.month() + birthday.day()) % 100;
    KARMIC_NUMBERS.contains(&raw).then_some(raw)
}

/// "HH:MM" when the local hour and minute read the same.
pub fn mirror_time(now: DateTime<Utc>, tz: Tz) -> Option<(u32, String)> {
    let local = now.with_timezone(&tz);
    (local.hour() == local.minute())
        .then(|| (local.hour(), format!("{:02}:{:02}", local.hour(), local.minute())))
}

fn correlations(life_path: &table::LifePathMeaning, chart: Option<&BirthChart>) -> Vec<String> {
    let Some(chart) = chart else {
        return Vec::new();
    };
    let mut out = Vec::new();
    if let Some(p) = chart.find(life_path.planet) {
        out.push(format!(
            "Your life path ruler {} sits in {} in your {} house",
            life_path.planet.name(),
            p.sign.name(),
            ordinal(p.house)
        ));
    }
    if chart.sun().map(|s| s.sign) == Some(life_path.sign) {
        out.push(format!(
            "Your Sun in {} echoes life path {}",
            life_path.sign.name(),
            life_path.number
        ));
    }
    if chart.moon().map(|m| m.sign) == Some(life_path.sign) {
        out.push(format!(
            "Your Moon in {} gives life path {} an emotional anchor",
            life_path.sign.name(),
            life_path.number
        ));
    }
    out
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Numerology profile for a birthday at a given moment.
pub fn insight(
    birthday: NaiveDate,
    chart: Option<&BirthChart>,
    now: DateTime<Utc>,
    tz: Tz,
) -> Option<NumerologyInsight> {
    let life_path = life_path_number(birthday);
    let meaning = table::life_path(life_path)?;
    let year = now.with_timezone(&tz).year();
    let personal_year = personal_year_number(birthday, year);
    let personal_year_guidance = table::personal_year(personal_year)?;

    let karmic_debt = karmic_debt_number(birthday)
        .and_then(table::karmic_debt)
        .map(|k| KarmicDebtInsight {
            number: k.number,
            meaning: k.meaning,
            life_lesson: k.life_lesson,
        });

    let angel_number = table::angel_number(&personal_year.to_string().repeat(3)).map(|a| {
        AngelNumberInsight {
            number: a.number.to_string(),
            meaning: a.meaning,
            guidance: a.guidance,
        }
    });

    let mirror_hour = mirror_time(now, tz).and_then(|(hour, time)| {
        table::mirror_hour(hour).map(|message| MirrorHourInsight { time, message })
    });

    Some(NumerologyInsight {
        life_path,
        personal_year,
        planet: meaning.planet,
        zodiac_sign: meaning.sign,
        meaning: meaning.guidance,
        personal_year_guidance,
        correlations: correlations(meaning, chart),
        karmic_debt,
        angel_number,
        mirror_hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Body, RawPlacement, Sign};
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn life_path_keeps_master_numbers() {
        // 1+9+9+0 = 19 -> 10 -> 1; 4; 1+5 = 6 => 11
        assert_eq!(life_path_number(date(1990, 4, 15)), 11);
        // 1985 -> 23 -> 5; 7; 3 => 15 -> 6
        assert_eq!(life_path_number(date(1985, 7, 3)), 6);
        assert_eq!(life_path_number(date(2000, 1, 1)), 4);
    }

    #[test]
    fn personal_year_is_single_digit() {
        // 4 + 6 + (2+0+2+5 = 9) = 19 -> 10 -> 1
        assert_eq!(personal_year_number(date(1990, 4, 15), 2025), 1);
        for year in 2020..2040 {
            assert!((1..=9).contains(&personal_year_number(date(1977, 11, 29), year)));
        }
    }

    #[test]
    fn karmic_debt_from_date_sum() {
        // 1990 + 4 + 15 = 2009 -> 09
        assert_eq!(karmic_debt_number(date(1990, 4, 15)), None);
        // 1999 + 1 + 13 = 2013 -> 13
        assert_eq!(karmic_debt_number(date(1999, 1, 13)), Some(13));
    }

    #[test]
    fn mirror_hour_uses_local_time() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 14, 0).unwrap();
        assert!(mirror_time(now, chrono_tz::UTC).is_none());
        let (hour, time) = mirror_time(now, chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(hour, 14);
        assert_eq!(time, "14:14");
    }

    #[test]
    fn insight_links_to_the_chart() {
        let chart = BirthChart::from_raw(&[RawPlacement {
            body: "Moon".to_string(),
            sign: "Pisces".to_string(),
            degree: 3.0,
            ecliptic_longitude: None,
            house: Some(4),
        }]);
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let n = insight(date(1990, 4, 15), Some(&chart), now, chrono_tz::UTC).unwrap();
        assert_eq!(n.life_path, 11);
        assert_eq!(n.planet, Body::Moon);
        assert_eq!(n.zodiac_sign, Sign::Pisces);
        assert_eq!(n.angel_number.as_ref().map(|a| a.number.as_str()), Some("111"));
        assert!(n.correlations.iter().any(|c| c.contains("4th house")));
        assert!(n.correlations.iter().any(|c| c.starts_with("Your Moon in Pisces")));
    }
}
