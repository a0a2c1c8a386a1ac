use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::{BirthChart, Body, NewPattern, PlanetaryReturn, ReturnPhase, ReturnType};

const YEAR_SECS: f64 = 365.25 * 86_400.0;
const EXACT_WINDOW_DAYS: f64 = 7.0;
const ACTIVE_WINDOW_DAYS: f64 = 30.0;
const RETURN_CONFIDENCE: f64 = 0.9;

/// Orbital periods in years.
pub const RETURN_PERIODS: &[(Body, f64)] = &[
    (Body::Sun, 1.0),
    (Body::Jupiter, 11.86),
    (Body::Saturn, 29.46),
];

pub fn birth_instant(birthday: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&birthday.and_time(NaiveTime::MIN))
}

pub fn age_years(birthday: NaiveDate, now: DateTime<Utc>) -> f64 {
    (now - birth_instant(birthday)).num_seconds() as f64 / YEAR_SECS
}

fn nearest_return(
    planet: Body,
    period: f64,
    birth: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<PlanetaryReturn> {
    let age = (now - birth).num_seconds() as f64 / YEAR_SECS;
    let n = (age / period).floor() as i64;

    let (number, instant) = [n, n + 1]
        .into_iter()
        .filter(|k| *k >= 1)
        .map(|k| {
            let offset = Duration::seconds((k as f64 * period * YEAR_SECS).round() as i64);
            (k as u32, birth + offset)
        })
        .min_by_key(|(_, instant)| (*instant - now).num_seconds().abs())?;

    let secs = (instant - now).num_seconds();
    let proximity_days = secs as f64 / 86_400.0;
    let phase = if proximity_days.abs() <= EXACT_WINDOW_DAYS {
        ReturnPhase::Exact
    } else if secs > 0 {
        ReturnPhase::Pre
    } else {
        ReturnPhase::Post
    };
    let return_type = if proximity_days.abs() <= EXACT_WINDOW_DAYS {
        ReturnType::Exact
    } else if proximity_days > 0.0 {
        ReturnType::Approaching
    } else {
        ReturnType::Recent
    };

    Some(PlanetaryReturn {
        planet,
        return_number: number,
        return_date: instant,
        proximity_days,
        phase,
        return_type,
        is_active: proximity_days.abs() <= ACTIVE_WINDOW_DAYS,
    })
}

/// Active Sun, Jupiter and Saturn returns for planets present in the chart.
pub fn planetary_returns(
    chart: &BirthChart,
    birthday: NaiveDate,
    now: DateTime<Utc>,
) -> Vec<PlanetaryReturn> {
    let birth = birth_instant(birthday);
    RETURN_PERIODS
        .iter()
        .filter(|(planet, _)| chart.find(*planet).is_some())
        .filter_map(|(planet, period)| nearest_return(*planet, *period, birth, now))
        .filter(|r| r.is_active)
        .collect()
}

pub fn to_new_pattern(ret: &PlanetaryReturn) -> Result<NewPattern, serde_json::Error> {
    Ok(NewPattern {
        pattern_type: "planetary_return".to_string(),
        identity_key: ret.identity_key(),
        payload: serde_json::to_value(ret)?,
        confidence: RETURN_CONFIDENCE,
    })
}
