use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    BirthChart, Body, MoonPhase, NewPattern, ProgressedBody, ProgressedChart, Sign, SignChange,
};
use crate::services::derivations::returns::age_years;
use crate::utils::astro::normalize_degrees;

/// Mean geocentric motion in degrees per day.
fn mean_daily_motion(body: Body) -> Option<f64> {
    match body {
        Body::Sun | Body::Mercury | Body::Venus => Some(0.9856),
        Body::Moon => Some(13.1764),
        Body::Mars => Some(0.5240),
        Body::Jupiter => Some(0.0831),
        Body::Saturn => Some(0.0335),
        Body::Uranus => Some(0.0117),
        Body::Neptune => Some(0.0060),
        Body::Pluto => Some(0.0040),
        _ => None,
    }
}

/// Secondary progression: one day after birth for each year of life.
pub fn progressed_chart(chart: &BirthChart, birthday: NaiveDate, now: DateTime<Utc>) -> ProgressedChart {
    let age = age_years(birthday, now).max(0.0);

    let mut bodies = Vec::new();
    let mut sign_changes = Vec::new();
    for natal in &chart.placements {
        let Some(motion) = mean_daily_motion(natal.body) else {
            continue;
        };
        let longitude = normalize_degrees(natal.ecliptic_longitude + age * motion);
        let sign = Sign::from_longitude(longitude);
        if sign != natal.sign {
            sign_changes.push(SignChange {
                body: natal.body,
                natal_sign: natal.sign,
                progressed_sign: sign,
            });
        }
        bodies.push(ProgressedBody {
            body: natal.body,
            longitude,
            sign,
            degree: longitude % 30.0,
        });
    }

    let find = |body: Body| bodies.iter().find(|b| b.body == body).cloned();
    let sun = find(Body::Sun);
    let moon = find(Body::Moon);
    let lunation_phase = match (&sun, &moon) {
        (Some(s), Some(m)) => Some(MoonPhase::from_elongation(m.longitude - s.longitude)),
        _ => None,
    };

    ProgressedChart {
        age_years: age,
        sun,
        moon,
        lunation_phase,
        bodies,
        sign_changes,
    }
}

/// Storable summary, keyed by whole year of age.
pub fn to_new_pattern(progressed: &ProgressedChart) -> Result<NewPattern, serde_json::Error> {
    Ok(NewPattern {
        pattern_type: "progressed_chart".to_string(),
        identity_key: format!("v1:progressed_chart:age{}", progressed.age_years.floor() as u32),
        payload: serde_json::to_value(progressed)?,
        confidence: 0.8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PatternCategory, RawPlacement};
    use chrono::TimeZone;

    fn chart() -> BirthChart {
        let raw = |body: &str, sign: &str, degree: f64| RawPlacement {
            body: body.to_string(),
            sign: sign.to_string(),
            degree,
            ecliptic_longitude: None,
            house: None,
        };
        BirthChart::from_raw(&[
            raw("Sun", "Aries", 25.0),
            raw("Moon", "Aries", 25.0),
            raw("Pluto", "Scorpio", 10.0),
            raw("Ascendant", "Leo", 1.0),
        ])
    }

    #[test]
    fn sun_advances_about_a_degree_a_year() {
        let birthday = NaiveDate::from_ymd_opt(1990, 4, 15).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 4, 15, 0, 0, 0).unwrap();
        let p = progressed_chart(&chart(), birthday, now);

        assert!((p.age_years - 30.0).abs() < 0.01);
        let sun = p.sun.as_ref().unwrap();
        assert_eq!(sun.sign, Sign::Taurus);
        assert!((sun.longitude - (25.0 + 30.0 * 0.9856)).abs() < 0.05);
        assert!(p
            .sign_changes
            .iter()
            .any(|c| c.body == Body::Sun && c.progressed_sign == Sign::Taurus));
        assert!(p.bodies.iter().all(|b| b.body != Body::Ascendant));
        assert!(p.sign_changes.iter().all(|c| c.body != Body::Pluto));
    }

    #[test]
    fn lunation_starts_new_at_a_new_moon_birth() {
        let birthday = NaiveDate::from_ymd_opt(1990, 4, 15).unwrap();
        let now = Utc.with_ymd_and_hms(1990, 4, 16, 0, 0, 0).unwrap();
        let p = progressed_chart(&chart(), birthday, now);
        assert_eq!(p.lunation_phase, Some(MoonPhase::NewMoon));
    }

    #[test]
    fn summary_pattern_is_a_progression() {
        let birthday = NaiveDate::from_ymd_opt(1990, 4, 15).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap();
        let pattern = to_new_pattern(&progressed_chart(&chart(), birthday, now)).unwrap();
        assert_eq!(pattern.category(), PatternCategory::Progression);
        assert_eq!(pattern.identity_key, "v1:progressed_chart:age30");
    }
}
