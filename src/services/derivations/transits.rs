use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::correspondences::houses;
use crate::models::{
    AspectKind, BirthChart, BirthChartPlacement, Body, NatalContact, PersonalTransitImpact, Sign,
    TransitWindow, UpcomingTransit,
};

pub const DEFAULT_TOP_N: usize = 10;

fn window_for(date: DateTime<Utc>, now: DateTime<Utc>) -> Option<TransitWindow> {
    if date >= now - Duration::days(1) && date <= now + Duration::days(3) {
        Some(TransitWindow::Current)
    } else if date >= now + Duration::days(1) && date <= now + Duration::days(7) {
        Some(TransitWindow::Upcoming)
    } else {
        None
    }
}

fn aspect_weight(kind: Option<AspectKind>) -> f64 {
    match kind {
        Some(AspectKind::Conjunction) => 1.0,
        Some(AspectKind::Opposition) => 0.9,
        Some(AspectKind::Square) => 0.85,
        Some(AspectKind::Trine) => 0.7,
        Some(AspectKind::Sextile) => 0.5,
        None => 0.3,
    }
}

fn target_weight(target: Option<Body>) -> f64 {
    match target {
        Some(body) if body.is_personal_point() => 0.5,
        Some(body) if body.is_major() => 0.3,
        Some(_) => 0.1,
        None => 0.0,
    }
}

fn relevance(
    contact: Option<&NatalContact>,
    house: Option<u8>,
    date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let mut score = aspect_weight(contact.map(|c| c.kind));
    score += target_weight(contact.map(|c| c.natal_planet));
    if house.map(houses::is_angular).unwrap_or(false) {
        score += 0.2;
    }
    score += match contact {
        Some(NatalContact {
            kind,
            orb: Some(orb),
            ..
        }) => 0.5 * (1.0 - orb / kind.orb()).max(0.0),
        Some(_) => 0.1,
        None => 0.0,
    };
    let days_away = (date - now).num_seconds().abs() as f64 / 86_400.0;
    score += 0.5 * (1.0 - days_away / 7.0).clamp(0.0, 1.0);
    score
}

fn contact_with(
    longitude: Option<f64>,
    sign: Option<Sign>,
    natal: &BirthChartPlacement,
) -> Option<NatalContact> {
    if let Some(lon) = longitude {
        return AspectKind::between(lon, natal.ecliptic_longitude).map(|(kind, orb)| NatalContact {
            kind,
            natal_planet: natal.body,
            orb: Some(orb),
        });
    }
    sign.and_then(|s| AspectKind::between_signs(s, natal.sign))
        .map(|kind| NatalContact {
            kind,
            natal_planet: natal.body,
            orb: None,
        })
}

/// Transits touching the natal chart in the current and upcoming windows,
/// strongest first.
pub fn personal_transits(
    chart: &BirthChart,
    upcoming: &[UpcomingTransit],
    now: DateTime<Utc>,
    top_n: usize,
) -> Vec<PersonalTransitImpact> {
    let mut seen = HashSet::new();
    let mut impacts = Vec::new();

    for transit in upcoming {
        let Some(planet) = Body::from_name(&transit.planet) else {
            log::debug!("[Transits] Ignoring unknown body {}", transit.planet);
            continue;
        };
        let Some(window) = window_for(transit.date, now) else {
            continue;
        };
        let sign = transit
            .sign
            .as_deref()
            .and_then(Sign::from_name)
            .or_else(|| transit.longitude.map(Sign::from_longitude));
        let house = sign.and_then(|s| chart.house_of_sign(s));

        let mut contacts: Vec<Option<NatalContact>> = chart
            .placements
            .iter()
            .filter_map(|natal| contact_with(transit.longitude, sign, natal))
            .map(Some)
            .collect();
        if contacts.is_empty() {
            if house.is_none() {
                log::debug!("[Transits] {} {} touches nothing natal", planet.name(), transit.event);
                continue;
            }
            contacts.push(None);
        }

        for contact in contacts {
            let key = (
                planet,
                transit.event.to_lowercase(),
                transit.date,
                contact.as_ref().map(|c| c.natal_planet),
            );
            if !seen.insert(key) {
                continue;
            }
            let score = relevance(contact.as_ref(), house, transit.date, now);
            impacts.push(PersonalTransitImpact {
                planet,
                event: transit.event.clone(),
                sign,
                aspect_to_natal: contact,
                house,
                date: transit.date,
                window,
                relevance: score,
            });
        }
    }

    impacts.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    impacts.truncate(top_n);
    impacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawPlacement;
    use chrono::TimeZone;

    fn chart() -> BirthChart {
        let raw = |body: &str, sign: &str, degree: f64, house: u8| RawPlacement {
            body: body.to_string(),
            sign: sign.to_string(),
            degree,
            ecliptic_longitude: None,
            house: Some(house),
        };
        BirthChart::from_raw(&[
            raw("Sun", "Leo", 10.0, 5),
            raw("Mercury", "Gemini", 20.0, 3),
            raw("Saturn", "Capricorn", 5.0, 10),
        ])
    }

    fn transit(planet: &str, event: &str, days: i64, sign: Option<&str>, lon: Option<f64>) -> UpcomingTransit {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        UpcomingTransit {
            planet: planet.to_string(),
            event: event.to_string(),
            date: now + Duration::days(days),
            sign: sign.map(str::to_string),
            longitude: lon,
        }
    }

    #[test]
    fn windows_and_ordering() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        let feed = vec![
            transit("Mars", "enters Leo", 0, None, Some(130.5)),
            transit("Venus", "enters Aries", 6, Some("Aries"), None),
            transit("Jupiter", "direct", 30, Some("Gemini"), None),
        ];
        let found = personal_transits(&chart(), &feed, now, DEFAULT_TOP_N);

        assert!(found.iter().all(|t| t.planet != Body::Jupiter));
        let mars = &found[0];
        assert_eq!(mars.planet, Body::Mars);
        assert_eq!(mars.window, TransitWindow::Current);
        let contact = mars.aspect_to_natal.as_ref().unwrap();
        assert_eq!(contact.kind, AspectKind::Conjunction);
        assert_eq!(contact.natal_planet, Body::Sun);
        assert!(found
            .iter()
            .any(|t| t.planet == Body::Venus && t.window == TransitWindow::Upcoming));
        for pair in found.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn sign_only_transits_use_whole_sign_aspects() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        let feed = vec![transit("Mercury", "retrograde", 0, Some("Gemini"), None)];
        let found = personal_transits(&chart(), &feed, now, DEFAULT_TOP_N);
        let natal_mercury = found
            .iter()
            .find(|t| t.aspect_to_natal.as_ref().map(|c| c.natal_planet) == Some(Body::Mercury))
            .unwrap();
        assert_eq!(natal_mercury.house, Some(3));
        assert!(natal_mercury.aspect_to_natal.as_ref().unwrap().orb.is_none());
        assert!(natal_mercury.is_retrograde());
    }

    #[test]
    fn duplicates_collapse_and_top_n_applies() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        let t = transit("Mars", "enters Leo", 0, None, Some(130.5));
        let found = personal_transits(&chart(), &[t.clone(), t], now, DEFAULT_TOP_N);
        assert_eq!(found.len(), 1);

        let feed: Vec<UpcomingTransit> = (0..5)
            .map(|d| transit("Moon", &format!("event {}", d), 0, Some("Leo"), None))
            .collect();
        assert_eq!(personal_transits(&chart(), &feed, now, 3).len(), 3);
    }

    #[test]
    fn transits_touching_nothing_are_dropped() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        let raw = |body: &str, sign: &str, house: u8| RawPlacement {
            body: body.to_string(),
            sign: sign.to_string(),
            degree: 10.0,
            ecliptic_longitude: None,
            house: Some(house),
        };
        let feed = vec![transit("Venus", "enters Virgo", 1, Some("Virgo"), None)];

        let no_ascendant = BirthChart::from_raw(&[raw("Sun", "Leo", 5)]);
        assert!(personal_transits(&no_ascendant, &feed, now, DEFAULT_TOP_N).is_empty());

        let with_ascendant = BirthChart::from_raw(&[raw("Ascendant", "Aries", 1), raw("Sun", "Leo", 5)]);
        let found = personal_transits(&with_ascendant, &feed, now, DEFAULT_TOP_N);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].house, Some(6));
        assert!(found[0].aspect_to_natal.is_none());
    }
}
