use chrono::{DateTime, Duration, Months, TimeZone, Utc};

use crate::models::{
    AspectKind, BirthChart, EclipseContact, EclipseKind, EclipseRelevance, NewPattern, Sign,
};
use crate::utils::astro::{angular_separation, normalize_degrees, sun_longitude};

pub const ECLIPSE_ORB: f64 = 3.0;

pub struct CatalogEclipse {
    pub peak: (i32, u32, u32, u32, u32),
    pub kind: EclipseKind,
    pub description: &'static str,
}

macro_rules! eclipse {
    ($y:expr, $mo:expr, $d:expr, $h:expr, $mi:expr, $kind:ident, $desc:expr) => {
        CatalogEclipse {
            peak: ($y, $mo, $d, $h, $mi),
            kind: EclipseKind::$kind,
            description: $desc,
        }
    };
}

/// Greatest-eclipse instants (UTC), 2024 through 2030.
pub static ECLIPSE_CATALOG: &[CatalogEclipse] = &[
    eclipse!(2024, 3, 25, 7, 13, Lunar, "Penumbral lunar eclipse"),
    eclipse!(2024, 4, 8, 18, 17, Solar, "Total solar eclipse"),
    eclipse!(2024, 9, 18, 2, 44, Lunar, "Partial lunar eclipse"),
    eclipse!(2024, 10, 2, 18, 45, Solar, "Annular solar eclipse"),
    eclipse!(2025, 3, 14, 6, 58, Lunar, "Total lunar eclipse"),
    eclipse!(2025, 3, 29, 10, 47, Solar, "Partial solar eclipse"),
    eclipse!(2025, 9, 7, 18, 11, Lunar, "Total lunar eclipse"),
    eclipse!(2025, 9, 21, 19, 41, Solar, "Partial solar eclipse"),
    eclipse!(2026, 2, 17, 12, 12, Solar, "Annular solar eclipse"),
    eclipse!(2026, 3, 3, 11, 33, Lunar, "Total lunar eclipse"),
    eclipse!(2026, 8, 12, 17, 46, Solar, "Total solar eclipse"),
    eclipse!(2026, 8, 28, 4, 12, Lunar, "Partial lunar eclipse"),
    eclipse!(2027, 2, 6, 15, 59, Solar, "Annular solar eclipse"),
    eclipse!(2027, 2, 20, 23, 13, Lunar, "Penumbral lunar eclipse"),
    eclipse!(2027, 7, 18, 16, 3, Lunar, "Penumbral lunar eclipse"),
    eclipse!(2027, 8, 2, 10, 7, Solar, "Total solar eclipse"),
    eclipse!(2027, 8, 17, 7, 13, Lunar, "Penumbral lunar eclipse"),
    eclipse!(2028, 1, 12, 4, 13, Lunar, "Partial lunar eclipse"),
    eclipse!(2028, 1, 26, 15, 8, Solar, "Annular solar eclipse"),
    eclipse!(2028, 7, 6, 18, 19, Lunar, "Partial lunar eclipse"),
    eclipse!(2028, 7, 22, 2, 56, Solar, "Total solar eclipse"),
    eclipse!(2028, 12, 31, 16, 52, Lunar, "Total lunar eclipse"),
    eclipse!(2029, 1, 14, 17, 13, Solar, "Partial solar eclipse"),
    eclipse!(2029, 6, 12, 4, 5, Solar, "Partial solar eclipse"),
    eclipse!(2029, 6, 26, 3, 22, Lunar, "Total lunar eclipse"),
    eclipse!(2029, 7, 11, 15, 36, Solar, "Partial solar eclipse"),
    eclipse!(2029, 12, 5, 15, 3, Solar, "Partial solar eclipse"),
    eclipse!(2029, 12, 20, 22, 42, Lunar, "Total lunar eclipse"),
    eclipse!(2030, 6, 1, 6, 29, Solar, "Annular solar eclipse"),
    eclipse!(2030, 6, 15, 18, 33, Lunar, "Partial lunar eclipse"),
    eclipse!(2030, 11, 25, 6, 51, Solar, "Total solar eclipse"),
    eclipse!(2030, 12, 9, 22, 28, Lunar, "Penumbral lunar eclipse"),
];

impl CatalogEclipse {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        let (y, mo, d, h, mi) = self.peak;
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single()
    }

    /// Sun's longitude for a solar eclipse, the point opposite for a lunar one.
    pub fn longitude(&self, at: DateTime<Utc>) -> f64 {
        let sun = sun_longitude(at);
        match self.kind {
            EclipseKind::Solar => sun,
            EclipseKind::Lunar => normalize_degrees(sun + 180.0),
        }
    }
}

fn opposite_house(house: u8) -> u8 {
    (house + 5) % 12 + 1
}

/// Conjunctions and oppositions within 3° of the eclipse degree.
pub fn eclipse_contacts(longitude: f64, chart: &BirthChart) -> Vec<EclipseContact> {
    chart
        .placements
        .iter()
        .filter_map(|natal| {
            let separation = angular_separation(longitude, natal.ecliptic_longitude);
            if separation <= ECLIPSE_ORB {
                Some(EclipseContact {
                    natal_body: natal.body,
                    kind: AspectKind::Conjunction,
                    orb: separation,
                    houses: vec![natal.house],
                })
            } else if (separation - 180.0).abs() <= ECLIPSE_ORB {
                Some(EclipseContact {
                    natal_body: natal.body,
                    kind: AspectKind::Opposition,
                    orb: (separation - 180.0).abs(),
                    houses: vec![natal.house, opposite_house(natal.house)],
                })
            } else {
                None
            }
        })
        .collect()
}

/// Catalog eclipses between now and `months_ahead` months out, with their
/// natal contacts.
pub fn eclipse_relevance(chart: &BirthChart, now: DateTime<Utc>, months_ahead: u32) -> Vec<EclipseRelevance> {
    let end = now
        .checked_add_months(Months::new(months_ahead))
        .unwrap_or_else(|| now + Duration::days(30 * months_ahead as i64));

    ECLIPSE_CATALOG
        .iter()
        .filter_map(|e| e.instant().map(|at| (e, at)))
        .filter(|(_, at)| *at >= now && *at <= end)
        .map(|(e, at)| {
            let longitude = e.longitude(at);
            let contacts = eclipse_contacts(longitude, chart);
            let mut houses: Vec<u8> = contacts.iter().flat_map(|c| c.houses.clone()).collect();
            houses.sort_unstable();
            houses.dedup();
            let sign = Sign::from_longitude(longitude);
            EclipseRelevance {
                date: at,
                kind: e.kind,
                description: format!("{} in {}", e.description, sign.name()),
                longitude,
                sign,
                contacts,
                houses,
            }
        })
        .collect()
}

pub fn to_new_pattern(eclipse: &EclipseRelevance) -> Result<NewPattern, serde_json::Error> {
    let tightest = eclipse
        .contacts
        .iter()
        .map(|c| c.orb)
        .fold(ECLIPSE_ORB, f64::min);
    Ok(NewPattern {
        pattern_type: "eclipse".to_string(),
        identity_key: eclipse.identity_key(),
        payload: serde_json::to_value(eclipse)?,
        confidence: 1.0 - tightest / (ECLIPSE_ORB * 2.0),
    })
}
