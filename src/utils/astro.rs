//! Low-precision solar and lunar positions.
//!
//! These closed-form series are good to roughly a degree, which is all the
//! context engine needs: eclipse peak positions, the current moon phase and
//! the progressed lunation. Natal positions always come from the chart source.

use chrono::{DateTime, Utc};

const J2000_UNIX_MILLIS: f64 = 946_728_000_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn days_since_j2000(at: DateTime<Utc>) -> f64 {
    (at.timestamp_millis() as f64 - J2000_UNIX_MILLIS) / MILLIS_PER_DAY
}

pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Smallest angle between two ecliptic longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Apparent geocentric longitude of the Sun.
pub fn sun_longitude(at: DateTime<Utc>) -> f64 {
    let n = days_since_j2000(at);
    let mean_longitude = 280.460 + 0.985_647_4 * n;
    let anomaly = (357.528 + 0.985_600_3 * n).to_radians();
    normalize_degrees(mean_longitude + 1.915 * anomaly.sin() + 0.020 * (2.0 * anomaly).sin())
}

/// Geocentric longitude of the Moon (main periodic terms only).
pub fn moon_longitude(at: DateTime<Utc>) -> f64 {
    let d = days_since_j2000(at);
    let mean_longitude = 218.316 + 13.176_396 * d;
    let moon_anomaly = (134.963 + 13.064_993 * d).to_radians();
    let sun_anomaly = (357.529 + 0.985_600_28 * d).to_radians();
    let elongation = (297.850 + 12.190_749 * d).to_radians();

    normalize_degrees(
        mean_longitude + 6.289 * moon_anomaly.sin()
            + 1.274 * (2.0 * elongation - moon_anomaly).sin()
            + 0.658 * (2.0 * elongation).sin()
            - 0.186 * sun_anomaly.sin(),
    )
}

/// Moon-minus-Sun longitude; 0 is new moon, 180 is full moon.
pub fn lunar_elongation(at: DateTime<Utc>) -> f64 {
    normalize_degrees(moon_longitude(at) - sun_longitude(at))
}
