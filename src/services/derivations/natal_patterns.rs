use crate::models::{AspectPattern, BirthChart, Body, DetectorResult, PatternShape, Sign};

const STELLIUM_MIN_BODIES: usize = 3;
const STELLIUM_CONFIDENCE: f64 = 0.95;

pub type Detector = fn(&BirthChart) -> DetectorResult;

/// Every named detector, in reporting order.
pub const DETECTORS: &[(&str, Detector)] = &[
    ("stellium", detect_stelliums),
    ("grand_trine", detect_grand_trines),
    ("t_square", detect_t_squares),
    ("yod", detect_yods),
];

/// Correlations between a user's journal and the sky. The journal is not
/// part of the context yet, so each reports `NotImplemented`.
pub const JOURNAL_DETECTORS: &[(&str, Detector)] = &[
    ("recurring_card", detect_recurring_cards),
    ("mood_transit", detect_mood_transits),
    ("theme", detect_themes),
    ("frequency", detect_frequency),
    ("season_correlation", detect_season_correlations),
];

fn all_detectors() -> impl Iterator<Item = &'static (&'static str, Detector)> {
    DETECTORS.iter().chain(JOURNAL_DETECTORS.iter())
}

/// One Stellium per sign holding three or more of the ten major bodies.
pub fn detect_stelliums(chart: &BirthChart) -> DetectorResult {
    let mut found = Vec::new();
    for sign in Sign::ALL {
        let members: Vec<_> = chart
            .placements
            .iter()
            .filter(|p| p.body.is_major() && p.sign == sign)
            .collect();
        if members.len() < STELLIUM_MIN_BODIES {
            continue;
        }
        let bodies: Vec<Body> = members.iter().map(|p| p.body).collect();
        let mut houses: Vec<u8> = members.iter().map(|p| p.house).collect();
        houses.sort_unstable();
        houses.dedup();
        found.push(AspectPattern::Stellium(PatternShape {
            bodies,
            signs: vec![sign],
            houses,
            confidence: STELLIUM_CONFIDENCE,
        }));
    }
    DetectorResult::Detected(found)
}

pub fn detect_grand_trines(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("grand_trine")
}

pub fn detect_t_squares(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("t_square")
}

pub fn detect_yods(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("yod")
}

pub fn detect_recurring_cards(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("recurring_card")
}

pub fn detect_mood_transits(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("mood_transit")
}

pub fn detect_themes(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("theme")
}

pub fn detect_frequency(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("frequency")
}

pub fn detect_season_correlations(_chart: &BirthChart) -> DetectorResult {
    DetectorResult::NotImplemented("season_correlation")
}

/// Runs every detector; returns the patterns found and the detectors that
/// could not run.
pub fn detect_all(chart: &BirthChart) -> (Vec<AspectPattern>, Vec<&'static str>) {
    let mut patterns = Vec::new();
    let mut pending = Vec::new();
    for (name, detector) in all_detectors() {
        match detector(chart) {
            DetectorResult::Detected(found) => patterns.extend(found),
            DetectorResult::NotImplemented(_) => pending.push(*name),
        }
    }
    (patterns, pending)
}

/// Detectors that report `NotImplemented`, independent of any chart.
pub fn pending_detectors() -> Vec<&'static str> {
    let empty = BirthChart::default();
    all_detectors()
        .filter(|(_, detector)| matches!(detector(&empty), DetectorResult::NotImplemented(_)))
        .map(|(name, _)| *name)
        .collect()
}
