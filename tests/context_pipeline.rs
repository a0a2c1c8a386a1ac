use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use cosmicflow::database::{open_in_memory, queries, shared};
use cosmicflow::models::{
    Body, ContextRequest, ContextSettings, PatternCategory, PatternFilter, RawPlacement,
    UpcomingTransit,
};
use cosmicflow::services::{ContextBuilder, PatternStore, SqliteChartSource, StaticTransitSource};

fn placement(body: &str, sign: &str, degree: f64, house: u8) -> RawPlacement {
    RawPlacement {
        body: body.to_string(),
        sign: sign.to_string(),
        degree,
        ecliptic_longitude: None,
        house: Some(house),
    }
}

#[tokio::test]
async fn mercury_retrograde_crystal_question() {
    let now = Utc.with_ymd_and_hms(2025, 3, 15, 9, 0, 0).unwrap();
    let conn = open_in_memory().unwrap();
    queries::save_birth_chart(
        &conn,
        "ada",
        &[
            placement("Ascendant", "Aries", 2.0, 1),
            placement("Sun", "Taurus", 18.0, 2),
            placement("Mercury", "Gemini", 3.0, 3),
            placement("Moon", "Libra", 21.0, 7),
            placement("Venus", "Aries", 27.0, 1),
        ],
    )
    .unwrap();
    let conn = shared(conn);

    let sky = StaticTransitSource::new(vec![
        UpcomingTransit {
            planet: "Mercury".to_string(),
            event: "retrograde".to_string(),
            date: now + Duration::hours(6),
            sign: Some("Aries".to_string()),
            longitude: None,
        },
        UpcomingTransit {
            planet: "Venus".to_string(),
            event: "enters".to_string(),
            date: now + Duration::days(30),
            sign: Some("Pisces".to_string()),
            longitude: None,
        },
    ]);

    let store = Arc::new(PatternStore::new(conn.clone()));
    let builder = ContextBuilder::new(
        Arc::new(SqliteChartSource::new(conn)),
        Arc::new(sky),
        store.clone(),
        ContextSettings::default(),
        chrono_tz::UTC,
    );

    let request = ContextRequest {
        now,
        ..ContextRequest::new("ada", Some("What crystals help with my Mercury retrograde today?"))
    };
    let ctx = builder.build(request).await;

    let query = ctx.query.as_ref().unwrap();
    assert!(query.needs_crystals);
    assert!(query.needs_retrogrades);
    assert!(query.needs_planetary_day);
    assert!(ctx.requirements.needs_personal_transits);
    assert!(!ctx.requirements.needs_progressed_chart);

    let transits = ctx.personal_transits.as_ref().unwrap();
    assert!(!transits.is_empty());
    assert!(transits
        .iter()
        .all(|t| t.planet == Body::Mercury && t.house == Some(1)));
    assert!(transits
        .windows(2)
        .all(|w| w[0].relevance >= w[1].relevance));

    let recs = &ctx.recommendations;
    assert!(recs
        .retrograde_guidance
        .iter()
        .any(|g| g.planet == Body::Mercury));
    assert!(!recs.crystals.is_empty());
    assert!(recs.crystals.len() <= 5);
    assert!(recs
        .crystals
        .windows(2)
        .all(|w| w[0].priority <= w[1].priority));
    assert!(recs.planetary_day.is_some());
    assert!(!recs.synthesis.is_empty());

    assert!(ctx.citations.is_empty());
    assert_eq!(ctx.missing, vec!["birthday".to_string()]);
    assert!(ctx.omitted.is_empty());
    assert!(!ctx.degraded);

    // Nothing in this turn is worth persisting.
    let natal = store
        .get_at("ada", PatternFilter::category(PatternCategory::Natal), now)
        .await;
    assert!(natal.is_empty());
}

#[tokio::test]
async fn unknown_user_still_gets_a_context() {
    let conn = shared(open_in_memory().unwrap());
    let builder = ContextBuilder::new(
        Arc::new(SqliteChartSource::new(conn.clone())),
        Arc::new(StaticTransitSource::default()),
        Arc::new(PatternStore::new(conn)),
        ContextSettings::default(),
        chrono_tz::Europe::London,
    );

    let ctx = builder.build(ContextRequest::new("nobody", None)).await;
    assert_eq!(ctx.missing, vec!["birth_chart".to_string(), "birthday".to_string()]);
    assert!(ctx.personal_transits.is_none());
    assert!(ctx.natal_patterns.is_none());
    assert!(!ctx.degraded);
    assert!(ctx.recommendations.planetary_day.is_some());
}
