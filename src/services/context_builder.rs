//! Per-turn orchestration: decide what the turn needs, fetch the chart once,
//! fan the requested derivations out, then fan in, synthesize and persist.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::error::{CosmicError, CosmicResult};
use crate::models::{
    AspectPattern, BirthChart, ContextRequest, ContextRequirements, ContextSettings,
    CosmicContext, EclipseRelevance, MoonState, NewPattern, NoUtteranceMode, OmittedDerivation,
    PatternCategory, PatternFilter, PersonalTransitImpact, PlanetaryReturn, ProgressedChart,
    QueryContext, RequirementOverrides,
};
use crate::services::derivations::{
    detect_all, eclipse_relevance, eclipses, natal_patterns, personal_transits, planetary_returns,
    progressed_chart, progressions, returns,
};
use crate::services::intent_analyzer;
use crate::services::pattern_store::PatternStore;
use crate::services::recommender::{self, RecommendationInput};
use crate::services::retrieval::Retriever;
use crate::services::sources::{ChartSource, TransitSource};

/// Natal patterns for a turn and whether they came from detection rather
/// than the store.
struct NatalRead {
    patterns: Vec<AspectPattern>,
    pending: Vec<&'static str>,
    detected: bool,
}

/// Runs a CPU derivation off the async runtime under a deadline. Panics come
/// back as a `JoinError` and are reported as a derivation failure.
async fn derive<T, F>(name: &'static str, limit: Duration, f: F) -> CosmicResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    match tokio::time::timeout(limit, tokio::task::spawn_blocking(f)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(join_error)) => Err(CosmicError::derivation(name, join_error)),
        Err(_) => Err(CosmicError::Timeout {
            operation: name.to_string(),
            millis: limit.as_millis() as u64,
        }),
    }
}

/// Picks the turn's query flags and derivation requirements.
pub fn plan(
    utterance: Option<&str>,
    has_chart: bool,
    has_birthday: bool,
    overrides: Option<&RequirementOverrides>,
    mode: NoUtteranceMode,
) -> (Option<QueryContext>, ContextRequirements) {
    let (query, base) = match utterance {
        Some(text) => {
            let query = intent_analyzer::analyze(text, has_chart, has_birthday);
            let requirements = intent_analyzer::derive_requirements(text, &query, has_birthday);
            (Some(query), requirements)
        }
        None => match mode {
            NoUtteranceMode::Full => (None, ContextRequirements::all()),
            NoUtteranceMode::Minimal => (None, ContextRequirements::none()),
        },
    };
    let requirements = overrides.map(|o| o.apply(base)).unwrap_or(base);
    (query, requirements)
}

pub struct ContextBuilder {
    charts: Arc<dyn ChartSource>,
    sky: Arc<dyn TransitSource>,
    store: Arc<PatternStore>,
    retriever: Option<Arc<Retriever>>,
    settings: ContextSettings,
    tz: Tz,
}

impl ContextBuilder {
    pub fn new(
        charts: Arc<dyn ChartSource>,
        sky: Arc<dyn TransitSource>,
        store: Arc<PatternStore>,
        settings: ContextSettings,
        tz: Tz,
    ) -> Self {
        Self {
            charts,
            sky,
            store,
            retriever: None,
            settings,
            tz,
        }
    }

    pub fn with_retriever(mut self, retriever: Arc<Retriever>) -> Self {
        self.retriever = Some(retriever);
        self
    }

    fn limit(&self) -> Duration {
        Duration::from_millis(self.settings.derivation_timeout_ms)
    }

    async fn fetch<T>(&self, operation: &str, call: impl Future<Output = CosmicResult<T>>) -> CosmicResult<T> {
        let limit = self.limit();
        tokio::time::timeout(limit, call)
            .await
            .map_err(|_| CosmicError::Timeout {
                operation: operation.to_string(),
                millis: limit.as_millis() as u64,
            })?
    }

    async fn transits(&self, chart: Arc<BirthChart>, now: DateTime<Utc>) -> CosmicResult<Vec<PersonalTransitImpact>> {
        let upcoming = self
            .fetch("upcoming_transits", self.sky.upcoming_transits(now))
            .await?;
        let top_n = self.settings.transit_top_n;
        derive("personal_transits", self.limit(), move || {
            personal_transits(&chart, &upcoming, now, top_n)
        })
        .await
    }

    /// Stored natal patterns win while they still match the chart. Rows left
    /// over from an earlier chart are cleared and detection runs again.
    async fn natal(&self, user_id: &str, chart: Arc<BirthChart>, now: DateTime<Utc>) -> CosmicResult<NatalRead> {
        let stored = self
            .store
            .get_at(user_id, PatternFilter::category(PatternCategory::Natal), now)
            .await;
        let cached: Vec<AspectPattern> = stored
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row.payload) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::debug!("[ContextBuilder] Skipping unreadable pattern {}: {}", row.identity_key, e);
                    None
                }
            })
            .collect();

        if !cached.is_empty() {
            if cached.iter().all(|p| p.fits(&chart)) {
                return Ok(NatalRead {
                    patterns: cached,
                    pending: natal_patterns::pending_detectors(),
                    detected: false,
                });
            }
            log::info!("[ContextBuilder] Stored natal patterns for {} predate the chart, re-detecting", user_id);
            if let Err(e) = self.store.clear_category(user_id, PatternCategory::Natal).await {
                log::warn!("[ContextBuilder] Could not clear stale natal patterns for {}: {}", user_id, e);
            }
        }

        let (patterns, pending) = derive("natal_patterns", self.limit(), move || detect_all(&chart)).await?;
        Ok(NatalRead {
            patterns,
            pending,
            detected: true,
        })
    }

    async fn moon(&self, now: DateTime<Utc>) -> MoonState {
        match self.fetch("moon_state", self.sky.moon_state(now)).await {
            Ok(moon) => moon,
            Err(e) => {
                log::warn!("[ContextBuilder] Moon source failed, using local ephemeris: {}", e);
                MoonState::at(now)
            }
        }
    }

    /// Assembles the context for one turn. Never fails; what could not be
    /// produced is listed in `missing` or `omitted`.
    pub async fn build(&self, request: ContextRequest) -> CosmicContext {
        let turn_id = Uuid::new_v4();
        let ContextRequest {
            user_id,
            utterance,
            overrides,
            intentions,
            now,
        } = request;
        log::info!("[ContextBuilder] Turn {} started for {}", turn_id, user_id);

        let (chart_result, birthday_result) = tokio::join!(
            self.fetch("fetch_chart", self.charts.fetch_chart(&user_id)),
            self.fetch("fetch_birthday", self.charts.fetch_birthday(&user_id)),
        );

        let mut missing = Vec::new();
        let mut chart_failed = false;
        let chart: Option<Arc<BirthChart>> = match chart_result {
            Ok(Some(raw)) => Some(Arc::new(BirthChart::from_raw(&raw))).filter(|c| !c.is_empty()),
            Ok(None) => None,
            Err(e) => {
                log::warn!("[ContextBuilder] Turn {}: chart fetch failed: {}", turn_id, e);
                chart_failed = true;
                None
            }
        };
        if chart.is_none() {
            missing.push("birth_chart".to_string());
        }
        let birthday: Option<NaiveDate> = birthday_result.unwrap_or_else(|e| {
            log::warn!("[ContextBuilder] Turn {}: birthday fetch failed: {}", turn_id, e);
            None
        });
        if birthday.is_none() {
            missing.push("birthday".to_string());
        }

        let (query, requirements) = plan(
            utterance.as_deref(),
            chart.is_some(),
            birthday.is_some(),
            overrides.as_ref(),
            self.settings.no_utterance_mode,
        );
        log::debug!("[ContextBuilder] Turn {} requirements: {:?}", turn_id, requirements);

        let limit = self.limit();
        let months = self.settings.eclipse_months_ahead;
        let with_chart = |wanted: bool| chart.clone().filter(|_| wanted);

        let transits_task = async {
            let chart = with_chart(requirements.needs_personal_transits)?;
            Some(self.transits(chart, now).await)
        };
        let natal_task = async {
            let chart = with_chart(requirements.needs_natal_patterns)?;
            Some(self.natal(&user_id, chart, now).await)
        };
        let returns_task = async {
            let chart = with_chart(requirements.needs_planetary_returns)?;
            let Some(birthday) = birthday else {
                return Some(Err(CosmicError::MissingProfileData("birthday".to_string())));
            };
            Some(derive("planetary_returns", limit, move || planetary_returns(&chart, birthday, now)).await)
        };
        let progression_task = async {
            let chart = with_chart(requirements.needs_progressed_chart)?;
            let Some(birthday) = birthday else {
                return Some(Err(CosmicError::MissingProfileData("birthday".to_string())));
            };
            Some(derive("progressed_chart", limit, move || progressed_chart(&chart, birthday, now)).await)
        };
        let eclipses_task = async {
            let chart = with_chart(requirements.needs_eclipses)?;
            Some(derive("eclipses", limit, move || eclipse_relevance(&chart, now, months)).await)
        };
        let citations_task = async {
            match (&self.retriever, utterance.as_deref()) {
                (Some(retriever), Some(text)) => {
                    retriever.search(text, self.settings.citation_limit, None).await
                }
                _ => Vec::new(),
            }
        };

        let (transits, natal, returns_found, progression, eclipses_found, citations, moon) = tokio::join!(
            transits_task,
            natal_task,
            returns_task,
            progression_task,
            eclipses_task,
            citations_task,
            self.moon(now),
        );

        let mut omitted = Vec::new();
        let personal_transits = settle(turn_id, "personal_transits", transits, &mut omitted);
        let natal = settle(turn_id, "natal_patterns", natal, &mut omitted);
        let planetary_returns = settle(turn_id, "planetary_returns", returns_found, &mut omitted);
        let progressed_chart = settle(turn_id, "progressed_chart", progression, &mut omitted);
        let eclipses = settle(turn_id, "eclipses", eclipses_found, &mut omitted);

        if chart_failed {
            for (wanted, name) in [
                (requirements.needs_personal_transits, "personal_transits"),
                (requirements.needs_natal_patterns, "natal_patterns"),
                (requirements.needs_planetary_returns, "planetary_returns"),
                (requirements.needs_progressed_chart, "progressed_chart"),
                (requirements.needs_eclipses, "eclipses"),
            ] {
                if wanted {
                    omitted.push(OmittedDerivation {
                        derivation: name.to_string(),
                        reason: "birth chart unavailable".to_string(),
                    });
                }
            }
        }
        let produced = personal_transits.is_some()
            || natal.is_some()
            || planetary_returns.is_some()
            || progressed_chart.is_some()
            || eclipses.is_some();
        let degraded = chart_failed && !produced;

        let effective_query =
            query.clone().unwrap_or_else(|| intent_analyzer::analyze("", chart.is_some(), birthday.is_some()));
        let recommendations = recommender::recommend(&RecommendationInput {
            chart: chart.as_deref(),
            transits: personal_transits.as_deref().unwrap_or(&[]),
            moon: &moon,
            query: &effective_query,
            intentions: &intentions,
            birthday,
            now,
            tz: self.tz,
        });

        let batch = save_batch(
            natal.as_ref(),
            planetary_returns.as_deref(),
            progressed_chart.as_ref(),
            eclipses.as_deref(),
        );
        if !batch.is_empty() {
            let report = self.store.save_at(&user_id, batch, now).await;
            log::info!(
                "[ContextBuilder] Turn {} saved {} patterns ({} failed)",
                turn_id,
                report.saved,
                report.failed
            );
        }

        let (natal_patterns, pending_detectors) = match natal {
            Some(read) => (Some(read.patterns), read.pending),
            None => (None, Vec::new()),
        };

        log::info!(
            "[ContextBuilder] Turn {} done: {} omitted, {} missing, {} citations, ~{} tokens{}",
            turn_id,
            omitted.len(),
            missing.len(),
            citations.len(),
            requirements.estimated_tokens(),
            if degraded { " (degraded)" } else { "" }
        );

        CosmicContext {
            turn_id,
            user_id,
            generated_at: now,
            query,
            requirements,
            estimated_tokens: requirements.estimated_tokens(),
            moon,
            natal_placements: chart.map(|c| c.placements.clone()).unwrap_or_default(),
            personal_transits,
            natal_patterns,
            pending_detectors,
            planetary_returns,
            progressed_chart,
            eclipses,
            recommendations,
            citations,
            missing,
            omitted,
            degraded,
        }
    }
}

/// Unwraps one derivation outcome, recording a failure as omitted. Missing
/// profile data is already reported in `missing`.
fn settle<T>(
    turn_id: Uuid,
    name: &str,
    outcome: Option<CosmicResult<T>>,
    omitted: &mut Vec<OmittedDerivation>,
) -> Option<T> {
    match outcome? {
        Ok(value) => Some(value),
        Err(CosmicError::MissingProfileData(what)) => {
            log::debug!("[ContextBuilder] Turn {}: {} skipped, no {}", turn_id, name, what);
            None
        }
        Err(e) => {
            log::warn!("[ContextBuilder] Turn {}: {} omitted: {}", turn_id, name, e);
            omitted.push(OmittedDerivation {
                derivation: name.to_string(),
                reason: e.to_string(),
            });
            None
        }
    }
}

/// Everything worth persisting from a finished turn.
fn save_batch(
    natal: Option<&NatalRead>,
    returns_found: Option<&[PlanetaryReturn]>,
    progressed: Option<&ProgressedChart>,
    eclipses_found: Option<&[EclipseRelevance]>,
) -> Vec<NewPattern> {
    let mut converted: Vec<Result<NewPattern, serde_json::Error>> = Vec::new();
    if let Some(read) = natal.filter(|n| n.detected) {
        converted.extend(read.patterns.iter().map(AspectPattern::to_new_pattern));
    }
    if let Some(found) = returns_found {
        converted.extend(found.iter().filter(|r| r.is_active).map(returns::to_new_pattern));
    }
    if let Some(p) = progressed {
        converted.push(progressions::to_new_pattern(p));
    }
    if let Some(found) = eclipses_found {
        converted.extend(
            found
                .iter()
                .filter(|e| !e.contacts.is_empty())
                .map(eclipses::to_new_pattern),
        );
    }

    converted
        .into_iter()
        .filter_map(|result| match result {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::error!("[ContextBuilder] Could not serialize pattern: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{open_in_memory, shared};
    use crate::models::{Body, ContextPreset, PatternShape, RawPlacement, Sign, UpcomingTransit};
    use crate::services::sources::StaticTransitSource;
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct MemoryCharts {
        chart: Option<Vec<RawPlacement>>,
        birthday: Option<NaiveDate>,
        broken: bool,
    }

    #[async_trait]
    impl ChartSource for MemoryCharts {
        async fn fetch_chart(&self, _user_id: &str) -> CosmicResult<Option<Vec<RawPlacement>>> {
            if self.broken {
                return Err(CosmicError::store("disk gone"));
            }
            Ok(self.chart.clone())
        }

        async fn fetch_birthday(&self, _user_id: &str) -> CosmicResult<Option<NaiveDate>> {
            Ok(self.birthday)
        }
    }

    /// Hangs on the transit feed, answers the Moon normally.
    struct SlowSky;

    #[async_trait]
    impl TransitSource for SlowSky {
        async fn upcoming_transits(&self, _reference: DateTime<Utc>) -> CosmicResult<Vec<UpcomingTransit>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Vec::new())
        }
    }

    fn placement(body: &str, sign: &str, degree: f64, house: u8) -> RawPlacement {
        RawPlacement {
            body: body.to_string(),
            sign: sign.to_string(),
            degree,
            ecliptic_longitude: None,
            house: Some(house),
        }
    }

    fn taurus_stellium() -> Vec<RawPlacement> {
        vec![
            placement("Sun", "Taurus", 5.0, 2),
            placement("Mercury", "Taurus", 12.0, 2),
            placement("Venus", "Taurus", 20.0, 2),
            placement("Moon", "Cancer", 8.0, 4),
            placement("Jupiter", "Pisces", 14.0, 12),
            placement("Saturn", "Capricorn", 22.0, 10),
        ]
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn builder_with(charts: MemoryCharts, sky: Arc<dyn TransitSource>) -> (ContextBuilder, Arc<PatternStore>) {
        let store = Arc::new(PatternStore::new(shared(open_in_memory().unwrap())));
        let settings = ContextSettings {
            derivation_timeout_ms: 200,
            ..ContextSettings::default()
        };
        let builder = ContextBuilder::new(Arc::new(charts), sky, store.clone(), settings, chrono_tz::UTC);
        (builder, store)
    }

    fn request(utterance: Option<&str>) -> ContextRequest {
        ContextRequest {
            now: now(),
            ..ContextRequest::new("u1", utterance)
        }
    }

    fn full_profile() -> MemoryCharts {
        MemoryCharts {
            chart: Some(taurus_stellium()),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 25),
            broken: false,
        }
    }

    #[test]
    fn overrides_beat_heuristics() {
        let (_, base) = plan(Some("what are my transits today"), true, true, None, NoUtteranceMode::Full);
        assert!(base.needs_personal_transits);

        let overrides = RequirementOverrides {
            needs_personal_transits: Some(false),
            needs_eclipses: Some(true),
            ..RequirementOverrides::default()
        };
        let (_, r) = plan(
            Some("what are my transits today"),
            true,
            true,
            Some(&overrides),
            NoUtteranceMode::Full,
        );
        assert!(!r.needs_personal_transits);
        assert!(r.needs_eclipses);
    }

    #[test]
    fn no_utterance_follows_the_configured_mode() {
        let (query, full) = plan(None, true, true, None, NoUtteranceMode::Full);
        assert!(query.is_none());
        assert_eq!(full, ContextRequirements::all());
        let (_, minimal) = plan(None, true, true, None, NoUtteranceMode::Minimal);
        assert!(!minimal.any());
    }

    #[tokio::test]
    async fn full_turn_detects_and_saves_natal_patterns() {
        let (builder, store) = builder_with(full_profile(), Arc::new(StaticTransitSource::default()));
        let ctx = builder.build(request(None)).await;

        assert!(ctx.missing.is_empty());
        assert!(ctx.omitted.is_empty(), "{:?}", ctx.omitted);
        assert!(!ctx.degraded);
        assert_eq!(ctx.natal_placements.len(), 6);
        assert_eq!(ctx.estimated_tokens, 1_200);

        let natal = ctx.natal_patterns.unwrap();
        assert_eq!(natal.len(), 1);
        assert_eq!(natal[0].shape().signs, vec![Sign::Taurus]);
        assert_eq!(ctx.pending_detectors, natal_patterns::pending_detectors());
        assert_eq!(&ctx.pending_detectors[..3], ["grand_trine", "t_square", "yod"]);
        assert!(ctx.pending_detectors.contains(&"season_correlation"));
        assert!(ctx.progressed_chart.is_some());
        assert!(ctx.personal_transits.unwrap().is_empty());

        let saved = store
            .get_at("u1", PatternFilter::category(PatternCategory::Natal), now())
            .await;
        assert_eq!(saved.len(), 1);
        let progression = store
            .get_at("u1", PatternFilter::category(PatternCategory::Progression), now())
            .await;
        assert_eq!(progression.len(), 1);
    }

    #[tokio::test]
    async fn stored_natal_patterns_are_read_through() {
        let charts = MemoryCharts {
            chart: Some(vec![
                placement("Sun", "Leo", 10.0, 5),
                placement("Venus", "Leo", 2.0, 5),
                placement("Mars", "Leo", 28.0, 5),
            ]),
            birthday: None,
            broken: false,
        };
        let (builder, store) = builder_with(charts, Arc::new(StaticTransitSource::default()));
        let remembered = AspectPattern::Stellium(PatternShape {
            bodies: vec![Body::Mars, Body::Venus, Body::Sun],
            signs: vec![Sign::Leo],
            houses: vec![5],
            confidence: 0.95,
        });
        store
            .save_at("u1", vec![remembered.to_new_pattern().unwrap()], now())
            .await;

        let mut req = request(Some("tell me about my natal chart patterns"));
        req.overrides = Some(ContextPreset::NatalStudy.into());
        let ctx = builder.build(req).await;
        assert_eq!(ctx.natal_patterns, Some(vec![remembered]));
        assert_eq!(ctx.missing, vec!["birthday".to_string()]);
    }

    #[tokio::test]
    async fn stale_natal_rows_are_redetected() {
        let (builder, store) = builder_with(full_profile(), Arc::new(StaticTransitSource::default()));
        let stale = AspectPattern::Stellium(PatternShape {
            bodies: vec![Body::Mars, Body::Venus, Body::Sun],
            signs: vec![Sign::Leo],
            houses: vec![5],
            confidence: 0.95,
        });
        store.save_at("u1", vec![stale.to_new_pattern().unwrap()], now()).await;

        let ctx = builder.build(request(None)).await;
        let natal = ctx.natal_patterns.unwrap();
        assert_eq!(natal.len(), 1);
        assert_eq!(natal[0].shape().signs, vec![Sign::Taurus]);

        let saved = store
            .get_at("u1", PatternFilter::category(PatternCategory::Natal), now())
            .await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].identity_key, natal[0].identity_key());
    }

    #[tokio::test]
    async fn birthday_derivations_wait_for_a_birthday() {
        let charts = MemoryCharts {
            chart: Some(taurus_stellium()),
            birthday: None,
            broken: false,
        };
        let (builder, _) = builder_with(charts, Arc::new(StaticTransitSource::default()));
        let ctx = builder.build(request(None)).await;

        assert_eq!(ctx.missing, vec!["birthday".to_string()]);
        assert!(ctx.planetary_returns.is_none());
        assert!(ctx.progressed_chart.is_none());
        assert!(ctx.omitted.is_empty(), "{:?}", ctx.omitted);
        assert!(ctx.natal_patterns.is_some());
    }

    #[test]
    fn missing_profile_data_is_not_an_omission() {
        let mut omitted = Vec::new();
        let outcome: Option<CosmicResult<u8>> =
            Some(Err(CosmicError::MissingProfileData("birthday".to_string())));
        assert_eq!(settle(Uuid::nil(), "planetary_returns", outcome, &mut omitted), None);
        assert!(omitted.is_empty());

        let failed: Option<CosmicResult<u8>> = Some(Err(CosmicError::derivation("eclipses", "boom")));
        assert_eq!(settle(Uuid::nil(), "eclipses", failed, &mut omitted), None);
        assert_eq!(omitted.len(), 1);
    }

    #[tokio::test]
    async fn missing_chart_is_reported_not_degraded() {
        let charts = MemoryCharts {
            chart: None,
            birthday: None,
            broken: false,
        };
        let (builder, _) = builder_with(charts, Arc::new(StaticTransitSource::default()));
        let ctx = builder.build(request(Some("which crystals suit the full moon?"))).await;
        assert_eq!(ctx.missing, vec!["birth_chart".to_string(), "birthday".to_string()]);
        assert!(ctx.natal_placements.is_empty());
        assert!(ctx.omitted.is_empty());
        assert!(!ctx.degraded);
        assert!(!ctx.recommendations.crystals.is_empty());
    }

    #[tokio::test]
    async fn failed_chart_source_degrades_the_turn() {
        let charts = MemoryCharts {
            chart: None,
            birthday: None,
            broken: true,
        };
        let (builder, _) = builder_with(charts, Arc::new(StaticTransitSource::default()));
        let ctx = builder.build(request(None)).await;
        assert!(ctx.degraded);
        assert_eq!(ctx.omitted.len(), 5);
        assert!(ctx.omitted.iter().all(|o| o.reason == "birth chart unavailable"));
    }

    #[tokio::test]
    async fn slow_transit_feed_only_drops_transits() {
        let (builder, _) = builder_with(full_profile(), Arc::new(SlowSky));
        let ctx = builder.build(request(None)).await;

        assert!(ctx.personal_transits.is_none());
        assert_eq!(ctx.omitted.len(), 1);
        assert_eq!(ctx.omitted[0].derivation, "personal_transits");
        assert!(ctx.omitted[0].reason.contains("timed out"));
        assert!(ctx.natal_patterns.is_some());
        assert!(ctx.eclipses.is_some());
        assert!(!ctx.degraded);
    }

}
