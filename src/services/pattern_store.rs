use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::database::{queries, SharedConnection};
use crate::error::{CosmicError, CosmicResult};
use crate::models::{
    NewPattern, PatternCategory, PatternFilter, PatternStats, SaveReport, StoredPattern,
};

/// Cache of derived patterns with category-based expiry.
#[derive(Clone)]
pub struct PatternStore {
    conn: SharedConnection,
}

impl PatternStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    async fn blocking<T, F>(&self, f: F) -> CosmicResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> CosmicResult<T> + Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|e| CosmicError::store(e))?;
            f(&*guard)
        })
        .await
        .map_err(CosmicError::store)?
    }

    pub async fn save(&self, user_id: &str, patterns: Vec<NewPattern>) -> SaveReport {
        self.save_at(user_id, patterns, Utc::now()).await
    }

    /// Upserts each pattern on its own; one failure never rolls back the rest.
    pub async fn save_at(&self, user_id: &str, patterns: Vec<NewPattern>, now: DateTime<Utc>) -> SaveReport {
        if patterns.is_empty() {
            return SaveReport::default();
        }
        let total = patterns.len();
        let user = user_id.to_string();
        let result = self
            .blocking(move |conn| {
                let mut report = SaveReport::default();
                for pattern in &patterns {
                    match queries::upsert_pattern(conn, &user, pattern, now.timestamp()) {
                        Ok(()) => report.saved += 1,
                        Err(e) => {
                            log::error!(
                                "[PatternStore] Failed to save {} ({}): {}",
                                pattern.pattern_type,
                                pattern.identity_key,
                                e
                            );
                            report.failed += 1;
                        }
                    }
                }
                Ok(report)
            })
            .await;

        match result {
            Ok(report) => {
                log::debug!(
                    "[PatternStore] Saved {} patterns for {} ({} failed)",
                    report.saved,
                    user_id,
                    report.failed
                );
                report
            }
            Err(e) => {
                log::error!("[PatternStore] Save batch for {} failed: {}", user_id, e);
                SaveReport {
                    saved: 0,
                    failed: total,
                }
            }
        }
    }

    pub async fn get(&self, user_id: &str, filter: PatternFilter) -> Vec<StoredPattern> {
        self.get_at(user_id, filter, Utc::now()).await
    }

    /// Unexpired rows matching the filter. An unavailable store reads as empty.
    pub async fn get_at(&self, user_id: &str, filter: PatternFilter, now: DateTime<Utc>) -> Vec<StoredPattern> {
        let user = user_id.to_string();
        let result = self
            .blocking(move |conn| {
                queries::get_patterns(conn, &user, &filter, now.timestamp()).map_err(CosmicError::store)
            })
            .await;
        result.unwrap_or_else(|e| {
            log::warn!("[PatternStore] Read for {} degraded to empty: {}", user_id, e);
            Vec::new()
        })
    }

    /// Drops every row of one category for a user.
    pub async fn clear_category(&self, user_id: &str, category: PatternCategory) -> CosmicResult<usize> {
        let user = user_id.to_string();
        let removed = self
            .blocking(move |conn| {
                queries::delete_patterns_in_category(conn, &user, category).map_err(CosmicError::store)
            })
            .await?;
        log::info!(
            "[PatternStore] Cleared {} {} patterns for {}",
            removed,
            category.as_str(),
            user_id
        );
        Ok(removed)
    }

    pub async fn reap_expired(&self) -> CosmicResult<usize> {
        self.reap_expired_at(Utc::now()).await
    }

    pub async fn reap_expired_at(&self, now: DateTime<Utc>) -> CosmicResult<usize> {
        self.blocking(move |conn| {
            queries::delete_expired_patterns(conn, now.timestamp()).map_err(CosmicError::store)
        })
        .await
    }

    pub async fn stats(&self) -> CosmicResult<PatternStats> {
        let now = Utc::now().timestamp();
        self.blocking(move |conn| queries::get_pattern_stats(conn, now).map_err(CosmicError::store))
            .await
    }

    /// Periodic reaping, off the request path.
    pub fn start_reaper(self: Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            log::info!("[PatternStore] Reaper started (every {}s)", interval.as_secs());
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match self.reap_expired().await {
                    Ok(0) => {}
                    Ok(n) => log::info!("[PatternStore] Reaped {} expired patterns", n),
                    Err(e) => log::error!("[PatternStore] Reap failed: {}", e),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{open_in_memory, shared};
    use crate::models::PatternCategory;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use serde_json::json;

    fn store() -> PatternStore {
        PatternStore::new(shared(open_in_memory().unwrap()))
    }

    fn pattern(pattern_type: &str, key: &str) -> NewPattern {
        NewPattern {
            pattern_type: pattern_type.to_string(),
            identity_key: key.to_string(),
            payload: json!({ "key": key }),
            confidence: 0.9,
        }
    }

    #[tokio::test]
    async fn upsert_is_idempotent() {
        let store = store();
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t1 = t0 + ChronoDuration::hours(5);

        let report = store.save_at("u1", vec![pattern("stellium", "k1")], t0).await;
        assert_eq!(report, SaveReport { saved: 1, failed: 0 });
        store.save_at("u1", vec![pattern("stellium", "k1")], t1).await;

        let rows = store.get_at("u1", PatternFilter::default(), t1).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first_detected, t0);
        assert_eq!(rows[0].last_observed, t1);
    }

    #[tokio::test]
    async fn ttl_per_category() {
        let store = store();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        store
            .save_at(
                "u1",
                vec![
                    pattern("stellium", "natal"),
                    pattern("planetary_return", "cyclical"),
                    pattern("eclipse", "transient"),
                    pattern("progressed_chart", "progression"),
                ],
                now,
            )
            .await;

        for row in store.get_at("u1", PatternFilter::default(), now).await {
            let expected = match row.category {
                PatternCategory::Natal => None,
                PatternCategory::Cyclical => Some(now + ChronoDuration::days(90)),
                PatternCategory::Transient => Some(now + ChronoDuration::days(7)),
                PatternCategory::Progression => Some(now + ChronoDuration::days(365)),
            };
            match (row.expires_at, expected) {
                (None, None) => {}
                (Some(got), Some(want)) => assert!((got - want).num_seconds().abs() <= 1),
                other => panic!("unexpected expiry {:?} for {}", other, row.pattern_type),
            }
        }
    }

    #[tokio::test]
    async fn expired_rows_hide_until_reaped() {
        let store = store();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        store
            .save_at("u1", vec![pattern("eclipse", "e"), pattern("stellium", "s")], now)
            .await;

        let later = now + ChronoDuration::days(8);
        assert_eq!(store.get_at("u1", PatternFilter::default(), later).await.len(), 1);
        let everything = PatternFilter {
            include_expired: true,
            ..PatternFilter::default()
        };
        assert_eq!(store.get_at("u1", everything, later).await.len(), 2);

        assert_eq!(store.reap_expired_at(later).await.unwrap(), 1);
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.by_category.get("natal"), Some(&1));
    }

    #[tokio::test]
    async fn reaper_runs_in_the_background() {
        let store = Arc::new(store());
        let long_ago = Utc::now() - ChronoDuration::days(30);
        store.save_at("u1", vec![pattern("eclipse", "old")], long_ago).await;

        let handle = store.clone().start_reaper(Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(150)).await;
        handle.abort();

        assert_eq!(store.stats().await.unwrap().total, 0);
    }
}
