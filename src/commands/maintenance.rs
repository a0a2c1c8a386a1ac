use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::commands::AppContext;
use crate::models::PatternStats;

#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub patterns: PatternStats,
    /// Absent when no embedding service is configured.
    pub embeddings: Option<BTreeMap<String, usize>>,
}

pub async fn reap(app: &AppContext) -> Result<usize> {
    let removed = app.store.reap_expired().await?;
    log::info!("[PatternStore] Reaped {} expired patterns", removed);
    Ok(removed)
}

pub async fn stats(app: &AppContext) -> Result<StoreStats> {
    let patterns = app.store.stats().await?;
    let embeddings = match &app.retriever {
        Some(retriever) => Some(retriever.counts().await?),
        None => None,
    };
    Ok(StoreStats {
        patterns,
        embeddings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewPattern, Settings};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn reap_only_removes_expired_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.database.path = dir.path().join("cf.db").to_string_lossy().into_owned();
        settings.embedding.enabled = false;
        let app = AppContext::open(settings).unwrap();

        let transient = NewPattern {
            pattern_type: "eclipse".to_string(),
            identity_key: "v1:eclipse:2020-01-10T19:10".to_string(),
            payload: serde_json::json!({}),
            confidence: 0.7,
        };
        let natal = NewPattern {
            pattern_type: "stellium".to_string(),
            identity_key: "v1:stellium:taurus".to_string(),
            payload: serde_json::json!({}),
            confidence: 0.95,
        };
        let long_ago = Utc::now() - Duration::days(30);
        app.store.save_at("u1", vec![transient, natal], long_ago).await;

        assert_eq!(reap(&app).await.unwrap(), 1);
        let s = stats(&app).await.unwrap();
        assert_eq!(s.patterns.total, 1);
        assert!(s.embeddings.is_none());
    }
}
