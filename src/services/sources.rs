use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::database::{queries, SharedConnection};
use crate::error::{CosmicError, CosmicResult};
use crate::models::{MoonState, RawPlacement, UpcomingTransit};

/// Access to the user's natal data.
#[async_trait]
pub trait ChartSource: Send + Sync {
    /// `Ok(None)` when the user has not entered birth data.
    async fn fetch_chart(&self, user_id: &str) -> CosmicResult<Option<Vec<RawPlacement>>>;

    async fn fetch_birthday(&self, user_id: &str) -> CosmicResult<Option<NaiveDate>>;
}

/// Access to the sky: the transit feed and the current Moon.
#[async_trait]
pub trait TransitSource: Send + Sync {
    async fn upcoming_transits(&self, reference: DateTime<Utc>) -> CosmicResult<Vec<UpcomingTransit>>;

    async fn moon_state(&self, reference: DateTime<Utc>) -> CosmicResult<MoonState> {
        Ok(MoonState::at(reference))
    }
}

/// Reads `birth_charts` and `user_profiles`.
pub struct SqliteChartSource {
    conn: SharedConnection,
}

impl SqliteChartSource {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    async fn with_conn<T, F>(&self, f: F) -> CosmicResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&rusqlite::Connection) -> anyhow::Result<T> + Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|e| CosmicError::store(e))?;
            f(&*guard).map_err(CosmicError::store)
        })
        .await
        .map_err(CosmicError::store)?
    }
}

#[async_trait]
impl ChartSource for SqliteChartSource {
    async fn fetch_chart(&self, user_id: &str) -> CosmicResult<Option<Vec<RawPlacement>>> {
        let user_id = user_id.to_string();
        self.with_conn(move |conn| queries::get_birth_chart(conn, &user_id))
            .await
    }

    async fn fetch_birthday(&self, user_id: &str) -> CosmicResult<Option<NaiveDate>> {
        let user_id = user_id.to_string();
        self.with_conn(move |conn| queries::get_birthday(conn, &user_id))
            .await
    }
}

/// A fixed transit list, loaded once from JSON.
#[derive(Debug, Clone, Default)]
pub struct StaticTransitSource {
    transits: Vec<UpcomingTransit>,
}

impl StaticTransitSource {
    pub fn new(transits: Vec<UpcomingTransit>) -> Self {
        Self { transits }
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading transits from {}", path.display()))?;
        let transits: Vec<UpcomingTransit> = serde_json::from_str(&content)
            .with_context(|| format!("parsing transits in {}", path.display()))?;
        log::info!("[Transits] Loaded {} transits from {}", transits.len(), path.display());
        Ok(Self { transits })
    }
}

#[async_trait]
impl TransitSource for StaticTransitSource {
    async fn upcoming_transits(&self, _reference: DateTime<Utc>) -> CosmicResult<Vec<UpcomingTransit>> {
        Ok(self.transits.clone())
    }
}
