//! Handlers behind the `cosmicflow` subcommands. Each one takes the shared
//! [`AppContext`] built once at startup.

pub mod context;
pub mod knowledge;
pub mod maintenance;
pub mod profile;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::database::{self, SharedConnection};
use crate::models::Settings;
use crate::services::{
    ContextBuilder, OpenAiEmbedder, PatternStore, Retriever, SqliteChartSource,
    StaticTransitSource, TransitSource,
};

/// Clients shared by every command: one connection, one store, at most one
/// retriever.
pub struct AppContext {
    pub settings: Settings,
    pub conn: SharedConnection,
    pub store: Arc<PatternStore>,
    pub retriever: Option<Arc<Retriever>>,
}

impl AppContext {
    /// `settings` must already carry its environment overrides
    /// (see [`crate::utils::config::load_settings`]).
    pub fn open(settings: Settings) -> Result<Self> {
        let db_path = Path::new(&settings.database.path);
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating data directory {}", parent.display()))?;
        }
        let conn = database::init_database(db_path)
            .with_context(|| format!("opening database {}", db_path.display()))?;
        let conn = database::shared(conn);
        log::info!("[Config] Database ready at {}", db_path.display());

        let retriever = if settings.embedding.is_configured() {
            let embedder = OpenAiEmbedder::from_settings(&settings.embedding)?;
            Some(Arc::new(Retriever::new(
                Arc::new(embedder),
                conn.clone(),
                Duration::from_millis(settings.embedding.timeout_ms),
            )))
        } else {
            log::info!("[Config] Embedding service not configured; citations disabled");
            None
        };

        Ok(Self {
            store: Arc::new(PatternStore::new(conn.clone())),
            conn,
            retriever,
            settings,
        })
    }

    pub fn retriever(&self) -> Result<&Arc<Retriever>> {
        self.retriever
            .as_ref()
            .context("embedding service is not configured (set EMBEDDING_API_KEY)")
    }

    /// A builder reading charts from the database and transits from `transits`
    /// (a JSON list) when given.
    pub fn builder(&self, transits: Option<&Path>) -> Result<ContextBuilder> {
        let sky: Arc<dyn TransitSource> = match transits {
            Some(path) => Arc::new(StaticTransitSource::from_json_file(path)?),
            None => Arc::new(StaticTransitSource::default()),
        };
        let builder = ContextBuilder::new(
            Arc::new(SqliteChartSource::new(self.conn.clone())),
            sky,
            self.store.clone(),
            self.settings.context.clone(),
            self.settings.user.tz(),
        );
        Ok(match &self.retriever {
            Some(retriever) => builder.with_retriever(retriever.clone()),
            None => builder,
        })
    }
}
