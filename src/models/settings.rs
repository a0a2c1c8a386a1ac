use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub version: String,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub context: ContextSettings,
    #[serde(default)]
    pub embedding: EmbeddingSettings,
    #[serde(default)]
    pub user: UserSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            database: DatabaseSettings::default(),
            context: ContextSettings::default(),
            embedding: EmbeddingSettings::default(),
            user: UserSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
    #[serde(default = "default_reaper_interval")]
    pub reaper_interval_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "cosmicflow.db".to_string(),
            reaper_interval_secs: default_reaper_interval(),
        }
    }
}

fn default_reaper_interval() -> u64 {
    6 * 60 * 60
}

/// What the builder does when a turn carries no utterance at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoUtteranceMode {
    /// Run every derivation.
    Full,
    /// Run none; only the moon state and the table lookups are produced.
    Minimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSettings {
    pub no_utterance_mode: NoUtteranceMode,
    pub derivation_timeout_ms: u64,
    pub transit_top_n: usize,
    pub eclipse_months_ahead: u32,
    #[serde(default = "default_citation_limit")]
    pub citation_limit: usize,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            no_utterance_mode: NoUtteranceMode::Full,
            derivation_timeout_ms: 2_000,
            transit_top_n: 10,
            eclipse_months_ahead: 6,
            citation_limit: default_citation_limit(),
        }
    }
}

fn default_citation_limit() -> usize {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingSettings {
    pub enabled: bool,
    pub api_key: String,
    pub url: String,
    pub model: String,
    pub timeout_ms: u64,
    pub batch_size: usize,
    pub batch_delay_ms: u64,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            url: "https://api.openai.com/v1/embeddings".to_string(),
            model: "text-embedding-3-small".to_string(),
            timeout_ms: 5_000,
            batch_size: 10,
            batch_delay_ms: 1_000,
        }
    }
}

impl EmbeddingSettings {
    /// Embedding is usable only when switched on and a key is present.
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// IANA zone used for the planetary day and mirror hours.
    pub timezone: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
        }
    }
}

impl UserSettings {
    pub fn tz(&self) -> chrono_tz::Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            log::warn!("[Settings] Unknown timezone {}, using UTC", self.timezone);
            chrono_tz::UTC
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_fill_in_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"version":"1.0.0","context":{"no_utterance_mode":"minimal","derivation_timeout_ms":500,"transit_top_n":5,"eclipse_months_ahead":3}}"#)
                .unwrap();
        assert_eq!(settings.context.no_utterance_mode, NoUtteranceMode::Minimal);
        assert_eq!(settings.context.citation_limit, 3);
        assert_eq!(settings.embedding.batch_size, 10);
        assert_eq!(settings.database.path, "cosmicflow.db");
    }

    #[test]
    fn bad_timezone_falls_back_to_utc() {
        let user = UserSettings {
            timezone: "Mars/Olympus_Mons".to_string(),
        };
        assert_eq!(user.tz(), chrono_tz::UTC);
    }
}
