use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{NoUtteranceMode, Settings};

const ENV_API_KEY: &str = "EMBEDDING_API_KEY";
const ENV_MODEL: &str = "EMBEDDING_MODEL";
const ENV_URL: &str = "EMBEDDING_URL";
const ENV_DB: &str = "COSMICFLOW_DB";
const ENV_SETTINGS: &str = "COSMICFLOW_SETTINGS";
const ENV_TZ: &str = "COSMICFLOW_TZ";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn apply_env_defaults(settings: &mut Settings) {
    apply_overrides(settings, env_value);
}

/// Apply environment overrides through `lookup`. The API key only fills a
/// blank value; the rest replace what the settings file says.
pub fn apply_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let explicit = settings.embedding.api_key.trim();
    settings.embedding.api_key = if explicit.is_empty() {
        lookup(ENV_API_KEY).unwrap_or_default()
    } else {
        explicit.to_string()
    };
    if let Some(model) = lookup(ENV_MODEL) {
        settings.embedding.model = model;
    }
    if let Some(url) = lookup(ENV_URL) {
        settings.embedding.url = url;
    }
    if let Some(path) = lookup(ENV_DB) {
        settings.database.path = path;
    }
    if let Some(tz) = lookup(ENV_TZ) {
        settings.user.timezone = tz;
    }
}

pub fn settings_path() -> Option<PathBuf> {
    env_value(ENV_SETTINGS).map(PathBuf::from)
}

/// Read settings from `path` (or `COSMICFLOW_SETTINGS`), falling back to
/// defaults when no file is configured, then layer the environment on top.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path.map(Path::to_path_buf).or_else(settings_path);

    let mut settings = match path {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing settings in {}", path.display()))?
        }
        Some(path) => {
            log::warn!(
                "[Config] Settings file {} not found, using defaults",
                path.display()
            );
            Settings::default()
        }
        None => Settings::default(),
    };

    apply_env_defaults(&mut settings);

    if settings.context.no_utterance_mode == NoUtteranceMode::Full {
        log::debug!("[Config] Turns without an utterance will run every derivation");
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn overrides_replace_values_but_keep_explicit_key() {
        let env: HashMap<&str, &str> = [
            ("EMBEDDING_API_KEY", "from-env"),
            ("EMBEDDING_MODEL", "nomic-embed"),
            ("COSMICFLOW_DB", "/tmp/cf.db"),
            ("COSMICFLOW_TZ", "Europe/London"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.embedding.api_key = "explicit".to_string();
        apply_overrides(&mut settings, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.embedding.api_key, "explicit");
        assert_eq!(settings.embedding.model, "nomic-embed");
        assert_eq!(settings.database.path, "/tmp/cf.db");
        assert_eq!(settings.user.timezone, "Europe/London");
    }

    #[test]
    fn blank_key_is_filled_from_lookup() {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, |k| {
            (k == "EMBEDDING_API_KEY").then(|| "sk-test".to_string())
        });
        assert_eq!(settings.embedding.api_key, "sk-test");
    }

    #[test]
    fn explicit_key_is_trimmed_and_wins() {
        let mut settings = Settings::default();
        settings.embedding.api_key = "  sk-file \n".to_string();
        apply_overrides(&mut settings, |_| Some("from-env".to_string()));
        assert_eq!(settings.embedding.api_key, "sk-file");

        let mut blank = Settings::default();
        blank.embedding.api_key = "   ".to_string();
        apply_overrides(&mut blank, |_| None);
        assert_eq!(blank.embedding.api_key, "");
    }

    #[test]
    fn settings_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":"1.0.0","user":{{"timezone":"America/New_York"}}}}"#
        )
        .unwrap();
        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.context.transit_top_n, 10);
    }
}
