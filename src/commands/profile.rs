use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::commands::AppContext;
use crate::database::queries;
use crate::models::RawPlacement;

pub fn read_chart_file(path: &Path) -> Result<Vec<RawPlacement>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading chart from {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing chart in {}", path.display()))
}

/// Replaces a user's natal placements and stores the birthday. A `None`
/// birthday keeps the one already on file.
pub async fn save_profile(
    app: &AppContext,
    user_id: &str,
    chart: &[RawPlacement],
    birthday: Option<NaiveDate>,
) -> Result<usize> {
    let conn = app.conn.clone();
    let user = user_id.to_string();
    let chart = chart.to_vec();
    let timezone = app.settings.user.timezone.clone();
    let now = chrono::Utc::now().timestamp();

    tokio::task::spawn_blocking(move || -> Result<usize> {
        let guard = conn
            .lock()
            .map_err(|e| anyhow::anyhow!("database lock poisoned: {}", e))?;
        queries::save_birth_chart(&guard, &user, &chart)?;
        queries::save_profile(&guard, &user, birthday, Some(&timezone), now)?;
        Ok(chart.len())
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::{build_context, ContextArgs};
    use crate::models::{ContextPreset, Settings, Sign};

    fn app(dir: &Path) -> AppContext {
        let mut settings = Settings::default();
        settings.database.path = dir.join("cf.db").to_string_lossy().into_owned();
        settings.embedding.enabled = false;
        AppContext::open(settings).unwrap()
    }

    fn chart(entries: &[(&str, &str)]) -> Vec<RawPlacement> {
        entries
            .iter()
            .map(|(body, sign)| RawPlacement {
                body: body.to_string(),
                sign: sign.to_string(),
                degree: 10.0,
                ecliptic_longitude: None,
                house: None,
            })
            .collect()
    }

    async fn natal_study(app: &AppContext) -> crate::models::CosmicContext {
        build_context(
            app,
            ContextArgs {
                user_id: "u1",
                utterance: Some("what patterns are in my birth chart?"),
                intentions: Vec::new(),
                preset: Some(ContextPreset::NatalStudy),
                transits: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn corrected_chart_replaces_natal_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());

        let taurus = chart(&[("Sun", "Taurus"), ("Mercury", "Taurus"), ("Venus", "Taurus")]);
        save_profile(&app, "u1", &taurus, None).await.unwrap();
        let first = natal_study(&app).await;
        let natal = first.natal_patterns.unwrap();
        assert_eq!(natal.len(), 1);
        assert_eq!(natal[0].shape().signs, vec![Sign::Taurus]);

        let corrected = chart(&[("Sun", "Gemini"), ("Mercury", "Aries"), ("Venus", "Pisces")]);
        save_profile(&app, "u1", &corrected, None).await.unwrap();
        let second = natal_study(&app).await;
        assert_eq!(second.natal_patterns, Some(Vec::new()));
        assert_eq!(second.natal_placements.len(), 3);
        assert!(second.natal_placements.iter().all(|p| p.sign != Sign::Taurus));
    }

    #[tokio::test]
    async fn chart_only_update_keeps_the_birthday() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        let birthday = NaiveDate::from_ymd_opt(1991, 9, 3);

        save_profile(&app, "u1", &chart(&[("Sun", "Virgo")]), birthday).await.unwrap();
        save_profile(&app, "u1", &chart(&[("Sun", "Libra")]), None).await.unwrap();

        let guard = app.conn.lock().unwrap();
        assert_eq!(queries::get_birthday(&guard, "u1").unwrap(), birthday);
        let stored = queries::get_birth_chart(&guard, "u1").unwrap().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].sign, "Libra");
    }
}
