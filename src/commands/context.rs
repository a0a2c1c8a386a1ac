use std::path::Path;

use anyhow::Result;

use crate::commands::AppContext;
use crate::models::{ContextPreset, ContextRequest, CosmicContext};

pub struct ContextArgs<'a> {
    pub user_id: &'a str,
    pub utterance: Option<&'a str>,
    pub intentions: Vec<String>,
    pub preset: Option<ContextPreset>,
    pub transits: Option<&'a Path>,
}

/// Builds one turn's context against the configured database.
pub async fn build_context(app: &AppContext, args: ContextArgs<'_>) -> Result<CosmicContext> {
    let builder = app.builder(args.transits)?;
    let mut request = ContextRequest::new(args.user_id, args.utterance);
    request.intentions = args.intentions;
    request.overrides = args.preset.map(Into::into);
    Ok(builder.build(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::profile::save_profile;
    use crate::models::{RawPlacement, Settings};

    #[tokio::test]
    async fn presets_override_the_heuristics() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.database.path = dir.path().join("cf.db").to_string_lossy().into_owned();
        settings.embedding.enabled = false;
        let app = AppContext::open(settings).unwrap();

        let chart = vec![RawPlacement {
            body: "Sun".to_string(),
            sign: "Virgo".to_string(),
            degree: 4.0,
            ecliptic_longitude: None,
            house: Some(6),
        }];
        save_profile(&app, "u1", &chart, None).await.unwrap();

        let ctx = build_context(
            &app,
            ContextArgs {
                user_id: "u1",
                utterance: Some("any eclipse coming up?"),
                intentions: Vec::new(),
                preset: Some(ContextPreset::QuickCosmic),
                transits: None,
            },
        )
        .await
        .unwrap();
        assert!(!ctx.requirements.any());
        assert!(ctx.eclipses.is_none());
        assert_eq!(ctx.natal_placements.len(), 1);
        assert_eq!(ctx.missing, vec!["birthday".to_string()]);
    }
}
