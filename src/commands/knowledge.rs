use std::time::Duration;

use anyhow::Result;

use crate::commands::AppContext;
use crate::models::{Citation, IndexReport};
use crate::services::knowledge;

/// Embeds the whole catalog, or one category of it.
pub async fn index(app: &AppContext, category: Option<&str>) -> Result<IndexReport> {
    let retriever = app.retriever()?;
    let items: Vec<_> = knowledge::catalog()
        .into_iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect();
    log::info!("[Knowledge] Indexing {} items", items.len());

    let settings = &app.settings.embedding;
    let report = knowledge::index_items(
        retriever,
        items,
        settings.batch_size,
        Duration::from_millis(settings.batch_delay_ms),
    )
    .await;
    log::info!(
        "[Knowledge] Indexed {}/{} items ({} failed)",
        report.succeeded,
        report.total,
        report.failed
    );
    Ok(report)
}

pub async fn search(
    app: &AppContext,
    query: &str,
    limit: usize,
    category: Option<&str>,
) -> Result<Vec<Citation>> {
    let retriever = app.retriever()?;
    Ok(retriever.try_search(query, limit, category).await?)
}
