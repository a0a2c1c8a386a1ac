use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::database::{queries, SharedConnection};
use crate::error::{CosmicError, CosmicResult};
use crate::models::{Citation, EmbeddingSettings, KnowledgeItem};

/// Turns text into a dense vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> CosmicResult<Vec<f32>>;
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Client for an OpenAI-compatible `/embeddings` endpoint.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
}

impl OpenAiEmbedder {
    pub fn from_settings(settings: &EmbeddingSettings) -> CosmicResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            url: settings.url.clone(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> CosmicResult<Vec<f32>> {
        let request = EmbeddingRequest {
            model: &self.model,
            input: text,
        };
        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CosmicError::retrieval(format!("API error {}: {}", status, body)));
        }

        let parsed: EmbeddingResponse = response.json().await?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| CosmicError::retrieval("empty embedding response"))
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Nearest neighbours by cosine similarity, best first.
pub fn rank(query: &[f32], rows: Vec<(KnowledgeItem, Vec<f32>)>, limit: usize) -> Vec<Citation> {
    let mut scored: Vec<Citation> = rows
        .into_iter()
        .map(|(item, vector)| Citation {
            similarity: cosine_similarity(query, &vector),
            slug: item.slug,
            title: item.title,
            category: item.category,
            content: item.content,
        })
        .collect();
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}

/// Semantic search over the embedded knowledge catalog.
pub struct Retriever {
    embedder: Arc<dyn Embedder>,
    conn: SharedConnection,
    timeout: Duration,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn Embedder>, conn: SharedConnection, timeout: Duration) -> Self {
        Self {
            embedder,
            conn,
            timeout,
        }
    }

    async fn blocking<T, F>(&self, f: F) -> CosmicResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> anyhow::Result<T> + Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|e| CosmicError::store(e))?;
            f(&*guard).map_err(CosmicError::store)
        })
        .await
        .map_err(CosmicError::store)?
    }

    pub async fn embed(&self, text: &str) -> CosmicResult<Vec<f32>> {
        tokio::time::timeout(self.timeout, self.embedder.embed(text))
            .await
            .map_err(|_| CosmicError::Timeout {
                operation: "embedding".to_string(),
                millis: self.timeout.as_millis() as u64,
            })?
    }

    pub async fn try_search(&self, query: &str, limit: usize, category: Option<&str>) -> CosmicResult<Vec<Citation>> {
        let vector = self.embed(query).await?;
        let category = category.map(str::to_string);
        let rows = self
            .blocking(move |conn| queries::get_embeddings(conn, category.as_deref()))
            .await?;
        Ok(rank(&vector, rows, limit))
    }

    /// Citations for a query. Any failure yields none.
    pub async fn search(&self, query: &str, limit: usize, category: Option<&str>) -> Vec<Citation> {
        match self.try_search(query, limit, category).await {
            Ok(citations) => {
                log::debug!("[Retrieval] {} citations for query", citations.len());
                citations
            }
            Err(e) => {
                log::warn!("[Retrieval] Search failed, continuing without citations: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn upsert(&self, item: KnowledgeItem, vector: Vec<f32>) -> CosmicResult<()> {
        let now = chrono::Utc::now().timestamp();
        self.blocking(move |conn| queries::upsert_embedding(conn, &item, &vector, now))
            .await
    }

    pub async fn delete(&self, slug: &str) -> CosmicResult<bool> {
        let slug = slug.to_string();
        self.blocking(move |conn| queries::delete_embedding(conn, &slug))
            .await
    }

    /// Embedded items per category.
    pub async fn counts(&self) -> CosmicResult<BTreeMap<String, usize>> {
        self.blocking(queries::get_embedding_counts).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::utils::hash_string;

    pub const DIMENSIONS: usize = 32;

    /// Bag-of-words vectors: each token bumps one hashed bucket.
    pub struct HashingEmbedder;

    #[async_trait]
    impl Embedder for HashingEmbedder {
        async fn embed(&self, text: &str) -> CosmicResult<Vec<f32>> {
            let mut v = vec![0.0; DIMENSIONS];
            for word in text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
                v[(hash_string(word) as u64 % DIMENSIONS as u64) as usize] += 1.0;
            }
            Ok(v)
        }
    }

    pub struct FailingEmbedder;

    #[async_trait]
    impl Embedder for FailingEmbedder {
        async fn embed(&self, _text: &str) -> CosmicResult<Vec<f32>> {
            Err(CosmicError::retrieval("service down"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::database::{open_in_memory, shared};

    fn item(category: &str, slug: &str, content: &str) -> KnowledgeItem {
        KnowledgeItem::new(category, slug, slug, content)
    }

    async fn seeded(embedder: Arc<dyn Embedder>) -> Retriever {
        let retriever = Retriever::new(embedder, shared(open_in_memory().unwrap()), Duration::from_secs(1));
        for it in [
            item("crystals", "amethyst", "amethyst calm intuition sleep"),
            item("crystals", "citrine", "citrine abundance joy money"),
            item("planets", "mercury", "mercury communication retrograde travel"),
        ] {
            let v = HashingEmbedder.embed(&it.content).await.unwrap();
            retriever.upsert(it, v).await.unwrap();
        }
        retriever
    }

    #[test]
    fn cosine_edges() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 1.0]), 0.0);
    }

    #[tokio::test]
    async fn search_ranks_and_filters() {
        let retriever = seeded(Arc::new(HashingEmbedder)).await;

        let hits = retriever.search("mercury retrograde communication", 2, None).await;
        assert_eq!(hits[0].slug, "mercury");
        assert!(hits.len() <= 2);

        let crystals_only = retriever.search("mercury retrograde", 5, Some("crystals")).await;
        assert!(crystals_only.iter().all(|c| c.category == "crystals"));

        let counts = retriever.counts().await.unwrap();
        assert_eq!(counts.get("crystals"), Some(&2));
        assert!(retriever.delete("citrine").await.unwrap());
        assert!(!retriever.delete("citrine").await.unwrap());
    }

    #[tokio::test]
    async fn failing_service_gives_no_citations() {
        let retriever = seeded(Arc::new(FailingEmbedder)).await;
        assert!(retriever.search("anything", 3, None).await.is_empty());
        assert!(retriever.try_search("anything", 3, None).await.is_err());
    }
}
