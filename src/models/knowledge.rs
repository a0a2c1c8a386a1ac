use serde::{Deserialize, Serialize};

/// One embeddable entry of the static knowledge catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub content: String,
}

impl KnowledgeItem {
    pub fn new(category: &str, slug: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            category: category.to_string(),
            content: content.into(),
        }
    }

    /// Text handed to the embedder.
    pub fn embedding_text(&self) -> String {
        format!("{}: {}", self.title, self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}
