pub mod advanced;
pub mod context_builder;
pub mod derivations;
pub mod intent_analyzer;
pub mod knowledge;
pub mod numerology;
pub mod pattern_store;
pub mod recommender;
pub mod retrieval;
pub mod sources;

pub use context_builder::ContextBuilder;
pub use pattern_store::PatternStore;
pub use retrieval::{Embedder, OpenAiEmbedder, Retriever};
pub use sources::{ChartSource, SqliteChartSource, StaticTransitSource, TransitSource};
