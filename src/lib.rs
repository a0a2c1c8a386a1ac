//! Conditional astrological context for a conversational assistant.
//!
//! Each turn runs the intent analyzer, then only the derivations the turn
//! asks for. The results go through the recommendation synthesizer and come
//! back as one [`models::CosmicContext`].

pub mod commands;
pub mod correspondences;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{CosmicError, CosmicResult};
pub use models::{ContextRequest, CosmicContext};
pub use services::ContextBuilder;
