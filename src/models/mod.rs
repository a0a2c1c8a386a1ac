pub mod chart;
pub mod context;
pub mod derived;
pub mod intent;
pub mod knowledge;
pub mod moon;
pub mod pattern;
pub mod recommendation;
pub mod settings;

pub use chart::*;
pub use context::*;
pub use derived::*;
pub use intent::*;
pub use knowledge::*;
pub use moon::*;
pub use pattern::*;
pub use recommendation::*;
pub use settings::*;
