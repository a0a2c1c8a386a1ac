//! Pure astronomical derivations over a birth chart. Fixed inputs give fixed
//! outputs; nothing here touches the store or the network.

pub mod eclipses;
pub mod natal_patterns;
pub mod progressions;
pub mod returns;
pub mod transits;

pub use eclipses::eclipse_relevance;
pub use natal_patterns::detect_all;
pub use progressions::progressed_chart;
pub use returns::planetary_returns;
pub use transits::personal_transits;
