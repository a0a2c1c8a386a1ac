//! Static correspondence tables: crystals, spells, tarot, runes, sabbats and
//! the other lookups the recommender joins against. Everything here is
//! read-only `static` data.

pub mod aspects;
pub mod crystals;
pub mod elements;
pub mod houses;
pub mod lunar_nodes;
pub mod numerology;
pub mod planetary_days;
pub mod planets;
pub mod runes;
pub mod sabbats;
pub mod signs;
pub mod spells;
pub mod tarot;
pub mod witchcraft;

pub use crystals::Crystal;
pub use runes::Rune;
pub use spells::Spell;
pub use tarot::TarotCard;
pub use witchcraft::{DivinationMethod, WitchArchetype};
