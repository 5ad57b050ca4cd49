//! Career-name resolution: maps free-text chat messages onto the fixed
//! catalog of academic programs through a layered pipeline — list-intent
//! keywords, synonym table, variation table, then a token-set fuzzy
//! fallback. Pure functions over immutable tables; no I/O anywhere.

pub mod catalog;
pub mod engine;
pub mod matching;
pub mod suggest;

pub use catalog::{CareerCatalog, LevelSchedule};
pub use engine::Resolution;
