//! Genlib Lineage - släktträdsindex och grenvyfilter
//!
//! Kärnan bakom profil- och grenvyerna: indexera personer, följa
//! fäderneslinjen, räkna relationer och filtrera fram en avgränsad grenvy
//! kring en fokusperson. Allt arbetar på en oföränderlig ögonblicksbild.

pub mod models;
pub mod services;
pub mod snapshot;
pub mod utils;

// Re-exports
pub use models::*;
pub use services::{
    filter_for_branch, sort_siblings_oldest_first, AncestryResolver, BranchFilter, PersonIndex,
    RelationCounter, RelationSummary,
};
pub use snapshot::{IntegrityReport, Snapshot, SnapshotLoader};
pub use utils::{LineageError, LineageResult};
