//! Tjänster för släktträdskärnan
//!
//! Rena funktioner över en ögonblicksbild av personer. Ingen I/O, inget
//! delat tillstånd.

pub mod ancestry;
pub mod branch_filter;
pub mod ordering;
pub mod person_index;
pub mod relations;

pub use ancestry::AncestryResolver;
pub use branch_filter::{filter_for_branch, BranchFilter};
pub use ordering::{birth_order_key, sort_siblings_oldest_first};
pub use person_index::PersonIndex;
pub use relations::{RelationCounter, RelationSummary};
