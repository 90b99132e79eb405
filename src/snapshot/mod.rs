//! Inläsning och kontroll av ögonblicksbilder
//!
//! En ögonblicksbild är JSON-arrayen som en grenhämtning returnerar.

pub mod loader;
pub mod report;

pub use loader::{Snapshot, SnapshotLoader};
pub use report::{Finding, IntegrityReport};
