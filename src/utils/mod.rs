pub mod error;

pub use error::{LineageError, LineageResult};
