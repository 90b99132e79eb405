pub mod person;
pub mod branch;
pub mod config;

pub use person::*;
pub use branch::*;
pub use config::*;
