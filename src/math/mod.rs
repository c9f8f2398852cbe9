// src/math/mod.rs

pub mod conversion;
pub mod statistics;
pub mod error;

pub use conversion::db_to_linear;
pub use statistics::ColumnMoments;
pub use error::{ConfigError, SimulationError};
