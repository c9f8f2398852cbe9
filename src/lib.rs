// src/lib.rs

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{RolePolicy, SimulationConfig};
pub use math::{ConfigError, SimulationError};
pub use simulation::framework::run_simulation;
pub use simulation::{Curve, SimulationCurves};
