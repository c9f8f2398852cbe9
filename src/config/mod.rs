// src/config/mod.rs

pub mod parameters;
pub mod scenario;
pub mod simulation;

pub use parameters::{RolePolicy, SimulationParameters};
pub use scenario::{Scenario, ScenarioOverrides, SnrSweep};
pub use simulation::{SimulationConfig, SimulationFile};
