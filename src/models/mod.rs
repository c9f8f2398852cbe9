// src/models/mod.rs

pub mod geometry;
pub mod fading;
pub mod channel;
pub mod rate;
pub mod outage;

pub use channel::ChannelGains;
pub use fading::FadingParameters;
pub use geometry::{Placement, Uav, User};
pub use outage::OutageIndicators;
