pub mod avoidance;
pub mod fuzzy;

pub use avoidance::{ControlLoop, Proximity, Telemetry};
pub use fuzzy::{avoidance_engine, AvoidanceController};
