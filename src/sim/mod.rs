pub mod agent;
pub mod track;

pub use agent::AgentState;
pub use track::{Obstacle, Track};
