pub mod filters;
pub mod math;
