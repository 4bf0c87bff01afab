// Re-export glam for convenience
pub use glam::*;

// Ember math types
pub mod constants;
pub mod predicates;
mod frame;
mod ray;

pub use frame::Frame;
pub use predicates::{abs_cos_theta, abs_dot, fequal, is_black, reflect, refract, same_hemisphere};
pub use ray::Ray;
