//! Ember Core - scene-side records consumed by the scattering core.
//!
//! This crate provides:
//!
//! - **Materials**: `Material`, the per-surface record of diffuse albedo and
//!   reflective/refractive weights, plus `MaterialError` for ahead-of-time checks
//! - **Configuration**: `ScatterConfig`, the numeric tolerances used while scattering
//!
//! Both derive serde so that whatever loads a scene can produce them.
//!
//! # Example
//!
//! ```
//! use ember_core::{Color, Material};
//!
//! let glossy_red = Material::diffuse(Color::new(0.8, 0.2, 0.2)).with_reflective(0.3);
//! assert!(glossy_red.validate().is_ok());
//! assert!((glossy_red.diffuse_weight() - 0.7).abs() < 1e-6);
//! ```

pub mod config;
pub mod material;

// Re-export commonly used types
pub use config::ScatterConfig;
pub use material::{Material, MaterialError};

/// Color type alias (linear RGB, components typically 0-1)
pub type Color = ember_math::Vec3;
