//! Numeric configuration for the scattering core.

use ember_math::constants::{FLOAT_EPSILON, RAY_EPSILON};
use serde::{Deserialize, Serialize};

/// Tolerances used while scattering a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Distance a spawned ray's origin is offset along the normal
    pub ray_epsilon: f32,
    /// A sampled pdf within this distance of zero terminates the path
    pub pdf_epsilon: f32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            ray_epsilon: RAY_EPSILON,
            pdf_epsilon: FLOAT_EPSILON,
        }
    }
}

impl ScatterConfig {
    /// True if `pdf` is numerically indistinguishable from zero.
    #[inline]
    pub fn is_zero_pdf(&self, pdf: f32) -> bool {
        pdf.abs() < self.pdf_epsilon
    }
}
