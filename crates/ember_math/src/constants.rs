//! Mathematical and numeric constants shared by the scattering code.

pub const PI: f32 = std::f32::consts::PI;
pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const INV_PI: f32 = std::f32::consts::FRAC_1_PI;
pub const INV_2_PI: f32 = 0.159_154_94;
pub const INV_4_PI: f32 = 0.079_577_47;
pub const PI_OVER_2: f32 = std::f32::consts::FRAC_PI_2;
pub const PI_OVER_4: f32 = std::f32::consts::FRAC_PI_4;
pub const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// sqrt(1/3), the largest value the smallest component of a unit vector can take.
pub const SQRT_OF_ONE_THIRD: f32 = 0.577_350_26;

/// Distance a spawned ray's origin is pushed off the surface.
pub const RAY_EPSILON: f32 = 0.000_005;

/// Tolerance used by [`crate::fequal`].
pub const FLOAT_EPSILON: f32 = 0.000_002;
