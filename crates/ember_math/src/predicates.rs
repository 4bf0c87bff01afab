//! Numeric helpers used throughout BSDF evaluation.
//!
//! Hemisphere and cosine predicates take vectors in a local shading frame
//! where the normal is the z-axis (see [`crate::Frame`]).

use crate::constants::FLOAT_EPSILON;
use crate::Vec3;

/// Absolute value of the dot product.
#[inline]
pub fn abs_dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).abs()
}

/// True if both local-frame directions lie strictly on the same side of the surface.
#[inline]
pub fn same_hemisphere(w: Vec3, wp: Vec3) -> bool {
    w.z * wp.z > 0.0
}

/// |cos(theta)| of a local-frame direction.
#[inline]
pub fn abs_cos_theta(w: Vec3) -> f32 {
    w.z.abs()
}

/// Near-equality with the fixed [`FLOAT_EPSILON`] tolerance.
#[inline]
pub fn fequal(a: f32, b: f32) -> bool {
    (a - b).abs() < FLOAT_EPSILON
}

/// True if every component of the color is exactly zero.
#[inline]
pub fn is_black(c: Vec3) -> bool {
    c.x == 0.0 && c.y == 0.0 && c.z == 0.0
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface whose normal faces against it.
///
/// `eta` is the ratio of the incident to the transmitted index of refraction.
/// Returns `None` on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let cos_theta = (-v).dot(n).min(1.0);
    let sin2_theta_t = eta * eta * (1.0 - cos_theta * cos_theta).max(0.0);
    if sin2_theta_t > 1.0 {
        return None;
    }
    let r_out_perp = eta * (v + cos_theta * n);
    let r_out_parallel = -(1.0 - sin2_theta_t).sqrt() * n;
    Some(r_out_perp + r_out_parallel)
}
