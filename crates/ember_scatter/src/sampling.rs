//! Cosine-weighted hemisphere sampling (Malley's method).

use ember_math::constants::{INV_PI, TWO_PI};
use ember_math::{Frame, Vec3};
use rand::RngCore;

use crate::random::gen_f32;

/// Map two uniform numbers to a cosine-distributed direction around +z.
#[inline]
pub fn cosine_hemisphere_local(u1: f32, u2: f32) -> Vec3 {
    let cos_theta = u1.sqrt();
    let sin_theta = (1.0 - u1).sqrt();
    let phi = u2 * TWO_PI;
    Vec3::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta)
}

/// Density of [`cosine_sample_hemisphere`] with respect to solid angle.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: f32) -> f32 {
    cos_theta * INV_PI
}

/// Sample a direction in the hemisphere around `normal`, cosine-weighted.
///
/// `normal` must be unit length. The result is unit length up to rounding.
pub fn cosine_sample_hemisphere(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let u1 = gen_f32(rng);
    let u2 = gen_f32(rng);
    Frame::from_normal(normal).to_world(cosine_hemisphere_local(u1, u2))
}
