//! Lambertian (ideal diffuse) BSDF.

use ember_core::{Color, Material};
use ember_math::constants::INV_PI;
use ember_math::{abs_cos_theta, same_hemisphere, Frame, Vec3};
use rand::RngCore;

use crate::lobe::LobeSample;
use crate::sampling::cosine_sample_hemisphere;

/// Reflectance of a diffuse surface: albedo / pi in every direction.
#[inline]
pub fn diffuse_f(material: &Material) -> Color {
    material.color * INV_PI
}

/// Density of [`diffuse_sample_f`] for local-frame directions.
///
/// Zero when `wi` and `wo` lie on opposite sides of the surface: diffuse
/// reflection never transmits.
#[inline]
pub fn diffuse_pdf(wi: Vec3, wo: Vec3) -> f32 {
    if same_hemisphere(wi, wo) {
        abs_cos_theta(wi) * INV_PI
    } else {
        0.0
    }
}

/// Importance-sample the diffuse lobe.
///
/// `wo` is the world-space direction back toward where the path came from.
/// The sampled direction is mirrored to `wo`'s side of the surface, so a path
/// arriving at the back of a surface scatters back into that side.
pub fn diffuse_sample_f(
    wo: Vec3,
    normal: Vec3,
    material: &Material,
    rng: &mut dyn RngCore,
) -> LobeSample {
    let frame = Frame::from_normal(normal);
    let wo_local = frame.to_local(wo);

    let mut wi_local = frame.to_local(cosine_sample_hemisphere(normal, rng));
    if wo_local.z < 0.0 {
        wi_local.z = -wi_local.z;
    }

    LobeSample {
        f: diffuse_f(material),
        wi: frame.to_world(wi_local),
        pdf: diffuse_pdf(wi_local, wo_local),
        delta: false,
    }
}
