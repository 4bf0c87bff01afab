//! Smooth dielectric interface (glass, water).
//!
//! Reflection and transmission are chosen stochastically in proportion to
//! the Fresnel reflectance, so the resulting weight is always the tint.

use ember_core::Material;
use ember_math::{reflect, refract, Vec3};
use rand::RngCore;

use crate::lobe::LobeSample;
use crate::random::gen_f32;

/// Schlick's approximation for Fresnel reflectance.
///
/// `eta` is the ratio of indices of refraction across the interface.
#[inline]
pub fn schlick_reflectance(cosine: f32, eta: f32) -> f32 {
    let r0 = ((1.0 - eta) / (1.0 + eta)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).clamp(0.0, 1.0).powi(5)
}

/// Sample the dielectric lobe for a path travelling along `incoming`.
///
/// `normal` faces outward; a path with `incoming · normal > 0` is leaving the
/// material. Total internal reflection reflects with probability one.
pub fn dielectric_sample_f(
    incoming: Vec3,
    normal: Vec3,
    material: &Material,
    rng: &mut dyn RngCore,
) -> LobeSample {
    let tint = material.specular_color;
    let ior = material.index_of_refraction;
    let unit_direction = incoming.normalize();

    let entering = unit_direction.dot(normal) < 0.0;
    let (n, eta) = if entering {
        (normal, 1.0 / ior)
    } else {
        (-normal, ior)
    };

    let reflected = reflect(unit_direction, n);
    let Some(transmitted) = refract(unit_direction, n, eta) else {
        return LobeSample {
            f: tint,
            wi: reflected,
            pdf: 1.0,
            delta: true,
        };
    };

    let cos_theta = (-unit_direction).dot(n).min(1.0);
    let fresnel = schlick_reflectance(cos_theta, eta);

    if gen_f32(rng) < fresnel {
        LobeSample {
            f: fresnel * tint,
            wi: reflected,
            pdf: fresnel,
            delta: true,
        }
    } else {
        LobeSample {
            f: (1.0 - fresnel) * tint,
            wi: transmitted.normalize(),
            pdf: 1.0 - fresnel,
            delta: true,
        }
    }
}
