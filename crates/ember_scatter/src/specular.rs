//! Perfect mirror reflection.
//!
//! A delta distribution: there is exactly one outgoing direction, so the lobe
//! is evaluated directly instead of going through the hemisphere sampler.

use ember_core::Material;
use ember_math::{reflect, Vec3};

use crate::lobe::LobeSample;

/// Reflect `incoming` (the direction the path was travelling) about `normal`.
///
/// The returned `f` is the reflectance with the cosine already folded in
/// (not `reflectance / |cos|`), paired with a pdf of one.
pub fn mirror_sample_f(incoming: Vec3, normal: Vec3, material: &Material) -> LobeSample {
    LobeSample {
        f: material.specular_color,
        wi: reflect(incoming.normalize(), normal),
        pdf: 1.0,
        delta: true,
    }
}
