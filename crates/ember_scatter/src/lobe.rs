//! Scattering lobes and weight-proportional lobe selection.
//!
//! A material is a mixture of up to three lobes. Each call to the dispatcher
//! picks exactly one, with probability proportional to its weight, and
//! divides the result by that probability.

use ember_core::{Color, Material};
use ember_math::{abs_dot, Vec3};
use rand::RngCore;

use crate::dielectric::dielectric_sample_f;
use crate::lambertian::diffuse_sample_f;
use crate::specular::mirror_sample_f;

/// The closed set of lobes a material can combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lobe {
    /// Lambertian reflection, weight `1 - reflective - refractive`
    Diffuse,
    /// Perfect mirror reflection, weight `reflective`
    Specular,
    /// Smooth dielectric reflection/transmission, weight `refractive`
    Refractive,
}

/// Result of sampling one lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LobeSample {
    /// BSDF value for the sampled direction. For delta lobes this is not the
    /// textbook `reflectance / |cos|`: the cosine is already folded in, so a
    /// mirror stores the bare reflectance.
    pub f: Color,
    /// Sampled world-space direction to continue the path along
    pub wi: Vec3,
    /// Probability density of `wi` (discrete probability for delta lobes)
    pub pdf: f32,
    /// True if the lobe is a delta distribution
    pub delta: bool,
}

impl LobeSample {
    /// Throughput multiplier `f * |cos| / pdf` contributed by this sample.
    #[inline]
    pub fn weight(&self, normal: Vec3) -> Color {
        if self.delta {
            self.f / self.pdf
        } else {
            self.f * abs_dot(normal, self.wi) / self.pdf
        }
    }
}

impl Lobe {
    pub const ALL: [Lobe; 3] = [Lobe::Diffuse, Lobe::Specular, Lobe::Refractive];

    /// Unnormalized selection weight of this lobe for `material`.
    #[inline]
    pub fn weight(self, material: &Material) -> f32 {
        match self {
            Lobe::Diffuse => material.diffuse_weight(),
            Lobe::Specular => material.reflective.max(0.0),
            Lobe::Refractive => material.refractive.max(0.0),
        }
    }

    /// Pick a lobe from a uniform number `u` in [0, 1).
    ///
    /// Returns the lobe and the probability it had of being picked, or `None`
    /// if the material has no positive weight at all.
    pub fn select(material: &Material, u: f32) -> Option<(Lobe, f32)> {
        let weights = Self::ALL.map(|lobe| lobe.weight(material));
        let total: f32 = weights.iter().sum();
        if total.is_nan() || total <= 0.0 {
            return None;
        }

        let target = u * total;
        let mut cumulative = 0.0;
        let mut last = None;
        for (lobe, weight) in Self::ALL.into_iter().zip(weights) {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            last = Some((lobe, weight / total));
            if target < cumulative {
                return last;
            }
        }

        // Rounding can leave u * total just past the final sum
        last
    }

    /// Sample this lobe for a path travelling along `incoming`.
    pub fn sample_f(
        self,
        incoming: Vec3,
        normal: Vec3,
        material: &Material,
        rng: &mut dyn RngCore,
    ) -> LobeSample {
        match self {
            Lobe::Diffuse => diffuse_sample_f(-incoming.normalize(), normal, material, rng),
            Lobe::Specular => mirror_sample_f(incoming, normal, material),
            Lobe::Refractive => dielectric_sample_f(incoming, normal, material, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_diffuse_always_selects_diffuse() {
        let material = Material::diffuse(Color::ONE);
        for u in [0.0, 0.5, 0.999_999] {
            assert_eq!(Lobe::select(&material, u), Some((Lobe::Diffuse, 1.0)));
        }
    }

    #[test]
    fn test_mirror_never_selects_zero_weight_lobes() {
        let material = Material::mirror(Color::ONE);
        for u in [0.0, 0.3, 0.999_999] {
            assert_eq!(Lobe::select(&material, u), Some((Lobe::Specular, 1.0)));
        }
    }

    #[test]
    fn test_mixture_selection_boundaries() {
        // diffuse 0.5, specular 0.3, refractive 0.2
        let material = Material::diffuse(Color::ONE)
            .with_reflective(0.3)
            .with_refractive(0.2);

        let (lobe, p) = Lobe::select(&material, 0.1).unwrap();
        assert_eq!(lobe, Lobe::Diffuse);
        assert!((p - 0.5).abs() < 1e-6);

        let (lobe, p) = Lobe::select(&material, 0.6).unwrap();
        assert_eq!(lobe, Lobe::Specular);
        assert!((p - 0.3).abs() < 1e-6);

        let (lobe, p) = Lobe::select(&material, 0.9).unwrap();
        assert_eq!(lobe, Lobe::Refractive);
        assert!((p - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_selection_frequencies_match_weights() {
        let material = Material::diffuse(Color::ONE).with_reflective(0.25);
        let n = 10_000;
        let specular = (0..n)
            .map(|i| (i as f32 + 0.5) / n as f32)
            .filter(|&u| matches!(Lobe::select(&material, u), Some((Lobe::Specular, _))))
            .count();
        assert!((specular as f32 / n as f32 - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_overweighted_material_renormalizes() {
        // reflective + refractive > 1 leaves no diffuse share
        let material = Material {
            reflective: 0.8,
            refractive: 0.8,
            ..Default::default()
        };
        assert_eq!(Lobe::Diffuse.weight(&material), 0.0);

        let (lobe, p) = Lobe::select(&material, 0.25).unwrap();
        assert_eq!(lobe, Lobe::Specular);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_no_positive_weight() {
        let material = Material {
            reflective: f32::NAN,
            ..Default::default()
        };
        assert_eq!(Lobe::select(&material, 0.5), None);

        let material = Material {
            reflective: f32::NAN,
            refractive: f32::NAN,
            ..Default::default()
        };
        for u in [0.0, 0.5, 0.999_999] {
            assert_eq!(Lobe::select(&material, u), None);
        }
    }

    #[test]
    fn test_delta_weight_ignores_cosine() {
        let sample = LobeSample {
            f: Color::new(0.5, 0.5, 0.5),
            wi: Vec3::new(1.0, 0.001, 0.0).normalize(),
            pdf: 0.5,
            delta: true,
        };
        assert_eq!(sample.weight(Vec3::Y), Color::ONE);
    }
}
