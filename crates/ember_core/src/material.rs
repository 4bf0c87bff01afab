//! Surface material records.
//!
//! A material splits incoming energy between three lobes: mirror-specular
//! reflection (`reflective`), dielectric transmission (`refractive`), and the
//! implicit diffuse remainder `1 - reflective - refractive`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Color;

/// Errors reported by [`Material::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    #[error("{name} weight {value} is outside [0, 1]")]
    WeightOutOfRange { name: &'static str, value: f32 },

    #[error("reflective ({reflective}) + refractive ({refractive}) exceeds 1")]
    WeightsExceedOne { reflective: f32, refractive: f32 },

    #[error("index of refraction must be finite and positive, got {0}")]
    InvalidIndexOfRefraction(f32),

    #[error("{name} color has a negative or non-finite component: {value}")]
    InvalidColor { name: &'static str, value: Color },
}

/// A surface material.
///
/// Missing fields fall back to [`Material::default`] when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse albedo (RGB, 0-1)
    pub color: Color,

    /// Reflectance of the mirror lobe and tint of the refractive lobe
    pub specular_color: Color,

    /// Phong-style exponent; carried for glossy extensions, unused by delta lobes
    pub specular_exponent: f32,

    /// Fraction of energy routed to perfect mirror reflection
    pub reflective: f32,

    /// Fraction of energy routed to dielectric transmission
    pub refractive: f32,

    /// Index of refraction of the material's interior (1.0 = air, 1.5 = glass)
    pub index_of_refraction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5), // Grey default
            specular_color: Color::ONE,
            specular_exponent: 0.0,
            reflective: 0.0,
            refractive: 0.0,
            index_of_refraction: 1.0,
        }
    }
}

impl Material {
    /// Create a purely diffuse material.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Create a perfect mirror with the given reflectance.
    pub fn mirror(reflectance: Color) -> Self {
        Self {
            color: Color::ZERO,
            specular_color: reflectance,
            reflective: 1.0,
            ..Default::default()
        }
    }

    /// Create a clear dielectric with the given index of refraction.
    pub fn glass(index_of_refraction: f32) -> Self {
        Self {
            color: Color::ZERO,
            specular_color: Color::ONE,
            refractive: 1.0,
            index_of_refraction,
            ..Default::default()
        }
    }

    /// Builder method to set the diffuse albedo.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the specular reflectance / transmission tint.
    pub fn with_specular_color(mut self, color: Color) -> Self {
        self.specular_color = color;
        self
    }

    /// Builder method to set the reflective weight.
    pub fn with_reflective(mut self, reflective: f32) -> Self {
        self.reflective = reflective.clamp(0.0, 1.0);
        self
    }

    /// Builder method to set the refractive weight.
    pub fn with_refractive(mut self, refractive: f32) -> Self {
        self.refractive = refractive.clamp(0.0, 1.0);
        self
    }

    /// Builder method to set the index of refraction.
    pub fn with_index_of_refraction(mut self, ior: f32) -> Self {
        self.index_of_refraction = ior;
        self
    }

    /// Weight of the implicit diffuse lobe, never negative.
    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        (1.0 - self.reflective - self.refractive).max(0.0)
    }

    /// Check the record against the assumptions the scattering code makes.
    ///
    /// Scattering never calls this itself; loaders should.
    pub fn validate(&self) -> Result<(), MaterialError> {
        for (name, value) in [("reflective", self.reflective), ("refractive", self.refractive)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MaterialError::WeightOutOfRange { name, value });
            }
        }

        // Allow a little slack for weights authored as decimals
        if self.reflective + self.refractive > 1.0 + 1e-4 {
            return Err(MaterialError::WeightsExceedOne {
                reflective: self.reflective,
                refractive: self.refractive,
            });
        }

        if self.refractive > 0.0
            && !(self.index_of_refraction.is_finite() && self.index_of_refraction > 0.0)
        {
            return Err(MaterialError::InvalidIndexOfRefraction(self.index_of_refraction));
        }

        for (name, value) in [("diffuse", self.color), ("specular", self.specular_color)] {
            if !value.is_finite() || value.min_element() < 0.0 {
                return Err(MaterialError::InvalidColor { name, value });
            }
        }

        Ok(())
    }
}
