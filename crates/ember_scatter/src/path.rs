//! Per-path state and the intersection record handed to the scattering core.

use ember_core::Color;
use ember_math::{Ray, Vec3};

/// Record of a ray-surface intersection, produced by the intersection stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Point of intersection
    pub point: Vec3,
    /// Geometric surface normal, unit length and facing outward
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Index into the caller's material table
    pub material_id: usize,
}

impl Intersection {
    /// Create an intersection from an explicit hit point.
    pub fn new(point: Vec3, normal: Vec3, material_id: usize) -> Self {
        Self {
            point,
            normal,
            t: 0.0,
            material_id,
        }
    }

    /// Create an intersection at parameter `t` along `ray`.
    pub fn from_ray(ray: &Ray, t: f32, normal: Vec3, material_id: usize) -> Self {
        Self {
            point: ray.at(t),
            normal,
            t,
            material_id,
        }
    }
}

/// Mutable state of one light path.
///
/// Created by ray generation with a white throughput and a full bounce
/// budget. Scattering rewrites the ray and throughput in place and spends one
/// bounce per surface interaction. A budget of zero means the path is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    /// Ray to trace next
    pub ray: Ray,
    /// Accumulated throughput along the path
    pub throughput: Color,
    /// Pixel this path contributes to
    pub pixel_index: usize,
    /// Bounces left before the path is terminated
    pub remaining_bounces: u32,
}

impl PathSegment {
    /// Create a fresh path with white throughput.
    pub fn new(ray: Ray, pixel_index: usize, max_depth: u32) -> Self {
        Self {
            ray,
            throughput: Color::ONE,
            pixel_index,
            remaining_bounces: max_depth,
        }
    }

    /// True once the bounce budget is exhausted.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.remaining_bounces == 0
    }

    /// Drop the rest of the bounce budget.
    #[inline]
    pub fn terminate(&mut self) {
        self.remaining_bounces = 0;
    }
}
