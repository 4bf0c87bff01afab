//! Ember Scatter - surface scattering for a Monte Carlo path tracer.
//!
//! Given a path that has just hit a surface, the dispatcher picks one lobe of
//! the surface's material, importance-samples a new direction, updates the
//! path's throughput, and spawns the next ray. Everything here works on a
//! single path at a time; [`shade_paths`] runs a whole wavefront in parallel.
//!
//! ```
//! use ember_core::{Color, Material, ScatterConfig};
//! use ember_math::{Ray, Vec3};
//! use ember_scatter::{path_rng, scatter_ray, Intersection, PathSegment};
//!
//! let mut path = PathSegment::new(Ray::new(Vec3::Y, Vec3::NEG_Y), 0, 8);
//! let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);
//! let mirror = Material::mirror(Color::splat(0.9));
//! let mut rng = path_rng(0, 0);
//!
//! scatter_ray(&mut path, &hit, &mirror, &ScatterConfig::default(), &mut rng);
//! assert_eq!(path.ray.direction, Vec3::Y);
//! assert_eq!(path.remaining_bounces, 7);
//! ```

mod dielectric;
mod lambertian;
mod lobe;
mod path;
mod random;
mod sampling;
mod scatter;
mod specular;
mod wavefront;

pub use dielectric::{dielectric_sample_f, schlick_reflectance};
pub use lambertian::{diffuse_f, diffuse_pdf, diffuse_sample_f};
pub use lobe::{Lobe, LobeSample};
pub use path::{Intersection, PathSegment};
pub use random::{gen_f32, hash_seed, path_rng, PathRng};
pub use sampling::{cosine_hemisphere_local, cosine_hemisphere_pdf, cosine_sample_hemisphere};
pub use scatter::{scatter_ray, spawn_ray, ScatterEvent};
pub use specular::mirror_sample_f;
pub use wavefront::{shade_paths, ShadeStats};

/// Re-export the scene-side records and math types this crate works with
pub use ember_core::{Color, Material, ScatterConfig};
pub use ember_math::{Ray, Vec3};
