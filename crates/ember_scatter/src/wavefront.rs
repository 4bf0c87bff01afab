//! Parallel shading of a whole wavefront of paths.
//!
//! Each live path is scattered independently on the rayon pool. Paths share
//! nothing mutable: every task owns its path and its random stream, and only
//! reads the intersection and material tables.

use ember_core::{Color, Material, ScatterConfig};
use rand::RngCore;
use rayon::prelude::*;

use crate::scatter::{scatter_ray, ScatterEvent};
use crate::{Intersection, PathSegment};

/// Per-pass counts of what happened to each path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadeStats {
    /// Paths that continue with a new ray
    pub scattered: usize,
    /// Paths terminated by an empty sample or an unknown material
    pub absorbed: usize,
    /// Paths that were already terminated on entry
    pub inactive: usize,
    /// Paths whose ray left the scene
    pub escaped: usize,
}

impl ShadeStats {
    fn record(mut self, event: ScatterEvent) -> Self {
        match event {
            ScatterEvent::Scattered(_) => self.scattered += 1,
            ScatterEvent::Absorbed => self.absorbed += 1,
            ScatterEvent::Inactive => self.inactive += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            scattered: self.scattered + other.scattered,
            absorbed: self.absorbed + other.absorbed,
            inactive: self.inactive + other.inactive,
            escaped: self.escaped + other.escaped,
        }
    }

    /// Number of paths still alive after the pass.
    pub fn live(&self) -> usize {
        self.scattered
    }
}

/// Shade one bounce for every path.
///
/// `hits[i]` is the intersection found for `paths[i]` (`None` if it left the
/// scene) and `rngs[i]` is that path's own random stream.
///
/// # Panics
///
/// Panics if `hits` or `rngs` is not the same length as `paths`.
pub fn shade_paths<R: RngCore + Send>(
    paths: &mut [PathSegment],
    hits: &[Option<Intersection>],
    materials: &[Material],
    rngs: &mut [R],
    config: &ScatterConfig,
) -> ShadeStats {
    assert_eq!(paths.len(), hits.len(), "one intersection slot per path");
    assert_eq!(paths.len(), rngs.len(), "one random stream per path");

    let stats = paths
        .par_iter_mut()
        .zip(rngs.par_iter_mut())
        .zip(hits.par_iter())
        .map(|((path, rng), hit)| shade_path(path, hit.as_ref(), materials, config, rng))
        .reduce(ShadeStats::default, ShadeStats::merge);

    log::debug!(
        "shaded {} paths: {} scattered, {} absorbed, {} escaped, {} inactive",
        paths.len(),
        stats.scattered,
        stats.absorbed,
        stats.escaped,
        stats.inactive
    );

    stats
}

fn shade_path(
    path: &mut PathSegment,
    hit: Option<&Intersection>,
    materials: &[Material],
    config: &ScatterConfig,
    rng: &mut dyn RngCore,
) -> ShadeStats {
    let stats = ShadeStats::default();
    if path.is_terminated() {
        return stats.record(ScatterEvent::Inactive);
    }

    let Some(hit) = hit else {
        path.throughput = Color::ZERO;
        path.terminate();
        return ShadeStats {
            escaped: 1,
            ..stats
        };
    };

    let Some(material) = materials.get(hit.material_id) else {
        log::warn!(
            "path {} hit unknown material {}",
            path.pixel_index,
            hit.material_id
        );
        path.terminate();
        return stats.record(ScatterEvent::Absorbed);
    };

    stats.record(scatter_ray(path, hit, material, config, rng))
}
