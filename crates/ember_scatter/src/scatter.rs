//! The scatter dispatcher.
//!
//! Called once per live path per bounce. Picks one lobe of the material,
//! samples it, folds the sample into the path's throughput, and spawns the
//! next ray. Samples that carry no energy terminate the path instead.

use ember_core::{Material, ScatterConfig};
use ember_math::{is_black, Vec3};
use rand::RngCore;

use crate::lobe::Lobe;
use crate::random::gen_f32;
use crate::{Intersection, PathSegment};

/// What a call to [`scatter_ray`] did to the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterEvent {
    /// The path continues along a new ray sampled from this lobe.
    Scattered(Lobe),
    /// The sample carried no energy; the path's budget was zeroed.
    Absorbed,
    /// The path had already terminated and was left untouched.
    Inactive,
}

/// Scatter `path` off the surface described by `hit` and `material`.
///
/// On success the ray is replaced, the throughput is multiplied by
/// `f * |cos| / (pdf * P(lobe))`, and one bounce is spent. A black `f` or a
/// zero pdf zeroes the bounce budget and leaves the ray as it was.
pub fn scatter_ray(
    path: &mut PathSegment,
    hit: &Intersection,
    material: &Material,
    config: &ScatterConfig,
    rng: &mut dyn RngCore,
) -> ScatterEvent {
    if path.is_terminated() {
        log::warn!("scatter_ray called on terminated path {}", path.pixel_index);
        return ScatterEvent::Inactive;
    }

    let Some((lobe, lobe_pdf)) = Lobe::select(material, gen_f32(rng)) else {
        log::trace!("path {} absorbed: material has no lobes", path.pixel_index);
        path.terminate();
        return ScatterEvent::Absorbed;
    };

    let sample = lobe.sample_f(path.ray.direction, hit.normal, material, rng);
    if is_black(sample.f) || config.is_zero_pdf(sample.pdf) {
        log::trace!(
            "path {} absorbed by {:?} lobe (f={:?}, pdf={})",
            path.pixel_index,
            lobe,
            sample.f,
            sample.pdf
        );
        path.terminate();
        return ScatterEvent::Absorbed;
    }

    path.throughput *= sample.weight(hit.normal) / lobe_pdf;
    spawn_ray(path, hit.point, hit.normal, sample.wi, config);
    path.remaining_bounces -= 1;

    ScatterEvent::Scattered(lobe)
}

/// Point the path's ray along `wi`, starting just off the surface.
///
/// The origin is pushed to whichever side of the surface `wi` leaves
/// through, so reflected and transmitted rays both clear the surface.
pub fn spawn_ray(path: &mut PathSegment, point: Vec3, normal: Vec3, wi: Vec3, config: &ScatterConfig) {
    let offset = if wi.dot(normal) >= 0.0 { normal } else { -normal };
    path.ray.origin = point + config.ray_epsilon * offset;
    path.ray.direction = wi;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::Color;
    use ember_math::{reflect, Ray};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn path_toward(direction: Vec3, max_depth: u32) -> PathSegment {
        PathSegment::new(Ray::new(Vec3::new(0.0, 1.0, 0.0), direction), 0, max_depth)
    }

    #[test]
    fn test_diffuse_scatter_scenario() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(42);
        let config = ScatterConfig::default();
        let material = Material::diffuse(Color::new(0.8, 0.2, 0.2));
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);

        for _ in 0..1000 {
            let mut path = path_toward(Vec3::NEG_Y, 5);
            let event = scatter_ray(&mut path, &hit, &material, &config, &mut rng);

            if event == ScatterEvent::Absorbed {
                // Only an exactly grazing sample has zero pdf
                continue;
            }
            assert_eq!(event, ScatterEvent::Scattered(Lobe::Diffuse));
            assert!(path.ray.direction.y >= 0.0);
            assert_eq!(path.remaining_bounces, 4);

            // Ratios of the albedo survive the multiply
            let t = path.throughput;
            assert!((t.x / t.y - 4.0).abs() < 1e-3);
            assert!((t.y - t.z).abs() < 1e-6);
            assert!((t - Color::new(0.8, 0.2, 0.2)).length() < 1e-3);
        }
    }

    #[test]
    fn test_mirror_scatter_reflects_exactly() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(1);
        let config = ScatterConfig::default();
        let reflectance = Color::new(0.9, 0.6, 0.3);
        let material = Material::mirror(reflectance);
        let hit = Intersection::new(Vec3::new(2.0, 0.0, -1.0), Vec3::Y, 0);

        let incoming = Vec3::new(1.0, -2.0, 0.5).normalize();
        let mut path = path_toward(incoming, 3);
        path.throughput = Color::new(0.5, 0.5, 0.5);

        let event = scatter_ray(&mut path, &hit, &material, &config, &mut rng);

        assert_eq!(event, ScatterEvent::Scattered(Lobe::Specular));
        assert!((path.ray.direction - reflect(incoming, Vec3::Y)).length() < 1e-6);
        assert_eq!(path.throughput, 0.5 * reflectance);
        assert_eq!(path.remaining_bounces, 2);
        assert!(path.ray.origin.y > 0.0);
    }

    #[test]
    fn test_black_f_terminates_without_spawning() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(2);
        let config = ScatterConfig::default();
        let material = Material::diffuse(Color::ZERO);
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);

        let mut path = path_toward(Vec3::NEG_Y, 5);
        let before = path;
        let event = scatter_ray(&mut path, &hit, &material, &config, &mut rng);

        assert_eq!(event, ScatterEvent::Absorbed);
        assert_eq!(path.remaining_bounces, 0);
        assert_eq!(path.ray, before.ray);
        assert_eq!(path.throughput, before.throughput);
    }

    #[test]
    fn test_black_mirror_terminates() {
        let mut rng = StdRng::seed_from_u64(2);
        let material = Material::mirror(Color::ZERO);
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);
        let mut path = path_toward(Vec3::NEG_Y, 5);

        let event = scatter_ray(&mut path, &hit, &material, &ScatterConfig::default(), &mut rng);
        assert_eq!(event, ScatterEvent::Absorbed);
        assert!(path.is_terminated());
    }

    #[test]
    fn test_grazing_diffuse_zero_pdf_terminates() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(8);
        let material = Material::diffuse(Color::new(0.8, 0.2, 0.2));
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);

        for _ in 0..100 {
            // Travelling along the surface: wo has local z == 0, so no sample
            // shares its hemisphere and the pdf is exactly zero
            let mut path = PathSegment::new(Ray::new(Vec3::Y, Vec3::X), 0, 4);
            let before = path;
            let event = scatter_ray(&mut path, &hit, &material, &ScatterConfig::default(), &mut rng);

            assert_eq!(event, ScatterEvent::Absorbed);
            assert_eq!(path.remaining_bounces, 0);
            assert_eq!(path.ray, before.ray);
            assert_eq!(path.throughput, before.throughput);
        }
    }

    #[test]
    fn test_pdf_epsilon_from_config_terminates() {
        let mut rng = StdRng::seed_from_u64(9);
        let material = Material::diffuse(Color::new(0.8, 0.2, 0.2));
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);
        // A diffuse pdf never exceeds 1/pi, so every sample falls under this tolerance
        let config = ScatterConfig {
            pdf_epsilon: 1.0,
            ..Default::default()
        };

        for _ in 0..100 {
            let mut path = path_toward(Vec3::NEG_Y, 4);
            let before = path;
            let event = scatter_ray(&mut path, &hit, &material, &config, &mut rng);

            assert_eq!(event, ScatterEvent::Absorbed);
            assert_eq!(path.remaining_bounces, 0);
            assert_eq!(path.ray, before.ray);
        }

        // The same surface scatters under the default tolerance
        let mut path = path_toward(Vec3::NEG_Y, 4);
        let event = scatter_ray(&mut path, &hit, &material, &ScatterConfig::default(), &mut rng);
        assert_eq!(event, ScatterEvent::Scattered(Lobe::Diffuse));
    }

    #[test]
    fn test_terminated_path_is_not_scattered() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(3);
        let material = Material::diffuse(Color::ONE);
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);

        let mut path = path_toward(Vec3::NEG_Y, 0);
        let before = path;
        let event = scatter_ray(&mut path, &hit, &material, &ScatterConfig::default(), &mut rng);

        assert_eq!(event, ScatterEvent::Inactive);
        assert_eq!(path, before);
    }

    #[test]
    fn test_budget_runs_down_to_zero() {
        let mut rng = StdRng::seed_from_u64(4);
        let config = ScatterConfig::default();
        let material = Material::mirror(Color::ONE);
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);
        let mut path = path_toward(Vec3::NEG_Y, 3);

        let mut scattered = 0;
        while !path.is_terminated() {
            // Keep re-entering from above so the mirror always reflects
            path.ray.direction = Vec3::NEG_Y;
            scatter_ray(&mut path, &hit, &material, &config, &mut rng);
            scattered += 1;
        }
        assert_eq!(scattered, 3);
        assert_eq!(
            scatter_ray(&mut path, &hit, &material, &config, &mut rng),
            ScatterEvent::Inactive
        );
        assert_eq!(path.remaining_bounces, 0);
    }

    #[test]
    fn test_glass_transmission_spawns_below_surface() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = ScatterConfig::default();
        let material = Material::glass(1.5);
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);

        let mut below = 0;
        for _ in 0..200 {
            let mut path = path_toward(Vec3::NEG_Y, 2);
            let event = scatter_ray(&mut path, &hit, &material, &config, &mut rng);
            assert_eq!(event, ScatterEvent::Scattered(Lobe::Refractive));
            assert!((path.throughput - Color::ONE).length() < 1e-5);

            let side = path.ray.direction.y.signum();
            assert_eq!(path.ray.origin.y.signum(), side);
            if side < 0.0 {
                below += 1;
            }
        }
        assert!(below > 150);
    }

    #[test]
    fn test_mixture_divides_by_lobe_probability() {
        let mut rng = StdRng::seed_from_u64(6);
        let config = ScatterConfig::default();
        let albedo = Color::new(0.6, 0.6, 0.6);
        let reflectance = Color::new(0.9, 0.9, 0.9);
        let material = Material::diffuse(albedo)
            .with_specular_color(reflectance)
            .with_reflective(0.25);
        let hit = Intersection::new(Vec3::ZERO, Vec3::Y, 0);

        for _ in 0..500 {
            let mut path = path_toward(Vec3::new(0.3, -1.0, 0.0).normalize(), 2);
            match scatter_ray(&mut path, &hit, &material, &config, &mut rng) {
                ScatterEvent::Scattered(Lobe::Diffuse) => {
                    assert!((path.throughput - albedo / 0.75).length() < 1e-3);
                }
                ScatterEvent::Scattered(Lobe::Specular) => {
                    assert!((path.throughput - reflectance / 0.25).length() < 1e-5);
                }
                ScatterEvent::Absorbed => {}
                other => panic!("unexpected event {:?}", other),
            }
        }
    }

    #[test]
    fn test_spawn_ray_offsets_toward_wi() {
        let config = ScatterConfig {
            ray_epsilon: 0.01,
            ..Default::default()
        };
        let mut path = path_toward(Vec3::NEG_Y, 1);
        let point = Vec3::new(1.0, 2.0, 3.0);

        spawn_ray(&mut path, point, Vec3::Y, Vec3::new(0.0, 1.0, 0.0), &config);
        assert!((path.ray.origin - Vec3::new(1.0, 2.01, 3.0)).length() < 1e-6);
        assert_eq!(path.ray.direction, Vec3::Y);

        spawn_ray(&mut path, point, Vec3::Y, Vec3::new(0.6, -0.8, 0.0), &config);
        assert!((path.ray.origin - Vec3::new(1.0, 1.99, 3.0)).length() < 1e-6);
        assert_eq!(path.ray.direction, Vec3::new(0.6, -0.8, 0.0));
    }
}
