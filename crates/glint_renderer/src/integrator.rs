//! Recursive path-tracing integrator.

use crate::{Color, Hittable};
use glint_math::{Interval, Ray};
use rand::RngCore;

/// Lower bound of the hit interval, avoiding self-intersection at the
/// scatter origin ("shadow acne").
const T_MIN: f64 = 0.001;

/// Compute the color seen along a ray.
///
/// Traces the ray through the scene, applying material scattering at each
/// bounce and attenuating the recursive result. Terminates on a miss (sky
/// gradient), absorption, or an exhausted bounce budget (black). The sky
/// gradient is the scene's only light source.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    match world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) {
        Some(rec) => match rec.material.scatter(ray, &rec, rng) {
            Some((attenuation, scattered)) => {
                attenuation * ray_color(&scattered, world, depth - 1, rng)
            }
            None => Color::ZERO,
        },
        None => sky_gradient(ray),
    }
}

/// Vertical white-to-blue background gradient.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::ONE + t * Color::new(0.5, 0.7, 1.0)
}
