//! Random sampling and optics helpers shared by the camera and materials.

use glint_math::Vec3;
use rand::{Rng, RngCore};

/// Draw a uniform f64 in [0, 1).
#[inline]
pub(crate) fn sample_unit(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// Rejection-sample a point inside the unit sphere.
pub(crate) fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(rng.gen(), rng.gen(), rng.gen()) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Rejection-sample a point inside the unit disk in the XY plane.
pub(crate) fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(rng.gen(), rng.gen(), 0.0) - Vec3::new(1.0, 1.0, 0.0);
        if p.dot(p) < 1.0 {
            return p;
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface via Snell's law.
///
/// Returns `None` on total internal reflection.
pub(crate) fn refract(v: Vec3, n: Vec3, ni_over_nt: f64) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation of the Fresnel reflectance.
#[inline]
pub(crate) fn schlick(cosine: f64, ref_index: f64) -> f64 {
    let r0 = ((1.0 - ref_index) / (1.0 + ref_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
