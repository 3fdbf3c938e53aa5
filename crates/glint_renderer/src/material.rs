//! Material scattering models.
//!
//! Materials are a plain `Copy` enum rather than trait objects: each
//! variant carries its parameters, and a single `scatter` operation
//! dispatches over them. Scattering draws from an explicit generator so
//! renders are reproducible under a fixed seed.

use crate::hittable::HitRecord;
use crate::sampling::{random_in_unit_sphere, reflect, refract, sample_unit, schlick};
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values conceptually in [0, 1], not enforced).
pub type Color = Vec3;

/// Surface scattering behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse scatter with the given albedo. Never absorbs.
    Lambertian { albedo: Color },
    /// Specular reflection with a fuzz factor in [0, 1].
    Metal { albedo: Color, fuzz: f64 },
    /// Colorless glass with the given refractive index. Never absorbs.
    Dielectric { ref_index: f64 },
}

impl Material {
    /// Diffuse material.
    pub fn lambertian(albedo: Color) -> Self {
        Self::Lambertian { albedo }
    }

    /// Metal material. `fuzz` is clamped into [0, 1].
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Self::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Glass-like material (1.0 = air, 1.5 = glass, 2.4 = diamond).
    pub fn dielectric(ref_index: f64) -> Self {
        Self::Dielectric { ref_index }
    }

    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns `Some((attenuation, scattered))` if the ray scatters, or
    /// `None` if it is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        match *self {
            Self::Lambertian { albedo } => {
                let mut direction = rec.normal + random_in_unit_sphere(rng);

                // A sample landing opposite the normal would yield a
                // zero-length direction that can't be normalized later.
                if direction.length_squared() < 1e-16 {
                    direction = rec.normal;
                }

                Some((albedo, Ray::new(rec.point, direction)))
            }
            Self::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction.normalize(), rec.normal);
                let direction = reflected + fuzz * random_in_unit_sphere(rng);

                // A fuzzed reflection below the surface is absorbed.
                if direction.dot(rec.normal) > 0.0 {
                    Some((albedo, Ray::new(rec.point, direction)))
                } else {
                    None
                }
            }
            Self::Dielectric { ref_index } => {
                let d = ray_in.direction;

                // Entering or exiting is decided by the sign of the
                // direction against the outward normal.
                let (outward_normal, ni_over_nt, cosine) = if d.dot(rec.normal) > 0.0 {
                    (-rec.normal, ref_index, ref_index * d.dot(rec.normal) / d.length())
                } else {
                    (rec.normal, 1.0 / ref_index, -d.dot(rec.normal) / d.length())
                };

                let direction = match refract(d, outward_normal, ni_over_nt) {
                    Some(refracted) if sample_unit(rng) >= schlick(cosine, ref_index) => refracted,
                    // Total internal reflection, or the Fresnel draw chose
                    // the mirror branch.
                    _ => reflect(d, rec.normal),
                };

                Some((Color::ONE, Ray::new(rec.point, direction)))
            }
        }
    }
}
