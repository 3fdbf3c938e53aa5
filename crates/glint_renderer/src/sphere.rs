//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    BuildError, Material,
};
use glint_math::{Interval, Ray, Vec3};

/// A sphere primitive, immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Result<Self, BuildError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BuildError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Get the sphere's center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord> {
        // Quadratic a*t^2 + 2b*t + c = 0 for |origin + t*d - center| = r.
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the smaller root; fall back to the larger one when the
        // smaller lies outside the interval (ray origin inside the sphere).
        let mut root = (-b - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !t_range.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
            material: self.material,
        })
    }
}
