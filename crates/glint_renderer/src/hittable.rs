//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal at the intersection.
    ///
    /// Always outward, never flipped toward the ray; the dielectric relies
    /// on its sign against the ray direction to tell entering from exiting.
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside the given interval.
    ///
    /// Returns the closest accepted hit, or `None` for a miss. A miss is an
    /// ordinary outcome, not an error.
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord>;
}

/// A list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord> {
        let mut closest_hit = None;
        let mut closest_so_far = t_range.max;

        // Shrinking the upper bound guarantees the globally closest hit
        // wins regardless of insertion order.
        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(t_range.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }
}
