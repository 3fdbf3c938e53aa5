//! glint renderer - CPU path tracing.
//!
//! A Monte Carlo path tracer over sphere primitives with three classical
//! materials (diffuse, metal, glass). The kernel takes a scene and a camera
//! and fills a pixel buffer; scene construction and image encoding live in
//! the caller.

mod bucket;
mod camera;
mod error;
mod hittable;
mod integrator;
mod material;
mod renderer;
mod sampling;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::BuildError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::ray_color;
pub use material::{Color, Material};
pub use renderer::{color_to_rgb8, render, render_pixel, render_tiled, ImageBuffer, RenderConfig};
pub use sphere::Sphere;

/// Re-export the math types the public API is expressed in.
pub use glint_math::{Interval, Ray, Vec3};
