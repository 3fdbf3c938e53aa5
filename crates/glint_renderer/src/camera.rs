//! Thin-lens camera for ray generation.

use crate::sampling::random_in_unit_disk;
use crate::BuildError;
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Camera mapping normalized image coordinates to world-space rays.
///
/// The viewport rectangle sits on the focus plane; a non-zero aperture
/// jitters ray origins over a lens disk, producing depth-of-field blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Create a new camera.
    ///
    /// - `look_from` / `look_at`: eye position and target point
    /// - `vup`: world up vector
    /// - `vfov`: vertical field of view in degrees, in (0, 180)
    /// - `aspect_ratio`: viewport width over height
    /// - `aperture`: lens diameter; 0 disables depth of field
    /// - `focus_dist`: distance to the plane of perfect focus
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Result<Self, BuildError> {
        let gaze = look_from - look_at;
        if gaze.length_squared() == 0.0 || !gaze.is_finite() {
            return Err(BuildError::DegenerateView);
        }
        if !(vfov.is_finite() && vfov > 0.0 && vfov < 180.0) {
            return Err(BuildError::InvalidFov(vfov));
        }
        if !(focus_dist.is_finite() && focus_dist > 0.0) {
            return Err(BuildError::InvalidFocusDistance(focus_dist));
        }
        if !(aperture.is_finite() && aperture >= 0.0) {
            return Err(BuildError::InvalidAperture(aperture));
        }

        let w = gaze.normalize();
        if vup.cross(w).length_squared() == 0.0 {
            return Err(BuildError::DegenerateUp);
        }
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect_ratio * half_height;

        Ok(Self {
            origin: look_from,
            lower_left: look_from
                - half_width * focus_dist * u
                - half_height * focus_dist * v
                - focus_dist * w,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            lens_radius: aperture / 2.0,
        })
    }

    /// Generate a ray through the viewport point (s, t), each in [0, 1].
    ///
    /// (0, 0) is the lower-left corner of the viewport.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn basic_camera() -> Camera {
        Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
            0.0,
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        let from = Vec3::new(1.0, 1.0, 1.0);

        assert_eq!(
            Camera::new(from, from, Vec3::Y, 90.0, 1.0, 0.0, 1.0),
            Err(BuildError::DegenerateView)
        );
        assert_eq!(
            Camera::new(from, Vec3::ZERO, Vec3::Y, 0.0, 1.0, 0.0, 1.0),
            Err(BuildError::InvalidFov(0.0))
        );
        assert_eq!(
            Camera::new(from, Vec3::ZERO, Vec3::Y, 90.0, 1.0, 0.0, 0.0),
            Err(BuildError::InvalidFocusDistance(0.0))
        );
        assert_eq!(
            Camera::new(from, Vec3::ZERO, Vec3::Y, 90.0, 1.0, -0.1, 1.0),
            Err(BuildError::InvalidAperture(-0.1))
        );
        // Up vector parallel to the view direction has no usable basis.
        assert_eq!(
            Camera::new(Vec3::ZERO, Vec3::Y, Vec3::Y, 90.0, 1.0, 0.0, 1.0),
            Err(BuildError::DegenerateUp)
        );
    }

    #[test]
    fn test_zero_aperture_rays_share_origin() {
        let camera = basic_camera();
        let mut rng = StdRng::seed_from_u64(42);

        for (s, t) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)] {
            let ray = camera.get_ray(s, t, &mut rng);
            assert_eq!(ray.origin, Vec3::ZERO);
        }
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = basic_camera();
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        let dir = ray.direction.normalize();
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_viewport_corners() {
        // 90 degree fov at focus distance 1 spans [-1, 1] in both axes.
        let camera = basic_camera();
        let mut rng = StdRng::seed_from_u64(42);

        let lower_left = camera.get_ray(0.0, 0.0, &mut rng);
        assert!((lower_left.direction - Vec3::new(-1.0, -1.0, -1.0)).length() < 1e-12);

        let upper_right = camera.get_ray(1.0, 1.0, &mut rng);
        assert!((upper_right.direction - Vec3::new(1.0, 1.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_lens_offset_stays_on_focus_plane() {
        // With a wide aperture the origin moves, but every ray still passes
        // through the same focus-plane point.
        let camera = Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
            2.0,
            5.0,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let target = Vec3::new(0.0, 0.0, -5.0); // center of the focus plane
        for _ in 0..10 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            assert!((ray.at(1.0) - target).length() < 1e-9);
        }
    }
}
