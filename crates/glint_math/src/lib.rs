//! Shared math types for the glint path tracer.
//!
//! All geometry is double precision. `Vec3` doubles as a point, a
//! direction, and (in the renderer) an RGB color.

pub use glam::DVec3 as Vec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_cross_sign_convention() {
        // Right-hand rule: X x Y = Z
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        let expected = Vec3::new(
            a.y * b.z - a.z * b.y,
            -(a.x * b.z - a.z * b.x),
            a.x * b.y - a.y * b.x,
        );
        assert_eq!(a.cross(b), expected);
    }

    #[test]
    fn test_cross_orthogonality() {
        let v = Vec3::new(0.3, -1.7, 2.2);
        let other = Vec3::new(5.0, 0.1, -0.4);
        let c = v.cross(other);

        assert!(v.dot(c).abs() < 1e-12);
        assert!(other.dot(c).abs() < 1e-12);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        let unit = v.normalize();

        assert!((unit.length() - 1.0).abs() < 1e-12);
        assert!((unit - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-12);
    }
}
