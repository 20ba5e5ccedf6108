/// Affine transformation matrices in homogeneous coordinates
use nalgebra::{Matrix4, Point3, Vector3};

/// A principal coordinate axis.
///
/// Doubles as the mirror-plane selector: `Axis::X` names the plane x = 0,
/// so reflecting about it negates the x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Transform builder for 3D affine operations
pub struct Transform;

impl Transform {
    /// Create a translation matrix
    pub fn translation(dx: f32, dy: f32, dz: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(dx, dy, dz))
    }

    /// Create a right-handed rotation matrix about a principal axis.
    ///
    /// A positive angle rotates counter-clockwise when viewed from the
    /// positive end of the axis looking toward the origin.
    pub fn rotation(axis: Axis, angle: f32) -> Matrix4<f32> {
        let axis_angle = match axis {
            Axis::X => Vector3::new(angle, 0.0, 0.0),
            Axis::Y => Vector3::new(0.0, angle, 0.0),
            Axis::Z => Vector3::new(0.0, 0.0, angle),
        };
        Matrix4::new_rotation(axis_angle)
    }

    /// Create a scale matrix.
    ///
    /// Zero and negative factors are valid degenerate geometry, not errors.
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    /// Create a reflection matrix about the coordinate plane named by `axis`
    pub fn reflection(axis: Axis) -> Matrix4<f32> {
        let diag = match axis {
            Axis::X => Vector3::new(-1.0, 1.0, 1.0),
            Axis::Y => Vector3::new(1.0, -1.0, 1.0),
            Axis::Z => Vector3::new(1.0, 1.0, -1.0),
        };
        Matrix4::new_nonuniform_scaling(&diag)
    }
}

/// Apply a transform to a point.
///
/// The point is promoted to homogeneous coordinates with w = 1 and the
/// x/y/z rows of the product are read back directly. The w row never
/// feeds a perspective divide; every transform here is affine or oblique.
pub fn apply(matrix: &Matrix4<f32>, point: &Point3<f32>) -> Point3<f32> {
    let h = matrix * point.to_homogeneous();
    Point3::new(h.x, h.y, h.z)
}

/// Map `apply` over a vertex sequence, preserving order and length
pub fn apply_all(matrix: &Matrix4<f32>, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
    points.iter().map(|p| apply(matrix, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn sample_points() -> Vec<Point3<f32>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(3.0, 5.0, 0.0),
            Point3::new(-2.0, 1.5, 4.0),
        ]
    }

    fn assert_close(a: &Point3<f32>, b: &Point3<f32>, tol: f32) {
        assert!(
            (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_identity_laws() {
        for p in &sample_points() {
            assert_close(&apply(&Transform::translation(0.0, 0.0, 0.0), p), p, 1e-6);
            assert_close(&apply(&Transform::scaling(1.0, 1.0, 1.0), p), p, 1e-6);
            for axis in AXES {
                assert_close(&apply(&Transform::rotation(axis, 0.0), p), p, 1e-6);
            }
        }
    }

    #[test]
    fn test_translation_offsets_components() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let moved = apply(&Transform::translation(0.5, -1.0, 2.0), &p);
        assert_close(&moved, &Point3::new(1.5, 1.0, 5.0), 1e-6);
    }

    #[test]
    fn test_rotation_is_right_handed() {
        // +90 degrees about z takes +x to +y
        let p = Point3::new(1.0, 0.0, 0.0);
        let turned = apply(&Transform::rotation(Axis::Z, PI / 2.0), &p);
        assert_close(&turned, &Point3::new(0.0, 1.0, 0.0), 1e-6);
    }

    #[test]
    fn test_rotation_composition() {
        let (theta, phi) = (0.4, 0.3);
        for axis in AXES {
            for p in &sample_points() {
                let stepped = apply(
                    &Transform::rotation(axis, theta),
                    &apply(&Transform::rotation(axis, phi), p),
                );
                let direct = apply(&Transform::rotation(axis, theta + phi), p);
                assert_close(&stepped, &direct, 1e-5);
            }
        }
    }

    #[test]
    fn test_small_rotations_accumulate() {
        // 18 steps of pi/18 about z equal one half turn
        let p = Point3::new(3.0, 5.0, 0.0);
        let step = Transform::rotation(Axis::Z, PI / 18.0);
        let mut stepped = p;
        for _ in 0..18 {
            stepped = apply(&step, &stepped);
        }
        let direct = apply(&Transform::rotation(Axis::Z, PI), &p);
        assert_close(&stepped, &direct, 1e-4);
    }

    #[test]
    fn test_reflection_is_involution() {
        for axis in AXES {
            let m = Transform::reflection(axis);
            for p in &sample_points() {
                assert_close(&apply(&m, &apply(&m, p)), p, 1e-6);
            }
        }
    }

    #[test]
    fn test_reflection_negates_one_coordinate() {
        let p = Point3::new(3.0, 5.0, 2.0);
        assert_close(
            &apply(&Transform::reflection(Axis::X), &p),
            &Point3::new(-3.0, 5.0, 2.0),
            1e-6,
        );
        assert_close(
            &apply(&Transform::reflection(Axis::Y), &p),
            &Point3::new(3.0, -5.0, 2.0),
            1e-6,
        );
        assert_close(
            &apply(&Transform::reflection(Axis::Z), &p),
            &Point3::new(3.0, 5.0, -2.0),
            1e-6,
        );
    }

    #[test]
    fn test_scaling_can_collapse_a_dimension() {
        let p = Point3::new(4.0, -2.0, 7.0);
        let flat = apply(&Transform::scaling(1.0, 1.0, 0.0), &p);
        assert_close(&flat, &Point3::new(4.0, -2.0, 0.0), 1e-6);
    }

    #[test]
    fn test_apply_all_preserves_order_and_length() {
        let points = sample_points();
        let moved = apply_all(&Transform::translation(1.0, 0.0, 0.0), &points);
        assert_eq!(moved.len(), points.len());
        for (before, after) in points.iter().zip(&moved) {
            assert_close(after, &Point3::new(before.x + 1.0, before.y, before.z), 1e-6);
        }
    }
}
