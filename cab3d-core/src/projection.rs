/// Cabinet (oblique) projection onto the display plane
use nalgebra::{Matrix4, Point3};

use crate::transform;

/// Oblique projection that shears depth into the display plane.
///
/// The z coordinate is not dropped outright: it is scaled by
/// `depth_factor`, sheared into x and y at `angle`, and the z row of the
/// matrix is zero, so every projected point lands on the z = 0 plane
/// while keeping a visual sense of depth.
#[derive(Debug, Clone, Copy)]
pub struct CabinetProjection {
    /// Direction of the receding depth axis, in radians
    pub angle: f32,
    /// Scale applied to depth before shearing
    pub depth_factor: f32,
}

impl CabinetProjection {
    /// The classic cabinet projection: 45 degrees, depth halved
    pub fn new() -> Self {
        Self {
            angle: std::f32::consts::FRAC_PI_4,
            depth_factor: 0.5,
        }
    }

    /// The projection matrix.
    ///
    /// Singular by construction (zero z row); the depth shear recedes
    /// down-left, so the coefficients are negative.
    #[rustfmt::skip]
    pub fn matrix(&self) -> Matrix4<f32> {
        let shear_x = -self.depth_factor * self.angle.cos();
        let shear_y = -self.depth_factor * self.angle.sin();
        Matrix4::new(
            1.0, 0.0, shear_x, 0.0,
            0.0, 1.0, shear_y, 0.0,
            0.0, 0.0, 0.0,     0.0,
            0.0, 0.0, 0.0,     1.0,
        )
    }

    /// Project a single point onto the z = 0 display plane
    pub fn project_point(&self, point: &Point3<f32>) -> Point3<f32> {
        transform::apply(&self.matrix(), point)
    }

    /// Project a vertex sequence.
    ///
    /// Index correspondence with the input is preserved 1:1, so any edge
    /// list valid for the input stays valid for the output.
    pub fn project(&self, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
        transform::apply_all(&self.matrix(), points)
    }
}

impl Default for CabinetProjection {
    fn default() -> Self {
        Self::new()
    }
}
