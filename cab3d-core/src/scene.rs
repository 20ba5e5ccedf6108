/// Scene state: the primary solid, its projection, and the mirror image
use nalgebra::{Matrix4, Point3};

use crate::geometry::SolidModel;
use crate::projection::CabinetProjection;
use crate::transform::{self, Axis, Transform};

/// The reflected duplicate of the primary model.
///
/// Shares the primary edge list; only vertex positions differ.
#[derive(Debug, Clone)]
pub struct Mirror {
    axis: Axis,
    vertices: Vec<Point3<f32>>,
    projected: Vec<Point3<f32>>,
}

impl Mirror {
    /// The plane currently mirrored about
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn projected(&self) -> &[Point3<f32>] {
        &self.projected
    }
}

/// Owns the primary model and every derived view of it.
///
/// Commands follow one protocol: build the matrix, map it over the current
/// vertex sequence, swap the sequence in as a whole, then recompute the
/// projection and refresh the mirror if one exists. The derived state is a
/// pure function of the primary vertices and the mirror axis, so readers
/// between commands always see a consistent snapshot.
pub struct Scene {
    object: SolidModel,
    projection: CabinetProjection,
    projected: Vec<Point3<f32>>,
    mirror: Option<Mirror>,
}

impl Scene {
    pub fn new(object: SolidModel) -> Self {
        let projection = CabinetProjection::new();
        let projected = projection.project(object.vertices());
        Self {
            object,
            projection,
            projected,
            mirror: None,
        }
    }

    pub fn object(&self) -> &SolidModel {
        &self.object
    }

    pub fn projection(&self) -> &CabinetProjection {
        &self.projection
    }

    /// The primary vertices in display coordinates (z = 0)
    pub fn projected(&self) -> &[Point3<f32>] {
        &self.projected
    }

    pub fn mirror(&self) -> Option<&Mirror> {
        self.mirror.as_ref()
    }

    /// Move the object by (dx, dy, dz)
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.apply(&Transform::translation(dx, dy, dz));
    }

    /// Rotate the object about a principal axis
    pub fn rotate(&mut self, axis: Axis, angle: f32) {
        self.apply(&Transform::rotation(axis, angle));
    }

    /// Scale the object by per-axis factors
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.apply(&Transform::scaling(sx, sy, sz));
    }

    /// Select the mirror plane.
    ///
    /// The first call brings the mirror into existence; later calls
    /// re-select the plane and refresh the reflected vertices. There is no
    /// transition back to an inactive mirror.
    pub fn set_mirror_axis(&mut self, axis: Axis) {
        match &mut self.mirror {
            Some(mirror) => mirror.axis = axis,
            None => {
                self.mirror = Some(Mirror {
                    axis,
                    vertices: Vec::new(),
                    projected: Vec::new(),
                });
            }
        }
        self.refresh_mirror();
    }

    /// Projected endpoints of each primary edge, in edge-list order
    pub fn projected_edges(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>)> + '_ {
        self.object
            .edges()
            .iter()
            .map(|&(i, j)| (self.projected[i], self.projected[j]))
    }

    /// Projected endpoints of each mirror edge, while a mirror exists
    pub fn mirror_projected_edges(
        &self,
    ) -> Option<impl Iterator<Item = (Point3<f32>, Point3<f32>)> + '_> {
        self.mirror.as_ref().map(|mirror| {
            self.object
                .edges()
                .iter()
                .map(move |&(i, j)| (mirror.projected[i], mirror.projected[j]))
        })
    }

    fn apply(&mut self, matrix: &Matrix4<f32>) {
        let vertices = transform::apply_all(matrix, self.object.vertices());
        self.object.set_vertices(vertices);
        self.projected = self.projection.project(self.object.vertices());
        self.refresh_mirror();
    }

    fn refresh_mirror(&mut self) {
        if let Some(mirror) = &mut self.mirror {
            let reflection = Transform::reflection(mirror.axis);
            mirror.vertices = transform::apply_all(&reflection, self.object.vertices());
            mirror.projected = self.projection.project(&mirror.vertices);
        }
    }
}
