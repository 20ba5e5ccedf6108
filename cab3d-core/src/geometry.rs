/// Wireframe geometry: vertex sequences and edge lists
use nalgebra::Point3;

/// An edge between two vertices, referenced by index into the vertex sequence
pub type Edge = (usize, usize);

/// A wireframe solid: an ordered vertex sequence plus a fixed edge list.
///
/// Topology never changes after construction. Transformations replace the
/// vertex sequence wholesale and leave the edge list untouched, so edge
/// indices stay valid across any sequence of commands.
#[derive(Debug, Clone)]
pub struct SolidModel {
    vertices: Vec<Point3<f32>>,
    edges: Vec<Edge>,
}

impl SolidModel {
    /// Build a model from a vertex sequence and an edge list.
    ///
    /// Panics if an edge is degenerate (i == j) or references a vertex out
    /// of range. Topology is fixed at construction, so a bad edge is a
    /// programming error rather than a runtime condition.
    pub fn new(vertices: Vec<Point3<f32>>, edges: Vec<Edge>) -> Self {
        for &(i, j) in &edges {
            assert!(i != j, "degenerate edge ({i}, {j})");
            assert!(
                i < vertices.len() && j < vertices.len(),
                "edge ({i}, {j}) out of range for {} vertices",
                vertices.len()
            );
        }
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Replace the whole vertex sequence in one step.
    ///
    /// Panics if the length changes: positions move, topology does not.
    pub fn set_vertices(&mut self, vertices: Vec<Point3<f32>>) {
        assert_eq!(
            vertices.len(),
            self.vertices.len(),
            "vertex count is fixed for the lifetime of the model"
        );
        self.vertices = vertices;
    }

    /// The block letter "Г": a six-corner outline extruded one unit along z.
    ///
    /// Vertices 0-5 trace the front outline counter-clockwise starting at
    /// the origin; 6-11 repeat it at z = 1. Edges close both outlines and
    /// connect matching corners.
    pub fn letter_g() -> Self {
        let vertices = vec![
            // Front outline (z = 0)
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 5.0, 0.0),
            Point3::new(3.0, 5.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
            Point3::new(1.0, 4.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            // Back outline (z = 1)
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 5.0, 1.0),
            Point3::new(3.0, 5.0, 1.0),
            Point3::new(3.0, 4.0, 1.0),
            Point3::new(1.0, 4.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
        ];
        let edges = vec![
            // Front outline
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            // Back outline
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 10),
            (10, 11),
            (11, 6),
            // Front-to-back connectors
            (0, 6),
            (1, 7),
            (2, 8),
            (3, 9),
            (4, 10),
            (5, 11),
        ];
        Self::new(vertices, edges)
    }

    /// Coordinate-axis segments from the origin, used as scene furniture
    pub fn axes(length: f32) -> Self {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(length, 0.0, 0.0),
            Point3::new(0.0, length, 0.0),
            Point3::new(0.0, 0.0, length),
        ];
        let edges = vec![(0, 1), (0, 2), (0, 3)];
        Self::new(vertices, edges)
    }
}
