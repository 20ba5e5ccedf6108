/// cab3d Core Library - Transformation and projection engine
///
/// This library provides the geometric core for wireframe display:
/// homogeneous transform builders, the cabinet-projection stage, solid
/// models as vertex/edge lists, and the command-driven scene that keeps
/// projected and mirrored views in sync with the primary model.

pub mod transform;
pub mod geometry;
pub mod projection;
pub mod scene;

// Re-export commonly used types
pub use transform::{Axis, Transform};
pub use geometry::{Edge, SolidModel};
pub use projection::CabinetProjection;
pub use scene::{Mirror, Scene};
