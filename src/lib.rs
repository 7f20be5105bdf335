//! # octasphere
//!
//! Sphere meshes for real-time renderers, built by subdividing an octahedron.
//!
//! The generator starts from the 6 vertices and 8 triangles of a unit
//! octahedron, splits every triangle into four at its edge midpoints a given
//! number of times, and finally pushes every vertex onto a sphere of the
//! requested radius. The result is written as two flat text files: one line
//! of `x y z` per vertex and one line of `a b c` per triangle.
//!
//! ## Example
//!
//! ```rust,no_run
//! use octasphere::{MeshGenerator, MeshSerializer, OctaSphere};
//! use std::path::Path;
//!
//! let mesh = OctaSphere::new(0.7, 3)?.generate()?;
//! MeshSerializer::write(
//!     &mesh,
//!     Some(Path::new("vertices.arr")),
//!     Some(Path::new("elements.arr")),
//! )?;
//! # Ok::<(), octasphere::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod log;
pub mod mesh;
pub mod sphere;
pub mod types;
pub mod utils;

/// Convenience imports for common traits/types.
pub mod prelude {
    pub use crate::{Mesh, MeshGenerator, MeshSerializer, OctaSphere, SphereConfig};
}

// Re-exports
pub use config::{RunSummary, SphereConfig};
pub use error::{Error, Result};
pub use generator::{MeshGenerator, ShapeKind};
pub use log::LogFile;
pub use mesh::{Mesh, MeshSerializer, VERTEX_DECIMALS, VERTEX_LINE_WIDTH};
pub use sphere::{OctaSphere, SubdivisionMode, MAX_RESOLUTION};
pub use types::{Triangle, Vertex};
pub use utils::{TempFolder, Utils};

// Re-export nalgebra for callers building vertices by hand
pub use nalgebra;
