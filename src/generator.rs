//! Mesh generator capability and shape registry

use crate::{Error, Mesh, OctaSphere, Result, SubdivisionMode};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Something that can produce a complete mesh
///
/// Every call to [`generate`](MeshGenerator::generate) builds its mesh from
/// scratch; nothing carries over between calls.
pub trait MeshGenerator {
    /// Short, lowercase shape name
    fn name(&self) -> &'static str;

    /// Build the mesh
    fn generate(&self) -> Result<Mesh>;
}

/// Shapes that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// Subdivided octahedron projected onto a sphere
    #[default]
    OctaSphere,
}

impl ShapeKind {
    /// All registered shapes
    pub const ALL: [ShapeKind; 1] = [ShapeKind::OctaSphere];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::OctaSphere => "octasphere",
        }
    }

    /// Look a shape up by name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                Error::InvalidParameter(format!(
                    "unknown shape '{}' (known: {})",
                    name,
                    known.join(", ")
                ))
            })
    }

    /// Build the generator for this shape
    pub fn build(
        self,
        radius: f64,
        resolution: u32,
        mode: SubdivisionMode,
    ) -> Result<Box<dyn MeshGenerator>> {
        match self {
            ShapeKind::OctaSphere => Ok(Box::new(OctaSphere::with_mode(radius, resolution, mode)?)),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
