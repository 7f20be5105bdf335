//! Basic types for octasphere

use nalgebra::Vector3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex position
pub type Vertex = Vector3<f64>;

/// Triangle defined by three vertex indices
///
/// The order of the indices is the winding the renderer sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex index
    pub v0: u32,
    /// Second vertex index
    pub v1: u32,
    /// Third vertex index
    pub v2: u32,
}

impl Triangle {
    /// Create a new triangle
    pub const fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self { v0, v1, v2 }
    }

    /// Get vertex indices as an array
    pub fn indices(&self) -> [u32; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Largest index referenced by this triangle
    pub fn max_index(&self) -> u32 {
        self.v0.max(self.v1).max(self.v2)
    }
}

impl From<[u32; 3]> for Triangle {
    fn from(indices: [u32; 3]) -> Self {
        let [v0, v1, v2] = indices;
        Self { v0, v1, v2 }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.v0, self.v1, self.v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        let tri = Triangle::new(0, 1, 2);
        assert_eq!(tri.indices(), [0, 1, 2]);
        assert_eq!(tri.to_string(), "Triangle(0, 1, 2)");
    }

    #[test]
    fn test_triangle_from_array() {
        let tri = Triangle::from([7, 3, 5]);
        assert_eq!(tri, Triangle::new(7, 3, 5));
        assert_eq!(tri.max_index(), 7);
    }
}
