//! Octahedron-subdivision sphere

use crate::{Error, Mesh, MeshGenerator, Result, Triangle};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest number of subdivision passes accepted
///
/// Eight passes produce 524 288 triangles (3.1 M with retained parents).
pub const MAX_RESOLUTION: u32 = 8;

/// Unit octahedron corners: +z, +x, +y, -x, -y, -z
///
/// The -y corner keeps a negative-zero x so it prints as `-0.00000`.
const SEED_VERTICES: [[f64; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [-1.0, 0.0, 0.0],
    [-0.0, -1.0, 0.0],
    [0.0, 0.0, -1.0],
];

const SEED_TRIANGLES: [[u32; 3]; 8] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 1],
    [5, 1, 2],
    [5, 2, 3],
    [5, 3, 4],
    [5, 4, 1],
];

/// What happens to a triangle once it has been split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubdivisionMode {
    /// The four children replace the parent; `8 * 4^k` triangles
    #[default]
    Replace,
    /// The parent stays in the index buffer and is split again in later
    /// passes; `8 * 5^k` triangles. Matches existing `.arr` data sets that
    /// were generated this way.
    RetainParents,
}

impl SubdivisionMode {
    /// Triangle count growth factor per pass
    pub fn growth(self) -> usize {
        match self {
            SubdivisionMode::Replace => 4,
            SubdivisionMode::RetainParents => 5,
        }
    }
}

/// Sphere built by repeatedly splitting an octahedron and projecting the
/// result onto a sphere
///
/// # Example
///
/// ```rust
/// use octasphere::{MeshGenerator, OctaSphere};
///
/// let mesh = OctaSphere::new(0.7, 2)?.generate()?;
/// assert_eq!(mesh.triangle_count(), 8 * 4 * 4);
/// # Ok::<(), octasphere::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OctaSphere {
    radius: f64,
    resolution: u32,
    mode: SubdivisionMode,
}

impl OctaSphere {
    /// Create a generator using [`SubdivisionMode::Replace`]
    pub fn new(radius: f64, resolution: u32) -> Result<Self> {
        Self::with_mode(radius, resolution, SubdivisionMode::default())
    }

    /// Create a generator with an explicit subdivision mode
    pub fn with_mode(radius: f64, resolution: u32, mode: SubdivisionMode) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "radius must be positive and finite, got {}",
                radius
            )));
        }
        if resolution > MAX_RESOLUTION {
            return Err(Error::InvalidParameter(format!(
                "resolution must be at most {}, got {}",
                MAX_RESOLUTION, resolution
            )));
        }

        Ok(Self {
            radius,
            resolution,
            mode,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn mode(&self) -> SubdivisionMode {
        self.mode
    }

    /// Triangle count `generate` will produce
    pub fn expected_triangle_count(&self) -> usize {
        SEED_TRIANGLES.len() * self.mode.growth().pow(self.resolution)
    }

    /// Vertex count `generate` will produce
    ///
    /// Every pass adds three vertices per triangle present when it starts;
    /// midpoints are not shared between neighbouring triangles.
    pub fn expected_vertex_count(&self) -> usize {
        let mut triangles = SEED_TRIANGLES.len();
        let mut vertices = SEED_VERTICES.len();
        for _ in 0..self.resolution {
            vertices += 3 * triangles;
            triangles *= self.mode.growth();
        }
        vertices
    }

    /// Octahedron seed: fresh buffers on every call
    fn seed(&self) -> Result<Mesh> {
        let mut mesh = Mesh::with_capacity(
            self.expected_vertex_count(),
            self.expected_triangle_count(),
        );
        for [x, y, z] in SEED_VERTICES {
            mesh.add_vertex(Vector3::new(x, y, z))?;
        }
        for tri in SEED_TRIANGLES {
            mesh.add_triangle(Triangle::from(tri))?;
        }
        Ok(mesh)
    }

    /// One subdivision pass over the triangles present when it starts
    ///
    /// Midpoints are appended unnormalized, in the order ab, ac, bc.
    fn subdivide(&self, mesh: &mut Mesh) -> Result<()> {
        let parents = match self.mode {
            SubdivisionMode::Replace => mesh.take_triangles(),
            SubdivisionMode::RetainParents => mesh.triangles().to_vec(),
        };
        mesh.reserve(3 * parents.len(), 4 * parents.len());

        for (index, tri) in parents.into_iter().enumerate() {
            let corner = |i: u32| {
                mesh.get_vertex(i as usize).ok_or(Error::IndexOutOfRange {
                    triangle: index,
                    index: i,
                    vertex_count: mesh.vertex_count(),
                })
            };
            let (va, vb, vc) = (corner(tri.v0)?, corner(tri.v1)?, corner(tri.v2)?);

            let n = mesh.add_vertex((va + vb) * 0.5)?;
            mesh.add_vertex((va + vc) * 0.5)?;
            mesh.add_vertex((vb + vc) * 0.5)?;

            mesh.add_triangle_indices(tri.v0, n, n + 1)?;
            mesh.add_triangle_indices(tri.v1, n, n + 2)?;
            mesh.add_triangle_indices(tri.v2, n + 2, n + 1)?;
            mesh.add_triangle_indices(n, n + 1, n + 2)?;
        }

        Ok(())
    }
}

impl MeshGenerator for OctaSphere {
    fn name(&self) -> &'static str {
        "octasphere"
    }

    fn generate(&self) -> Result<Mesh> {
        let mut mesh = self.seed()?;
        for _ in 0..self.resolution {
            self.subdivide(&mut mesh)?;
        }
        mesh.project_onto_sphere(self.radius)?;
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_octahedron() {
        let mesh = OctaSphere::new(1.0, 0).unwrap().generate().unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
        for (v, seed) in mesh.vertices().iter().zip(SEED_VERTICES) {
            assert_eq!(v.as_slice(), seed.as_slice());
        }
        assert_eq!(mesh.index_buffer(), SEED_TRIANGLES.concat());
    }

    #[test]
    fn test_first_pass_wiring() {
        let mesh = OctaSphere::new(1.0, 1).unwrap().generate().unwrap();

        // seed triangle (0, 1, 2) produces midpoints 6, 7, 8
        assert_eq!(mesh.get_triangle(0), Some(Triangle::new(0, 6, 7)));
        assert_eq!(mesh.get_triangle(1), Some(Triangle::new(1, 6, 8)));
        assert_eq!(mesh.get_triangle(2), Some(Triangle::new(2, 8, 7)));
        assert_eq!(mesh.get_triangle(3), Some(Triangle::new(6, 7, 8)));
        // seed triangle (0, 2, 3) produces midpoints 9, 10, 11
        assert_eq!(mesh.get_triangle(4), Some(Triangle::new(0, 9, 10)));
    }

    #[test]
    fn test_retain_parents_keeps_seed_in_front() {
        let sphere = OctaSphere::with_mode(1.0, 1, SubdivisionMode::RetainParents).unwrap();
        let mesh = sphere.generate().unwrap();

        assert_eq!(mesh.triangle_count(), 40);
        assert_eq!(mesh.vertex_count(), 30);
        assert_eq!(&mesh.index_buffer()[..24], SEED_TRIANGLES.concat().as_slice());
        assert_eq!(mesh.get_triangle(8), Some(Triangle::new(0, 6, 7)));
    }

    #[test]
    fn test_expected_counts() {
        let replace = OctaSphere::new(1.0, 3).unwrap();
        assert_eq!(replace.expected_triangle_count(), 512);
        assert_eq!(replace.expected_vertex_count(), 6 + 24 + 96 + 384);

        let retain = OctaSphere::with_mode(1.0, 2, SubdivisionMode::RetainParents).unwrap();
        assert_eq!(retain.expected_triangle_count(), 200);
        assert_eq!(retain.expected_vertex_count(), 6 + 24 + 120);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            OctaSphere::new(0.0, 1),
            Err(Error::InvalidParameter(_))
        ));
        assert!(OctaSphere::new(-0.5, 1).is_err());
        assert!(OctaSphere::new(f64::INFINITY, 1).is_err());
        assert!(OctaSphere::new(1.0, MAX_RESOLUTION + 1).is_err());
        assert!(OctaSphere::new(1.0, MAX_RESOLUTION).is_ok());
    }

    #[test]
    fn test_generate_is_repeatable() {
        let sphere = OctaSphere::new(2.5, 2).unwrap();
        let first = sphere.generate().unwrap();
        let second = sphere.generate().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.vertex_count(), sphere.expected_vertex_count());
    }
}
