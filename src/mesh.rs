//! Triangle mesh representation

use crate::{Error, Result, Triangle, Vertex};
use std::path::Path;

mod io; // Array file I/O implementation
mod math; // Mesh math helpers
pub use io::{MeshSerializer, VERTEX_DECIMALS, VERTEX_LINE_WIDTH};

/// Triangle mesh
///
/// An append-only vertex buffer plus an append-only triangle buffer whose
/// entries index into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for the given number of elements
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Create a mesh from existing buffers
    ///
    /// Every triangle index must be smaller than `vertices.len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use octasphere::{Mesh, Triangle};
    /// use nalgebra::Vector3;
    ///
    /// let mesh = Mesh::from_buffers(
    ///     vec![Vector3::x(), Vector3::y(), Vector3::z()],
    ///     vec![Triangle::new(0, 1, 2)],
    /// )?;
    /// assert_eq!(mesh.triangle_count(), 1);
    /// # Ok::<(), octasphere::Error>(())
    /// ```
    pub fn from_buffers(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Result<Self> {
        let mut mesh = Self::with_capacity(vertices.len(), triangles.len());
        mesh.vertices = vertices;
        for tri in triangles {
            mesh.add_triangle(tri)?;
        }
        Ok(mesh)
    }

    /// Add a vertex
    ///
    /// Returns the vertex index.
    pub fn add_vertex(&mut self, pos: Vertex) -> Result<u32> {
        let index = u32::try_from(self.vertices.len()).map_err(|_| {
            Error::InvalidParameter(format!(
                "vertex buffer exceeds {} entries",
                u32::MAX
            ))
        })?;
        self.vertices.push(pos);
        Ok(index)
    }

    /// Add a triangle
    ///
    /// Returns the triangle index. Rejects triangles that reference
    /// vertices not yet in the buffer.
    pub fn add_triangle(&mut self, tri: Triangle) -> Result<usize> {
        let vertex_count = self.vertices.len();
        if let Some(&index) = tri
            .indices()
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(Error::IndexOutOfRange {
                triangle: self.triangles.len(),
                index,
                vertex_count,
            });
        }
        self.triangles.push(tri);
        Ok(self.triangles.len() - 1)
    }

    /// Add a triangle by vertex indices
    pub fn add_triangle_indices(&mut self, a: u32, b: u32, c: u32) -> Result<usize> {
        self.add_triangle(Triangle::new(a, b, c))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true when the mesh has neither vertices nor triangles
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }

    /// Get a vertex by index
    pub fn get_vertex(&self, index: usize) -> Option<Vertex> {
        self.vertices.get(index).copied()
    }

    /// Get a triangle by index
    pub fn get_triangle(&self, index: usize) -> Option<Triangle> {
        self.triangles.get(index).copied()
    }

    /// Get the three corner positions of a triangle
    pub fn get_triangle_vertices(&self, index: usize) -> Result<(Vertex, Vertex, Vertex)> {
        let tri = self.get_triangle(index).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "triangle index {} out of range ({} triangles)",
                index,
                self.triangle_count()
            ))
        })?;
        let corner = |i: u32| {
            self.get_vertex(i as usize)
                .ok_or(Error::IndexOutOfRange {
                    triangle: index,
                    index: i,
                    vertex_count: self.vertex_count(),
                })
        };
        Ok((corner(tri.v0)?, corner(tri.v1)?, corner(tri.v2)?))
    }

    /// All vertices in buffer order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All triangles in buffer order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Flat `x y z` position array, ready for a vertex buffer upload
    pub fn vertex_buffer(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Flat index array, three entries per triangle
    pub fn index_buffer(&self) -> Vec<u32> {
        self.triangles.iter().flat_map(|t| t.indices()).collect()
    }

    /// Write the vertex and/or index array files
    ///
    /// See [`MeshSerializer::write`].
    pub fn save_arr(
        &self,
        vertex_path: Option<&Path>,
        index_path: Option<&Path>,
    ) -> Result<()> {
        MeshSerializer::write(self, vertex_path, index_path)
    }

    /// Load a mesh from a vertex array file and an index array file
    pub fn load_arr<P: AsRef<Path>, Q: AsRef<Path>>(vertex_path: P, index_path: Q) -> Result<Self> {
        MeshSerializer::read(vertex_path, index_path)
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Detach the triangle buffer, leaving the vertices in place
    pub(crate) fn take_triangles(&mut self) -> Vec<Triangle> {
        std::mem::take(&mut self.triangles)
    }

    /// Reserve room for more vertices and triangles
    pub(crate) fn reserve(&mut self, vertices: usize, triangles: usize) {
        self.vertices.reserve(vertices);
        self.triangles.reserve(triangles);
    }
}
