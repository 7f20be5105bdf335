//! Mesh math utilities

use crate::{Error, Mesh, Result, Vertex};
use nalgebra::Vector3;

impl Mesh {
    /// Push every vertex radially onto a sphere of the given radius
    ///
    /// Each vertex is divided by its Euclidean norm and multiplied by
    /// `radius`. A vertex whose norm is zero (or not finite) cannot be
    /// projected and fails the whole call with
    /// [`Error::DegenerateGeometry`]; the mesh is left unchanged in that case.
    pub fn project_onto_sphere(&mut self, radius: f64) -> Result<()> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "radius must be positive and finite, got {}",
                radius
            )));
        }

        if let Some(index) = self.vertices().iter().position(|v| !is_projectable(v)) {
            return Err(Error::DegenerateGeometry { index });
        }

        for vertex in self.vertices_mut() {
            let scale = radius / vertex.norm();
            *vertex *= scale;
        }

        Ok(())
    }

    /// Smallest and largest distance of any vertex from the origin
    ///
    /// Returns `None` for a mesh without vertices.
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        self.vertices().iter().map(|v| v.norm()).fold(None, |acc, r| {
            Some(match acc {
                None => (r, r),
                Some((lo, hi)) => (lo.min(r), hi.max(r)),
            })
        })
    }

    /// Get the normal of a triangle by index (normalized)
    pub fn triangle_normal(&self, index: usize) -> Result<Vector3<f64>> {
        let (a, b, c) = self.get_triangle_vertices(index)?;
        let normal = (b - a).cross(&(c - a));
        let norm = normal.norm();
        if norm <= f64::EPSILON {
            Ok(Vector3::zeros())
        } else {
            Ok(normal / norm)
        }
    }

    /// Get the area of a triangle by index
    pub fn triangle_area(&self, index: usize) -> Result<f64> {
        let (a, b, c) = self.get_triangle_vertices(index)?;
        Ok(0.5 * (b - a).cross(&(c - a)).norm())
    }

    /// Sum of all triangle areas
    pub fn surface_area(&self) -> Result<f64> {
        (0..self.triangle_count()).try_fold(0.0, |sum, i| Ok(sum + self.triangle_area(i)?))
    }
}

fn is_projectable(v: &Vertex) -> bool {
    let norm = v.norm();
    norm.is_finite() && norm > 0.0
}
