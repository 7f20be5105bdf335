//! Generation request: parameters, validation and the generate-then-write
//! pipeline

use crate::utils::Utils;
use crate::{log, Error, MeshSerializer, Result, ShapeKind, SubdivisionMode, MAX_RESOLUTION};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to generate a sphere and write its array files
///
/// # Example
///
/// ```rust,no_run
/// use octasphere::SphereConfig;
///
/// let summary = SphereConfig::new(0.7, 1)
///     .with_vertex_output("data/vertices.arr")
///     .with_index_output("data/elements.arr")
///     .run()?;
/// println!("{} vertices", summary.vertex_count);
/// # Ok::<(), octasphere::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereConfig {
    /// Sphere radius, must be positive
    pub radius: f64,
    /// Number of subdivision passes, `0..=MAX_RESOLUTION`
    pub resolution: i64,
    /// Where to write the vertex file, if anywhere
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertex_output_path: Option<PathBuf>,
    /// Where to write the index file, if anywhere
    #[cfg_attr(feature = "serde", serde(default))]
    pub index_output_path: Option<PathBuf>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: SubdivisionMode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shape: ShapeKind,
    /// Create missing parent folders of the output paths
    #[cfg_attr(feature = "serde", serde(default))]
    pub create_folders: bool,
}

/// Outcome of [`SphereConfig::run`]
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Files written, vertex file first
    pub written: Vec<PathBuf>,
}

impl SphereConfig {
    pub fn new(radius: f64, resolution: i64) -> Self {
        Self {
            radius,
            resolution,
            vertex_output_path: None,
            index_output_path: None,
            mode: SubdivisionMode::default(),
            shape: ShapeKind::default(),
            create_folders: false,
        }
    }

    pub fn with_vertex_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.vertex_output_path = Some(path.into());
        self
    }

    pub fn with_index_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.index_output_path = Some(path.into());
        self
    }

    pub fn with_mode(mut self, mode: SubdivisionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_create_folders(mut self, create_folders: bool) -> Self {
        self.create_folders = create_folders;
        self
    }

    /// Check the parameters, returning the resolution as a pass count
    pub fn validate(&self) -> Result<u32> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if self.resolution < 0 {
            return Err(Error::InvalidParameter(format!(
                "resolution must not be negative, got {}",
                self.resolution
            )));
        }
        match u32::try_from(self.resolution) {
            Ok(resolution) if resolution <= MAX_RESOLUTION => Ok(resolution),
            _ => Err(Error::InvalidParameter(format!(
                "resolution must be at most {}, got {}",
                MAX_RESOLUTION, self.resolution
            ))),
        }
    }

    /// Generate the mesh and write the requested files
    pub fn run(&self) -> Result<RunSummary> {
        let resolution = self.validate()?;
        log::message(format!(
            "Generating {} (radius {}, resolution {}, {:?})",
            self.shape, self.radius, resolution, self.mode
        ))?;

        let start = Instant::now();
        let generator = self.shape.build(self.radius, resolution, self.mode)?;
        let mesh = generator.generate()?;
        log::message(format!(
            "Generated {} vertices, {} triangles in {:.3}s",
            mesh.vertex_count(),
            mesh.triangle_count(),
            start.elapsed().as_secs_f32()
        ))?;

        let vertex_path = self.vertex_output_path.as_deref();
        let index_path = self.index_output_path.as_deref();
        if self.create_folders {
            for path in vertex_path.into_iter().chain(index_path) {
                Utils::ensure_parent_folder(path)?;
            }
        }

        MeshSerializer::write(&mesh, vertex_path, index_path)?;

        let written: Vec<PathBuf> = vertex_path
            .into_iter()
            .chain(index_path)
            .map(Path::to_path_buf)
            .collect();
        for path in &written {
            log::message(format!("Wrote {}", path.display()))?;
        }
        if written.is_empty() {
            log::message("No output paths set, nothing written")?;
        }

        Ok(RunSummary {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            written,
        })
    }
}
