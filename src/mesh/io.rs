//! Array file (`.arr`) I/O support for Mesh
//!
//! The renderer reads two plain-text files:
//!
//! * a vertex file with one `x y z` line per vertex, each coordinate printed
//!   with 5 decimals and the whole line left-aligned in a 26 character field;
//! * an index file with one `a b c` line per triangle.
//!
//! Neither file has a header or a trailing newline.

use super::Mesh;
use crate::{Error, Result, Triangle, Vertex};
use nalgebra::Vector3;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Width every vertex line is padded to
pub const VERTEX_LINE_WIDTH: usize = 26;

/// Decimal digits written per coordinate
pub const VERTEX_DECIMALS: usize = 5;

/// Reads and writes the vertex/index array files
pub struct MeshSerializer;

impl MeshSerializer {
    /// Write the vertex file and/or the index file of a mesh
    ///
    /// Each destination is optional and independent: passing only
    /// `vertex_path` writes only the vertex file, passing neither does
    /// nothing. Both files are rendered and written to temporary siblings
    /// first; the destinations are only replaced once every temporary file
    /// is complete, so a failed write leaves the previous files untouched.
    /// The two renames themselves happen one after the other.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use octasphere::{MeshGenerator, MeshSerializer, OctaSphere};
    /// use std::path::Path;
    ///
    /// let mesh = OctaSphere::new(0.7, 1)?.generate()?;
    /// MeshSerializer::write(
    ///     &mesh,
    ///     Some(Path::new("vertices.arr")),
    ///     Some(Path::new("elements.arr")),
    /// )?;
    /// # Ok::<(), octasphere::Error>(())
    /// ```
    pub fn write(mesh: &Mesh, vertex_path: Option<&Path>, index_path: Option<&Path>) -> Result<()> {
        let mut staged = Vec::with_capacity(2);
        if let Some(path) = vertex_path {
            staged.push((path, Self::vertex_text(mesh)));
        }
        if let Some(path) = index_path {
            staged.push((path, Self::index_text(mesh)));
        }

        let mut temps: Vec<(PathBuf, &Path)> = Vec::with_capacity(staged.len());
        for (path, text) in &staged {
            match stage_file(path, text) {
                Ok(tmp_path) => temps.push((tmp_path, *path)),
                Err(e) => {
                    discard(&temps);
                    return Err(e);
                }
            }
        }

        for (i, (tmp_path, path)) in temps.iter().enumerate() {
            if let Err(e) = fs::rename(tmp_path, path) {
                discard(&temps[i..]);
                return Err(Error::FileSave(format!(
                    "Unable to replace {}: {}",
                    path.display(),
                    e
                )));
            }
        }

        Ok(())
    }

    /// Render the vertex file content
    pub fn vertex_text(mesh: &Mesh) -> String {
        mesh.vertices()
            .iter()
            .map(vertex_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the index file content
    pub fn index_text(mesh: &Mesh) -> String {
        mesh.triangles()
            .iter()
            .map(|t| format!("{} {} {}", t.v0, t.v1, t.v2))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Read a vertex file
    pub fn read_vertices<P: AsRef<Path>>(path: P) -> Result<Vec<Vertex>> {
        let path = path.as_ref();
        let records = parse_records::<f64>(path, &load_text(path)?)?;
        Ok(records
            .into_iter()
            .map(|[x, y, z]| Vector3::new(x, y, z))
            .collect())
    }

    /// Read an index file
    pub fn read_indices<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
        let path = path.as_ref();
        let records = parse_records::<u32>(path, &load_text(path)?)?;
        Ok(records.into_iter().map(Triangle::from).collect())
    }

    /// Read both files back into a mesh
    ///
    /// Fails if a triangle references a vertex beyond the vertex file.
    pub fn read<P: AsRef<Path>, Q: AsRef<Path>>(vertex_path: P, index_path: Q) -> Result<Mesh> {
        let vertices = Self::read_vertices(vertex_path)?;
        let triangles = Self::read_indices(index_path)?;
        Mesh::from_buffers(vertices, triangles)
    }
}

fn vertex_line(v: &Vertex) -> String {
    let text = format!(
        "{:.prec$} {:.prec$} {:.prec$}",
        v.x,
        v.y,
        v.z,
        prec = VERTEX_DECIMALS
    );
    format!("{:<width$}", text, width = VERTEX_LINE_WIDTH)
}

/// Write `content` next to `path` and return the temporary file's path
fn stage_file(path: &Path, content: &str) -> Result<PathBuf> {
    let tmp_path = temp_sibling(path)?;

    if let Err(e) = fs::write(&tmp_path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::FileSave(format!(
            "Unable to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(tmp_path)
}

fn discard(temps: &[(PathBuf, &Path)]) {
    for (tmp_path, _) in temps {
        let _ = fs::remove_file(tmp_path);
    }
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        Error::InvalidParameter(format!("{} is not a file path", path.display()))
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

fn load_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::FileLoad(format!("Unable to read {}: {}", path.display(), e)))
}

fn parse_records<T: FromStr>(path: &Path, text: &str) -> Result<Vec<[T; 3]>> {
    let mut records = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let malformed = |reason: String| Error::MalformedRecord {
            path: path.to_path_buf(),
            line: line_index + 1,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[a, b, c] = &fields[..] else {
            return Err(malformed(format!(
                "expected 3 fields, found {}",
                fields.len()
            )));
        };

        let parse = |field: &str| {
            field
                .parse::<T>()
                .map_err(|_| malformed(format!("cannot parse '{}'", field)))
        };
        records.push([parse(a)?, parse(b)?, parse(c)?]);
    }

    Ok(records)
}
