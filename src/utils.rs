//! Utility helpers

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct Utils;

impl Utils {
    pub fn date_time_filename(prefix: &str, postfix: &str) -> String {
        let now = chrono::Local::now();
        format!("{}{}{}", prefix, now.format("%Y%m%d_%H%M%S"), postfix)
    }

    /// Create the parent folder of `path` if it does not exist yet
    pub fn ensure_parent_folder<P: AsRef<Path>>(path: P) -> Result<()> {
        match path.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .map_err(|e| {
                    Error::FileSave(format!(
                        "Failed to create folder {}: {}",
                        parent.display(),
                        e
                    ))
                }),
            _ => Ok(()),
        }
    }
}

/// Self-removing folder under the system temp directory
pub struct TempFolder {
    path: PathBuf,
}

impl TempFolder {
    pub fn new() -> Result<Self> {
        let unique = format!(
            "octasphere_{}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        let path = env::temp_dir().join(unique);
        fs::create_dir_all(&path)
            .map_err(|e| Error::FileSave(format!("Failed to create temp dir: {}", e)))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFolder {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_time_filename() {
        let name = Utils::date_time_filename("run_", ".log");
        assert!(name.starts_with("run_"));
        assert!(name.ends_with(".log"));
        // run_YYYYMMDD_HHMMSS.log
        assert_eq!(name.len(), "run_".len() + 15 + ".log".len());
    }

    #[test]
    fn test_temp_folder_is_unique_and_removed() {
        let a = TempFolder::new().unwrap();
        let b = TempFolder::new().unwrap();
        assert_ne!(a.path(), b.path());

        let path = a.path().to_path_buf();
        fs::write(path.join("file.txt"), "x").unwrap();
        drop(a);
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_parent_folder() {
        let tmp = TempFolder::new().unwrap();
        let nested = tmp.path().join("a").join("b").join("out.arr");
        Utils::ensure_parent_folder(&nested).unwrap();
        assert!(tmp.path().join("a").join("b").is_dir());
        Utils::ensure_parent_folder("plain.arr").unwrap();
    }
}
