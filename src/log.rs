//! Simple log file writer with timestamps
//!
//! A [`LogFile`] can be used directly, or installed process-wide with
//! [`install`] so that [`message`] reaches it from anywhere. Without an
//! installed log, [`message`] does nothing.

use crate::utils::Utils;
use crate::{Error, Result};
use chrono::{Local, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

static LOG_INSTANCE: OnceLock<Mutex<Option<LogFile>>> = OnceLock::new();

/// Shared handle to an open log; clones write to the same file
#[derive(Clone)]
pub struct LogFile {
    sink: Arc<Sink>,
}

struct Sink {
    path: PathBuf,
    opened: Instant,
    echo: bool,
    writer: Mutex<Timed<BufWriter<File>>>,
}

/// Writer plus the time of the previous entry, for the delta column
struct Timed<W> {
    out: W,
    previous: f32,
}

impl LogFile {
    /// Open (truncate) a log file
    ///
    /// Without a path, a time-stamped `octasphere_*.log` is created in the
    /// system temp folder. With `echo` set, every line also goes to stdout.
    pub fn new(path: Option<&Path>, echo: bool) -> Result<Self> {
        let path = match path {
            Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
            _ => std::env::temp_dir().join(Utils::date_time_filename("octasphere_", ".log")),
        };

        let file = File::create(&path).map_err(|e| {
            Error::FileSave(format!("Unable to create file {}: {}", path.display(), e))
        })?;

        let log = Self {
            sink: Arc::new(Sink {
                path,
                opened: Instant::now(),
                echo,
                writer: Mutex::new(Timed {
                    out: BufWriter::new(file),
                    previous: 0.0,
                }),
            }),
        };

        log.log(format!(
            "{} {} log, {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            log.path().display()
        ))?;
        log.log_time()?;

        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.sink.path
    }

    /// Append a message; each of its lines gets the time prefix
    pub fn log(&self, message: impl AsRef<str>) -> Result<()> {
        self.sink.write(message.as_ref())
    }

    /// Append the current local time
    pub fn log_time(&self) -> Result<()> {
        self.log(format!("Started {}", Local::now().to_rfc3339()))
    }
}

impl Sink {
    fn write(&self, message: &str) -> Result<()> {
        let now = self.opened.elapsed().as_secs_f32();

        let mut timed = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let prefix = format!("{:7.3}s {:6.3}+ ", now, now - timed.previous);
        timed.previous = now;

        for line in message.lines() {
            if self.echo {
                println!("{}{}", prefix, line);
            }
            writeln!(timed.out, "{}{}", prefix, line)?;
        }
        timed.out.flush()?;

        Ok(())
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        let _ = self.write(&format!(
            "Closed {}. Done.",
            Utc::now().format("%Y-%m-%d %H:%M:%S (UTC)")
        ));
    }
}

fn instance() -> &'static Mutex<Option<LogFile>> {
    LOG_INSTANCE.get_or_init(|| Mutex::new(None))
}

/// Make `log` the process-wide log, returning the one it replaces
pub fn install(log: LogFile) -> Option<LogFile> {
    instance()
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(log)
}

/// Remove the process-wide log
pub fn uninstall() -> Option<LogFile> {
    instance().lock().unwrap_or_else(|e| e.into_inner()).take()
}

/// Currently installed log, if any
pub fn installed() -> Option<LogFile> {
    instance().lock().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Write to the process-wide log; a no-op when none is installed
pub fn message(message: impl AsRef<str>) -> Result<()> {
    match installed() {
        Some(log) => log.log(message),
        None => Ok(()),
    }
}
