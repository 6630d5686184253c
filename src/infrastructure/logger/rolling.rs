//! Size-rotated log file sink.
//!
//! When a write would push the file past `max_bytes`, the current file is
//! renamed to `<path>.1`, older backups shift up by one, and anything past
//! `max_backups` is removed. A file that is still empty is never rotated, so
//! a single oversized entry is written whole.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    file: File,
    size: u64,
    max_bytes: u64,
    max_backups: usize,
}

impl RollingFile {
    /// Open (or create) `path` for appending, creating parent directories.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = open_append(&path)?;
        let size = file.metadata()?.len();

        Ok(Self {
            path,
            file,
            size,
            max_bytes,
            max_backups,
        })
    }

    /// Bytes in the current (unrotated) file.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Path of the `index`-th backup; `1` is the most recent.
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_backups == 0 {
            fs::remove_file(&self.path)?;
        } else {
            let oldest = self.backup_path(self.max_backups);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_backups).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        }

        self.file = open_append(&self.path)?;
        self.size = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.size > 0 && self.size + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Shareable [`MakeWriter`] over a [`RollingFile`].
///
/// Each formatted entry holds the lock for the duration of its write, so
/// lines are never interleaved.
#[derive(Debug, Clone)]
pub struct RollingFileWriter {
    inner: Arc<Mutex<RollingFile>>,
}

impl RollingFileWriter {
    pub fn new(file: RollingFile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(file)),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RollingFileGuard(self.inner.lock())
    }
}

/// Locked handle returned by [`RollingFileWriter::make_writer`].
pub struct RollingFileGuard<'a>(MutexGuard<'a, RollingFile>);

impl Write for RollingFileGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
