//! File-based dashboard snapshot source.
//!
//! Polls a JSON file written by the dashboard's collectors.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::data::DashboardSnapshot;

/// Reads [`DashboardSnapshot`]s from a JSON file.
///
/// The source tracks the file's modification time and only reads the file
/// again once it has been updated, whether or not the last read succeeded.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
    polled: bool,
    reads: u64,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
            polled: false,
            reads: 0,
        }
    }

    /// Returns the path being monitored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human-readable description of the source.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The error from the last poll, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Poll for a new snapshot.
    ///
    /// Returns `Some` on the first successful read and whenever the file's
    /// modification time has advanced since. A file that failed to load is
    /// not read again until it changes; [`error`](Self::error) keeps the
    /// failure in the meantime.
    pub fn poll(&mut self) -> Option<DashboardSnapshot> {
        let current_modified = self.get_modified_time();

        let file_changed = !self.polled
            || match (&self.last_modified, &current_modified) {
                // Missing, or disappeared: keep what we have
                (_, None) => false,
                (None, Some(_)) => true,
                (Some(last), Some(current)) => current > last,
            };

        if !file_changed {
            return None;
        }

        self.polled = true;
        self.last_modified = current_modified;
        self.read_file()
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<DashboardSnapshot> {
        self.reads += 1;
        let result = match fs::read_to_string(&self.path) {
            Ok(content) => DashboardSnapshot::parse(&content)
                .map_err(|e| format!("Parse error: {}", e)),
            Err(e) => Err(format!("Read error: {}", e)),
        };

        match result {
            Ok(snapshot) => {
                self.last_error = None;
                Some(snapshot)
            }
            Err(message) => {
                if self.last_error.as_deref() != Some(message.as_str()) {
                    tracing::warn!(path = %self.path.display(), "{}", message);
                }
                self.last_error = Some(message);
                None
            }
        }
    }
}
