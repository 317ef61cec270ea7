//! Error types for decoration and snapshot loading.

use thiserror::Error;

use crate::ui::TextSlot;

/// Errors that can occur while loading snapshots or decorating a node.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The drawing surface has no row for the requested text slot.
    #[error("Surface too small: {slot:?} needs row {row}, surface has {height} rows")]
    SurfaceTooSmall {
        slot: TextSlot,
        row: u16,
        height: u16,
    },

    /// A node record could not be classified.
    #[error("Malformed node {id}: {reason}")]
    MalformedNode { id: String, reason: String },

    /// Reading a snapshot file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot did not match the expected shape.
    #[error("Failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, OverlayError>;
