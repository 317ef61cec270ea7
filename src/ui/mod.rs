//! Rendering: node canvases, text primitives, theme and the watch board.
//!
//! - [`canvas`]: the [`DrawingSurface`] trait and the terminal [`NodeCanvas`]
//! - [`tools`]: the [`OverlayTools`] primitives and the themed [`TextOverlay`]
//! - [`theme`]: light/dark colour schemes
//! - [`board`]: full-screen grid of decorated nodes

pub mod board;
pub mod canvas;
pub mod theme;
pub mod tools;

pub use canvas::{DrawingSurface, NodeCanvas, TextSlot};
pub use theme::{Theme, ThemeChoice};
pub use tools::{OverlayTools, TextOverlay, DEFAULT_BOLD_FONT_SIZE};
