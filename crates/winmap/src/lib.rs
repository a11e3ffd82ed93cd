//! winmap: resolution-independent window coordinate mapping.
//!
//! Locates a named application window, reports whether it exists and is
//! focused, and converts points expressed in a fixed standard resolution
//! (default 1920×1080) into the window's live, possibly resized,
//! on-screen rectangle. Consumers are automation tools that click or
//! read pixels at resolution-independent positions inside a game or
//! application window.
//!
//! Platform window enumeration and process activation sit behind the
//! [`WindowQuery`] and [`ProcessHandle`] traits; the `mac-winq` crate
//! provides the macOS implementation. [`WindowCoordinateMapper`] owns a
//! cached window snapshot and the coordinate transforms.

mod diag;
mod error;
mod geom;
mod mapper;
mod query;

pub use diag::{DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use geom::{Point, Rect, approx_eq};
pub use mapper::{
    DEFAULT_TITLE_BAR_OFFSET, MACOS_TITLE_BAR_HEIGHT, MACOS_TOOLBAR_HEIGHT, WindowCoordinateMapper,
};
pub use query::{ProcessHandle, WindowInfo, WindowQuery};
