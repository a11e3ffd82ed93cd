//! Collaborator traits for platform window and process queries.

use serde::{Deserialize, Serialize};

use crate::{error::Result, geom::Rect};

/// Snapshot of one on-screen window as reported by the OS at lookup
/// time.
///
/// The snapshot is stale the instant the real window moves or resizes;
/// holders must re-query to observe changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    /// Window title, empty when the OS reports none.
    pub title: String,
    /// Pid of the owning process.
    pub owner_pid: i32,
    /// Raw window bounds in the platform's screen coordinates,
    /// including any title bar and other chrome.
    pub bounds: Rect,
}

/// Read-only view of the platform's on-screen windows and processes.
///
/// Implementations are expected to be thin, blocking calls into the
/// platform with no caching of their own.
pub trait WindowQuery {
    /// Snapshot all on-screen windows in the platform's reported order
    /// (front-to-back on macOS).
    fn list_onscreen_windows(&self) -> Vec<WindowInfo>;

    /// Resolve a pid to a process handle, or `None` when no such
    /// process is running.
    fn resolve_process(&self, pid: i32) -> Option<Box<dyn ProcessHandle>>;
}

/// Handle to a running application owning one or more windows.
pub trait ProcessHandle {
    /// Whether the application is the foreground (focused) one.
    fn is_foreground(&self) -> bool;

    /// Request the platform bring the application to the foreground.
    ///
    /// Returns the platform's own success flag; `Err` is reserved for
    /// calls that fail outright (e.g. the process terminated between
    /// resolution and activation).
    fn bring_to_foreground(&self) -> Result<bool>;
}
