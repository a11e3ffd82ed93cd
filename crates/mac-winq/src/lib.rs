//! mac-winq: macOS window and process queries for winmap.
//!
//! Implements [`winmap::WindowQuery`] over CoreGraphics window-list
//! snapshots and AppKit running-application handles. All platform code
//! is gated on macOS; on other targets the crate compiles to an empty
//! shell so the workspace still builds.

#[cfg(target_os = "macos")]
mod cfutil;
#[cfg(target_os = "macos")]
mod process;
#[cfg(target_os = "macos")]
mod window;

#[cfg(target_os = "macos")]
pub use process::MacProcess;
#[cfg(target_os = "macos")]
pub use window::list_windows;

/// Window query backed by the CoreGraphics window list and AppKit.
///
/// Stateless; every call is a fresh, blocking platform query.
#[derive(Clone, Copy, Debug, Default)]
pub struct MacWindowQuery;

#[cfg(target_os = "macos")]
impl winmap::WindowQuery for MacWindowQuery {
    fn list_onscreen_windows(&self) -> Vec<winmap::WindowInfo> {
        window::list_windows()
    }

    fn resolve_process(&self, pid: i32) -> Option<Box<dyn winmap::ProcessHandle>> {
        process::MacProcess::resolve(pid)
            .map(|p| Box::new(p) as Box<dyn winmap::ProcessHandle>)
    }
}
