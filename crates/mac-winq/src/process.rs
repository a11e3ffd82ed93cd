//! Process resolution and activation via AppKit running applications.

use objc2::rc::Retained;
use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication};
use tracing::debug;
use winmap::{Error, ProcessHandle, Result};

/// AppKit-backed handle to a running application.
pub struct MacProcess {
    /// Pid the handle was resolved from.
    pid: i32,
    /// The AppKit application object.
    app: Retained<NSRunningApplication>,
}

impl MacProcess {
    /// Resolve a pid to its running application, or `None` when no such
    /// process exists.
    pub fn resolve(pid: i32) -> Option<Self> {
        let app = unsafe {
            NSRunningApplication::runningApplicationWithProcessIdentifier(pid as libc::pid_t)
        }?;
        Some(Self { pid, app })
    }
}

impl ProcessHandle for MacProcess {
    fn is_foreground(&self) -> bool {
        unsafe { self.app.isActive() }
    }

    fn bring_to_foreground(&self) -> Result<bool> {
        if unsafe { self.app.isTerminated() } {
            return Err(Error::Activation(format!(
                "pid {} terminated before activation",
                self.pid
            )));
        }
        let ok = unsafe {
            self.app
                .activateWithOptions(NSApplicationActivationOptions::ActivateAllWindows)
        };
        debug!(pid = self.pid, ok, "activateWithOptions");
        Ok(ok)
    }
}
