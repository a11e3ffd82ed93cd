//! Diagnostic sink for failures that are swallowed at an API boundary.

use tracing::error;

/// Receives diagnostics from operations that report failure only as a
/// boolean, such as [`WindowCoordinateMapper::activate`].
///
/// The sink is injected rather than reached for globally so embedders
/// can route these events into their own reporting.
///
/// [`WindowCoordinateMapper::activate`]: crate::WindowCoordinateMapper::activate
pub trait DiagnosticSink {
    /// Record one event with free-form context.
    fn log(&self, event: &str, context: &str);
}

/// Default sink: forwards to `tracing` at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, event: &str, context: &str) {
        error!(event, context, "window mapper diagnostic");
    }
}
