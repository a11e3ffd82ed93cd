use thiserror::Error;

/// Errors surfaced by platform collaborators.
///
/// A window that cannot be found and a process that cannot be resolved
/// are not errors; those cases are reported as absent results. Only
/// genuine platform-call failures use this type.
#[derive(Debug, Error)]
pub enum Error {
    /// The application could not be brought to the foreground.
    #[error("activation failed: {0}")]
    Activation(String),

    /// Any other platform call failure.
    #[error("platform call failed: {0}")]
    Platform(String),
}

/// Result alias for collaborator calls.
pub type Result<T> = std::result::Result<T, Error>;
