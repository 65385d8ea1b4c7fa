//! Bridge setup errors.

use thiserror::Error;

/// Errors surfaced while setting up a bridge window.
///
/// Setup is the only fallible phase. Per-frame render failures are logged
/// and the frame dropped; invalid draw data is not an error, just "nothing
/// to draw yet"; everything else aborts through the collaborators' own
/// failure paths.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The baseview window was opened without an OpenGL context.
    #[error("baseview window has no OpenGL context (GlConfig required)")]
    NoGlContext,

    /// The rendering backend failed to initialize its device objects
    /// (shader compilation, font-atlas upload, GL function resolution).
    #[error("renderer initialization failed: {0}")]
    RendererInit(String),
}
