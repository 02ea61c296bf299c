//! Error types for rendering operations.

use thiserror::Error;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Surface allocation was asked for an unusable size.
    #[error("Cannot allocate a {width}x{height} surface")]
    Surface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}
