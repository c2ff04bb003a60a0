use thiserror::Error;

/// Errors surfaced at startup. A ray that hits nothing is not an error.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Non-positive wall count, ray step or canvas size.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The winit event loop could not be created or run.
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
