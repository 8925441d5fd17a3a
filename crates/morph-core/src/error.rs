use thiserror::Error;

/// Failures of the point renderer and its host setup.
///
/// Setup failures (`NoWindow` through `ShaderCompile`) disable the effect for
/// the lifetime of the page. `Surface` only costs the current frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no browser window")]
    NoWindow,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("rendering context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("GPU device request failed: {0}")]
    Device(String),
    #[error("point shader failed to compile: {0}")]
    ShaderCompile(String),
    #[error("surface frame unavailable: {0}")]
    Surface(String),
}

impl RenderError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RenderError::Surface(_))
    }
}
