// Error type for the sprite tool. Every variant states *where* things went wrong.
// The compositor itself never fails; these come from the edges (device, decoder, args).

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The display surface or the source image could not be obtained.
    #[error("resource unavailable: {what}")]
    ResourceUnavailable {
        what: String,
        #[source]
        source: std::io::Error,
    },

    /// The decoder could not classify or parse the input.
    #[error("unsupported source '{}': {}", .path.display(), .reason)]
    UnsupportedSource { path: PathBuf, reason: String },

    /// Nothing to draw was given on the command line.
    #[error("configuration missing: {0}")]
    ConfigurationMissing(String),

    /// The byte buffer handed to a surface does not match its declared size.
    #[error("surface size mismatch: expected {expected} bytes, got {actual}")]
    SurfaceSize { expected: usize, actual: usize },

    /// `width * height * 4` does not fit in the address space.
    #[error("surface {width}x{height} is too large")]
    SurfaceTooLarge { width: usize, height: usize },

    /// The preview window was closed by the user.
    #[error("display closed")]
    DisplayClosed,
}

impl Error {
    pub fn unavailable(what: impl Into<String>, source: std::io::Error) -> Self {
        Self::ResourceUnavailable { what: what.into(), source }
    }

    pub fn unsupported(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::UnsupportedSource { path: path.into(), reason: reason.to_string() }
    }
}
