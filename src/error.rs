//! Error types for jdkenv.
//!
//! The core never terminates the process. Every failure is returned to the
//! CLI layer, which decides whether it is a soft, user-correctable message
//! (`NotFound`) or a fatal one (everything else, exit code 1).

use std::path::PathBuf;

use crate::layout::LayoutKind;

/// Result type alias using the jdkenv [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested version has no matching install in any root.
    #[error("{version}{}", missing_suffix(layout))]
    NotFound { version: String, layout: LayoutKind },

    /// The pointer target does not have the shape this tool creates.
    #[error("unexpected pointer target: {}", path.display())]
    UnexpectedTarget { path: PathBuf },

    /// Something other than a symlink sits at the pointer path.
    #[error("{} is not a symlink, refusing to replace it", path.display())]
    PointerNotSymlink { path: PathBuf },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("{message}: {}", path.display())]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn not_found(version: impl Into<String>, layout: LayoutKind) -> Self {
        Self::NotFound {
            version: version.into(),
            layout,
        }
    }

    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    /// Soft errors are printed and the process still exits 0.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn missing_suffix(layout: &LayoutKind) -> &'static str {
    match layout {
        LayoutKind::Flat => " is not exist",
        LayoutKind::Split => " isn't exists at this System",
    }
}
