use std::path::{Path, PathBuf};

/// Error type for scaffolding operations.
///
/// An existing destination is not an error: it is reported through
/// [`Outcome::Skipped`] instead.
#[derive(Debug)]
pub enum ScaffoldError {
    /// The requested project template has no files in the template source.
    TemplateNotFound(String),
    /// A filesystem operation failed on `path`.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The overwrite confirmation prompt could not be shown or read.
    Prompt(String),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::TemplateNotFound(name) => {
                write!(f, "Template '{name}' not found")
            }
            ScaffoldError::Io { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
            ScaffoldError::Prompt(msg) => write!(f, "Confirmation prompt failed: {msg}"),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result of a scaffolding action that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The destination was written.
    Created(PathBuf),
    /// The destination already existed and was left untouched.
    Skipped(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Created(p) | Outcome::Skipped(p) => p,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created(_))
    }
}
