use crate::{Kind, Path};

/// Errors that can occur when copying a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The value, or a value reachable from it, is of a kind that is never
    /// copied: funcs, channels and raw pointers.
    UnsupportedKind {
        /// The offending kind.
        kind: Kind,
        /// Where the offending value sits, relative to the root.
        path: Path,
    },

    /// A copier was handed a value of a shape it does not handle.
    TypeMismatch {
        /// What the copier handles, e.g. `"slice"`.
        expected: &'static str,
        /// The kind it was handed.
        found: Kind,
        /// Where the value sits, relative to the root.
        path: Path,
    },
}

impl CopyError {
    /// The kind of the value that could not be copied.
    pub fn kind(&self) -> Kind {
        match self {
            CopyError::UnsupportedKind { kind, .. } => *kind,
            CopyError::TypeMismatch { found, .. } => *found,
        }
    }

    /// Where the value that could not be copied sits.
    pub fn path(&self) -> &Path {
        match self {
            CopyError::UnsupportedKind { path, .. } | CopyError::TypeMismatch { path, .. } => path,
        }
    }
}

impl core::fmt::Display for CopyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CopyError::UnsupportedKind { kind, path } => {
                write!(f, "unable to copy a value of kind `{kind}` at `{path}`")
            }
            CopyError::TypeMismatch {
                expected,
                found,
                path,
            } => write!(
                f,
                "type mismatch at `{path}`: expected a {expected}, found kind `{found}`"
            ),
        }
    }
}

impl core::error::Error for CopyError {}
