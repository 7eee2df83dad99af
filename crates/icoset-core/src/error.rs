use std::fmt;
use std::path::PathBuf;

/// Error type for icon generation and the I/O around it.
///
/// Each variant names the step that failed so callers can report
/// "decode failed" rather than a generic failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    Decode { reason: String },
    InvalidSize { size: u32, reason: String },
    DuplicateSize { size: u32 },
    Encoding { size: u32, reason: String },
    Manifest { reason: String },
    Write { path: PathBuf, reason: String },
    InvalidPrefix { prefix: String },
    InvalidColor { value: String },
    Config { path: PathBuf, reason: String },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Decode { reason } => write!(f, "decode failed: {}", reason),
            IconError::InvalidSize { size, reason } => {
                write!(f, "resize failed: invalid size {}: {}", size, reason)
            }
            IconError::DuplicateSize { size } => {
                write!(f, "pack failed: size {}x{} requested more than once", size, size)
            }
            IconError::Encoding { size, reason } => {
                write!(f, "encode failed at {}x{}: {}", size, size, reason)
            }
            IconError::Manifest { reason } => {
                write!(f, "encode failed: manifest.json: {}", reason)
            }
            IconError::Write { path, reason } => {
                write!(f, "write failed for '{}': {}", path.display(), reason)
            }
            IconError::InvalidPrefix { prefix } => write!(
                f,
                "invalid prefix '{}': only letters, digits, '-' and '_' are allowed",
                prefix
            ),
            IconError::InvalidColor { value } => {
                write!(f, "invalid color '{}': expected #rrggbb or #rgb", value)
            }
            IconError::Config { path, reason } => {
                write!(f, "config error in '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for IconError {}
