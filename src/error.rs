use std::path::PathBuf;

use thiserror::Error;

use crate::format::Format;

/// Result type alias for operations that may fail with [`ConvertError`].
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Error types that can occur while parsing options or converting an image.
///
/// Every variant carries enough context to tell which stage failed: the parser,
/// the file, or the format pair.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The background color specification could not be parsed.
    #[error("invalid color `{input}`: {reason}")]
    InvalidColor { input: String, reason: String },
    /// The padding specification could not be parsed.
    #[error("invalid padding `{input}`: {reason}")]
    InvalidPadding { input: String, reason: String },
    /// No conversion route exists between the detected formats.
    #[error("unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: Format, to: Format },
    /// Padding produced a canvas with no drawable area.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: i128, height: i128 },
    /// Opening, creating, or flushing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input file could not be decoded.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The canvas could not be encoded to the output file.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
