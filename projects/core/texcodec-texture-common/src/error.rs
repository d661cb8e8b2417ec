//! Error and warning types shared by all texture decoders.

use thiserror::Error;

/// Result type for texture decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Reasons a texture container could not be decoded.
///
/// Decoders never panic on malformed input; every rejection ends up here.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Magic/identifier mismatch, short header, or a header field that makes no sense.
    #[error("Malformed header: {0}")]
    MalformedHeader(&'static str),

    /// The container is well formed, but stores its pixels in a format we have no table entry for.
    #[error("Unsupported {container} format{}", code_suffix(.code))]
    UnsupportedFormat {
        /// Name of the container that carried the code (e.g. `"DDS"`).
        container: &'static str,
        /// The raw format code as stored in the file, for containers that
        /// identify formats by number.
        code: Option<u32>,
    },

    /// The container uses a feature this reader does not handle (e.g. KTX arrays).
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    /// The stream ended before the payload was complete.
    #[error("Truncated data: expected {expected} bytes, got {actual} bytes")]
    TruncatedData { expected: usize, actual: usize },

    /// The payload length did not match the size computed from the header.
    #[error("Unexpected data size: expected exactly {expected} bytes, got {actual} bytes")]
    UnexpectedDataSize { expected: usize, actual: usize },

    /// Run-length encoded data that would write outside the image.
    #[error("Corrupt data: {0}")]
    CorruptData(&'static str),

    /// The generic image codec could not decode the stream (or none was supplied).
    #[error("No image codec could decode '{suffix}' data")]
    GenericDecodeFailed { suffix: alloc::string::String },

    /// Reading from the underlying stream failed.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn code_suffix(code: &Option<u32>) -> alloc::string::String {
    code.map(|code| alloc::format!(" code: {code:#x}")).unwrap_or_default()
}

/// Non-fatal conditions noticed while decoding.
///
/// These never turn a successful decode into a failure; they are reported
/// alongside the texture and also logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Bytes remained in the stream after the payload.
    TrailingData,
    /// The texture has array layers or depth, but the caller did not ask for 3D data.
    UnexpectedThirdDimension { layers: u32, depth: u32 },
}
