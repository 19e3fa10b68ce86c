//! Error type for the interop surface
//!
//! Rust callers get a `Result<T, InteropError>`; at the C boundary every
//! error collapses to the integer sentinel [`INTEROP_ERROR`].

/// Return code for a successful call that has no other value to report
pub const INTEROP_OK: i32 = 0;

/// Sentinel returned across the C boundary when a call fails
pub const INTEROP_ERROR: i32 = -1;

/// Errors raised by the interop surface
#[derive(Debug, thiserror::Error)]
pub enum InteropError {
    #[error("null pointer passed as {0}")]
    NullPointer(&'static str),

    #[error("length {0} does not fit in a 32-bit signed integer")]
    LengthOverflow(u64),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("logging already initialized: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl InteropError {
    /// Integer code reported to C callers
    pub fn to_code(&self) -> i32 {
        INTEROP_ERROR
    }
}

/// Result type for interop operations
pub type InteropResult<T> = Result<T, InteropError>;

/// Narrow a byte count to the `int32` the C surface returns
pub(crate) fn length_to_i32(len: u64) -> InteropResult<i32> {
    i32::try_from(len).map_err(|_| InteropError::LengthOverflow(len))
}

/// Flatten a result to the C convention: the value, or [`INTEROP_ERROR`]
pub(crate) fn to_c_code(result: InteropResult<i32>) -> i32 {
    match result {
        Ok(value) => value,
        Err(e) => e.to_code(),
    }
}
