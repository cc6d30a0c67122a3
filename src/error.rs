use thiserror::Error;

/// Error types for parameter encoding and decoding.
///
/// Both variants are deterministic: the same input fails the same way every
/// time, so callers should surface these rather than retry.
///
/// ```rust
/// use http_params::{decode_query, ParamsError};
///
/// match decode_query("name=%zz") {
///     Ok(params) => println!("decoded {} pairs", params.len()),
///     Err(ParamsError::Decode(msg)) => eprintln!("bad query string: {msg}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ParamsError {
    /// Invalid percent-encoding in a query string.
    ///
    /// Raised when a `%` is not followed by two hex digits, or when the
    /// decoded bytes are not valid UTF-8. The message includes the byte
    /// offset of the offending sequence within the key or value.
    #[error("invalid percent-encoding: {0}")]
    Decode(String),

    /// The parameter mapping could not be serialized to JSON.
    ///
    /// Not reachable for plain string values, but stated so the value type
    /// can be widened later without changing the signature.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
