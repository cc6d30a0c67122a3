use crate::{encode_query, Params, Result};

/// Content type for bodies produced by [`form_urlencoded_body`].
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Content type for bodies produced by [`json_body`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Encode a parameter mapping as a form-urlencoded request body.
///
/// The bytes are the UTF-8 encoding of [`encode_query`]'s output and must be
/// sent with `Content-Type: application/x-www-form-urlencoded`
/// ([`FORM_CONTENT_TYPE`]).
pub fn form_urlencoded_body(params: &Params) -> Vec<u8> {
    encode_query(params).into_bytes()
}

/// Encode a parameter mapping as a JSON request body.
///
/// Serializes the mapping as a flat JSON object in insertion order, UTF-8
/// encoded. Must be sent with `Content-Type: application/json`
/// ([`JSON_CONTENT_TYPE`]).
pub fn json_body(params: &Params) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(params)?)
}

/// A request body paired with its content type.
///
/// Plain data for a caller-supplied HTTP client to send; building the pair
/// here keeps the body and the `Content-Type` header from drifting apart.
///
/// ```rust
/// use http_params::{Params, RequestBody};
///
/// let params = Params::from([("a", "1")]);
/// let body = RequestBody::form(&params);
/// assert_eq!(body.content_type, "application/x-www-form-urlencoded");
/// assert_eq!(body.bytes, b"a=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    /// The encoded body bytes.
    pub bytes: Vec<u8>,
    /// Value for the request's `Content-Type` header.
    pub content_type: &'static str,
}

impl RequestBody {
    /// Build a form-urlencoded body.
    pub fn form(params: &Params) -> Self {
        Self {
            bytes: form_urlencoded_body(params),
            content_type: FORM_CONTENT_TYPE,
        }
    }

    /// Build a JSON body.
    pub fn json(params: &Params) -> Result<Self> {
        Ok(Self {
            bytes: json_body(params)?,
            content_type: JSON_CONTENT_TYPE,
        })
    }
}
