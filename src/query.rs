use crate::{Params, ParamsError, Result};

/// Encode a parameter mapping as a URL query string.
///
/// Pairs are joined with `&` in insertion order; keys and values are
/// percent-encoded, leaving only `A-Z a-z 0-9 - _ . ~` intact. Spaces encode
/// to `%20` (not `+`), matching [`decode_query`] which treats `+` as an
/// ordinary character.
///
/// An empty mapping produces an empty string.
///
/// ```rust
/// use http_params::{encode_query, Params};
///
/// let params = Params::from([("a", "1"), ("b", "hello world")]);
/// assert_eq!(encode_query(&params), "a=1&b=hello%20world");
/// ```
pub fn encode_query(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a URL query string into a parameter mapping.
///
/// A leading `?` is stripped if present. Pairs are split on `&` (empty
/// segments are skipped); each pair splits on the first `=`, and a pair
/// without `=` maps the key to an empty string. When a key appears more than
/// once, the last occurrence wins.
///
/// Decoding is strict: a `%` not followed by two hex digits, or decoded
/// bytes that are not valid UTF-8, fail with [`ParamsError::Decode`] rather
/// than being passed through or replaced.
///
/// ```rust
/// use http_params::decode_query;
///
/// let params = decode_query("a=1&b=hello%20world&flag").unwrap();
/// assert_eq!(params.get("b"), Some("hello world"));
/// assert_eq!(params.get("flag"), Some(""));
/// ```
pub fn decode_query(query: &str) -> Result<Params> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = Params::new();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(percent_decode(key)?, percent_decode(value)?);
    }

    Ok(params)
}

/// Strictly percent-decode a single key or value.
///
/// The ecosystem decoders pass malformed sequences through untouched; this
/// one rejects them so bad input cannot silently corrupt a parameter.
fn percent_decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 3 > bytes.len() {
                    log::debug!("truncated percent sequence in {input:?}");
                    return Err(ParamsError::Decode(format!(
                        "truncated percent sequence at byte {i} in {input:?}"
                    )));
                }
                let high = hex_digit(bytes[i + 1]);
                let low = hex_digit(bytes[i + 2]);
                match (high, low) {
                    (Some(high), Some(low)) => decoded.push(high << 4 | low),
                    _ => {
                        log::debug!("malformed percent sequence in {input:?}");
                        return Err(ParamsError::Decode(format!(
                            "expected two hex digits after '%' at byte {i} in {input:?}"
                        )));
                    }
                }
                i += 3;
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|e| {
        ParamsError::Decode(format!("decoded bytes are not valid UTF-8: {e}"))
    })
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}
