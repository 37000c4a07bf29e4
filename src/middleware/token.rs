//! Syntactic parsing of compact (three-part) JWTs.
//!
//! Parse-only: the header and claims segments are base64url-decoded and must
//! be JSON objects; the signature segment is carried opaquely and never
//! verified. Signature and claims validation belong to the data holder's
//! authorisation server, not this sandbox. The only question answered here
//! is "is this even a token?".

use anyhow::{bail, Context};
use base64::Engine;
use serde_json::{Map, Value};

/// A structurally valid compact JWT, decoded without verification.
#[derive(Debug)]
pub struct DecodedToken {
    pub header: Map<String, Value>,
    pub claims: Map<String, Value>,
}

impl DecodedToken {
    /// The `exp` claim as a Unix timestamp, if present and numeric.
    pub fn expires_at(&self) -> Option<i64> {
        self.claims.get("exp").and_then(Value::as_i64)
    }
}

/// Decode a compact JWT without verifying it.
///
/// Fails on anything that is not three dot-separated segments whose header
/// and claims are base64url-encoded JSON objects. The empty string fails
/// (one segment), so an absent Authorization header funnels into the same
/// error path as a garbage one.
pub fn decode(token: &str) -> anyhow::Result<DecodedToken> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        bail!(
            "invalid compact JWT: expected 3 segments, got {}",
            segments.len()
        );
    }

    let header = decode_json_segment(segments[0]).context("token header")?;
    let claims = decode_json_segment(segments[1]).context("token claims")?;

    Ok(DecodedToken { header, claims })
}

fn decode_json_segment(segment: &str) -> anyhow::Result<Map<String, Value>> {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let bytes = engine.decode(segment).context("not valid base64url")?;
    let value: Value = serde_json::from_slice(&bytes).context("not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("not a JSON object"),
    }
}
