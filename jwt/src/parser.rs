//! Compact-form token parsing and signature verification.

use serde::de::DeserializeOwned;

use crate::encoding;
use crate::error::{JwtError, JwtResult};
use crate::signer::Signer;
use crate::types::Header;

/// Separator between compact-form segments.
const SEPARATOR: u8 = b'.';

/// Split a raw compact-form token into its three segments.
///
/// Splitting is greedy over the whole input, so a fourth segment is itself
/// evidence of malformation: anything other than exactly three fails with
/// [`JwtError::MalformedToken`].
pub fn parse(raw: &[u8]) -> JwtResult<Token<'_>> {
    let segments: Vec<&[u8]> = raw.split(|&b| b == SEPARATOR).collect();
    if segments.len() != 3 {
        tracing::debug!(segments = segments.len(), "rejecting token");
        return Err(JwtError::MalformedToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }
    Ok(Token {
        raw,
        header: segments[0],
        payload: segments[1],
        signature: segments[2],
    })
}

/// Borrowed view over the three segments of a compact-form token.
///
/// Segments reference the original input; nothing is copied until a decode
/// is requested.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    raw: &'a [u8],
    header: &'a [u8],
    payload: &'a [u8],
    signature: &'a [u8],
}

impl Token<'_> {
    /// Decode the header segment.
    ///
    /// Codec and JSON failures both surface as
    /// [`JwtError::MalformedToken`].
    pub fn header(&self) -> JwtResult<Header> {
        let bytes = encoding::decode(self.header).map_err(subsume)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| JwtError::MalformedToken(format!("header: {e}")))
    }

    /// Decode the payload segment into the caller's shape.
    ///
    /// The shape owns its date representation; seconds-since-epoch numeric
    /// fields match the wire format.
    pub fn payload<P: DeserializeOwned>(&self) -> JwtResult<P> {
        let bytes = encoding::decode(self.payload).map_err(subsume)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| JwtError::MalformedToken(format!("payload: {e}")))
    }

    /// Check the signature segment with the supplied signer.
    ///
    /// The signed message is the original encoded header and payload bytes
    /// around one separator, never re-encoded forms: re-encoding is not
    /// guaranteed byte-identical to what was signed.
    pub fn verify<S>(&self, signer: &S) -> JwtResult<()>
    where
        S: Signer + ?Sized,
    {
        let signature = encoding::decode(self.signature).map_err(subsume)?;

        // Header, separator and payload are a contiguous prefix of the
        // input.
        let message = &self.raw[..self.header.len() + 1 + self.payload.len()];

        if signer.verify(&signature, message)? {
            Ok(())
        } else {
            tracing::debug!(alg = signer.algorithm(), "signature rejected");
            Err(JwtError::SignatureVerificationFailed)
        }
    }
}

/// Codec failures count as structural damage once a token is in hand.
fn subsume(err: JwtError) -> JwtError {
    match err {
        JwtError::EncodingError(msg) => JwtError::MalformedToken(format!("invalid base64url: {msg}")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Claims;

    #[test]
    fn two_segments_are_malformed() {
        assert!(matches!(
            parse(b"abc.def"),
            Err(JwtError::MalformedToken(_))
        ));
    }

    #[test]
    fn four_segments_are_malformed_not_truncated() {
        assert!(matches!(
            parse(b"aaaa.bbbb.cccc.dddd"),
            Err(JwtError::MalformedToken(_))
        ));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(parse(b""), Err(JwtError::MalformedToken(_))));
    }

    #[test]
    fn segment_count_error_names_the_count() {
        let Err(JwtError::MalformedToken(msg)) = parse(b"abc.def") else {
            panic!("expected MalformedToken");
        };
        assert_eq!(msg, "expected 3 segments, found 2");
    }

    #[test]
    fn three_segments_parse() {
        // eyJhbGciOiJub25lIn0 = {"alg":"none"}, eyJzdWIiOiJ4In0 = {"sub":"x"}
        let token = parse(b"eyJhbGciOiJub25lIn0.eyJzdWIiOiJ4In0.c2ln").unwrap();
        let header = token.header().unwrap();
        assert_eq!(header.alg, "none");
        let claims: Claims = token.payload().unwrap();
        assert_eq!(claims.sub.as_deref(), Some("x"));
    }

    #[test]
    fn codec_failures_surface_as_malformed_token() {
        // '#' is outside the URL-safe alphabet.
        let token = parse(b"###.eyJzdWIiOiJ4In0.c2ln").unwrap();
        assert!(matches!(token.header(), Err(JwtError::MalformedToken(_))));
    }

    #[test]
    fn json_failures_surface_as_malformed_token() {
        // c2ln decodes to "sig", which is not JSON.
        let token = parse(b"c2ln.c2ln.c2ln").unwrap();
        assert!(matches!(token.header(), Err(JwtError::MalformedToken(_))));
        assert!(matches!(
            token.payload::<Claims>(),
            Err(JwtError::MalformedToken(_))
        ));
    }
}
