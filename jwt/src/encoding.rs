//! Base64url codec for token segments.
//!
//! Every segment of the compact form uses the URL-safe alphabet without
//! padding. Decoding tolerates padding characters but never requires them;
//! anything outside the alphabet is an [`JwtError::EncodingError`].

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine};

use crate::error::{JwtError, JwtResult};

const SEGMENT_CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// URL-safe engine for token segments.
const URL_SAFE_TOLERANT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, SEGMENT_CONFIG);

/// Encode bytes as unpadded base64url.
pub fn encode(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_TOLERANT.encode(data)
}

/// Decode base64url input, tolerating but not requiring padding.
pub fn decode(data: impl AsRef<[u8]>) -> JwtResult<Vec<u8>> {
    URL_SAFE_TOLERANT
        .decode(data)
        .map_err(|e| JwtError::EncodingError(e.to_string()))
}
