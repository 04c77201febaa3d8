//! Arbitrary-precision integer handle for key-component import.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::BigUint;

/// Single-owner handle over one arbitrary-precision unsigned integer.
///
/// Key components such as an RSA modulus travel as base64 big-endian bytes
/// using the standard alphabet, not the URL-safe one used for token
/// segments. The native value is released exactly once when the handle
/// drops; the type is deliberately not `Clone`, so two handles can never
/// alias one resource.
#[derive(Debug, PartialEq, Eq)]
pub struct BigNum {
    value: BigUint,
}

impl BigNum {
    /// Fresh zero-valued integer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: BigUint::from(0u32),
        }
    }

    /// Import standard-alphabet base64 as a big-endian unsigned integer.
    ///
    /// Returns `None` when the base64 decode fails: malformed key material
    /// is a configuration problem caught before use, not a signing-path
    /// failure.
    #[must_use]
    pub fn from_base64(encoded: &str) -> Option<Self> {
        let bytes = STANDARD.decode(encoded).ok()?;
        Some(Self {
            value: BigUint::from_bytes_be(&bytes),
        })
    }

    /// Export as standard-alphabet base64 over the big-endian byte form.
    ///
    /// The byte form is sized to the value, so leading zero bytes present
    /// in the imported encoding do not survive a round-trip.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.value.to_bytes_be())
    }

    /// Big-endian bytes of the value.
    #[must_use]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }

    pub(crate) fn into_inner(self) -> BigUint {
        self.value
    }
}

impl Default for BigNum {
    fn default() -> Self {
        Self::new()
    }
}
