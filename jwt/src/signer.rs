//! Signing algorithm contract and compact-form token issuance.

use serde::Serialize;

use crate::encoding;
use crate::error::{JwtError, JwtResult};
use crate::types::Header;

/// Signing algorithm interface.
///
/// One implementation per algorithm family; the token parser and the
/// issuance path use the contract without knowing which family is behind
/// it. Implementations must be thread-safe (Send + Sync) and stateless
/// across calls: `sign` and `verify` are read-only with respect to key
/// state and safe to call concurrently on one instance.
pub trait Signer: Send + Sync + 'static {
    /// Header `alg` value this signer produces and accepts.
    fn algorithm(&self) -> &'static str;

    /// Sign a message, returning the raw signature bytes.
    ///
    /// Fails with [`JwtError::SigningAlgorithmFailure`] when signing cannot
    /// be performed (wrong key class, primitive failure).
    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>>;

    /// Check a signature over a message.
    ///
    /// A signature that simply does not match is `Ok(false)`, never an
    /// error; errors are reserved for cases where the check could not be
    /// attempted at all.
    fn verify(&self, signature: &[u8], message: &[u8]) -> JwtResult<bool>;
}

/// Shared-ownership signers delegate to the inner implementation.
impl<T: Signer> Signer for std::sync::Arc<T> {
    fn algorithm(&self) -> &'static str {
        (**self).algorithm()
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        (**self).sign(message)
    }

    fn verify(&self, signature: &[u8], message: &[u8]) -> JwtResult<bool> {
        (**self).verify(signature, message)
    }
}

/// Serialize a payload and sign it into the compact three-segment form.
///
/// The header is stamped with the signer's algorithm identifier and
/// `typ: "JWT"`.
pub fn sign_token<P, S>(payload: &P, signer: &S) -> JwtResult<String>
where
    P: Serialize,
    S: Signer + ?Sized,
{
    sign_token_with_header(&Header::new(signer.algorithm()), payload, signer)
}

/// Issue a token with a caller-built header (custom `kid` or `typ`).
pub fn sign_token_with_header<P, S>(header: &Header, payload: &P, signer: &S) -> JwtResult<String>
where
    P: Serialize,
    S: Signer + ?Sized,
{
    let header_json = serde_json::to_vec(header).map_err(JwtError::malformed)?;
    let payload_json = serde_json::to_vec(payload).map_err(JwtError::malformed)?;

    let header_b64 = encoding::encode(header_json);
    let payload_b64 = encoding::encode(payload_json);

    let mut message = String::with_capacity(header_b64.len() + 1 + payload_b64.len());
    message.push_str(&header_b64);
    message.push('.');
    message.push_str(&payload_b64);

    let signature_b64 = encoding::encode(signer.sign(message.as_bytes())?);

    let mut token = String::with_capacity(message.len() + 1 + signature_b64.len());
    token.push_str(&message);
    token.push('.');
    token.push_str(&signature_b64);

    Ok(token)
}
