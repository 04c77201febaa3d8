//! HMAC algorithm family (HS256/HS384/HS512).

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AlgorithmError, JwtResult};
use crate::signer::Signer;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// MAC function an HMAC signer binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    /// HMAC-SHA-256 (JWS `HS256`).
    Sha256,
    /// HMAC-SHA-384 (JWS `HS384`).
    Sha384,
    /// HMAC-SHA-512 (JWS `HS512`).
    Sha512,
}

impl HmacAlgorithm {
    /// JWS `alg` identifier.
    #[must_use]
    pub fn jws_name(self) -> &'static str {
        match self {
            Self::Sha256 => "HS256",
            Self::Sha384 => "HS384",
            Self::Sha512 => "HS512",
        }
    }
}

/// Symmetric secret wiped from memory when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacKey(Vec<u8>);

impl HmacKey {
    /// Wrap secret bytes.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }
}

impl std::fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HmacKey(..)")
    }
}

/// HMAC implementation of the [`Signer`] contract.
///
/// Symmetric keys carry no private/public classification, so signing never
/// fails for key-class reasons. Verification recomputes the tag and
/// compares in constant time; a mismatch is a clean `false`.
#[derive(Debug)]
pub struct HmacSigner {
    key: HmacKey,
    algorithm: HmacAlgorithm,
}

impl HmacSigner {
    /// Signer over the given secret and MAC function.
    #[must_use]
    pub fn new(key: HmacKey, algorithm: HmacAlgorithm) -> Self {
        Self { key, algorithm }
    }

    /// HS256 signer.
    #[must_use]
    pub fn hs256(key: HmacKey) -> Self {
        Self::new(key, HmacAlgorithm::Sha256)
    }

    /// HS384 signer.
    #[must_use]
    pub fn hs384(key: HmacKey) -> Self {
        Self::new(key, HmacAlgorithm::Sha384)
    }

    /// HS512 signer.
    #[must_use]
    pub fn hs512(key: HmacKey) -> Self {
        Self::new(key, HmacAlgorithm::Sha512)
    }
}

fn compute<M>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, AlgorithmError>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|_| AlgorithmError::invalid_key("hmac key rejected"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn check<M>(key: &[u8], signature: &[u8], message: &[u8]) -> Result<bool, AlgorithmError>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|_| AlgorithmError::invalid_key("hmac key rejected"))?;
    mac.update(message);
    Ok(mac.verify_slice(signature).is_ok())
}

impl Signer for HmacSigner {
    fn algorithm(&self) -> &'static str {
        self.algorithm.jws_name()
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let tag = match self.algorithm {
            HmacAlgorithm::Sha256 => compute::<HmacSha256>(&self.key.0, message),
            HmacAlgorithm::Sha384 => compute::<HmacSha384>(&self.key.0, message),
            HmacAlgorithm::Sha512 => compute::<HmacSha512>(&self.key.0, message),
        }?;
        Ok(tag)
    }

    fn verify(&self, signature: &[u8], message: &[u8]) -> JwtResult<bool> {
        let matches = match self.algorithm {
            HmacAlgorithm::Sha256 => check::<HmacSha256>(&self.key.0, signature, message),
            HmacAlgorithm::Sha384 => check::<HmacSha384>(&self.key.0, signature, message),
            HmacAlgorithm::Sha512 => check::<HmacSha512>(&self.key.0, signature, message),
        }?;
        Ok(matches)
    }
}
