//! RSASSA-PKCS1-v1_5 algorithm family (RS256/RS384/RS512).

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::bignum::BigNum;
use crate::error::{AlgorithmError, JwtResult};
use crate::signer::Signer;

/// Digest function an RSA signer binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// SHA-256 (JWS `RS256`).
    Sha256,
    /// SHA-384 (JWS `RS384`).
    Sha384,
    /// SHA-512 (JWS `RS512`).
    Sha512,
}

impl DigestAlgorithm {
    /// JWS `alg` identifier for this digest under RSASSA-PKCS1-v1_5.
    #[must_use]
    pub fn jws_name(self) -> &'static str {
        match self {
            Self::Sha256 => "RS256",
            Self::Sha384 => "RS384",
            Self::Sha512 => "RS512",
        }
    }

    fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(message).to_vec(),
            Self::Sha384 => Sha384::digest(message).to_vec(),
            Self::Sha512 => Sha512::digest(message).to_vec(),
        }
    }

    fn padding(self) -> Pkcs1v15Sign {
        match self {
            Self::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            Self::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            Self::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

/// RSA key material, classified by what it can do.
///
/// A private key signs and verifies; a public key only verifies. The
/// classification is checked at sign time and fails closed.
#[derive(Debug, Clone)]
pub enum RsaKey {
    /// Full key pair.
    Private(RsaPrivateKey),
    /// Public component only.
    Public(RsaPublicKey),
}

impl RsaKey {
    /// Load a private key from PKCS#8 PEM.
    pub fn private_from_pem(pem: &str) -> Result<Self, AlgorithmError> {
        RsaPrivateKey::from_pkcs8_pem(pem)
            .map(Self::Private)
            .map_err(|e| AlgorithmError::invalid_key(format!("pkcs8 private key: {e}")))
    }

    /// Load a private key from PKCS#8 DER.
    pub fn private_from_der(der: &[u8]) -> Result<Self, AlgorithmError> {
        RsaPrivateKey::from_pkcs8_der(der)
            .map(Self::Private)
            .map_err(|e| AlgorithmError::invalid_key(format!("pkcs8 private key: {e}")))
    }

    /// Load a public key from SPKI PEM.
    pub fn public_from_pem(pem: &str) -> Result<Self, AlgorithmError> {
        RsaPublicKey::from_public_key_pem(pem)
            .map(Self::Public)
            .map_err(|e| AlgorithmError::invalid_key(format!("spki public key: {e}")))
    }

    /// Load a public key from SPKI DER.
    pub fn public_from_der(der: &[u8]) -> Result<Self, AlgorithmError> {
        RsaPublicKey::from_public_key_der(der)
            .map(Self::Public)
            .map_err(|e| AlgorithmError::invalid_key(format!("spki public key: {e}")))
    }

    /// Build a verify-only key from modulus and exponent components.
    ///
    /// Both handles are consumed; see [`BigNum::from_base64`] for importing
    /// them from their base64 wire form.
    pub fn public_from_components(modulus: BigNum, exponent: BigNum) -> Result<Self, AlgorithmError> {
        RsaPublicKey::new(modulus.into_inner(), exponent.into_inner())
            .map(Self::Public)
            .map_err(|e| AlgorithmError::invalid_key(format!("modulus/exponent rejected: {e}")))
    }

    /// Whether this key can sign.
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }

    fn public_key(&self) -> RsaPublicKey {
        match self {
            Self::Private(key) => key.to_public_key(),
            Self::Public(key) => key.clone(),
        }
    }
}

/// RSA implementation of the [`Signer`] contract.
#[derive(Debug, Clone)]
pub struct RsaSigner {
    key: RsaKey,
    digest: DigestAlgorithm,
}

impl RsaSigner {
    /// Signer over the given key and digest function.
    #[must_use]
    pub fn new(key: RsaKey, digest: DigestAlgorithm) -> Self {
        Self { key, digest }
    }

    /// RS256 signer.
    #[must_use]
    pub fn rs256(key: RsaKey) -> Self {
        Self::new(key, DigestAlgorithm::Sha256)
    }

    /// RS384 signer.
    #[must_use]
    pub fn rs384(key: RsaKey) -> Self {
        Self::new(key, DigestAlgorithm::Sha384)
    }

    /// RS512 signer.
    #[must_use]
    pub fn rs512(key: RsaKey) -> Self {
        Self::new(key, DigestAlgorithm::Sha512)
    }
}

impl Signer for RsaSigner {
    fn algorithm(&self) -> &'static str {
        self.digest.jws_name()
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let RsaKey::Private(private_key) = &self.key else {
            return Err(AlgorithmError::PrivateKeyRequired.into());
        };

        let digest = self.digest.digest(message);
        let signature = private_key
            .sign(self.digest.padding(), &digest)
            .map_err(|e| AlgorithmError::primitive(format!("rsa sign: {e}")))?;

        // The signature is exactly as long as the modulus; anything else
        // would corrupt the token.
        debug_assert_eq!(signature.len(), private_key.size());
        Ok(signature)
    }

    fn verify(&self, signature: &[u8], message: &[u8]) -> JwtResult<bool> {
        let digest = self.digest.digest(message);
        match self
            .key
            .public_key()
            .verify(self.digest.padding(), &digest, signature)
        {
            Ok(()) => Ok(true),
            Err(rsa::Error::Verification) => Ok(false),
            Err(e) => Err(AlgorithmError::primitive(format!("rsa verify: {e}")).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn digest_selection_matches_known_vectors() {
        // SHA-256 / SHA-384 / SHA-512 of the empty string.
        assert_eq!(
            DigestAlgorithm::Sha256.digest(b""),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(DigestAlgorithm::Sha384.digest(b"").len(), 48);
        assert_eq!(DigestAlgorithm::Sha512.digest(b"").len(), 64);
    }

    #[test]
    fn jws_names() {
        assert_eq!(DigestAlgorithm::Sha256.jws_name(), "RS256");
        assert_eq!(DigestAlgorithm::Sha384.jws_name(), "RS384");
        assert_eq!(DigestAlgorithm::Sha512.jws_name(), "RS512");
    }

    #[test]
    fn unusable_components_are_rejected() {
        // A zero public exponent can never form a working key.
        let n = BigNum::from_base64("AQAB").unwrap();
        let e = BigNum::from_base64("AA==").unwrap();
        assert!(matches!(
            RsaKey::public_from_components(n, e),
            Err(AlgorithmError::InvalidKey(_))
        ));
    }
}
