//! ECDSA P-256 algorithm family (ES256).

use p256::ecdsa::signature::{Signer as _, Verifier as _};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};

use crate::error::{AlgorithmError, JwtResult};
use crate::signer::Signer;

/// ECDSA P-256 implementation of the [`Signer`] contract (JWS `ES256`).
///
/// Signatures use the JOSE fixed-width form: 32-byte big-endian `r`
/// followed by 32-byte big-endian `s`, not ASN.1 DER.
#[derive(Debug)]
pub struct Es256Signer {
    signing_key: Option<SigningKey>,
    verifying_key: VerifyingKey,
}

impl Es256Signer {
    /// Signer from a PKCS#8 PEM private key (signs and verifies).
    pub fn private_from_pem(pem: &str) -> Result<Self, AlgorithmError> {
        SigningKey::from_pkcs8_pem(pem)
            .map(Self::from_signing_key)
            .map_err(|e| AlgorithmError::invalid_key(format!("pkcs8 ec private key: {e}")))
    }

    /// Signer from a PKCS#8 DER private key.
    pub fn private_from_der(der: &[u8]) -> Result<Self, AlgorithmError> {
        SigningKey::from_pkcs8_der(der)
            .map(Self::from_signing_key)
            .map_err(|e| AlgorithmError::invalid_key(format!("pkcs8 ec private key: {e}")))
    }

    /// Verify-only signer from an SPKI PEM public key.
    pub fn public_from_pem(pem: &str) -> Result<Self, AlgorithmError> {
        VerifyingKey::from_public_key_pem(pem)
            .map(Self::from_verifying_key)
            .map_err(|e| AlgorithmError::invalid_key(format!("spki ec public key: {e}")))
    }

    /// Verify-only signer from an SPKI DER public key.
    pub fn public_from_der(der: &[u8]) -> Result<Self, AlgorithmError> {
        VerifyingKey::from_public_key_der(der)
            .map(Self::from_verifying_key)
            .map_err(|e| AlgorithmError::invalid_key(format!("spki ec public key: {e}")))
    }

    /// Whether this signer holds the private half.
    #[must_use]
    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifying_key = *signing_key.verifying_key();
        Self {
            signing_key: Some(signing_key),
            verifying_key,
        }
    }

    fn from_verifying_key(verifying_key: VerifyingKey) -> Self {
        Self {
            signing_key: None,
            verifying_key,
        }
    }
}

impl Signer for Es256Signer {
    fn algorithm(&self) -> &'static str {
        "ES256"
    }

    fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        let Some(signing_key) = &self.signing_key else {
            return Err(AlgorithmError::PrivateKeyRequired.into());
        };
        let signature: Signature = signing_key.sign(message);
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, signature: &[u8], message: &[u8]) -> JwtResult<bool> {
        // Bytes that do not even parse as r||s are a mismatch, not an
        // operational failure.
        let Ok(signature) = Signature::from_slice(signature) else {
            return Ok(false);
        };
        Ok(self.verifying_key.verify(message, &signature).is_ok())
    }
}
