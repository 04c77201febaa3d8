//! Algorithm family implementations of the [`Signer`](crate::Signer)
//! contract.

mod ecdsa;
mod hmac;
mod rsa;

pub use self::ecdsa::Es256Signer;
pub use self::hmac::{HmacAlgorithm, HmacKey, HmacSigner};
pub use self::rsa::{DigestAlgorithm, RsaKey, RsaSigner};
