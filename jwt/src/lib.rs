//! JSON Web Token engine: compact-form parsing, signing and verification
//!
//! This crate provides:
//! - Compact-form tokenization with borrowed segments
//! - RS256/RS384/RS512, HS256/HS384/HS512 and ES256 signers behind one trait
//! - Standard claims handling with passthrough for custom fields
//! - Big-endian integer handling for key material exchanged in JWK form

pub mod algorithms;
mod bignum;
pub mod encoding;
mod error;
mod parser;
mod signer;
mod types;

pub use algorithms::{
    DigestAlgorithm, Es256Signer, HmacAlgorithm, HmacKey, HmacSigner, RsaKey, RsaSigner,
};
pub use bignum::BigNum;
pub use error::{AlgorithmError, JwtError, JwtResult};
pub use parser::{parse, Token};
pub use signer::{sign_token, sign_token_with_header, Signer};
pub use types::{Claims, Header};
