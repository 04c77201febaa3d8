//! Header and registered-claims structures.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded JOSE header.
///
/// Only `alg` is required on the wire. Unknown header fields are ignored
/// on decode; decoded headers own their data with no back-reference to the
/// raw segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Declared signing algorithm.
    pub alg: String,
    /// Token type, conventionally `"JWT"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Key ID hint for the verifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl Header {
    /// Header for the given algorithm with `typ` set to `"JWT"`.
    #[must_use]
    pub fn new(alg: impl Into<String>) -> Self {
        Self {
            alg: alg.into(),
            typ: Some("JWT".to_string()),
            kid: None,
        }
    }

    /// Attach a key ID hint.
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }
}

/// Registered claims plus a flattened map for custom fields.
///
/// Date-like claims are seconds-since-epoch numbers on the wire, never
/// ISO-8601 strings. The engine performs no claim validation; decoded
/// claims go straight to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Audience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<Vec<String>>,
    /// Expiry (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not before (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Issued-at (unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// JWT ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Custom claims.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Claims {
    /// Empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issuer (`iss`) claim.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set the subject (`sub`) claim.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the audience (`aud`) claim.
    #[must_use]
    pub fn audience(mut self, aud: Vec<String>) -> Self {
        self.aud = Some(aud);
        self
    }

    /// Stamp the issued-at (`iat`) claim with the current time.
    #[must_use]
    pub fn issued_now(mut self) -> Self {
        self.iat = Some(Utc::now().timestamp());
        self
    }

    /// Set the expiry (`exp`) claim relative to now.
    #[must_use]
    pub fn expires_in(mut self, dur: Duration) -> Self {
        self.exp = Some((Utc::now() + dur).timestamp());
        self
    }

    /// Set the not-before (`nbf`) claim from an absolute instant.
    #[must_use]
    pub fn not_before(mut self, nbf: DateTime<Utc>) -> Self {
        self.nbf = Some(nbf.timestamp());
        self
    }

    /// Set the JWT ID (`jti`) claim.
    #[must_use]
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Add a custom claim.
    #[must_use]
    pub fn claim(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
