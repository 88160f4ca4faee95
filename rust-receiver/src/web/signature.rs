//! Slack request signature verification.
//!
//! Slack signs every request using HMAC-SHA256 over `v0:{timestamp}:{body}`.
//! Reference: https://api.slack.com/authentication/verifying-requests-from-slack

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Signature scheme version. Slack only defines `v0`.
pub const SIGNATURE_VERSION: &str = "v0";

/// Header carrying the Unix timestamp the request was signed at.
pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

/// Header carrying the `v0=<hex>` signature.
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";

/// Outcome of checking a request signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Claimed signature matches the computed one.
    Verified,
    /// Well-formed claim that does not match.
    Mismatch,
    /// Empty timestamp, or a claim without the `{version}=` prefix.
    Malformed,
}

impl Verification {
    pub fn is_verified(self) -> bool {
        matches!(self, Verification::Verified)
    }

    /// Short label for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Verification::Verified => "verified",
            Verification::Mismatch => "mismatch",
            Verification::Malformed => "malformed",
        }
    }
}

/// Key the MAC and feed it the base string `{version}:{timestamp}:{body}`.
fn signing_mac(secret: &[u8], version: &str, body: &[u8], timestamp: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;

    mac.update(version.as_bytes());
    mac.update(b":");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);

    Some(mac)
}

/// Compute the expected signature for a request.
///
/// Builds the base string `{version}:{timestamp}:{body}` from the raw body
/// bytes, keys HMAC-SHA256 with `secret` and returns
/// `{version}={lowercase hex digest}`. Returns `None` only if the MAC cannot
/// be keyed.
pub fn compute_signature(
    secret: &[u8],
    version: &str,
    body: &[u8],
    timestamp: &str,
) -> Option<String> {
    let mac = signing_mac(secret, version, body, timestamp)?;
    let digest = hex::encode(mac.finalize().into_bytes());
    Some(format!("{}={}", version, digest))
}

/// Split a `{version}={hex}` claim into raw digest bytes.
///
/// Only lowercase hex is accepted, so a decoded claim matches exactly one
/// signature string.
fn decode_claim(version: &str, signature: &str) -> Option<Vec<u8>> {
    let digest = signature.strip_prefix(version)?.strip_prefix('=')?;
    if !digest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }
    hex::decode(digest).ok()
}

/// Verify a Slack request signature.
///
/// # Arguments
///
/// * `secret` - The Slack app signing secret
/// * `version` - Signature scheme version, `v0` for every current request
/// * `body` - The raw request body, exactly as received
/// * `timestamp` - The `X-Slack-Request-Timestamp` header value
/// * `signature` - The `X-Slack-Signature` header value
///
/// # Returns
///
/// `true` only if `signature` equals the computed `{version}={hex}` string.
/// Any other input, including empty strings, yields `false`.
pub fn verify_slack_signature(
    secret: &[u8],
    version: &str,
    body: &[u8],
    timestamp: &str,
    signature: &str,
) -> bool {
    let claimed = match decode_claim(version, signature) {
        Some(bytes) => bytes,
        None => return false,
    };

    match signing_mac(secret, version, body, timestamp) {
        // Constant-time comparison of the digest
        Some(mac) => mac.verify_slice(&claimed).is_ok(),
        None => {
            warn!("slack_signature_invalid_key");
            false
        }
    }
}

/// Verifier bound to one signing secret and scheme version.
///
/// Built once at startup and shared by every request handler. It holds no
/// mutable state, so clones can be used from any number of tasks.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: Vec<u8>,
    version: String,
}

impl SignatureVerifier {
    /// Create a `v0` verifier. Returns `None` for an empty secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Option<Self> {
        Self::with_version(secret, SIGNATURE_VERSION)
    }

    /// Create a verifier for an explicit scheme version.
    pub fn with_version(secret: impl Into<Vec<u8>>, version: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return None;
        }

        Some(Self {
            secret,
            version: version.into(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Check a request and classify the outcome. Pure; logging is left to
    /// the caller.
    pub fn check(&self, body: &[u8], timestamp: &str, signature: &str) -> Verification {
        if verify_slack_signature(&self.secret, &self.version, body, timestamp, signature) {
            return Verification::Verified;
        }

        if timestamp.is_empty() || decode_claim(&self.version, signature).is_none() {
            Verification::Malformed
        } else {
            Verification::Mismatch
        }
    }

    /// Boolean form of [`SignatureVerifier::check`].
    pub fn verify(&self, body: &[u8], timestamp: &str, signature: &str) -> bool {
        self.check(body, timestamp, signature).is_verified()
    }
}
