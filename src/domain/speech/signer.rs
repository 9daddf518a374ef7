use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("signing key is not valid base64url: {0}")]
    InvalidKeyEncoding(#[from] base64::DecodeError),
}

/// Signs CDN URLs with an expiry window.
///
/// The signature format matches what the CDN edge verifies: the query
/// parameters `Expires` (unix seconds) and `KeyName` are appended to the
/// resource URL, an HMAC-SHA1 over the whole URL-so-far is computed with the
/// shared key, and the base64url digest is appended as `Signature`.
pub struct UrlSigner {
    key_name: String,
    key: Vec<u8>,
}

impl UrlSigner {
    /// Build a signer from the key name and the key material as stored at
    /// rest (base64url-encoded). The key is decoded once, at startup.
    pub fn new(key_name: impl Into<String>, encoded_key: &[u8]) -> Result<Self, SignerError> {
        let key = URL_SAFE.decode(encoded_key)?;
        Ok(Self {
            key_name: key_name.into(),
            key,
        })
    }

    /// Sign `url` so that it stays valid until `expires_at`.
    ///
    /// Pure given (url, expiry, key name, key): the same inputs always yield
    /// the same signature, so signatures can be reproduced and verified
    /// offline.
    pub fn sign(&self, url: &str, expires_at: DateTime<Utc>) -> String {
        let separator = if url.contains('?') { '&' } else { '?' };
        let mut signed = format!(
            "{url}{separator}Expires={}&KeyName={}",
            expires_at.timestamp(),
            self.key_name
        );

        // HMAC-SHA1 accepts keys of any length, so construction cannot fail.
        let mut mac = HmacSha1::new_from_slice(&self.key).expect("HMAC key of any length");
        mac.update(signed.as_bytes());
        let signature = URL_SAFE.encode(mac.finalize().into_bytes());

        signed.push_str("&Signature=");
        signed.push_str(&signature);
        signed
    }
}
