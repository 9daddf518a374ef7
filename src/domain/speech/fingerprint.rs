use sha2::{Digest, Sha256};

/// Compute the content fingerprint for a synthesis request.
///
/// Hashes the UTF-8 bytes of the four fields concatenated in a fixed order
/// with no separator, and renders the digest as lowercase hex. Identical
/// inputs always produce the identical fingerprint, which is what makes the
/// artifact cache content-addressed: any change to a meaning-bearing input
/// lands under a different object name, so stale cache entries cannot exist.
///
/// The separator-free concatenation is kept for compatibility with
/// previously generated cache keys. It admits field-boundary collisions in
/// theory ("ab"+"c" vs "a"+"bc"); see DESIGN.md.
pub fn fingerprint(
    session_key: &str,
    text_payload: &str,
    voice_gender: &str,
    voice_language_code: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(session_key.as_bytes());
    hasher.update(text_payload.as_bytes());
    hasher.update(voice_gender.as_bytes());
    hasher.update(voice_language_code.as_bytes());
    format!("{:x}", hasher.finalize())
}
