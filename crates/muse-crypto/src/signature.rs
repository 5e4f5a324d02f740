//! # Ed25519 Detached-Signature Verification
//!
//! An Ed25519 public key is 32 bytes, a detached signature 64 bytes; both
//! arrive base58-encoded. Malformed encoding is reported as
//! [`SignatureError::InvalidEncoding`], never a panic. A well-formed but
//! wrong signature is `Ok(false)` — the two failure modes are distinct so
//! the API layer can log them differently, though both reject the request.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use thiserror::Error;

/// Errors decoding the inputs to signature verification.
#[derive(Error, Debug)]
pub enum SignatureError {
    /// The address or signature was not valid base58, or decoded to the
    /// wrong number of bytes.
    #[error("invalid {field} encoding: {reason}")]
    InvalidEncoding {
        /// Which input was malformed: `"address"` or `"signature"`.
        field: &'static str,
        /// Decode failure detail.
        reason: String,
    },
}

/// Decode a base58 string into a fixed-length byte array.
fn decode_fixed<const N: usize>(field: &'static str, input: &str) -> Result<[u8; N], SignatureError> {
    let bytes = bs58::decode(input)
        .into_vec()
        .map_err(|e| SignatureError::InvalidEncoding {
            field,
            reason: e.to_string(),
        })?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidEncoding {
            field,
            reason: format!("expected {N} bytes, got {len}"),
        })
}

/// Verify a detached Ed25519 signature over the UTF-8 bytes of `message`.
///
/// `address` is the signer's base58-encoded public key; `signature` the
/// base58-encoded 64-byte detached signature. Returns `Ok(true)` iff the
/// signature is valid under that key.
///
/// Empty `message` or empty `signature` verifies as `false` without
/// attempting a decode. Decode failures (malformed base58, wrong length)
/// are reported as [`SignatureError::InvalidEncoding`].
pub fn verify_detached(
    address: &str,
    message: &str,
    signature: &str,
) -> Result<bool, SignatureError> {
    if message.is_empty() || signature.is_empty() {
        return Ok(false);
    }

    let key_bytes: [u8; 32] = decode_fixed("address", address)?;
    let sig_bytes: [u8; 64] = decode_fixed("signature", signature)?;

    let key = match VerifyingKey::from_bytes(&key_bytes) {
        Ok(key) => key,
        // 32 bytes that are not a valid curve point can never verify.
        Err(_) => return Ok(false),
    };
    let sig = Signature::from_bytes(&sig_bytes);

    Ok(key.verify(message.as_bytes(), &sig).is_ok())
}
