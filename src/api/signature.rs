use ed25519_dalek::{Signature, VerifyingKey};
use tracing::error;

use crate::errors::BotError;

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Parse the application's hex-encoded Ed25519 public key.
///
/// # Errors
///
/// Returns a configuration error if the key is not 32 bytes of valid hex or is
/// not a valid curve point.
pub fn parse_public_key(hex_key: &str) -> Result<VerifyingKey, BotError> {
    let bytes = hex::decode(hex_key.trim())
        .map_err(|e| BotError::ConfigError(format!("PUBLIC_KEY is not valid hex: {e}")))?;
    let bytes: [u8; 32] = bytes.try_into().map_err(|raw: Vec<u8>| {
        BotError::ConfigError(format!(
            "PUBLIC_KEY decoded to {} bytes (expected 32)",
            raw.len()
        ))
    })?;
    VerifyingKey::from_bytes(&bytes)
        .map_err(|e| BotError::ConfigError(format!("PUBLIC_KEY is not an Ed25519 key: {e}")))
}

/// Verify Discord's request signature over `timestamp || body`.
///
/// # Errors
///
/// Returns [`BotError::SignatureError`] if the signature is malformed or does
/// not match.
pub fn verify_discord_signature(
    public_key: &VerifyingKey,
    signature_hex: &str,
    timestamp: &str,
    body: &[u8],
) -> Result<(), BotError> {
    let signature_bytes = hex::decode(signature_hex.trim())
        .map_err(|e| BotError::SignatureError(format!("signature is not valid hex: {e}")))?;
    let signature = Signature::from_slice(&signature_bytes)
        .map_err(|e| BotError::SignatureError(format!("malformed signature: {e}")))?;

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    public_key.verify_strict(&message, &signature).map_err(|e| {
        error!("Signature verification failed: {}", e);
        BotError::SignatureError("signature mismatch".to_string())
    })
}
