use blake3::Hasher;
use ed25519_dalek::VerifyingKey;
use thiserror::Error;

use chainwire_types::{Address, PubKey};

/// Key type name the consensus subsystem uses for ed25519 validators.
pub const ED25519_KEY_TYPE: &str = "ed25519";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("public key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),
    #[error("invalid ed25519 public key")]
    InvalidPublicKey,
}

/// Derive the canonical 32-byte Address from a public key:
/// address = blake3(pubkey_bytes)
pub fn address_from_pubkey(pk: &VerifyingKey) -> Address {
    let mut hasher = Hasher::new();
    hasher.update(pk.as_bytes());
    *hasher.finalize().as_bytes()
}

/// Parse a VerifyingKey from raw public key bytes of any length.
pub fn pubkey_from_bytes(bytes: &[u8]) -> Result<VerifyingKey, CryptoError> {
    let bytes: &[u8; 32] = bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))?;
    VerifyingKey::from_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)
}

/// Parse and check a validator key, returning it with its canonical address.
pub fn validator_identity(bytes: &[u8]) -> Result<(PubKey, Address), CryptoError> {
    let vk = pubkey_from_bytes(bytes)?;
    Ok((PubKey(*vk.as_bytes()), address_from_pubkey(&vk)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use ed25519_dalek::SigningKey;

    #[test]
    fn address_is_32_bytes_and_deterministic() {
        let sk1 = SigningKey::from_bytes(&[1u8; 32]);
        let pk1 = sk1.verifying_key();

        let sk2 = SigningKey::from_bytes(&[2u8; 32]);
        let pk2 = sk2.verifying_key();

        let a1 = address_from_pubkey(&pk1);
        let a1_again = address_from_pubkey(&pk1);
        let a2 = address_from_pubkey(&pk2);

        assert_eq!(a1.len(), 32);
        assert_eq!(a1, a1_again);
        assert_ne!(a1, a2);
    }

    #[test]
    fn pubkey_length_is_checked() {
        let err = pubkey_from_bytes(&[0u8; 31]).unwrap_err();
        assert_eq!(err, CryptoError::InvalidKeyLength(31));
    }

    #[test]
    fn validator_identity_matches_address_derivation() {
        let sk = SigningKey::from_bytes(&[7u8; 32]);
        let vk = sk.verifying_key();

        let (pub_key, address) = validator_identity(vk.as_bytes()).unwrap();
        assert_eq!(pub_key.as_bytes(), vk.as_bytes());
        assert_eq!(address, address_from_pubkey(&vk));
    }
}
