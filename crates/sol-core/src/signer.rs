//! Ed25519 keypairs for signing transaction messages.

use ed25519_dalek::Signer as _;
use zeroize::Zeroize;

use crate::pubkey::Pubkey;

/// An Ed25519 keypair. The 32-byte seed is consumed on construction and
/// zeroized; `ed25519-dalek` zeroizes its own copy on drop.
pub struct Keypair {
    signing_key: ed25519_dalek::SigningKey,
}

impl Keypair {
    /// Build a keypair from a 32-byte Ed25519 seed. The caller's copy is
    /// wiped before returning.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&seed);
        seed.zeroize();
        Keypair { signing_key }
    }

    pub fn pubkey(&self) -> Pubkey {
        Pubkey::new(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign arbitrary message bytes, returning the 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        write!(f, "Keypair({})", self.pubkey())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, VerifyingKey};

    #[test]
    fn pubkey_matches_dalek() {
        let seed = [0x42u8; 32];
        let kp = Keypair::from_seed(seed);
        let expected = ed25519_dalek::SigningKey::from_bytes(&seed)
            .verifying_key()
            .to_bytes();
        assert_eq!(kp.pubkey().to_bytes(), expected);
    }

    #[test]
    fn signature_verifies() {
        let kp = Keypair::from_seed([0x11u8; 32]);
        let msg = b"message bytes";
        let sig = Signature::from_bytes(&kp.sign(msg));
        let vk = VerifyingKey::from_bytes(kp.pubkey().as_bytes()).unwrap();
        assert!(vk.verify_strict(msg, &sig).is_ok());
    }

    #[test]
    fn signing_is_deterministic() {
        let kp = Keypair::from_seed([0x55u8; 32]);
        assert_eq!(kp.sign(b"abc"), kp.sign(b"abc"));
    }

    #[test]
    fn debug_hides_key_material() {
        let kp = Keypair::from_seed([0x77u8; 32]);
        let repr = format!("{kp:?}");
        assert!(repr.contains(&kp.pubkey().to_base58()));
        assert!(!repr.contains("0x77"));
    }
}
