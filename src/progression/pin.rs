//! Parent-gate credential hashing.
//!
//! The store never sees a plaintext PIN: the settings screen calls
//! `generate_salt` + `hash_pin` and stores only the salt and digest, then
//! verifies gate attempts with `verify_pin`.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::progression::state::ParentGate;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// 16 random bytes, hex-encoded.
pub fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    to_hex(&bytes)
}

/// SHA-256 over `"<salt_hex>:<pin>"`, lowercase hex.
pub fn hash_pin(salt_hex: &str, pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(b":");
    hasher.update(pin.as_bytes());
    to_hex(&hasher.finalize())
}

/// Recompute-and-compare against the stored credential.
pub fn verify_pin(gate: &ParentGate, pin: &str) -> bool {
    hash_pin(&gate.salt_hex, pin) == gate.pin_hash_hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_32_hex_chars() {
        let salt = generate_salt();
        assert_eq!(salt.len(), 32);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hash_is_deterministic_for_same_salt() {
        assert_eq!(hash_pin("ab12", "1234"), hash_pin("ab12", "1234"));
        assert_ne!(hash_pin("ab12", "1234"), hash_pin("cd34", "1234"));
        assert_ne!(hash_pin("ab12", "1234"), hash_pin("ab12", "9999"));
    }

    #[test]
    fn verify_round_trip() {
        let salt = generate_salt();
        let gate = ParentGate {
            pin_hash_hex: hash_pin(&salt, "4321"),
            salt_hex: salt,
        };
        assert!(verify_pin(&gate, "4321"));
        assert!(!verify_pin(&gate, "4322"));
        assert!(!verify_pin(&gate, ""));
    }
}
