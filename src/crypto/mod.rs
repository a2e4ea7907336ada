//! Password hashing for stored credentials.
//!
//! Passwords are stored as lowercase hex SHA-256 digests without a salt,
//! the format existing data files already hold. Verification compares in
//! constant time.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hash a secret for storage
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a candidate secret against a stored digest
pub fn verify_secret(stored: &str, candidate: &str) -> bool {
    let computed = hash_secret(candidate);
    computed.as_bytes().ct_eq(stored.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_hex_sha256() {
        assert_eq!(
            hash_secret("pass"),
            "d74ff0ee8da3b9806b18c877dbf29bbde50b5bd8e4dad7a3a725000feb82e8f1"
        );
    }

    #[test]
    fn test_hash_consistent() {
        assert_eq!(hash_secret("my-secret"), hash_secret("my-secret"));
        assert_ne!(hash_secret("secret1"), hash_secret("secret2"));
    }

    #[test]
    fn test_verify_accepts_original() {
        for password in ["pass", "", "correct horse battery staple", "ünïcødé 🍳"] {
            let stored = hash_secret(password);
            assert!(verify_secret(&stored, password));
        }
    }

    #[test]
    fn test_verify_rejects_suffixed_candidate() {
        for password in ["pass", "", "hunter2"] {
            let stored = hash_secret(password);
            assert!(!verify_secret(&stored, &format!("{}x", password)));
        }
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        assert!(!verify_secret("not-a-digest", "pass"));
        assert!(!verify_secret("", "pass"));
    }
}
