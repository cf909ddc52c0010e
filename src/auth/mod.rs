use sha2::{Digest, Sha256};

/// Unsalted SHA-256 over the raw password, rendered as lowercase hex.
///
/// This matches the credential format already present in existing database
/// files. It is not a general-purpose password KDF: there is no salt and no
/// work factor, so identical passwords produce identical digests.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_known_vector() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_hash_password_is_deterministic_and_unsalted() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
        assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
    }

    #[test]
    fn test_hash_password_empty_input_still_digests() {
        // Empty credentials are passed through unchecked by the auth screen;
        // they hash like any other string and simply never match a real row.
        assert_eq!(hash_password("").len(), 64);
    }
}
