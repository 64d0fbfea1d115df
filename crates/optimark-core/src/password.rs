use sha2::{Digest, Sha256};

/// Digests a raw password for storage.
///
/// A single SHA-256 pass over the UTF-8 bytes, rendered as 64 lowercase hex
/// characters. There is no salt or work factor, so equal passwords always
/// produce equal digests.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_lowercase_hex_of_fixed_length() {
        let hash = hash_password("secret123");
        assert_eq!(hash.len(), 64);
        assert!(
            hash.chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("secret123"),
            "fcf730b6d95236ecd3c9fc2d92d7b6b2bb061514961aec041d6c7a7192f592e4"
        );
    }
}
