//! Human-readable user identifiers.
//!
//! An identifier is 8 characters: a role prefix letter, a zero-padded
//! 6-digit number, and an uppercase suffix letter, e.g. `B970736R`.
//! Each segment comes from a different digest of `username + salt`:
//!
//! | Segment | Digest  | Reduction                          |
//! |---------|---------|------------------------------------|
//! | prefix  | SHA-1   | first byte mod number of prefixes  |
//! | middle  | MD5     | whole digest (big-endian) mod 10^6 |
//! | suffix  | SHA-256 | whole digest (big-endian) mod 26   |
//!
//! The suffix is advanced by one letter (wrapping `Z` to `A`) when it would
//! equal the prefix. Identifiers are not guaranteed to be globally unique;
//! the primary-key constraint of the owning table rejects duplicates.

use md5::Md5;
use rand::{RngCore, rngs::OsRng};
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Number of random bytes mixed into every generated identifier.
pub const SALT_LEN: usize = 2;

pub const STUDENT_PREFIXES: &[char] = &['A', 'B', 'E', 'H'];
pub const STAFF_PREFIXES: &[char] = &['S', 'P', 'M'];

const MIDDLE_MODULUS: u64 = 1_000_000;
const ALPHABET_LEN: u64 = 26;

/// Category of the account an identifier is minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    /// Staff members and teachers share one prefix set.
    Staff,
}

impl Role {
    /// Candidate prefix letters for this role. The sets are disjoint, so the
    /// first character of an identifier tells the roles apart.
    pub const fn prefixes(self) -> &'static [char] {
        match self {
            Role::Student => STUDENT_PREFIXES,
            Role::Staff => STAFF_PREFIXES,
        }
    }
}

/// Generates a new identifier for `username` using a fresh random salt.
///
/// Repeated calls with the same username yield different identifiers.
pub fn generate_user_id(username: &str, role: Role) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    derive_user_id(username, &hex::encode(salt), role)
}

/// Derives the identifier for `username` under an explicit `salt`.
///
/// Deterministic: the same inputs always give the same identifier.
pub fn derive_user_id(username: &str, salt: &str, role: Role) -> String {
    let material = format!("{username}{salt}");
    let bytes = material.as_bytes();
    let prefixes = role.prefixes();

    let sha1 = Sha1::digest(bytes);
    let prefix = prefixes[usize::from(sha1[0]) % prefixes.len()];

    let middle = digest_mod(&Md5::digest(bytes), MIDDLE_MODULUS);

    let mut idx = digest_mod(&Sha256::digest(bytes), ALPHABET_LEN);
    if letter(idx) == prefix {
        idx = (idx + 1) % ALPHABET_LEN;
    }

    format!("{}{:06}{}", prefix, middle, letter(idx))
}

/// Reduces a digest, read as a big-endian unsigned integer, modulo `modulus`.
fn digest_mod(digest: &[u8], modulus: u64) -> u64 {
    digest
        .iter()
        .fold(0, |acc, &byte| (acc * 256 + u64::from(byte)) % modulus)
}

fn letter(idx: u64) -> char {
    char::from(b'A' + (idx % ALPHABET_LEN) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_student_ids() {
        assert_eq!(derive_user_id("alice", "1a2b", Role::Student), "B970736R");
        assert_eq!(derive_user_id("charlie", "beef", Role::Student), "A704983Z");
        assert_eq!(derive_user_id("dana", "0000", Role::Student), "E626333K");
    }

    #[test]
    fn test_known_staff_ids() {
        assert_eq!(derive_user_id("alice", "1a2b", Role::Staff), "P970736R");
        assert_eq!(derive_user_id("dana", "0000", Role::Staff), "P626333K");
    }

    #[test]
    fn test_suffix_skips_prefix_letter() {
        // SHA-256 lands on the prefix letter for these inputs.
        assert_eq!(derive_user_id("bob", "00ff", Role::Staff), "M136985N");
        assert_eq!(derive_user_id("ada", "0029", Role::Staff), "S993624T");
        assert_eq!(derive_user_id("ada", "0003", Role::Student), "A042186B");
    }

    #[test]
    fn test_digest_mod_matches_big_endian_value() {
        assert_eq!(digest_mod(&[0x01, 0x00], 1_000), 256);
        assert_eq!(digest_mod(&[0xff, 0xff, 0xff, 0xff], 26), 0xffff_ffff % 26);
        assert_eq!(digest_mod(&[], 26), 0);
    }

    #[test]
    fn test_letter_wraps() {
        assert_eq!(letter(0), 'A');
        assert_eq!(letter(25), 'Z');
        assert_eq!(letter(26), 'A');
    }

    #[test]
    fn test_prefix_sets_are_disjoint() {
        assert!(
            STUDENT_PREFIXES
                .iter()
                .all(|c| !STAFF_PREFIXES.contains(c))
        );
    }
}
