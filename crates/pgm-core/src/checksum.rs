//! MD5 checksum utility for migration content hashes.
//!
//! The tracking table stores an md5 per applied migration, so the hash
//! function follows the persisted schema.

use md5::{Digest, Md5};

/// Compute the lowercase hex MD5 digest of a string
pub fn md5_hex(s: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(s.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_value() {
        // md5("") is the canonical empty digest
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("select 1"), md5_hex("select 1"));
        assert_ne!(md5_hex("select 1"), md5_hex("select 2"));
    }
}
