//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc1234")
//! - Null: 40 zeros, standing in for a side of a diff that does not exist

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn null() -> Self {
        Self("0".repeat(OBJECT_ID_LENGTH))
    }

    /// Hash `content` the way git hashes a blob: `blob <size>\0<content>`.
    pub fn for_blob(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(format!("blob {}\0", content.len()).as_bytes());
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn is_null(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> &str {
        &self.0[..SHORT_OBJECT_ID_LENGTH]
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::null()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
