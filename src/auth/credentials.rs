//! Password Hashing and Verification
//!
//! bcrypt with the library's default cost. Hashes are self-describing
//! (algorithm, cost and salt travel inside the hash string), so
//! verification needs no extra state.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ApiError;

/// Hash a plaintext password for storage
///
/// Each call salts independently, so hashing the same password twice
/// yields different strings.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("password hashing failed: {}", e)))
}

/// Check a plaintext password against a stored hash
///
/// Returns `false` for non-matching passwords and for malformed or
/// corrupted hashes. A broken hash in the database must read as "wrong
/// password", not take the login endpoint down.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}
