/**
 * Password Hashing
 *
 * bcrypt with a configurable cost. Every hash carries its own random salt,
 * so hashing the same password twice gives two different strings that both
 * verify.
 *
 * Verification never raises: a stored hash that cannot be parsed simply
 * does not match, so a corrupted record can neither crash a login nor let
 * one through. The stored hash is never logged.
 */

use std::fmt;

use crate::backend::error::BackendError;

/// Work factor used when none is configured
pub const DEFAULT_COST: u32 = 10;

/// Lowest work factor bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_COST: u32 = 31;

// Only ever compared against; the plaintext is irrelevant.
const DUMMY_PASSWORD: &str = "vichar-timing-equalizer";

/// Salted adaptive password hasher
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    ///
    /// # Errors
    ///
    /// `BackendError::Hashing` if the cost is outside bcrypt's 4..=31 range.
    pub fn new(cost: u32) -> Result<Self, BackendError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(BackendError::Hashing(format!(
                "bcrypt cost {} is outside {}..={}",
                cost,
                MIN_COST,
                MAX_COST
            )));
        }

        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)
            .map_err(|e| BackendError::Hashing(e.to_string()))?;

        Ok(Self { cost, dummy_hash })
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, plaintext: &str) -> Result<String, BackendError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            BackendError::Hashing(e.to_string())
        })
    }

    /// Check a candidate password against a stored hash
    ///
    /// Returns `false` for a mismatch and for a hash that cannot be parsed.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(plaintext, stored_hash) {
            Ok(matches) => matches,
            Err(_) => {
                // The error text can echo the hash, so it is not logged.
                tracing::warn!("Stored password hash is malformed");
                false
            }
        }
    }

    /// Spend the same work as a real verification and discard the result.
    ///
    /// Used when there is no stored hash to compare against, so a login for
    /// an unknown email takes as long as one with a wrong password.
    pub fn verify_dummy(&self, plaintext: &str) {
        let _ = bcrypt::verify(plaintext, &self.dummy_hash);
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}
