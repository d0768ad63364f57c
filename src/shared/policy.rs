//! Credential Policy
//!
//! Rules a signup has to satisfy before any hashing or storage happens:
//! a syntactically valid email on an allow-listed domain, and a password
//! within the configured length bounds.
//!
//! The allow-list is configuration. An empty list accepts every domain.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::shared::error::SharedError;

/// Minimum password length (in characters) when nothing is configured
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Domain accepted when nothing is configured
pub const DEFAULT_ALLOWED_DOMAIN: &str = "gmail.com";

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Normalize an email address for storage and lookup.
///
/// Emails are compared case-insensitively, so the canonical form is the
/// trimmed, lowercased address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Signup validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPolicy {
    /// Lowercase domains an email may belong to; empty means any domain
    pub allowed_domains: Vec<String>,
    /// Minimum number of characters in a password
    pub min_password_length: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            allowed_domains: vec![DEFAULT_ALLOWED_DOMAIN.to_string()],
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl CredentialPolicy {
    /// Build a policy, normalizing each domain (`"@Gmail.com "` becomes `"gmail.com"`)
    pub fn new<I, S>(allowed_domains: I, min_password_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_domains = allowed_domains
            .into_iter()
            .map(|d| d.as_ref().trim().trim_start_matches('@').to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        Self {
            allowed_domains,
            min_password_length,
        }
    }

    /// Whether any domain is accepted
    pub fn allows_any_domain(&self) -> bool {
        self.allowed_domains.is_empty()
    }

    /// Validate an already-normalized email address
    pub fn validate_email(&self, email: &str) -> Result<(), SharedError> {
        let domain_allowed = |email: &str| {
            self.allows_any_domain()
                || email
                    .rsplit_once('@')
                    .is_some_and(|(_, domain)| self.allowed_domains.iter().any(|d| d == domain))
        };

        if email.validate_email() && domain_allowed(email) {
            Ok(())
        } else {
            Err(SharedError::validation("email", self.email_rule()))
        }
    }

    /// Validate a plaintext password against the length bounds
    pub fn validate_password(&self, password: &str) -> Result<(), SharedError> {
        if password.chars().count() < self.min_password_length {
            return Err(SharedError::validation(
                "password",
                format!(
                    "Password must be at least {} characters long",
                    self.min_password_length
                ),
            ));
        }

        if password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at most {} bytes long", MAX_PASSWORD_BYTES),
            ));
        }

        Ok(())
    }

    fn email_rule(&self) -> String {
        match self.allowed_domains.as_slice() {
            [] => "A valid email address is required".to_string(),
            [domain] => format!("Only valid {} addresses are allowed", domain),
            domains => format!(
                "Only valid addresses from {} are allowed",
                domains.join(", ")
            ),
        }
    }
}
