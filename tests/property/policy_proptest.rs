//! Credential policy properties

use proptest::prelude::*;
use vichar::shared::policy::MAX_PASSWORD_BYTES;
use vichar::shared::{normalize_email, CredentialPolicy};

proptest! {
    #[test]
    fn normalize_email_is_idempotent(email in "[ a-zA-Z0-9@._+-]{0,40}") {
        let once = normalize_email(&email);
        prop_assert_eq!(normalize_email(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn gmail_addresses_pass_the_default_policy(local in "[a-z][a-z0-9.]{0,20}[a-z0-9]") {
        let policy = CredentialPolicy::default();
        let email = format!("{}@gmail.com", local);
        prop_assume!(!email.contains(".."));
        prop_assert!(policy.validate_email(&email).is_ok());
    }

    #[test]
    fn other_domains_fail_the_default_policy(
        local in "[a-z][a-z0-9]{0,12}",
        domain in "[a-z]{3,10}\\.(com|org|net)",
    ) {
        prop_assume!(domain != "gmail.com");
        let policy = CredentialPolicy::default();
        let email = format!("{}@{}", local, domain);
        prop_assert!(policy.validate_email(&email).is_err());
    }

    #[test]
    fn password_length_bounds(password in "[a-zA-Z0-9]{0,100}") {
        let policy = CredentialPolicy::default();
        let expected = password.len() >= policy.min_password_length
            && password.len() <= MAX_PASSWORD_BYTES;
        prop_assert_eq!(policy.validate_password(&password).is_ok(), expected);
    }
}
