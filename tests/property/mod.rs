//! Property-based tests
//!
//! Invariants of the credential rules and password hashing, checked over
//! generated inputs with `proptest`.

mod policy_proptest;
