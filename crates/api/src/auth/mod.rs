//! Credential handling and the account directory.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed, time-limited access token issuance and parsing.
//! - [`directory`] -- registration and login on top of the user store.

pub mod directory;
pub mod jwt;
pub mod password;
