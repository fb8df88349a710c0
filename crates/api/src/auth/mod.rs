//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token validation and the config it needs.
//!   Token issuance lives in the external auth service; the mint helper
//!   here exists for tests and provisioning scripts.

pub mod jwt;
