//! Domain logic for the Promptly backend.
//!
//! This crate has no internal dependencies so the heuristic scoring,
//! composition, and optimization logic can be used by the API layer,
//! tests, and any future CLI tooling. Everything here is pure and
//! deterministic: the same input text always produces the same output.

pub mod analysis;
pub mod composer;
pub mod error;
pub mod optimizer;
pub mod pagination;
pub mod prompt;
pub mod scoring;
pub mod tips;
pub mod types;
