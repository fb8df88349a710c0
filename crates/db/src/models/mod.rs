//! Row models and DTOs, one submodule per entity.

pub mod prompt;
pub mod user;
