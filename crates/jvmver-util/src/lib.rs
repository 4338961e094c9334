//! Shared utilities for jvmver.
//!
//! Cross-cutting concerns used by the other jvmver crates: the unified error
//! type and Cargo-style terminal status lines.

pub mod errors;
pub mod status;
