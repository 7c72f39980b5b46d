//! CLI command implementations.

pub mod check;
pub mod common;
pub mod export;
pub mod import;
pub mod version;
