//! CLI command implementations

pub mod export;
pub mod stats;
pub mod symmetry;
