//! CLI infrastructure for the atlas toolkit
//!
//! This module provides the command-line interface for computing the state
//! space, printing its statistics, and exporting it for presentation.

pub mod commands;
pub mod output;
