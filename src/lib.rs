//! Atlas of the Tic-Tac-Toe state space
//!
//! This crate provides:
//! - A complete board model with the validity rules of X-first alternating play
//! - Breadth-first enumeration of all 5478 reachable configurations
//! - D4 symmetry reduction into 765 equivalence classes
//! - One-move transition tables over both state sets
//! - Export products (JSON, CSV, interactive HTML) for presentation consumers

pub mod atlas;
pub mod board;
pub mod cli;
pub mod enumerate;
pub mod error;
pub mod export;
pub mod identifiers;
pub mod lines;
pub mod reduce;
pub mod symmetry;
pub mod transitions;
pub mod validation;

pub use atlas::{Atlas, AtlasSummary, StatusCensus};
pub use board::{Board, Cell, GameStatus, Player};
pub use enumerate::StateSpace;
pub use error::{Error, Result};
pub use identifiers::{StateId, UniqueId};
pub use reduce::ReducedSpace;
pub use symmetry::D4Transform;
pub use transitions::{TransitionTable, full_transitions, unique_transitions};
