//! tycoon, a board-game economy engine.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], CLI driver in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
