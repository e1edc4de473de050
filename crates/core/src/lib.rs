//! Core traits for the Quadra solvers.
//!
//! This crate defines the contract that concrete solvers implement:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output,
//!   failing with a typed error
//!
//! Keeping the contract here lets callers accept any solver generically
//! without depending on a specific solver crate.

mod model;

pub use model::Model;
