//! Solvers for polynomial equations.
//!
//! # Solvers
//!
//! - [`quadratic`] — real roots of `a·x² + b·x + c = 0` with tolerance-based
//!   classification of the discriminant
//!
//! Each solver also implements [`Model`] so it can be passed to code that is
//! generic over the solving strategy.
//!
//! [`Model`]: quadra_core::Model

pub mod quadratic;
