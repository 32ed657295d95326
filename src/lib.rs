//! Drunkwalk - 2D random walk simulation engine
//!
//! Composes a movement policy (the walker's "personality"), a field with an
//! optional absorbing boundary, and trial/batch runners that produce
//! reproducible per-step distance and position series for downstream
//! aggregation. Plotting and presentation are external consumers of the
//! arrays this crate returns.

pub mod core;
pub mod field;
pub mod policy;
pub mod runner;
