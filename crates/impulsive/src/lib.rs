//! Impulsive transfer utilities: the classical Hohmann solution.

pub mod hohmann;

pub use hohmann::{ComputationError, TransferResult, solve};
