//! Hohmann transfer analysis shared by the CLI and plotting front-ends.
//!
//! The computational pipeline lives in the member crates; this crate
//! re-exports them under stable module names and adds the one-shot analysis
//! entry point. Keeping the logic in library crates lets multiple front-ends
//! (CLI, plotting, future GUI) share it.

pub mod analysis;

pub use transfer_config as presets;
pub use transfer_export as export;
pub use transfer_geometry as geometry;
pub use transfer_impulsive as impulsive;
pub use transfer_params as params;
