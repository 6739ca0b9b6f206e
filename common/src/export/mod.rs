//! Export core modules shared across the CLI and tests.

#[cfg(feature = "excel")]
pub mod styles;

#[cfg(feature = "excel")]
pub mod excel_core;
