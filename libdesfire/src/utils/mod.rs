//! Utilities for libdesfire: small, reusable helpers used across the crate.
//!
//! Currently only hex helpers, used for frame tracing and display.

pub mod hex;

pub use hex::*;
