// libdesfire/src/lib.rs

//! libdesfire
//!
//! Pure Rust APDU framing and file settings decoding for MIFARE DESFire cards.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transceiver;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the native command/response types are available for consumers.
pub use crate::error::*;
pub use crate::transceiver::transceive;
pub use crate::types::*;

pub use prelude::*;
