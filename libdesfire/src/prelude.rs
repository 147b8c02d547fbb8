// libdesfire/src/prelude.rs

pub use crate::card::{DesfireBuilder, DesfireCard};
pub use crate::protocol::{
    AccessKey, ApduFrame, DataFileSettings, FileKind, FileSettings, Permissions,
    RecordFileSettings, ValueFileSettings,
};
pub use crate::transport::{CardChannel, DriverError, Protocol, ProtocolHeader};
pub use crate::{CommunicationMode, Error, FileType, NativeCommand, NativeResponse, Result};

// Re-export small utilities for convenience
pub use crate::utils::{HexSlice, bytes_to_hex, bytes_to_hex_spaced};
