// libdesfire/src/error.rs

use thiserror::Error;

use crate::transport::{DriverError, ProtocolHeader};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("tried to transmit over a channel that is not open")]
    ChannelNotOpen,

    #[error("failed to transmit with protocol {header}: {source}")]
    TransmitFailure {
        header: ProtocolHeader,
        #[source]
        source: DriverError,
    },

    #[error("malformed response: expected at least {expected} bytes, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },

    #[error("unexpected SW1: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedStatusWord { expected: u8, actual: u8 },

    #[error("file type {0:#04x} is not supported")]
    UnsupportedFileType(u8),

    #[error("unknown communication mode {0:#04x}")]
    UnknownCommunicationMode(u8),

    #[error("access key number {0:#04x} is out of range (0x00-0x0f)")]
    InvalidAccessKey(u8),

    #[error("command payload too long: max {max}, got {actual}")]
    PayloadTooLong { max: usize, actual: usize },

    #[error("card rejected command {ins:#04x}: status={status:#04x}")]
    CardStatus { ins: u8, status: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
