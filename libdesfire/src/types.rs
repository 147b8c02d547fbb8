// libdesfire/src/types.rs

use std::fmt;

use crate::constants::{STATUS_ADDITIONAL_FRAME, STATUS_OPERATION_OK};
use crate::utils::HexSlice;
use crate::{Error, Result};

/// Native DESFire command: instruction byte plus parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeCommand {
    ins: u8,
    payload: Vec<u8>,
}

impl NativeCommand {
    pub fn new(ins: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            ins,
            payload: payload.into(),
        }
    }

    /// Command without parameters
    pub fn bare(ins: u8) -> Self {
        Self::new(ins, Vec::new())
    }

    /// Split a raw native command (`INS || payload`).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.split_first() {
            Some((&ins, payload)) => Ok(Self::new(ins, payload)),
            None => Err(Error::MalformedResponse {
                expected: 1,
                actual: 0,
            }),
        }
    }

    pub fn ins(&self) -> u8 {
        self.ins
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.payload.len());
        out.push(self.ins);
        out.extend_from_slice(&self.payload);
        out
    }
}

/// Native DESFire response: status byte followed by the payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeResponse {
    status: u8,
    payload: Vec<u8>,
}

impl NativeResponse {
    pub fn new(status: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            payload: payload.into(),
        }
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OPERATION_OK
    }

    /// The card has more data and expects an ADDITIONAL FRAME request.
    pub fn has_additional_frame(&self) -> bool {
        self.status == STATUS_ADDITIONAL_FRAME
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.payload.len());
        out.push(self.status);
        out.extend_from_slice(&self.payload);
        out
    }
}

/// DESFire file type (first byte of the file settings record)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    #[display(fmt = "StandardData")]
    StandardData = 0x00,
    #[display(fmt = "BackupData")]
    BackupData = 0x01,
    #[display(fmt = "ValueWithBackup")]
    ValueWithBackup = 0x02,
    #[display(fmt = "LinearRecordWithBackup")]
    LinearRecordWithBackup = 0x03,
    #[display(fmt = "CyclicRecordWithBackup")]
    CyclicRecordWithBackup = 0x04,
    #[display(fmt = "TransactionMac")]
    TransactionMac = 0x05,
}

impl FileType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::StandardData),
            0x01 => Some(Self::BackupData),
            0x02 => Some(Self::ValueWithBackup),
            0x03 => Some(Self::LinearRecordWithBackup),
            0x04 => Some(Self::CyclicRecordWithBackup),
            0x05 => Some(Self::TransactionMac),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Communication mode applied to file access
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommunicationMode {
    #[display(fmt = "Plain")]
    Plain = 0x00,
    #[display(fmt = "MAC")]
    Mac = 0x01,
    #[display(fmt = "Encrypted")]
    Encrypted = 0x03,
}

impl CommunicationMode {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Plain),
            0x01 => Some(Self::Mac),
            0x03 => Some(Self::Encrypted),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CommunicationMode {
    type Error = Error;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_code(code).ok_or(Error::UnknownCommunicationMode(code))
    }
}

impl fmt::Display for NativeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x} [{}]", self.status, HexSlice(&self.payload))
    }
}
