// libdesfire/src/protocol/permissions.rs

use std::fmt;

use crate::Error;
use crate::constants::{ACCESS_KEY_FREE, ACCESS_KEY_NEVER};

/// Key number (0-15) required for an access right.
///
/// `0x0E` grants free access, `0x0F` denies access altogether; every other
/// value names an application key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct AccessKey(u8);

impl AccessKey {
    pub const FREE: Self = Self(ACCESS_KEY_FREE);
    pub const NEVER: Self = Self(ACCESS_KEY_NEVER);

    /// Build from the low nibble of `value`; the high nibble is discarded.
    pub const fn from_nibble(value: u8) -> Self {
        Self(value & 0x0F)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_free(&self) -> bool {
        *self == Self::FREE
    }

    pub fn is_never(&self) -> bool {
        *self == Self::NEVER
    }
}

impl TryFrom<u8> for AccessKey {
    type Error = Error;

    /// Unlike [`AccessKey::from_nibble`], values above `0x0F` are rejected.
    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if value > 0x0F {
            return Err(Error::InvalidAccessKey(value));
        }
        Ok(Self(value))
    }
}

impl From<AccessKey> for u8 {
    fn from(key: AccessKey) -> Self {
        key.0
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::FREE => f.write_str("free"),
            Self::NEVER => f.write_str("never"),
            Self(key) => write!(f, "key {:#x}", key),
        }
    }
}

/// Access rights of a file, packed as four nibbles in a little-endian u16:
/// bits 0-3 change, 4-7 read&write, 8-11 write, 12-15 read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions {
    pub read_key: AccessKey,
    pub write_key: AccessKey,
    pub read_write_key: AccessKey,
    pub change_key: AccessKey,
}

impl Permissions {
    pub fn new(
        read_key: AccessKey,
        write_key: AccessKey,
        read_write_key: AccessKey,
        change_key: AccessKey,
    ) -> Self {
        Self {
            read_key,
            write_key,
            read_write_key,
            change_key,
        }
    }

    /// Decode the two-byte access rights field. Total over all inputs.
    pub fn decode(bytes: [u8; 2]) -> Self {
        let raw = u16::from_le_bytes(bytes);
        let nibble = |shift: u16| AccessKey::from_nibble((raw >> shift) as u8);
        Self {
            change_key: nibble(0),
            read_write_key: nibble(4),
            write_key: nibble(8),
            read_key: nibble(12),
        }
    }

    /// Encode back into the two-byte wire form used by create-file commands.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        let raw = u16::from(self.change_key.as_u8())
            | u16::from(self.read_write_key.as_u8()) << 4
            | u16::from(self.write_key.as_u8()) << 8
            | u16::from(self.read_key.as_u8()) << 12;
        raw.to_le_bytes()
    }
}

impl From<[u8; 2]> for Permissions {
    fn from(bytes: [u8; 2]) -> Self {
        Self::decode(bytes)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "read: {}, write: {}, read&write: {}, change: {}",
            self.read_key, self.write_key, self.read_write_key, self.change_key
        )
    }
}
