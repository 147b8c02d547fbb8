// libdesfire/src/constants.rs
//! Common protocol constants used across the crate

/// CLA byte of an ISO 7816 APDU wrapping a native DESFire command
pub const DESFIRE_CLA: u8 = 0x90;

/// P1 is always zero for wrapped native commands
pub const DESFIRE_P1: u8 = 0x00;
/// P2 is always zero for wrapped native commands
pub const DESFIRE_P2: u8 = 0x00;

/// Le placeholder appended when the command carries a payload
pub const DESFIRE_LE: u8 = 0x00;

/// Length of the fixed APDU header: CLA INS P1 P2 Lc
pub const APDU_HEADER_LEN: usize = 5;

/// Maximum payload that fits the single-byte Lc field
pub const APDU_MAX_PAYLOAD_LEN: usize = 255;

/// SW1 value signalling that SW2 carries a native DESFire status
pub const DESFIRE_SW1: u8 = 0x91;

/// Minimal transport response: SW1 + SW2
pub const APDU_MIN_RESPONSE_LEN: usize = 2;

/// Native status: command completed
pub const STATUS_OPERATION_OK: u8 = 0x00;
/// Native status: more data follows in another frame
pub const STATUS_ADDITIONAL_FRAME: u8 = 0xAF;

/// Native instruction codes
pub const INS_GET_FILE_SETTINGS: u8 = 0xF5;

/// Access key nibble granting access without authentication
pub const ACCESS_KEY_FREE: u8 = 0x0E;
/// Access key nibble denying access altogether
pub const ACCESS_KEY_NEVER: u8 = 0x0F;
