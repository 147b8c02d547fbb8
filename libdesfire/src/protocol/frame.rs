// libdesfire/src/protocol/frame.rs

use crate::constants::{
    APDU_HEADER_LEN, APDU_MAX_PAYLOAD_LEN, APDU_MIN_RESPONSE_LEN, DESFIRE_CLA, DESFIRE_LE,
    DESFIRE_P1, DESFIRE_P2, DESFIRE_SW1,
};
use crate::types::{NativeCommand, NativeResponse};
use crate::{Error, Result};

/// ISO 7816 wrapping of native DESFire commands.
/// Command: [CLA=0x90] [INS] [P1=0x00] [P2=0x00] [Lc] [Payload(Lc)] [Le=0x00 if Lc>0]
/// Response: [Payload(n)] [SW1=0x91] [SW2=native status]
pub struct ApduFrame;

impl ApduFrame {
    /// Wrap a native command into a full APDU
    pub fn wrap(cmd: &NativeCommand) -> Result<Vec<u8>> {
        let payload = cmd.payload();
        if payload.len() > APDU_MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLong {
                max: APDU_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let lc = payload.len() as u8;
        let mut out = Vec::with_capacity(Self::wrapped_len(payload.len()));
        out.extend_from_slice(&[DESFIRE_CLA, cmd.ins(), DESFIRE_P1, DESFIRE_P2, lc]);
        out.extend_from_slice(payload);
        if !payload.is_empty() {
            out.push(DESFIRE_LE);
        }
        Ok(out)
    }

    /// Length of the APDU produced for a payload of `payload_len` bytes
    pub fn wrapped_len(payload_len: usize) -> usize {
        APDU_HEADER_LEN + payload_len + usize::from(payload_len > 0)
    }

    /// Validate SW1 and move SW2 in front of the remaining payload
    pub fn unwrap(response: &[u8]) -> Result<NativeResponse> {
        let (body, sw) = match response.len().checked_sub(APDU_MIN_RESPONSE_LEN) {
            Some(split) => response.split_at(split),
            None => {
                return Err(Error::MalformedResponse {
                    expected: APDU_MIN_RESPONSE_LEN,
                    actual: response.len(),
                });
            }
        };

        let (sw1, sw2) = (sw[0], sw[1]);
        if sw1 != DESFIRE_SW1 {
            return Err(Error::UnexpectedStatusWord {
                expected: DESFIRE_SW1,
                actual: sw1,
            });
        }

        Ok(NativeResponse::new(sw2, body))
    }
}
