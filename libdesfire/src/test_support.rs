//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockChannel setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::card::DesfireCard;
use crate::constants::DESFIRE_SW1;
use crate::transport::{self, CardChannel, DriverError, Protocol, ProtocolHeader};

/// Append the `0x91 status` trailer a card puts behind a native response.
#[doc(hidden)]
pub fn wrap_native_response(status: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = payload.to_vec();
    out.push(DESFIRE_SW1);
    out.push(status);
    out
}

/// Build a MockChannel pre-seeded with the given raw transport responses
/// and return it boxed as a CardChannel trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(
    protocol: Protocol,
    responses: Vec<Vec<u8>>,
) -> Box<dyn CardChannel> {
    let mut mock = transport::mock::MockChannel::new(protocol);
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: a DesfireCard over a T1 MockChannel answering each command
/// with the given native `(status, payload)` pairs, in order.
#[doc(hidden)]
pub fn mock_card(natives: Vec<(u8, Vec<u8>)>) -> DesfireCard<transport::mock::MockChannel> {
    let mut mock = transport::mock::MockChannel::new(Protocol::T1);
    for (status, payload) in natives {
        mock.push_response(wrap_native_response(status, &payload));
    }
    DesfireCard::new(mock)
}

/// Synthetic channel that answers every frame with a fixed body followed by
/// `0x91 status`.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct EchoChannel {
    pub status: u8,
    pub body: Vec<u8>,
    pub transmits: usize,
}

impl EchoChannel {
    pub fn new(status: u8, body: Vec<u8>) -> Self {
        Self {
            status,
            body,
            transmits: 0,
        }
    }
}

impl CardChannel for EchoChannel {
    fn is_open(&self) -> bool {
        true
    }

    fn negotiated_protocol(&self) -> crate::Result<Protocol> {
        Ok(Protocol::T1)
    }

    fn raw_transmit(
        &mut self,
        _header: ProtocolHeader,
        _frame: &[u8],
    ) -> std::result::Result<Vec<u8>, DriverError> {
        self.transmits += 1;
        Ok(wrap_native_response(self.status, &self.body))
    }
}
