// libdesfire/src/transport/mock.rs

use crate::Result;
use crate::transport::traits::{CardChannel, DriverError, Protocol, ProtocolHeader};

/// Driver code used when the mock runs out of queued responses
/// (SCARD_E_TIMEOUT).
pub const MOCK_TIMEOUT_CODE: u32 = 0x8010_000A;

/// Mock channel for unit tests. It records transmitted frames and returns
/// queued responses.
#[derive(Debug)]
pub struct MockChannel {
    pub sent: Vec<(ProtocolHeader, Vec<u8>)>,
    pub responses: Vec<std::result::Result<Vec<u8>, DriverError>>,
    pub protocol: Protocol,
    pub open: bool,
}

impl Default for MockChannel {
    fn default() -> Self {
        Self::new(Protocol::T1)
    }
}

impl MockChannel {
    pub fn new(protocol: Protocol) -> Self {
        Self {
            sent: Vec::new(),
            responses: Vec::new(),
            protocol,
            open: true,
        }
    }

    /// A channel whose connection was never established.
    pub fn closed() -> Self {
        Self {
            open: false,
            ..Self::default()
        }
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    /// Queue a driver failure for the next transmit.
    pub fn push_failure(&mut self, code: u32, message: &str) {
        self.responses.push(Err(DriverError::new(code, message)));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop().map(|(_, frame)| frame)
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl CardChannel for MockChannel {
    fn is_open(&self) -> bool {
        self.open
    }

    fn negotiated_protocol(&self) -> Result<Protocol> {
        Ok(self.protocol)
    }

    fn raw_transmit(
        &mut self,
        header: ProtocolHeader,
        frame: &[u8],
    ) -> std::result::Result<Vec<u8>, DriverError> {
        self.sent.push((header, frame.to_vec()));
        if self.responses.is_empty() {
            Err(DriverError::new(MOCK_TIMEOUT_CODE, "no queued response"))
        } else {
            self.responses.remove(0)
        }
    }
}
