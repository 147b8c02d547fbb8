// libdesfire/src/transport/pcsc.rs

#![cfg(feature = "pcsc")]

use pcsc::{Card, Context, MAX_BUFFER_SIZE, Protocols, Scope, ShareMode};

use crate::transport::traits::{CardChannel, DriverError, Protocol, ProtocolHeader};
use crate::{Error, Result};

/// CardChannel backed by a PC/SC card handle. It is feature-gated behind
/// `--features pcsc` and requires the `pcsc` crate (pcsc-lite or WinSCard).
pub struct PcscChannel {
    card: Option<Card>,
}

impl PcscChannel {
    /// Wrap a card that the caller already connected.
    pub fn from_card(card: Card) -> Self {
        Self { card: Some(card) }
    }

    /// Connect to the first reader that currently holds a card.
    pub fn connect_first() -> Result<Self> {
        let ctx = Context::establish(Scope::User).map_err(|e| {
            log::debug!("pcsc context establish failed: {}", e);
            Error::ChannelNotOpen
        })?;
        let readers = ctx.list_readers_owned().map_err(|e| {
            log::debug!("pcsc list readers failed: {}", e);
            Error::ChannelNotOpen
        })?;

        for reader in &readers {
            match ctx.connect(reader, ShareMode::Shared, Protocols::ANY) {
                Ok(card) => {
                    log::debug!("connected to reader {:?}", reader);
                    return Ok(Self::from_card(card));
                }
                // Reader without card, or owned exclusively by someone else
                Err(e) => log::trace!("skipping reader {:?}: {}", reader, e),
            }
        }

        Err(Error::ChannelNotOpen)
    }

    /// Drop the card handle. Subsequent transmits fail with ChannelNotOpen.
    pub fn disconnect(&mut self) {
        self.card = None;
    }
}

fn driver_error(err: pcsc::Error) -> DriverError {
    DriverError::new(err as u32, err.to_string())
}

impl CardChannel for PcscChannel {
    fn is_open(&self) -> bool {
        self.card.is_some()
    }

    fn negotiated_protocol(&self) -> Result<Protocol> {
        let card = self.card.as_ref().ok_or(Error::ChannelNotOpen)?;
        let status = card.status2_owned().map_err(|e| {
            log::debug!("pcsc status failed: {}", e);
            Error::ChannelNotOpen
        })?;
        match status.protocol2() {
            Some(pcsc::Protocol::T0) => Ok(Protocol::T0),
            Some(pcsc::Protocol::T1) => Ok(Protocol::T1),
            Some(_) => Ok(Protocol::Raw),
            None => Err(Error::ChannelNotOpen),
        }
    }

    fn raw_transmit(
        &mut self,
        header: ProtocolHeader,
        frame: &[u8],
    ) -> std::result::Result<Vec<u8>, DriverError> {
        let card = self
            .card
            .as_ref()
            .ok_or_else(|| driver_error(pcsc::Error::InvalidHandle))?;
        // pcsc picks the PCI structure from the card's active protocol, so
        // the header only serves diagnostics here.
        log::trace!("pcsc transmit using {}", header);
        let mut buf = [0u8; MAX_BUFFER_SIZE];
        let resp = card.transmit(frame, &mut buf).map_err(driver_error)?;
        Ok(resp.to_vec())
    }
}
