// libdesfire/src/transceiver.rs

use crate::protocol::ApduFrame;
use crate::transport::{CardChannel, ProtocolHeader};
use crate::types::{NativeCommand, NativeResponse};
use crate::utils::HexSlice;
use crate::{Error, Result};

/// Send one native command over an open channel and return the native
/// response with the status byte first.
///
/// Performs exactly one blocking transmit; nothing is retried.
pub fn transceive<C>(channel: &mut C, command: &NativeCommand) -> Result<NativeResponse>
where
    C: CardChannel + ?Sized,
{
    if !channel.is_open() {
        return Err(Error::ChannelNotOpen);
    }

    let header = ProtocolHeader::for_protocol(channel.negotiated_protocol()?);
    let apdu = ApduFrame::wrap(command)?;
    log::trace!(">> {}", HexSlice(&apdu));

    let raw = channel.raw_transmit(header, &apdu).map_err(|source| {
        log::debug!("transmit of ins {:#04x} failed: {}", command.ins(), source);
        Error::TransmitFailure { header, source }
    })?;
    log::trace!("<< {}", HexSlice(&raw));

    ApduFrame::unwrap(&raw).inspect_err(|e| {
        log::debug!("bad response to ins {:#04x}: {}", command.ins(), e);
    })
}
