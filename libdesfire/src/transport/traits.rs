// libdesfire/src/transport/traits.rs

use crate::Result;

/// Low-level protocol negotiated between reader and card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Protocol {
    #[display(fmt = "T0")]
    T0,
    #[display(fmt = "T1")]
    T1,
    #[display(fmt = "RAW")]
    Raw,
}

/// Protocol control information handed to the raw transmit primitive.
/// Mirrors PC/SC's `SCARD_IO_REQUEST` (`dwProtocol`, `cbPciLength`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{} (pci {:#06x}/{})", protocol, pci_protocol, pci_length)]
pub struct ProtocolHeader {
    pub protocol: Protocol,
    pub pci_protocol: u32,
    pub pci_length: u32,
}

impl ProtocolHeader {
    const PCI_LENGTH: u32 = 8;

    /// Translate a negotiated protocol into the header the driver expects.
    pub fn for_protocol(protocol: Protocol) -> Self {
        let pci_protocol = match protocol {
            Protocol::T0 => 0x0001,
            Protocol::T1 => 0x0002,
            Protocol::Raw => 0x0004,
        };
        Self {
            protocol,
            pci_protocol,
            pci_length: Self::PCI_LENGTH,
        }
    }
}

/// Failure reported by the reader driver: raw result code plus its
/// description.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (code {code:#010x})")]
pub struct DriverError {
    pub code: u32,
    pub message: String,
}

impl DriverError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// CardChannel abstracts an already-connected reader/card pair away from
/// the DESFire framing logic. Opening and closing the connection is the
/// driver's business.
pub trait CardChannel {
    /// Whether the connection to the card is established
    fn is_open(&self) -> bool;

    /// Protocol negotiated when the connection was established
    fn negotiated_protocol(&self) -> Result<Protocol>;

    /// Send one frame and block until the card answers.
    fn raw_transmit(
        &mut self,
        header: ProtocolHeader,
        frame: &[u8],
    ) -> std::result::Result<Vec<u8>, DriverError>;
}

impl<C: CardChannel + ?Sized> CardChannel for Box<C> {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn negotiated_protocol(&self) -> Result<Protocol> {
        (**self).negotiated_protocol()
    }

    fn raw_transmit(
        &mut self,
        header: ProtocolHeader,
        frame: &[u8],
    ) -> std::result::Result<Vec<u8>, DriverError> {
        (**self).raw_transmit(header, frame)
    }
}
