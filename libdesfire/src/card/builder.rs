// libdesfire/src/card/builder.rs

use crate::card::DesfireCard;
use crate::transport::CardChannel;
use crate::{Error, Result};

/// Helper to construct a DesfireCard from a boxed channel.
#[derive(Default)]
pub struct DesfireBuilder {
    channel: Option<Box<dyn CardChannel>>,
}

impl DesfireBuilder {
    pub fn new() -> Self {
        Self { channel: None }
    }

    /// Provide an already-connected channel (e.g. MockChannel, PcscChannel)
    pub fn with_channel(mut self, channel: Box<dyn CardChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Consume the builder. Requires a channel that is open; otherwise
    /// returns ChannelNotOpen.
    pub fn build(self) -> Result<DesfireCard<Box<dyn CardChannel>>> {
        match self.channel {
            Some(c) if c.is_open() => Ok(DesfireCard::new(c)),
            _ => Err(Error::ChannelNotOpen),
        }
    }
}
