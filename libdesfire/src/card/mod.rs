// libdesfire/src/card/mod.rs

use crate::Result;
use crate::protocol::FileSettings;
use crate::transport::CardChannel;
use crate::types::{NativeCommand, NativeResponse};

pub mod builder;
pub mod operations;

pub use builder::DesfireBuilder;

/// Handle to a DESFire card reachable through an open channel.
///
/// The handle never opens or closes the channel; `&mut self` on every
/// command keeps a single caller on the channel at a time.
pub struct DesfireCard<C: CardChannel> {
    channel: C,
}

impl<C: CardChannel> DesfireCard<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Send a native command and return the native response.
    pub fn transceive(&mut self, command: &NativeCommand) -> Result<NativeResponse> {
        crate::transceiver::transceive(&mut self.channel, command)
    }

    /// Read the settings of file `file_no`
    pub fn get_file_settings(&mut self, file_no: u8) -> Result<FileSettings> {
        operations::get_file_settings(self, file_no)
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }
}
