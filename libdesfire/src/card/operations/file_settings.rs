use crate::card::DesfireCard;
use crate::constants::INS_GET_FILE_SETTINGS;
use crate::protocol::FileSettings;
use crate::transport::CardChannel;
use crate::types::NativeCommand;
use crate::{Error, Result};

/// Read and decode the settings of file `file_no` (GetFileSettings, 0xF5).
pub fn get_file_settings<C: CardChannel>(
    card: &mut DesfireCard<C>,
    file_no: u8,
) -> Result<FileSettings> {
    let cmd = NativeCommand::new(INS_GET_FILE_SETTINGS, vec![file_no]);
    let resp = card.transceive(&cmd)?;

    if !resp.is_ok() {
        log::debug!(
            "GetFileSettings({}) rejected with status {:#04x}",
            file_no,
            resp.status()
        );
        return Err(Error::CardStatus {
            ins: INS_GET_FILE_SETTINGS,
            status: resp.status(),
        });
    }

    FileSettings::decode(resp.payload())
}
