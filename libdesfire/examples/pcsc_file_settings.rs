//! Print the settings of every file in a DESFire application.
//!
//! Usage:
//!   cargo run -p libdesfire --example pcsc_file_settings --features pcsc -- [AID]
//!
//! AID is three bytes of hex and defaults to 000000 (the PICC level).
//! Set RUST_LOG=trace to see every APDU.

use anyhow::{Context, Result, bail};
use libdesfire::prelude::*;
use libdesfire::transport::PcscChannel;

const INS_SELECT_APPLICATION: u8 = 0x5A;
const INS_GET_FILE_IDS: u8 = 0x6F;

fn main() -> Result<()> {
    env_logger::init();

    let aid_hex = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "000000".to_string());
    let aid = hex::decode(&aid_hex).context("AID must be hex")?;
    if aid.len() != 3 {
        bail!("AID must be 3 bytes, got {}", aid.len());
    }

    let channel = PcscChannel::connect_first().context("no reader with a card")?;
    let mut card = DesfireCard::new(channel);

    let select = NativeCommand::new(INS_SELECT_APPLICATION, aid);
    let resp = card.transceive(&select)?;
    if !resp.is_ok() {
        bail!(
            "SelectApplication {} failed: status {:#04x}",
            aid_hex,
            resp.status()
        );
    }

    let resp = card.transceive(&NativeCommand::bare(INS_GET_FILE_IDS))?;
    if !resp.is_ok() {
        bail!("GetFileIDs failed: status {:#04x}", resp.status());
    }

    for &file_no in resp.payload() {
        println!("----- file {:#04x} -----", file_no);
        match card.get_file_settings(file_no) {
            Ok(settings) => print!("{}", settings),
            Err(e) => println!("unavailable: {}", e),
        }
    }

    Ok(())
}
