#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use libdesfire::{NativeCommand, Result};
use serial_test::serial;

// These tests require a PC/SC reader with a DESFire card on it. They are
// marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p libdesfire --test hardware --features pcsc -- --ignored

#[test]
#[ignore]
#[serial]
fn get_version_answers_with_additional_frame() -> Result<()> {
    let Some(mut card) = common::open_card()? else {
        return Ok(());
    };
    let resp = card.transceive(&NativeCommand::bare(0x60))?;
    assert!(resp.has_additional_frame());
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn read_settings_of_file_zero() -> Result<()> {
    let Some(mut card) = common::open_card()? else {
        return Ok(());
    };
    // Select the PICC master application first
    card.transceive(&NativeCommand::new(0x5A, vec![0x00, 0x00, 0x00]))?;
    match card.get_file_settings(0x00) {
        Ok(fs) => println!("{}", fs),
        Err(e) => println!("file 0 not readable on this card: {}", e),
    }
    Ok(())
}
