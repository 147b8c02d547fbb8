#[path = "../common/mod.rs"]
mod common;

use libdesfire::transport::{MockChannel, Protocol, ProtocolHeader};
use libdesfire::{Error, NativeCommand, transceive};

#[test]
fn transceive_records_frame_and_header() {
    let mut m = MockChannel::new(Protocol::T0);
    m.push_response(common::fixtures::ok_response(&[0x00, 0x01]));

    let resp = transceive(&mut m, &NativeCommand::bare(0x6F)).unwrap();
    assert_eq!(resp.to_bytes(), vec![0x00, 0x00, 0x01]);

    assert_eq!(m.sent.len(), 1);
    let (header, frame) = &m.sent[0];
    assert_eq!(*header, ProtocolHeader::for_protocol(Protocol::T0));
    assert_eq!(frame, &vec![0x90, 0x6F, 0x00, 0x00, 0x00]);
}

#[test]
fn closed_channel_never_transmits() {
    let mut m = MockChannel::closed();
    assert!(matches!(
        transceive(&mut m, &NativeCommand::bare(0x60)),
        Err(Error::ChannelNotOpen)
    ));
    assert!(m.sent.is_empty());
}

#[test]
fn short_response_is_malformed() {
    for raw in [vec![], vec![0x91]] {
        let mut m = MockChannel::default();
        m.push_response(raw.clone());
        match transceive(&mut m, &NativeCommand::bare(0x60)) {
            Err(Error::MalformedResponse { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, raw.len());
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }
}

#[test]
fn every_foreign_sw1_is_rejected() {
    for sw1 in (0x00..=0xFFu8).filter(|&b| b != 0x91) {
        let mut m = MockChannel::default();
        m.push_response(vec![0x01, sw1, 0x00]);
        match transceive(&mut m, &NativeCommand::bare(0x60)) {
            Err(Error::UnexpectedStatusWord { expected, actual }) => {
                assert_eq!(expected, 0x91);
                assert_eq!(actual, sw1);
            }
            other => panic!("expected UnexpectedStatusWord, got {:?}", other),
        }
    }
}

#[test]
fn driver_failure_is_not_retried() {
    let mut m = MockChannel::default();
    m.push_failure(0x8010_0016, "The smart card is not in the expected state");
    m.push_response(common::fixtures::ok_response(&[]));

    match transceive(&mut m, &NativeCommand::bare(0x60)) {
        Err(Error::TransmitFailure { header, source }) => {
            assert_eq!(header.protocol, Protocol::T1);
            assert!(source.message.contains("expected state"));
        }
        other => panic!("expected TransmitFailure, got {:?}", other),
    }
    // The queued OK response is still waiting: exactly one transmit happened
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.responses.len(), 1);
}

#[test]
fn boxed_channel_works_with_transceive() {
    let mut boxed = common::boxed_mock_with_responses(
        Protocol::T1,
        vec![common::fixtures::ok_response(&[0xAB])],
    );
    let resp = transceive(&mut boxed, &NativeCommand::bare(0x45)).unwrap();
    assert_eq!(resp.payload(), &[0xAB]);
}
