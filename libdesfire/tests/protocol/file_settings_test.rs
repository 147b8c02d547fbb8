#[path = "../common/mod.rs"]
mod common;

use libdesfire::protocol::{FileKind, FileSettings, Permissions, decode_file_settings};
use libdesfire::{CommunicationMode, Error, FileType};

#[test]
fn standard_file_decodes() {
    let fs = decode_file_settings(&common::fixtures::standard_file_payload()).unwrap();
    assert_eq!(fs.file_type(), FileType::StandardData);
    assert_eq!(fs.communication_mode.code(), 0x03);
    assert_eq!(fs.permissions, Permissions::decode([0x00, 0x23]));
    match fs.kind {
        FileKind::StandardData(d) => assert_eq!(d.file_size, 8),
        other => panic!("expected standard data file, got {:?}", other),
    }
}

#[test]
fn value_file_limited_credit_flag() {
    for enabled in [true, false] {
        let payload = common::fixtures::value_file_payload(enabled);
        assert_eq!(payload.len(), 17);
        let fs = FileSettings::decode(&payload).unwrap();
        assert_eq!(fs.communication_mode, CommunicationMode::Plain);
        assert!(fs.permissions.read_key.is_free());
        match fs.kind {
            FileKind::ValueWithBackup(v) => {
                assert_eq!(v.lower_limit, 0);
                assert_eq!(v.upper_limit, 500);
                assert_eq!(v.limited_credit_value, 20);
                assert_eq!(v.limited_credit_enabled, enabled);
            }
            other => panic!("expected value file, got {:?}", other),
        }
    }
}

#[test]
fn linear_record_file_decodes() {
    let fs = FileSettings::decode(&common::fixtures::linear_record_payload()).unwrap();
    assert_eq!(fs.file_type(), FileType::LinearRecordWithBackup);
    assert_eq!(fs.communication_mode, CommunicationMode::Mac);
    assert_eq!(fs.permissions.read_key.as_u8(), 3);
    assert_eq!(fs.permissions.write_key.as_u8(), 2);
    assert_eq!(fs.permissions.read_write_key.as_u8(), 1);
    assert_eq!(fs.permissions.change_key.as_u8(), 0);
    match fs.kind {
        FileKind::LinearRecordWithBackup(r) => {
            assert_eq!(r.record_size, 32);
            assert_eq!(r.max_record_count, 10);
            assert_eq!(r.record_count, 3);
        }
        other => panic!("expected linear record file, got {:?}", other),
    }
}

#[test]
fn transaction_mac_file_is_unsupported() {
    match FileSettings::decode(&common::fixtures::transaction_mac_payload()) {
        Err(Error::UnsupportedFileType(code)) => assert_eq!(code, 0x05),
        other => panic!("expected UnsupportedFileType, got {:?}", other),
    }
}

#[test]
fn truncated_standard_file_is_malformed() {
    let payload = common::fixtures::standard_file_payload();
    for len in 1..payload.len() {
        match FileSettings::decode(&payload[..len]) {
            Err(Error::MalformedResponse { expected, actual }) => {
                assert_eq!(expected, 7);
                assert_eq!(actual, len);
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }
}

#[test]
fn decoding_twice_gives_equal_values() {
    let payload = common::fixtures::linear_record_payload();
    let first = FileSettings::decode(&payload).unwrap();
    let second = FileSettings::decode(&payload).unwrap();
    assert_eq!(first, second);
}
