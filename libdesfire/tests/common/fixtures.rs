// fixtures.rs — provides commonly used file settings payloads/responses

/// GetFileSettings payload of a standard data file: encrypted, read key 2,
/// write key 3, 8 bytes.
pub fn standard_file_payload() -> Vec<u8> {
    hex::decode("00030023080000").unwrap()
}

/// Value file: plain, free access, limits 0..=500, limited credit 20.
pub fn value_file_payload(limited_credit_enabled: bool) -> Vec<u8> {
    let mut payload = hex::decode("0200eeee").unwrap();
    payload.extend_from_slice(&0u32.to_le_bytes());
    payload.extend_from_slice(&500u32.to_le_bytes());
    payload.extend_from_slice(&20u32.to_le_bytes());
    payload.push(u8::from(limited_credit_enabled));
    payload
}

/// Linear record file: MAC, record size 32, 10 records max, 3 written.
pub fn linear_record_payload() -> Vec<u8> {
    hex::decode("030110322000000a0000030000").unwrap()
}

/// Transaction MAC file; recognised but not decodable.
pub fn transaction_mac_payload() -> Vec<u8> {
    hex::decode("05000000000000").unwrap()
}

/// Full transport response carrying `payload` with native status OK.
pub fn ok_response(payload: &[u8]) -> Vec<u8> {
    super::wrap_native_response(0x00, payload)
}
