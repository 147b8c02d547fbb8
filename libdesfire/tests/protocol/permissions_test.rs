use libdesfire::protocol::{AccessKey, Permissions};

#[test]
fn permissions_from_settings_bytes() {
    let p = Permissions::decode([0x00, 0x23]);
    assert_eq!(p.read_key, AccessKey::from_nibble(0x2));
    assert_eq!(p.write_key, AccessKey::from_nibble(0x3));
    assert_eq!(p.read_write_key, AccessKey::from_nibble(0x0));
    assert_eq!(p.change_key, AccessKey::from_nibble(0x0));
}

#[test]
fn permissions_encode_for_create_file() {
    let p = Permissions::new(
        AccessKey::FREE,
        AccessKey::from_nibble(1),
        AccessKey::from_nibble(1),
        AccessKey::from_nibble(0),
    );
    assert_eq!(p.to_le_bytes(), [0x10, 0xE1]);
    assert_eq!(Permissions::decode(p.to_le_bytes()), p);
}
