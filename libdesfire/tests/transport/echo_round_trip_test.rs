use libdesfire::test_support::EchoChannel;
use libdesfire::{NativeCommand, transceive};
use proptest::prelude::*;

proptest! {
    #[test]
    fn echo_round_trip(status in any::<u8>(),
                       body in prop::collection::vec(any::<u8>(), 0..64),
                       payload in prop::collection::vec(any::<u8>(), 0..=255)) {
        let mut channel = EchoChannel::new(status, body.clone());
        let resp = transceive(&mut channel, &NativeCommand::new(0x3D, payload)).unwrap();

        let mut expected = vec![status];
        expected.extend_from_slice(&body);
        prop_assert_eq!(resp.to_bytes(), expected);
        prop_assert_eq!(channel.transmits, 1);
    }
}
