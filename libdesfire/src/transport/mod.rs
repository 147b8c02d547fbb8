// libdesfire/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

#[cfg(feature = "pcsc")]
pub use self::pcsc::PcscChannel;
pub use mock::MockChannel;
pub use traits::{CardChannel, DriverError, Protocol, ProtocolHeader};
