// libdesfire/src/protocol/mod.rs

pub mod file_settings;
pub mod format;
pub mod frame;
pub mod parser;
pub mod permissions;

pub use file_settings::{
    DataFileSettings, FileKind, FileSettings, RecordFileSettings, ValueFileSettings,
    decode_file_settings,
};
pub use format::describe;
pub use frame::ApduFrame;
pub use permissions::{AccessKey, Permissions};
