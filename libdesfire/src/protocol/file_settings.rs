// libdesfire/src/protocol/file_settings.rs

use crate::protocol::parser;
use crate::protocol::permissions::Permissions;
use crate::types::{CommunicationMode, FileType};
use crate::{Error, Result};

/// Common header: file type(1) + communication mode(1) + access rights(2)
const HEADER_LEN: usize = 4;
/// header(4) + file size(3)
const DATA_FILE_LEN: usize = HEADER_LEN + 3;
/// header(4) + lower(4) + upper(4) + limited credit value(4) + enabled(1)
const VALUE_FILE_LEN: usize = HEADER_LEN + 13;
/// header(4) + record size(3) + max records(3) + current records(3)
const RECORD_FILE_LEN: usize = HEADER_LEN + 9;

/// Settings of a standard or backup data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataFileSettings {
    pub file_size: u32,
}

/// Settings of a value file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueFileSettings {
    pub lower_limit: u32,
    pub upper_limit: u32,
    pub limited_credit_value: u32,
    pub limited_credit_enabled: bool,
}

/// Settings of a linear or cyclic record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordFileSettings {
    pub record_size: u32,
    pub max_record_count: u32,
    pub record_count: u32,
}

/// Type-specific part of the settings. One variant per decodable file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileKind {
    StandardData(DataFileSettings),
    BackupData(DataFileSettings),
    ValueWithBackup(ValueFileSettings),
    LinearRecordWithBackup(RecordFileSettings),
    CyclicRecordWithBackup(RecordFileSettings),
}

impl FileKind {
    pub fn file_type(&self) -> FileType {
        match self {
            Self::StandardData(_) => FileType::StandardData,
            Self::BackupData(_) => FileType::BackupData,
            Self::ValueWithBackup(_) => FileType::ValueWithBackup,
            Self::LinearRecordWithBackup(_) => FileType::LinearRecordWithBackup,
            Self::CyclicRecordWithBackup(_) => FileType::CyclicRecordWithBackup,
        }
    }
}

/// Decoded response of GetFileSettings (INS 0xF5).
///
/// ```text
/// 00 03 00 23 08 00 00
/// ^^ ^^ ^^^^^ ^^^^^^^^
/// |  |  |     file size (3 bytes, LE)
/// |  |  access rights (2 bytes)
/// |  communication mode
/// file type
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSettings {
    pub communication_mode: CommunicationMode,
    pub permissions: Permissions,
    pub kind: FileKind,
}

impl FileSettings {
    pub fn file_type(&self) -> FileType {
        self.kind.file_type()
    }

    /// Decode the payload of a GetFileSettings response (status byte
    /// already stripped).
    pub fn decode(data: &[u8]) -> Result<Self> {
        let code = parser::byte_at(data, 0)?;

        let file_type = match FileType::from_code(code) {
            Some(ft) => ft,
            None => return Err(Error::UnsupportedFileType(code)),
        };

        let kind = match file_type {
            FileType::StandardData => FileKind::StandardData(decode_data_file(data)?),
            FileType::BackupData => FileKind::BackupData(decode_data_file(data)?),
            FileType::ValueWithBackup => FileKind::ValueWithBackup(decode_value_file(data)?),
            FileType::LinearRecordWithBackup => {
                FileKind::LinearRecordWithBackup(decode_record_file(data)?)
            }
            FileType::CyclicRecordWithBackup => {
                FileKind::CyclicRecordWithBackup(decode_record_file(data)?)
            }
            // Recognised by the card family but not decoded here
            FileType::TransactionMac => return Err(Error::UnsupportedFileType(code)),
        };

        let communication_mode = CommunicationMode::try_from(parser::byte_at(data, 1)?)?;
        let permissions = Permissions::decode(parser::array_at::<2>(data, 2)?);

        Ok(Self {
            communication_mode,
            permissions,
            kind,
        })
    }
}

/// Convenience wrapper around [`FileSettings::decode`].
pub fn decode_file_settings(data: &[u8]) -> Result<FileSettings> {
    FileSettings::decode(data)
}

fn decode_data_file(data: &[u8]) -> Result<DataFileSettings> {
    parser::ensure_len(data, DATA_FILE_LEN)?;
    Ok(DataFileSettings {
        file_size: parser::le_u24_at(data, 4)?,
    })
}

fn decode_value_file(data: &[u8]) -> Result<ValueFileSettings> {
    parser::ensure_len(data, VALUE_FILE_LEN)?;
    Ok(ValueFileSettings {
        lower_limit: parser::le_u32_at(data, 4)?,
        upper_limit: parser::le_u32_at(data, 8)?,
        limited_credit_value: parser::le_u32_at(data, 12)?,
        limited_credit_enabled: parser::byte_at(data, 16)? != 0,
    })
}

fn decode_record_file(data: &[u8]) -> Result<RecordFileSettings> {
    parser::ensure_len(data, RECORD_FILE_LEN)?;
    Ok(RecordFileSettings {
        record_size: parser::le_u24_at(data, 4)?,
        max_record_count: parser::le_u24_at(data, 7)?,
        record_count: parser::le_u24_at(data, 10)?,
    })
}
