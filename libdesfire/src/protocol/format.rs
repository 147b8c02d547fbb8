// libdesfire/src/protocol/format.rs
//! Human-readable rendering of decoded file settings. Kept apart from the
//! codec so decoding stays a pure bytes -> value step.

use std::fmt::{self, Write};

use crate::protocol::file_settings::{FileKind, FileSettings};

/// Multi-line summary of the settings, one `name: value` pair per line.
pub fn describe(settings: &FileSettings) -> String {
    let mut s = String::new();
    // write! never fails writing to a String
    let _ = write_settings(&mut s, settings);
    s
}

fn write_settings(out: &mut impl Write, settings: &FileSettings) -> fmt::Result {
    writeln!(out, "File type: {}", settings.file_type())?;
    writeln!(out, "Communication mode: {}", settings.communication_mode)?;
    writeln!(out, "Permissions: {}", settings.permissions)?;
    match &settings.kind {
        FileKind::StandardData(d) | FileKind::BackupData(d) => {
            writeln!(out, "File size: {}", d.file_size)?;
        }
        FileKind::ValueWithBackup(v) => {
            writeln!(out, "Lower limit: {}", v.lower_limit)?;
            writeln!(out, "Upper limit: {}", v.upper_limit)?;
            writeln!(out, "Limited credit value: {}", v.limited_credit_value)?;
            writeln!(out, "Limited credit enabled: {}", v.limited_credit_enabled)?;
        }
        FileKind::LinearRecordWithBackup(r) | FileKind::CyclicRecordWithBackup(r) => {
            writeln!(out, "Record size: {}", r.record_size)?;
            writeln!(out, "Current record count: {}", r.record_count)?;
            writeln!(out, "Max record count: {}", r.max_record_count)?;
        }
    }
    Ok(())
}

impl fmt::Display for FileSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_settings(f, self)
    }
}
