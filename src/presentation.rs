// src/presentation.rs
use crate::metadata::{FileMetadata, OwnerIdentity};
use chrono::{DateTime, Local, TimeZone};
use std::ffi::{OsStr, OsString};
use std::fmt::Display;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

/// `ls` 風の時刻表記 (年なし)
pub const TIME_FORMAT: &str = "%b %d %H:%M";

/// Format a timestamp already placed in a time zone.
pub fn format_datetime<Tz>(dt: &DateTime<Tz>, fmt: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format(fmt).to_string()
}

/// Format seconds since the epoch in local time.
///
/// Falls back to the raw seconds if the instant is outside chrono's range.
pub fn format_timestamp(secs: i64, fmt: &str) -> String {
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .map_or_else(|| secs.to_string(), |dt| format_datetime(&dt, fmt))
}

/// Everything one report block shows, resolved ahead of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: OsString,
    pub owner: OwnerIdentity,
    pub kind: &'static str,
    pub permissions: String,
    pub size: u64,
    pub ino: u64,
    pub dev_major: u32,
    pub dev_minor: u32,
    pub nlink: u64,
    pub atime: String,
    pub mtime: String,
    pub ctime: String,
}

impl FileReport {
    pub fn new(name: &OsStr, meta: &FileMetadata, owner: OwnerIdentity) -> Self {
        Self {
            name: name.to_os_string(),
            owner,
            kind: meta.kind().label(),
            permissions: meta.permissions(),
            size: meta.size,
            ino: meta.ino,
            dev_major: meta.dev_major(),
            dev_minor: meta.dev_minor(),
            nlink: meta.nlink,
            atime: format_timestamp(meta.atime, TIME_FORMAT),
            mtime: format_timestamp(meta.mtime, TIME_FORMAT),
            ctime: format_timestamp(meta.ctime, TIME_FORMAT),
        }
    }

    /// Write the labelled block followed by its blank separator line.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"File name: \t\t\t")?;
        out.write_all(self.name.as_bytes())?;
        writeln!(out)?;
        writeln!(out, "User name of the owner owner: \t{}", self.owner.user)?;
        writeln!(out, "Group name of the group owner: \t{}", self.owner.group)?;
        writeln!(out, "Type of file: \t\t\t{}", self.kind)?;
        writeln!(out, "Full access permissions: \t{}", self.permissions)?;
        writeln!(out, "Size of file: \t\t\t{} bytes", self.size)?;
        writeln!(out, "I-node number: \t\t\t{}", self.ino)?;
        writeln!(out, "Major device number: \t\t{:x}", self.dev_major)?;
        writeln!(out, "Minor device number: \t\t{:x}", self.dev_minor)?;
        writeln!(out, "Number of links: \t\t{}", self.nlink)?;
        writeln!(out, "Last access time: \t\t{}", self.atime)?;
        writeln!(out, "Last modification time: \t{}", self.mtime)?;
        writeln!(out, "Last time file status changed: \t{}", self.ctime)?;
        writeln!(out)
    }
}

/// File names are written as their raw bytes.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_not_found<W: Write + ?Sized>(out: &mut W, name: &OsStr) -> io::Result<()> {
    out.write_all(b"File ")?;
    out.write_all(name.as_bytes())?;
    writeln!(out, " not found.")?;
    writeln!(out)
}

/// Per-file failure line, meant for stderr.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_file_error<W, E>(out: &mut W, name: &OsStr, err: &E) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Display + ?Sized,
{
    out.write_all(b"Error processing ")?;
    out.write_all(name.as_bytes())?;
    writeln!(out, ": {err}")
}

/// # Errors
/// Propagates write failures from `out`.
pub fn write_open_failure<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Unable to open current directory")?;
    writeln!(out)
}
