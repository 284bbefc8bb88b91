// src/metadata.rs
//! Per-file status queries and the lookups derived from them.

use crate::error::{ListError, Result};
use crate::mode::{self, FileKind};
use std::ffi::{CStr, OsStr};
use std::mem::MaybeUninit;
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use std::ptr;

/// Snapshot of a file's status record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub uid: u32,
    pub gid: u32,
    pub mode: u32,
    pub size: u64,
    pub ino: u64,
    pub dev: u64,
    pub nlink: u64,
    /// Seconds since the epoch.
    pub atime: i64,
    pub mtime: i64,
    pub ctime: i64,
}

impl FileMetadata {
    /// Query the status of `name` inside `dir` without following symbolic links.
    ///
    /// # Errors
    /// Returns `ListError::Metadata` if the entry vanished or cannot be inspected.
    pub fn query(dir: &Path, name: &OsStr) -> Result<Self> {
        let meta = std::fs::symlink_metadata(dir.join(name)).map_err(|source| {
            ListError::Metadata {
                name: name.to_os_string(),
                source,
            }
        })?;
        Ok(Self::from(&meta))
    }

    pub const fn kind(&self) -> FileKind {
        FileKind::from_mode(self.mode)
    }

    pub fn permissions(&self) -> String {
        mode::permission_string(self.mode)
    }

    pub const fn dev_major(&self) -> u32 {
        dev_major(self.dev)
    }

    pub const fn dev_minor(&self) -> u32 {
        dev_minor(self.dev)
    }
}

impl From<&std::fs::Metadata> for FileMetadata {
    fn from(meta: &std::fs::Metadata) -> Self {
        Self {
            uid: meta.uid(),
            gid: meta.gid(),
            mode: meta.mode(),
            size: meta.size(),
            ino: meta.ino(),
            dev: meta.dev(),
            nlink: meta.nlink(),
            atime: meta.atime(),
            mtime: meta.mtime(),
            ctime: meta.ctime(),
        }
    }
}

// glibc `gnu_dev_major` / `gnu_dev_minor` encoding
#[allow(clippy::cast_possible_truncation)]
pub const fn dev_major(dev: u64) -> u32 {
    (((dev >> 32) & 0xffff_f000) | ((dev >> 8) & 0x0fff)) as u32
}

#[allow(clippy::cast_possible_truncation)]
pub const fn dev_minor(dev: u64) -> u32 {
    (((dev >> 12) & 0xffff_ff00) | (dev & 0x00ff)) as u32
}

/// Resolves numeric owner ids to names.
pub trait IdentityLookup {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Lookup through the system passwd/group databases.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

const INITIAL_BUF: usize = 1024;
const MAX_BUF: usize = 1 << 20;

impl IdentityLookup for SystemIdentity {
    fn user_name(&self, uid: u32) -> Option<String> {
        lookup_name(
            |entry: *mut libc::passwd, buf, len, result| {
                // SAFETY: all pointers come from `lookup_name` and stay valid for the call.
                unsafe { libc::getpwuid_r(uid, entry, buf, len, result) }
            },
            |entry| entry.pw_name.cast_const(),
        )
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        lookup_name(
            |entry: *mut libc::group, buf, len, result| {
                // SAFETY: all pointers come from `lookup_name` and stay valid for the call.
                unsafe { libc::getgrgid_r(gid, entry, buf, len, result) }
            },
            |entry| entry.gr_name.cast_const(),
        )
    }
}

/// Drive a reentrant `get*_r` call, growing the scratch buffer on `ERANGE`.
fn lookup_name<T, F, N>(mut call: F, name_of: N) -> Option<String>
where
    F: FnMut(*mut T, *mut libc::c_char, libc::size_t, *mut *mut T) -> libc::c_int,
    N: Fn(&T) -> *const libc::c_char,
{
    let mut buf: Vec<libc::c_char> = vec![0; INITIAL_BUF];
    loop {
        let mut entry = MaybeUninit::<T>::uninit();
        let mut result: *mut T = ptr::null_mut();
        let rc = call(entry.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &raw mut result);

        if rc == libc::ERANGE && buf.len() < MAX_BUF {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            log::debug!("identity lookup miss (rc={rc})");
            return None;
        }

        // SAFETY: on success `result` points at `entry`, whose string fields point into `buf`.
        let name = unsafe { CStr::from_ptr(name_of(&*result)) };
        return Some(name.to_string_lossy().into_owned());
    }
}

/// Owner and group names, with the numeric id standing in for a lookup miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerIdentity {
    pub user: String,
    pub group: String,
}

impl OwnerIdentity {
    pub fn resolve<L: IdentityLookup + ?Sized>(meta: &FileMetadata, lookup: &L) -> Self {
        Self {
            user: lookup
                .user_name(meta.uid)
                .unwrap_or_else(|| meta.uid.to_string()),
            group: lookup
                .group_name(meta.gid)
                .unwrap_or_else(|| meta.gid.to_string()),
        }
    }
}
