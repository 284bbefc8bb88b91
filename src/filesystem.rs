// src/filesystem.rs
use crate::error::{ListError, Result};
use hashbrown::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::fs::ReadDir;
use std::path::{Path, PathBuf};

/// An open directory stream, consumed once.
#[derive(Debug)]
pub struct DirectoryListing {
    path: PathBuf,
    entries: ReadDir,
}

impl DirectoryListing {
    /// Open `path` for enumeration.
    ///
    /// # Errors
    /// Returns `ListError::OpenDirectory` if the directory cannot be read.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(path).map_err(|source| ListError::OpenDirectory {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened directory {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Entry names in stream order, without `.` and `..`.
    ///
    /// Entries that fail to read are logged and skipped.
    pub fn names(self) -> impl Iterator<Item = OsString> {
        let Self { path, entries } = self;
        entries.filter_map(move |entry| match entry {
            Ok(entry) => {
                let name = entry.file_name();
                if is_self_or_parent(&name) {
                    None
                } else {
                    Some(name)
                }
            }
            Err(source) => {
                let err = ListError::ReadEntry {
                    path: path.clone(),
                    source,
                };
                log::warn!("{err}");
                None
            }
        })
    }
}

fn is_self_or_parent(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Tracks which requested names matched a real directory entry.
#[derive(Debug, Default)]
pub struct MatchRecord {
    requested: Vec<OsString>,
    occurrences: HashMap<OsString, usize>,
    matched: HashSet<OsString>,
}

impl MatchRecord {
    pub fn new(requested: &[OsString]) -> Self {
        let mut occurrences: HashMap<OsString, usize> = HashMap::with_capacity(requested.len());
        for name in requested {
            *occurrences.entry(name.clone()).or_default() += 1;
        }
        Self {
            requested: requested.to_vec(),
            occurrences,
            matched: HashSet::new(),
        }
    }

    /// How many times `entry` was requested; records it as matched when non-zero.
    ///
    /// A name given twice on the command line is reported twice.
    pub fn record(&mut self, entry: &OsStr) -> usize {
        let count = self.occurrences.get(entry).copied().unwrap_or(0);
        if count > 0 {
            log::trace!("matched {} x{count}", entry.to_string_lossy());
            self.matched.insert(entry.to_os_string());
        }
        count
    }

    pub fn is_matched(&self, name: &OsStr) -> bool {
        self.matched.contains(name)
    }

    /// Requested names never matched, in argument order.
    pub fn unmatched(&self) -> impl Iterator<Item = &OsStr> {
        self.requested
            .iter()
            .map(OsString::as_os_str)
            .filter(|name| !self.is_matched(name))
    }
}
