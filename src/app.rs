// src/app.rs
use crate::config::Config;
use crate::error::{ListError, Result};
use crate::filesystem::{DirectoryListing, MatchRecord};
use crate::metadata::{FileMetadata, IdentityLookup, OwnerIdentity, SystemIdentity};
use crate::presentation::{self, FileReport};
use std::ffi::{OsStr, OsString};
use std::io::Write;

/// Outcome of one listing run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Report blocks written.
    pub reported: usize,
    /// Requested names with no matching entry.
    pub not_found: Vec<OsString>,
    /// Per-file failures; these do not abort the run.
    pub errors: Vec<(OsString, ListError)>,
}

/// Run the listing against the system user/group databases.
///
/// # Errors
/// See [`run_with`].
pub fn run<W, D>(config: &Config, out: &mut W, diag: &mut D) -> Result<RunResult>
where
    W: Write + ?Sized,
    D: Write + ?Sized,
{
    run_with(config, out, diag, &SystemIdentity)
}

/// Run the listing, writing report blocks to `out`.
///
/// Per-file failures are written to `diag` as they happen and also collected
/// in `RunResult::errors`.
///
/// # Errors
/// Returns an error only for failures that end the run: the directory cannot be
/// opened, or `out` rejects a write.
pub fn run_with<W, D, L>(config: &Config, out: &mut W, diag: &mut D, lookup: &L) -> Result<RunResult>
where
    W: Write + ?Sized,
    D: Write + ?Sized,
    L: IdentityLookup + ?Sized,
{
    let listing = DirectoryListing::open(&config.dir)?;
    let mut reporter = Reporter {
        config,
        out,
        diag,
        lookup,
        result: RunResult::default(),
    };

    if config.is_named() {
        let mut record = MatchRecord::new(&config.names);
        for entry in listing.names() {
            for _ in 0..record.record(&entry) {
                reporter.report(&entry)?;
            }
        }
        for name in record.unmatched() {
            presentation::write_not_found(&mut *reporter.out, name)?;
            reporter.result.not_found.push(name.to_os_string());
        }
    } else {
        for entry in listing.names() {
            reporter.report(&entry)?;
        }
    }

    reporter.out.flush()?;
    let result = reporter.result;
    log::debug!(
        "done: {} reported, {} not found, {} errors",
        result.reported,
        result.not_found.len(),
        result.errors.len()
    );
    Ok(result)
}

struct Reporter<'a, W: ?Sized, D: ?Sized, L: ?Sized> {
    config: &'a Config,
    out: &'a mut W,
    diag: &'a mut D,
    lookup: &'a L,
    result: RunResult,
}

impl<W, D, L> Reporter<'_, W, D, L>
where
    W: Write + ?Sized,
    D: Write + ?Sized,
    L: IdentityLookup + ?Sized,
{
    fn report(&mut self, name: &OsStr) -> Result<()> {
        let meta = match FileMetadata::query(&self.config.dir, name) {
            Ok(meta) => meta,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                self.file_failed(name, err);
                return Ok(());
            }
        };
        let owner = OwnerIdentity::resolve(&meta, self.lookup);
        FileReport::new(name, &meta, owner).write_to(&mut *self.out)?;
        self.result.reported += 1;
        Ok(())
    }

    fn file_failed(&mut self, name: &OsStr, err: ListError) {
        log::debug!("status query failed for {}: {err}", name.to_string_lossy());
        let written = presentation::write_file_error(&mut *self.diag, name, &err)
            .and_then(|()| self.diag.flush());
        if let Err(e) = written {
            log::debug!("diagnostic write failed: {e}");
        }
        self.result.errors.push((name.to_os_string(), err));
    }
}
