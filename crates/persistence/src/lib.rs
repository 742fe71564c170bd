// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File persistence for the Best-of-7 Score Ledger.
//!
//! The ledger is a single JSON document. Saves are atomic (write to a
//! temporary file, then rename over the primary), so a crash mid-write can
//! never leave a truncated primary. Loads that fail to read or parse walk
//! the backup directory newest-first and fall back to an empty ledger as a
//! last resort; `load` itself never fails.
//!
//! Backups are byte-identical copies of the primary, named with an
//! embedded UTC timestamp (colons replaced for filesystem safety), and
//! rotated down to a configured retention count after each creation.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use score_ledger::Ledger;
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{error, info, warn};

/// Default number of backups retained by rotation.
pub const DEFAULT_MAX_BACKUPS: usize = 5;

/// Prefix for rotated backup file names.
const BACKUP_PREFIX: &str = "scores-";

/// Prefix for best-effort pre-restore snapshots.
///
/// These share the backup directory but are excluded from listing and
/// rotation so that restoring cannot rotate away the backup being
/// restored.
const PRE_RESTORE_PREFIX: &str = "pre-restore-";

/// Suffix for backup file names.
const BACKUP_SUFFIX: &str = ".json";

/// Timestamp layout embedded in backup file names. Colons are replaced
/// with dashes so the names are valid on every filesystem.
const BACKUP_TIMESTAMP: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]-[minute]-[second].[subsecond digits:6]Z");

/// One retained backup snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    /// The backup's file name within the backup directory.
    pub file_name: String,
    /// The full path to the backup file.
    pub path: PathBuf,
    /// When the backup was created, parsed back out of the file name.
    pub created_at: OffsetDateTime,
}

/// The single-file ledger store.
///
/// Every operation is self-contained: the store holds paths and the
/// retention count, never an in-memory copy of the document.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path of the primary ledger document.
    data_path: PathBuf,
    /// Directory holding rotated backups.
    backup_dir: PathBuf,
    /// Number of backups retained by rotation.
    max_backups: usize,
}

impl FileStore {
    /// Creates a store for the given primary file and backup directory.
    #[must_use]
    pub fn new(data_path: &Path, backup_dir: &Path, max_backups: usize) -> Self {
        Self {
            data_path: data_path.to_path_buf(),
            backup_dir: backup_dir.to_path_buf(),
            max_backups,
        }
    }

    /// The path of the primary ledger document.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Loads the ledger from primary storage.
    ///
    /// A missing primary file is a fresh install, not an error. A primary
    /// that cannot be read or parsed triggers the recovery cascade: every
    /// backup is tried newest-first, the first one that parses is
    /// re-persisted as the new primary and returned, and if none parses
    /// the store degrades to an empty ledger. This method never fails.
    #[must_use]
    pub fn load(&self) -> Ledger {
        match self.try_load(&self.data_path) {
            Ok(Some(ledger)) => ledger,
            Ok(None) => {
                info!(path = %self.data_path.display(), "No ledger file yet, starting empty");
                Ledger::new()
            }
            Err(err) => {
                warn!(
                    path = %self.data_path.display(),
                    error = %err,
                    "Primary ledger unreadable, attempting backup recovery"
                );
                self.recover_from_backups()
            }
        }
    }

    /// Reads and parses one document file. `Ok(None)` means the file does
    /// not exist.
    fn try_load(&self, path: &Path) -> Result<Option<Ledger>, PersistenceError> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes: Vec<u8> =
            fs::read(path).map_err(|err| PersistenceError::ReadFailed(err.to_string()))?;
        let ledger: Ledger = serde_json::from_slice(&bytes)?;
        Ok(Some(ledger))
    }

    /// Walks backups newest-first and returns the first parseable one,
    /// re-persisting it as the new primary. Falls back to an empty ledger.
    fn recover_from_backups(&self) -> Ledger {
        let backups: Vec<BackupEntry> = self.list_backups().unwrap_or_else(|err| {
            warn!(error = %err, "Could not list backups during recovery");
            Vec::new()
        });

        for backup in backups {
            match self.try_load(&backup.path) {
                Ok(Some(ledger)) => {
                    info!(
                        backup = %backup.file_name,
                        "Recovered ledger from backup"
                    );
                    if let Err(err) = self.save(&ledger) {
                        warn!(
                            error = %err,
                            "Could not re-persist recovered ledger; continuing in memory"
                        );
                    }
                    return ledger;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        backup = %backup.file_name,
                        error = %err,
                        "Backup unreadable, trying next"
                    );
                }
            }
        }

        error!("No usable backup found, falling back to an empty ledger");
        Ledger::new()
    }

    /// Saves the ledger to primary storage.
    ///
    /// The document is written to a temporary sibling file and renamed
    /// over the primary, so the primary is never observed in a
    /// partially-written state.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::WriteFailed` if serialization or any
    /// filesystem step fails. The caller decides whether to retry or
    /// surface the failure.
    pub fn save(&self, ledger: &Ledger) -> Result<(), PersistenceError> {
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| PersistenceError::WriteFailed(err.to_string()))?;
        }

        let bytes: Vec<u8> = serde_json::to_vec_pretty(ledger)
            .map_err(|err| PersistenceError::WriteFailed(err.to_string()))?;
        let tmp_path: PathBuf = self.data_path.with_extension("tmp");
        fs::write(&tmp_path, bytes)
            .map_err(|err| PersistenceError::WriteFailed(err.to_string()))?;
        fs::rename(&tmp_path, &self.data_path)
            .map_err(|err| PersistenceError::WriteFailed(err.to_string()))?;
        Ok(())
    }

    /// Copies the current primary file into the backup directory and
    /// rotates old backups down to the retention count.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::PrimaryMissing` if there is no primary
    /// file (an empty backup is never created), or `BackupFailed` if the
    /// copy fails.
    pub fn create_backup(&self) -> Result<BackupEntry, PersistenceError> {
        if !self.data_path.exists() {
            return Err(PersistenceError::PrimaryMissing);
        }

        fs::create_dir_all(&self.backup_dir)
            .map_err(|err| PersistenceError::BackupFailed(err.to_string()))?;

        let created_at: OffsetDateTime = OffsetDateTime::now_utc();
        let file_name: String = backup_file_name(created_at)?;
        let path: PathBuf = self.backup_dir.join(&file_name);
        fs::copy(&self.data_path, &path)
            .map_err(|err| PersistenceError::BackupFailed(err.to_string()))?;

        info!(backup = %file_name, "Created backup");
        self.rotate_backups()?;

        Ok(BackupEntry {
            file_name,
            path,
            created_at,
        })
    }

    /// Deletes every backup beyond the retention count, oldest first.
    ///
    /// Returns the number of backups deleted. Individual deletion failures
    /// are logged and skipped so one stuck file cannot wedge rotation.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BackupFailed` if the backup directory
    /// cannot be listed.
    pub fn rotate_backups(&self) -> Result<usize, PersistenceError> {
        let backups: Vec<BackupEntry> = self.list_backups()?;
        let mut deleted: usize = 0;
        for stale in backups.iter().skip(self.max_backups) {
            match fs::remove_file(&stale.path) {
                Ok(()) => {
                    info!(backup = %stale.file_name, "Rotated out old backup");
                    deleted += 1;
                }
                Err(err) => {
                    warn!(
                        backup = %stale.file_name,
                        error = %err,
                        "Could not delete old backup"
                    );
                }
            }
        }
        Ok(deleted)
    }

    /// Lists retained backups, newest first.
    ///
    /// A missing backup directory reads as no backups. Files that do not
    /// carry a parseable timestamp name are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BackupFailed` if the directory exists
    /// but cannot be read.
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>, PersistenceError> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let dir = fs::read_dir(&self.backup_dir)
            .map_err(|err| PersistenceError::BackupFailed(err.to_string()))?;

        let mut backups: Vec<BackupEntry> = Vec::new();
        for entry in dir {
            let entry = entry.map_err(|err| PersistenceError::BackupFailed(err.to_string()))?;
            let file_name: String = entry.file_name().to_string_lossy().into_owned();
            if let Some(created_at) = parse_backup_file_name(&file_name) {
                backups.push(BackupEntry {
                    path: entry.path(),
                    file_name,
                    created_at,
                });
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    /// Overwrites the primary file with the named backup's bytes.
    ///
    /// The current primary is first snapshotted as a pre-restore copy;
    /// that snapshot is best-effort and its failure only logs a warning.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BackupNotFound` if no retained backup
    /// carries the given name, or `BackupFailed` if the copy fails.
    pub fn restore_from_backup(&self, file_name: &str) -> Result<(), PersistenceError> {
        let backup: BackupEntry = self
            .list_backups()?
            .into_iter()
            .find(|entry| entry.file_name == file_name)
            .ok_or_else(|| PersistenceError::BackupNotFound(file_name.to_string()))?;

        if self.data_path.exists() {
            if let Err(err) = self.snapshot_pre_restore() {
                warn!(error = %err, "Could not snapshot primary before restore");
            }
        }

        fs::copy(&backup.path, &self.data_path)
            .map_err(|err| PersistenceError::BackupFailed(err.to_string()))?;
        info!(backup = %file_name, "Restored ledger from backup");
        Ok(())
    }

    /// Copies the primary into the backup directory under the pre-restore
    /// prefix, outside the rotation set.
    fn snapshot_pre_restore(&self) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|err| PersistenceError::BackupFailed(err.to_string()))?;
        let timestamp: String = format_backup_timestamp(OffsetDateTime::now_utc())?;
        let snapshot: PathBuf = self
            .backup_dir
            .join(format!("{PRE_RESTORE_PREFIX}{timestamp}{BACKUP_SUFFIX}"));
        fs::copy(&self.data_path, &snapshot)
            .map_err(|err| PersistenceError::BackupFailed(err.to_string()))?;
        Ok(())
    }
}

/// Formats a timestamp for embedding in a backup file name.
fn format_backup_timestamp(moment: OffsetDateTime) -> Result<String, PersistenceError> {
    moment
        .format(BACKUP_TIMESTAMP)
        .map_err(|err| PersistenceError::BackupFailed(err.to_string()))
}

/// Builds a rotated backup file name for the given creation moment.
fn backup_file_name(created_at: OffsetDateTime) -> Result<String, PersistenceError> {
    let timestamp: String = format_backup_timestamp(created_at)?;
    Ok(format!("{BACKUP_PREFIX}{timestamp}{BACKUP_SUFFIX}"))
}

/// Parses a rotated backup file name back into its creation moment.
///
/// Returns `None` for files that are not rotated backups (including
/// pre-restore snapshots and unrelated files).
fn parse_backup_file_name(file_name: &str) -> Option<OffsetDateTime> {
    let timestamp: &str = file_name
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(BACKUP_SUFFIX)?;
    PrimitiveDateTime::parse(timestamp, BACKUP_TIMESTAMP)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
