// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading the primary document or a backup failed.
    ReadFailed(String),
    /// Writing the primary document failed.
    WriteFailed(String),
    /// The document bytes did not parse as a ledger.
    ParseFailed(String),
    /// A backup was requested but the primary file does not exist.
    PrimaryMissing,
    /// The named backup does not exist.
    BackupNotFound(String),
    /// Managing the backup directory failed.
    BackupFailed(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Read failed: {msg}"),
            Self::WriteFailed(msg) => write!(f, "Write failed: {msg}"),
            Self::ParseFailed(msg) => write!(f, "Parse failed: {msg}"),
            Self::PrimaryMissing => {
                write!(f, "Cannot create a backup: the primary file does not exist")
            }
            Self::BackupNotFound(name) => write!(f, "Backup '{name}' not found"),
            Self::BackupFailed(msg) => write!(f, "Backup operation failed: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailed(err.to_string())
    }
}
