// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::FileStore;
use score_ledger::Ledger;
use score_ledger_domain::{Rank, UserId};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique test directories.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `temp_store()` receives a unique sequential ID.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Creates a store rooted in a fresh, unique temporary directory.
pub fn temp_store(max_backups: usize) -> FileStore {
    let id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let root: PathBuf = std::env::temp_dir().join(format!(
        "score-ledger-test-{}-{id}",
        std::process::id()
    ));
    std::fs::create_dir_all(&root).expect("failed to create test directory");
    FileStore::new(&root.join("scores.json"), &root.join("backups"), max_backups)
}

/// A small non-empty ledger for round-trip tests.
pub fn sample_ledger() -> Ledger {
    let mut ledger: Ledger = Ledger::new();
    ledger.scores.ensure(&UserId::new("100")).set(Rank::Gold, 3);
    ledger
        .scores
        .ensure(&UserId::new("200"))
        .set(Rank::Champion, 1);
    ledger
}

/// Backups within one test must carry distinct timestamps.
pub fn settle() {
    std::thread::sleep(std::time::Duration::from_millis(5));
}
