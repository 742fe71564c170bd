// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, Role};
use crate::handlers::{add_win, record_match};
use crate::request_response::{AddWinRequest, RecordMatchRequest};
use score_ledger_persistence::FileStore;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique test directories.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `temp_store()` receives a unique sequential ID.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Creates a store rooted in a fresh, unique temporary directory.
pub fn temp_store() -> FileStore {
    let id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let root: PathBuf = std::env::temp_dir().join(format!(
        "score-ledger-api-test-{}-{id}",
        std::process::id()
    ));
    std::fs::create_dir_all(&root).expect("failed to create test directory");
    FileStore::new(&root.join("scores.json"), &root.join("backups"), 20)
}

pub fn admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-1"), Role::Admin)
}

pub fn member() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("member-1"), Role::Member)
}

pub fn add_win_request(user_id: &str, rank: &str) -> AddWinRequest {
    AddWinRequest {
        user_id: String::from(user_id),
        rank: String::from(rank),
    }
}

pub fn record_match_request(
    winner_id: &str,
    loser_id: &str,
    rank: &str,
    winner_score: u8,
    loser_score: u8,
) -> RecordMatchRequest {
    RecordMatchRequest {
        player1_id: String::from(winner_id),
        player1_name: format!("Player {winner_id}"),
        player2_id: String::from(loser_id),
        player2_name: format!("Player {loser_id}"),
        rank: String::from(rank),
        winner_id: String::from(winner_id),
        winner_score,
        loser_score,
    }
}

/// Seeds a store with a few wins and one recorded match.
pub fn seeded_store() -> FileStore {
    let store: FileStore = temp_store();
    let actor: AuthenticatedActor = admin();
    add_win(&store, &add_win_request("100", "Gold"), &actor).expect("seed add_win");
    add_win(&store, &add_win_request("100", "Gold"), &actor).expect("seed add_win");
    add_win(&store, &add_win_request("200", "Champion"), &actor).expect("seed add_win");
    record_match(
        &store,
        &record_match_request("100", "200", "Gold", 4, 2),
        &member(),
    )
    .expect("seed record_match");
    store
}
