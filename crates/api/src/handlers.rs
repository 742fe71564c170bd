// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Mutating handlers run a full read-mutate-write cycle against the file
//! store: load the ledger, apply a command, persist the transitioned
//! ledger. Nothing in this crate holds ledger state between calls.

use score_ledger::{
    Command, Ledger, Outcome, RankWins, TransitionResult, UserStats, apply, leaderboard,
    match_history, overview, stats_for,
};
use score_ledger_domain::{DomainError, MatchRecord, Participant, Rank, UserId};
use score_ledger_persistence::{BackupEntry, FileStore};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddWinRequest, AddWinResponse, BackupInfo, CreateBackupResponse, LeaderboardRequest,
    LeaderboardResponse, LeaderboardRowInfo, ListBackupsResponse, MatchHistoryRequest,
    MatchHistoryResponse, MatchInfo, OverviewResponse, OverviewRowInfo, RankWinsInfo,
    RecordMatchRequest, RecordMatchResponse, RemoveWinRequest, RemoveWinResponse,
    RestoreBackupRequest, RestoreBackupResponse, SetWinsRequest, SetWinsResponse, StatsResponse,
};

/// Rows returned by a leaderboard query when the request names no limit.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Records returned by a history query when the request names no limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Credits a user one win in a rank via the API boundary.
///
/// Admin role required.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the rank name does not
/// resolve, or the ledger cannot be persisted.
pub fn add_win(
    store: &FileStore,
    request: &AddWinRequest,
    actor: &AuthenticatedActor,
) -> Result<AddWinResponse, ApiError> {
    AuthorizationService::authorize_add_win(actor)?;

    let rank: Rank = Rank::parse(&request.rank).map_err(translate_domain_error)?;
    let user: UserId = UserId::new(&request.user_id);

    let ledger: Ledger = store.load();
    let result: TransitionResult =
        apply(&ledger, Command::AddWin { user, rank }).map_err(translate_core_error)?;
    store.save(&result.new_ledger)?;
    opportunistic_backup(store);

    match result.outcome {
        Outcome::WinAdded {
            user,
            rank,
            new_count,
        } => Ok(AddWinResponse {
            user_id: user.value().to_string(),
            rank: rank.to_string(),
            new_count,
            message: format!("Added a {rank} win for {user}, now at {new_count}"),
        }),
        _ => Err(mismatched_outcome("add_win")),
    }
}

/// Debits a user one win in a rank via the API boundary.
///
/// Admin role required.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the rank name does not
/// resolve, the user has no wins in that rank, or the ledger cannot be
/// persisted.
pub fn remove_win(
    store: &FileStore,
    request: &RemoveWinRequest,
    actor: &AuthenticatedActor,
) -> Result<RemoveWinResponse, ApiError> {
    AuthorizationService::authorize_remove_win(actor)?;

    let rank: Rank = Rank::parse(&request.rank).map_err(translate_domain_error)?;
    let user: UserId = UserId::new(&request.user_id);

    let ledger: Ledger = store.load();
    let result: TransitionResult =
        apply(&ledger, Command::RemoveWin { user, rank }).map_err(translate_core_error)?;
    store.save(&result.new_ledger)?;
    opportunistic_backup(store);

    match result.outcome {
        Outcome::WinRemoved {
            user,
            rank,
            new_count,
        } => Ok(RemoveWinResponse {
            user_id: user.value().to_string(),
            rank: rank.to_string(),
            new_count,
            message: format!("Removed a {rank} win from {user}, now at {new_count}"),
        }),
        _ => Err(mismatched_outcome("remove_win")),
    }
}

/// Overwrites a user's win count in a rank via the API boundary.
///
/// Admin role required.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the rank name does not
/// resolve, the count is negative or too large, or the ledger cannot be
/// persisted.
pub fn set_wins(
    store: &FileStore,
    request: &SetWinsRequest,
    actor: &AuthenticatedActor,
) -> Result<SetWinsResponse, ApiError> {
    AuthorizationService::authorize_set_wins(actor)?;

    let rank: Rank = Rank::parse(&request.rank).map_err(translate_domain_error)?;
    if request.wins < 0 {
        return Err(translate_domain_error(DomainError::InvalidValue(
            request.wins,
        )));
    }
    let wins: u32 = u32::try_from(request.wins).map_err(|_| ApiError::InvalidInput {
        field: String::from("wins"),
        message: format!("Win count {} is too large", request.wins),
    })?;
    let user: UserId = UserId::new(&request.user_id);

    let ledger: Ledger = store.load();
    let result: TransitionResult =
        apply(&ledger, Command::SetWins { user, rank, wins }).map_err(translate_core_error)?;
    store.save(&result.new_ledger)?;
    opportunistic_backup(store);

    match result.outcome {
        Outcome::WinsSet {
            user,
            rank,
            new_count,
        } => Ok(SetWinsResponse {
            user_id: user.value().to_string(),
            rank: rank.to_string(),
            new_count,
            message: format!("Set {user}'s {rank} wins to {new_count}"),
        }),
        _ => Err(mismatched_outcome("set_wins")),
    }
}

/// Records a finished best-of-7 series and credits the winner one win.
///
/// Any authenticated actor may report a match.
///
/// # Errors
///
/// Returns an error if the rank name does not resolve, the declared
/// winner is not one of the two players, a score is out of range, or the
/// ledger cannot be persisted.
pub fn record_match(
    store: &FileStore,
    request: &RecordMatchRequest,
    _actor: &AuthenticatedActor,
) -> Result<RecordMatchResponse, ApiError> {
    let rank: Rank = Rank::parse(&request.rank).map_err(translate_domain_error)?;
    let command: Command = Command::RecordMatch {
        player1: Participant::new(UserId::new(&request.player1_id), &request.player1_name),
        player2: Participant::new(UserId::new(&request.player2_id), &request.player2_name),
        rank,
        winner: UserId::new(&request.winner_id),
        winner_score: request.winner_score,
        loser_score: request.loser_score,
    };

    let ledger: Ledger = store.load();
    let result: TransitionResult = apply(&ledger, command).map_err(translate_core_error)?;
    store.save(&result.new_ledger)?;
    opportunistic_backup(store);

    match result.outcome {
        Outcome::MatchRecorded { record, new_count } => {
            let message: String = format!(
                "{} defeated {} {}-{} at {}",
                record.winner.username,
                record.loser.username,
                record.winner_score,
                record.loser_score,
                record.rank
            );
            Ok(RecordMatchResponse {
                record: match_info(&record),
                new_count,
                message,
            })
        }
        _ => Err(mismatched_outcome("record_match")),
    }
}

/// Returns one user's standing across every rank, zero counts included.
#[must_use]
pub fn get_stats(store: &FileStore, user_id: &str) -> StatsResponse {
    let ledger: Ledger = store.load();
    let stats: UserStats = stats_for(&ledger, &UserId::new(user_id));
    StatsResponse {
        user_id: stats.user.value().to_string(),
        wins: rank_wins_info(&stats.wins),
        total: stats.total,
    }
}

/// Returns the ranked leaderboard, overall or restricted to one rank.
///
/// # Errors
///
/// Returns an error if the requested rank name does not resolve.
pub fn get_leaderboard(
    store: &FileStore,
    request: &LeaderboardRequest,
) -> Result<LeaderboardResponse, ApiError> {
    let rank: Option<Rank> = match &request.rank {
        Some(name) => Some(Rank::parse(name).map_err(translate_domain_error)?),
        None => None,
    };
    let limit: usize = request.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);

    let ledger: Ledger = store.load();
    let rows: Vec<LeaderboardRowInfo> = leaderboard(&ledger, rank, limit)
        .into_iter()
        .enumerate()
        .map(|(index, row)| LeaderboardRowInfo {
            position: index + 1,
            user_id: row.user.value().to_string(),
            wins: row.wins,
        })
        .collect();

    Ok(LeaderboardResponse {
        rank: rank.map(|r| r.to_string()),
        rows,
    })
}

/// Returns the full score table, one row per user with at least one win.
#[must_use]
pub fn get_overview(store: &FileStore) -> OverviewResponse {
    let ledger: Ledger = store.load();
    let rows: Vec<OverviewRowInfo> = overview(&ledger)
        .into_iter()
        .map(|row| OverviewRowInfo {
            user_id: row.user.value().to_string(),
            wins: rank_wins_info(&row.wins),
            total: row.total,
        })
        .collect();
    OverviewResponse { rows }
}

/// Returns recent matches, most recent first, optionally for one user.
#[must_use]
pub fn get_match_history(store: &FileStore, request: &MatchHistoryRequest) -> MatchHistoryResponse {
    let user: Option<UserId> = request.user_id.as_deref().map(UserId::new);
    let limit: usize = request.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    let ledger: Ledger = store.load();
    let matches: Vec<MatchInfo> = match_history(&ledger, user.as_ref(), limit)
        .iter()
        .map(match_info)
        .collect();
    MatchHistoryResponse { matches }
}

/// Takes a backup of the current ledger file on demand.
///
/// Admin role required.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the ledger has never
/// been written, or the copy fails.
pub fn create_backup(
    store: &FileStore,
    actor: &AuthenticatedActor,
) -> Result<CreateBackupResponse, ApiError> {
    AuthorizationService::authorize_manage_backups(actor)?;

    let entry: BackupEntry = store.create_backup()?;
    Ok(CreateBackupResponse {
        message: format!("Backup '{}' created", entry.file_name),
        file_name: entry.file_name,
    })
}

/// Lists the available backups, newest first.
///
/// Admin role required.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the backup directory
/// cannot be read.
pub fn list_backups(
    store: &FileStore,
    actor: &AuthenticatedActor,
) -> Result<ListBackupsResponse, ApiError> {
    AuthorizationService::authorize_manage_backups(actor)?;

    let backups: Vec<BackupInfo> = store
        .list_backups()?
        .into_iter()
        .map(|entry| BackupInfo {
            file_name: entry.file_name,
            created_at: entry.created_at,
        })
        .collect();
    Ok(ListBackupsResponse { backups })
}

/// Rolls the ledger back to a named backup.
///
/// Admin role required. The current ledger file is snapshotted before it
/// is overwritten.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, no backup with that
/// name exists, or the restore copy fails.
pub fn restore_backup(
    store: &FileStore,
    request: &RestoreBackupRequest,
    actor: &AuthenticatedActor,
) -> Result<RestoreBackupResponse, ApiError> {
    AuthorizationService::authorize_manage_backups(actor)?;

    store.restore_from_backup(&request.file_name)?;
    Ok(RestoreBackupResponse {
        message: format!("Ledger restored from '{}'", request.file_name),
    })
}

/// A backup taken after each successful mutation. Failure is logged and
/// swallowed so a full backup directory never blocks score keeping.
fn opportunistic_backup(store: &FileStore) {
    if let Err(err) = store.create_backup() {
        tracing::warn!("post-mutation backup failed: {err}");
    }
}

fn rank_wins_info(wins: &RankWins) -> Vec<RankWinsInfo> {
    Rank::ALL
        .iter()
        .map(|rank| RankWinsInfo {
            rank: rank.to_string(),
            wins: wins.get(*rank),
        })
        .collect()
}

fn match_info(record: &MatchRecord) -> MatchInfo {
    MatchInfo {
        player1_id: record.player1.id.value().to_string(),
        player1_name: record.player1.username.clone(),
        player2_id: record.player2.id.value().to_string(),
        player2_name: record.player2.username.clone(),
        rank: record.rank.to_string(),
        winner_id: record.winner.id.value().to_string(),
        winner_name: record.winner.username.clone(),
        loser_id: record.loser.id.value().to_string(),
        loser_name: record.loser.username.clone(),
        winner_score: record.winner_score,
        loser_score: record.loser_score,
        recorded_at: record.recorded_at,
    }
}

fn mismatched_outcome(handler: &str) -> ApiError {
    ApiError::Storage {
        message: format!("ledger transition produced a mismatched outcome in {handler}"),
    }
}
