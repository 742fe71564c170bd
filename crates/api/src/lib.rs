// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Best-of-7 Score Ledger.
//!
//! Handlers in this crate orchestrate the full lifecycle of a request:
//! authorization, input translation into domain types, applying commands
//! to the ledger, persisting the result, and shaping a response DTO.
//! Callers never touch core or persistence types directly.

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

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_LEADERBOARD_LIMIT, add_win, create_backup, get_leaderboard,
    get_match_history, get_overview, get_stats, list_backups, record_match, remove_win,
    restore_backup, set_wins,
};
pub use request_response::{
    AddWinRequest, AddWinResponse, BackupInfo, CreateBackupResponse, LeaderboardRequest,
    LeaderboardResponse, LeaderboardRowInfo, ListBackupsResponse, MatchHistoryRequest,
    MatchHistoryResponse, MatchInfo, OverviewResponse, OverviewRowInfo, RankWinsInfo,
    RecordMatchRequest, RecordMatchResponse, RemoveWinRequest, RemoveWinResponse,
    RestoreBackupRequest, RestoreBackupResponse, SetWinsRequest, SetWinsResponse, StatsResponse,
};
