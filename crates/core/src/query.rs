// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::{Ledger, RankWins, WinTableEntry};
use score_ledger_domain::{MatchRecord, Rank, UserId};

/// Per-user stats: the full per-rank breakdown plus the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// The user the stats belong to.
    pub user: UserId,
    /// Per-rank win counts, zero-filled for untouched ranks.
    pub wins: RankWins,
    /// Sum of wins across all ranks.
    pub total: u32,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// The user.
    pub user: UserId,
    /// The win count the row is ranked by.
    pub wins: u32,
}

/// One overview row: a user's full breakdown plus total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    /// The user.
    pub user: UserId,
    /// Per-rank win counts.
    pub wins: RankWins,
    /// Sum of wins across all ranks.
    pub total: u32,
}

/// Reads a user's stats.
///
/// A user that has never been touched reads as all zeros; this is a pure
/// read and does not create a row.
#[must_use]
pub fn stats_for(ledger: &Ledger, user: &UserId) -> UserStats {
    let wins: RankWins = ledger.scores.get(user).copied().unwrap_or_default();
    UserStats {
        user: user.clone(),
        total: wins.total(),
        wins,
    }
}

/// Builds a leaderboard.
///
/// With `rank` given, users are ranked by that rank's count; otherwise by
/// the sum across all ranks. Users whose relevant count is zero are
/// excluded. The sort is descending and stable, so ties keep first-touch
/// order. The result is truncated to `top_n` rows.
#[must_use]
pub fn leaderboard(ledger: &Ledger, rank: Option<Rank>, top_n: usize) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = ledger
        .scores
        .iter()
        .map(|entry: &WinTableEntry| LeaderboardRow {
            user: entry.user.clone(),
            wins: rank.map_or_else(|| entry.wins.total(), |r| entry.wins.get(r)),
        })
        .filter(|row| row.wins > 0)
        .collect();

    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
    rows.truncate(top_n);
    rows
}

/// Builds the full overview: every user with a non-zero total, sorted by
/// total descending with the same stable tie-break as the leaderboard.
#[must_use]
pub fn overview(ledger: &Ledger) -> Vec<OverviewRow> {
    let mut rows: Vec<OverviewRow> = ledger
        .scores
        .iter()
        .map(|entry: &WinTableEntry| OverviewRow {
            user: entry.user.clone(),
            wins: entry.wins,
            total: entry.wins.total(),
        })
        .filter(|row| row.total > 0)
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Reads match history, newest first.
///
/// With `user` given, only matches the user participated in (either side)
/// are returned. The result is truncated to `limit` records.
#[must_use]
pub fn match_history(ledger: &Ledger, user: Option<&UserId>, limit: usize) -> Vec<MatchRecord> {
    let mut records: Vec<MatchRecord> = ledger
        .matches
        .iter()
        .filter(|record| user.is_none_or(|u| record.involves(u)))
        .cloned()
        .collect();

    records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    records.truncate(limit);
    records
}
