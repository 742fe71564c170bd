// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use time::OffsetDateTime;

/// API request to credit a user one win in a rank.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddWinRequest {
    /// The user to credit.
    pub user_id: String,
    /// The rank name, resolved case-insensitively on the first letter.
    pub rank: String,
}

/// API response for a successful win credit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddWinResponse {
    /// The user credited.
    pub user_id: String,
    /// The resolved rank name.
    pub rank: String,
    /// The user's win count in that rank after the change.
    pub new_count: u32,
    /// A success message.
    pub message: String,
}

/// API request to debit a user one win in a rank.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoveWinRequest {
    /// The user to debit.
    pub user_id: String,
    /// The rank name.
    pub rank: String,
}

/// API response for a successful win removal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoveWinResponse {
    /// The user debited.
    pub user_id: String,
    /// The resolved rank name.
    pub rank: String,
    /// The user's win count in that rank after the change.
    pub new_count: u32,
    /// A success message.
    pub message: String,
}

/// API request to overwrite a user's win count in a rank.
///
/// The count is carried as a signed integer so that a negative value can
/// be rejected with a meaningful error instead of a deserialization
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetWinsRequest {
    /// The user whose count is overwritten.
    pub user_id: String,
    /// The rank name.
    pub rank: String,
    /// The new count. Must be zero or greater.
    pub wins: i64,
}

/// API response for a successful win-count overwrite.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetWinsResponse {
    /// The user whose count was overwritten.
    pub user_id: String,
    /// The resolved rank name.
    pub rank: String,
    /// The count after the change.
    pub new_count: u32,
    /// A success message.
    pub message: String,
}

/// API request to report a finished best-of-7 series.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordMatchRequest {
    /// The first player's identifier.
    pub player1_id: String,
    /// The first player's display name at report time.
    pub player1_name: String,
    /// The second player's identifier.
    pub player2_id: String,
    /// The second player's display name at report time.
    pub player2_name: String,
    /// The rank the series was played at.
    pub rank: String,
    /// The identifier of the winning player. Must match one of the two
    /// declared players.
    pub winner_id: String,
    /// Games won by the winner (1-7).
    pub winner_score: u8,
    /// Games won by the loser (0-6).
    pub loser_score: u8,
}

/// API response for a successfully recorded match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordMatchResponse {
    /// The appended match record.
    pub record: MatchInfo,
    /// The winner's win count in the match rank after the change.
    pub new_count: u32,
    /// A success message.
    pub message: String,
}

/// A single recorded match, shaped for responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchInfo {
    /// The first declared player's identifier.
    pub player1_id: String,
    /// The first declared player's display name.
    pub player1_name: String,
    /// The second declared player's identifier.
    pub player2_id: String,
    /// The second declared player's display name.
    pub player2_name: String,
    /// The rank the series was played at.
    pub rank: String,
    /// The winner's identifier.
    pub winner_id: String,
    /// The winner's display name.
    pub winner_name: String,
    /// The loser's identifier.
    pub loser_id: String,
    /// The loser's display name.
    pub loser_name: String,
    /// Games won by the winner.
    pub winner_score: u8,
    /// Games won by the loser.
    pub loser_score: u8,
    /// When the match was recorded, UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

/// One rank's win count within a stats or overview response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankWinsInfo {
    /// The rank name.
    pub rank: String,
    /// The user's win count in that rank.
    pub wins: u32,
}

/// API response for a single user's standing.
///
/// Every catalog rank appears exactly once, in catalog order, zero counts
/// included.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatsResponse {
    /// The user the stats describe.
    pub user_id: String,
    /// Per-rank win counts in catalog order.
    pub wins: Vec<RankWinsInfo>,
    /// The sum across all ranks.
    pub total: u32,
}

/// API request for a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeaderboardRequest {
    /// Restrict the board to one rank. Omitted means overall totals.
    pub rank: Option<String>,
    /// How many rows to return. Omitted means the default of ten.
    pub limit: Option<usize>,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeaderboardRowInfo {
    /// The 1-based position on the board.
    pub position: usize,
    /// The user occupying this position.
    pub user_id: String,
    /// The win count the position is ranked by.
    pub wins: u32,
}

/// API response for a leaderboard query.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeaderboardResponse {
    /// The rank the board was restricted to, if any.
    pub rank: Option<String>,
    /// The ordered rows, best first.
    pub rows: Vec<LeaderboardRowInfo>,
}

/// One row of the full-table overview.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OverviewRowInfo {
    /// The user the row describes.
    pub user_id: String,
    /// Per-rank win counts in catalog order.
    pub wins: Vec<RankWinsInfo>,
    /// The sum across all ranks.
    pub total: u32,
}

/// API response for the full-table overview.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OverviewResponse {
    /// Rows for every user with at least one win, highest total first.
    pub rows: Vec<OverviewRowInfo>,
}

/// API request for recent match history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchHistoryRequest {
    /// Restrict the history to matches involving one user.
    pub user_id: Option<String>,
    /// How many records to return. Omitted means the default of ten.
    pub limit: Option<usize>,
}

/// API response for a match-history query.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchHistoryResponse {
    /// Matching records, most recent first.
    pub matches: Vec<MatchInfo>,
}

/// API response for a manually requested backup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBackupResponse {
    /// The name of the backup file that was written.
    pub file_name: String,
    /// A success message.
    pub message: String,
}

/// One available backup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BackupInfo {
    /// The backup's file name.
    pub file_name: String,
    /// When the backup was created, UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// API response listing the available backups.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListBackupsResponse {
    /// Available backups, newest first.
    pub backups: Vec<BackupInfo>,
}

/// API request to roll the ledger back to a named backup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RestoreBackupRequest {
    /// The backup file name, as returned by the listing.
    pub file_name: String,
}

/// API response for a successful restore.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RestoreBackupResponse {
    /// A success message.
    pub message: String,
}
