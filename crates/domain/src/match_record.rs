// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::rank::Rank;
use crate::types::Participant;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use time::OffsetDateTime;

/// Permitted range for the winner's game count in a best-of-7.
pub const WINNER_SCORE_RANGE: RangeInclusive<u8> = 1..=7;

/// Permitted range for the loser's game count in a best-of-7.
pub const LOSER_SCORE_RANGE: RangeInclusive<u8> = 0..=6;

/// An immutable log entry for one completed best-of-7 contest.
///
/// Records are append-only: once constructed and appended to the ledger
/// they are never mutated. The relationship between the two scores is
/// deliberately unconstrained (a 1-0 result is accepted as complete);
/// tightening that is a product decision, not a stored invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The first declared participant.
    pub player1: Participant,
    /// The second declared participant.
    pub player2: Participant,
    /// The rank the match was played at.
    pub rank: Rank,
    /// The winning participant.
    pub winner: Participant,
    /// The losing participant.
    pub loser: Participant,
    /// The winner's game count (1-7).
    #[serde(rename = "winnerScore")]
    pub winner_score: u8,
    /// The loser's game count (0-6).
    #[serde(rename = "loserScore")]
    pub loser_score: u8,
    /// The moment the record was appended, UTC.
    #[serde(rename = "date", with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl MatchRecord {
    /// Constructs a match record from the two participants and the declared
    /// outcome. The loser is computed as the participant that is not the
    /// winner.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWinner` if `winner_id` does not match
    /// either participant, or `DomainError::InvalidScore` if a score is
    /// outside its permitted range.
    pub fn new(
        player1: Participant,
        player2: Participant,
        rank: Rank,
        winner_id: &crate::types::UserId,
        winner_score: u8,
        loser_score: u8,
        recorded_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        validate_winner_score(winner_score)?;
        validate_loser_score(loser_score)?;

        let (winner, loser): (Participant, Participant) = if &player1.id == winner_id {
            (player1.clone(), player2.clone())
        } else if &player2.id == winner_id {
            (player2.clone(), player1.clone())
        } else {
            return Err(DomainError::InvalidWinner {
                winner: winner_id.value().to_string(),
            });
        };

        Ok(Self {
            player1,
            player2,
            rank,
            winner,
            loser,
            winner_score,
            loser_score,
            recorded_at,
        })
    }

    /// Whether the given user participated in this match, on either side.
    #[must_use]
    pub fn involves(&self, user: &crate::types::UserId) -> bool {
        &self.player1.id == user || &self.player2.id == user
    }
}

/// Validates the winner's game count.
///
/// # Errors
///
/// Returns `DomainError::InvalidScore` if the value is outside 1-7.
pub fn validate_winner_score(score: u8) -> Result<(), DomainError> {
    if WINNER_SCORE_RANGE.contains(&score) {
        Ok(())
    } else {
        Err(DomainError::InvalidScore {
            field: "winner score",
            value: i64::from(score),
            min: *WINNER_SCORE_RANGE.start(),
            max: *WINNER_SCORE_RANGE.end(),
        })
    }
}

/// Validates the loser's game count.
///
/// # Errors
///
/// Returns `DomainError::InvalidScore` if the value is outside 0-6.
pub fn validate_loser_score(score: u8) -> Result<(), DomainError> {
    if LOSER_SCORE_RANGE.contains(&score) {
        Ok(())
    } else {
        Err(DomainError::InvalidScore {
            field: "loser score",
            value: i64::from(score),
            min: *LOSER_SCORE_RANGE.start(),
            max: *LOSER_SCORE_RANGE.end(),
        })
    }
}
