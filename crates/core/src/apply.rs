// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Ledger, Outcome, TransitionResult};
use score_ledger_domain::{DomainError, MatchRecord};
use time::OffsetDateTime;

/// Applies a command to the ledger, producing a new ledger and an outcome.
///
/// The input ledger is never mutated; a failed command leaves no trace.
/// Match records are stamped with the current UTC time at the moment they
/// are appended.
///
/// # Arguments
///
/// * `ledger` - The current ledger (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if:
/// - A win removal targets a user/rank whose count is already zero
/// - A recorded match declares a winner that is not a participant
pub fn apply(ledger: &Ledger, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AddWin { user, rank } => {
            let mut new_ledger: Ledger = ledger.clone();
            let counts = new_ledger.scores.ensure(&user);
            let new_count: u32 = counts.get(rank) + 1;
            counts.set(rank, new_count);

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::WinAdded {
                    user,
                    rank,
                    new_count,
                },
            })
        }
        Command::RemoveWin { user, rank } => {
            let current: u32 = ledger.scores.get(&user).map_or(0, |wins| wins.get(rank));
            if current == 0 {
                return Err(CoreError::DomainViolation(DomainError::NothingToRemove {
                    user: user.value().to_string(),
                    rank: rank.as_str().to_string(),
                }));
            }

            let mut new_ledger: Ledger = ledger.clone();
            let counts = new_ledger.scores.ensure(&user);
            let new_count: u32 = current - 1;
            counts.set(rank, new_count);

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::WinRemoved {
                    user,
                    rank,
                    new_count,
                },
            })
        }
        Command::SetWins { user, rank, wins } => {
            let mut new_ledger: Ledger = ledger.clone();
            let counts = new_ledger.scores.ensure(&user);
            counts.set(rank, wins);

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::WinsSet {
                    user,
                    rank,
                    new_count: wins,
                },
            })
        }
        Command::RecordMatch {
            player1,
            player2,
            rank,
            winner,
            winner_score,
            loser_score,
        } => {
            let record: MatchRecord = MatchRecord::new(
                player1,
                player2,
                rank,
                &winner,
                winner_score,
                loser_score,
                OffsetDateTime::now_utc(),
            )
            .map_err(CoreError::DomainViolation)?;

            // Recording a match always credits the winner exactly one win.
            let mut new_ledger: Ledger = ledger.clone();
            let counts = new_ledger.scores.ensure(&winner);
            let new_count: u32 = counts.get(rank) + 1;
            counts.set(rank, new_count);
            new_ledger.matches.push(record.clone());

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::MatchRecorded { record, new_count },
            })
        }
    }
}
