// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use score_ledger_domain::{Participant, Rank, UserId};

/// A command represents caller intent as data only.
///
/// Commands are the only way to request ledger changes. Rank strings and
/// win-count values are validated at the API boundary before a command is
/// built, so commands always carry well-typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one win for a user in a rank.
    AddWin {
        /// The user to credit.
        user: UserId,
        /// The rank to credit the win in.
        rank: Rank,
    },
    /// Remove one win from a user in a rank.
    RemoveWin {
        /// The user to debit.
        user: UserId,
        /// The rank to remove the win from.
        rank: Rank,
    },
    /// Overwrite a user's win count in a rank.
    SetWins {
        /// The user whose count is set.
        user: UserId,
        /// The rank whose count is set.
        rank: Rank,
        /// The new count.
        wins: u32,
    },
    /// Record a completed best-of-7 match and credit the winner one win.
    ///
    /// Recording and crediting are not separable: every recorded match
    /// increments the winner's counter exactly once.
    RecordMatch {
        /// The first declared participant.
        player1: Participant,
        /// The second declared participant.
        player2: Participant,
        /// The rank the match was played at.
        rank: Rank,
        /// The declared winner; must be one of the two participants.
        winner: UserId,
        /// The winner's game count (1-7).
        winner_score: u8,
        /// The loser's game count (0-6).
        loser_score: u8,
    },
}
