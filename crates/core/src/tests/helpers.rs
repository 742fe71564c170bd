// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::state::Ledger;
use score_ledger_domain::{Participant, Rank, UserId};

pub fn alice() -> UserId {
    UserId::new("100")
}

pub fn bob() -> UserId {
    UserId::new("200")
}

pub fn with_wins(ledger: Ledger, user: &UserId, rank: Rank, wins: u32) -> Ledger {
    let result = apply(
        &ledger,
        Command::SetWins {
            user: user.clone(),
            rank,
            wins,
        },
    )
    .expect("set_wins cannot fail");
    result.new_ledger
}

pub fn record_match_command(winner: &UserId) -> Command {
    Command::RecordMatch {
        player1: Participant::new(alice(), "alice"),
        player2: Participant::new(bob(), "bob"),
        rank: Rank::Gold,
        winner: winner.clone(),
        winner_score: 4,
        loser_score: 2,
    }
}
