// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::match_record::{MatchRecord, validate_loser_score, validate_winner_score};
use crate::rank::Rank;
use crate::types::{Participant, UserId};
use time::OffsetDateTime;
use time::macros::datetime;

fn alice() -> Participant {
    Participant::new(UserId::new("100"), "alice")
}

fn bob() -> Participant {
    Participant::new(UserId::new("200"), "bob")
}

fn recorded_at() -> OffsetDateTime {
    datetime!(2026-01-15 12:00:00 UTC)
}

#[test]
fn test_new_assigns_winner_and_loser_from_declared_outcome() {
    let record: MatchRecord = MatchRecord::new(
        alice(),
        bob(),
        Rank::Gold,
        &UserId::new("200"),
        4,
        2,
        recorded_at(),
    )
    .unwrap();

    assert_eq!(record.winner, bob());
    assert_eq!(record.loser, alice());
    assert_eq!(record.winner_score, 4);
    assert_eq!(record.loser_score, 2);
    assert_eq!(record.rank, Rank::Gold);
}

#[test]
fn test_new_rejects_winner_outside_participants() {
    let result: Result<MatchRecord, DomainError> = MatchRecord::new(
        alice(),
        bob(),
        Rank::Gold,
        &UserId::new("300"),
        4,
        2,
        recorded_at(),
    );

    assert_eq!(
        result.unwrap_err(),
        DomainError::InvalidWinner {
            winner: String::from("300"),
        }
    );
}

#[test]
fn test_new_accepts_incomplete_looking_score() {
    // A 1-0 result is accepted as a complete match; the relationship
    // between the scores is not a stored invariant.
    let record: MatchRecord = MatchRecord::new(
        alice(),
        bob(),
        Rank::Bronze,
        &UserId::new("100"),
        1,
        0,
        recorded_at(),
    )
    .unwrap();
    assert_eq!(record.winner_score, 1);
    assert_eq!(record.loser_score, 0);

    // Same for a loser score exceeding the winner's.
    let reversed: MatchRecord = MatchRecord::new(
        alice(),
        bob(),
        Rank::Bronze,
        &UserId::new("100"),
        2,
        5,
        recorded_at(),
    )
    .unwrap();
    assert_eq!(reversed.loser_score, 5);
}

#[test]
fn test_score_ranges_enforced_individually() {
    assert!(validate_winner_score(1).is_ok());
    assert!(validate_winner_score(7).is_ok());
    assert!(validate_winner_score(0).is_err());
    assert!(validate_winner_score(8).is_err());

    assert!(validate_loser_score(0).is_ok());
    assert!(validate_loser_score(6).is_ok());
    assert!(validate_loser_score(7).is_err());
}

#[test]
fn test_involves_matches_either_side() {
    let record: MatchRecord = MatchRecord::new(
        alice(),
        bob(),
        Rank::Gold,
        &UserId::new("100"),
        4,
        1,
        recorded_at(),
    )
    .unwrap();

    assert!(record.involves(&UserId::new("100")));
    assert!(record.involves(&UserId::new("200")));
    assert!(!record.involves(&UserId::new("300")));
}

#[test]
fn test_wire_format_field_names() {
    let record: MatchRecord = MatchRecord::new(
        alice(),
        bob(),
        Rank::Gold,
        &UserId::new("100"),
        4,
        1,
        recorded_at(),
    )
    .unwrap();

    let value: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["winnerScore"], 4);
    assert_eq!(value["loserScore"], 1);
    assert_eq!(value["date"], "2026-01-15T12:00:00Z");
    assert_eq!(value["player1"]["id"], "100");
    assert_eq!(value["player1"]["username"], "alice");
    assert_eq!(value["winner"]["id"], "100");
    assert_eq!(value["rank"], "Gold");
}

#[test]
fn test_wire_format_round_trip() {
    let record: MatchRecord = MatchRecord::new(
        alice(),
        bob(),
        Rank::Diamond,
        &UserId::new("200"),
        4,
        3,
        recorded_at(),
    )
    .unwrap();

    let json: String = serde_json::to_string(&record).unwrap();
    let parsed: MatchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}
