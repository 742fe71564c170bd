// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{add_win_request, admin, member, record_match_request, temp_store};
use crate::error::ApiError;
use crate::handlers::{add_win, get_stats, list_backups, record_match, remove_win, set_wins};
use crate::request_response::{
    AddWinResponse, RecordMatchResponse, RemoveWinRequest, RemoveWinResponse, SetWinsRequest,
    SetWinsResponse, StatsResponse,
};
use score_ledger_persistence::FileStore;

#[test]
fn test_add_win_persists_and_reports_new_count() {
    let store: FileStore = temp_store();
    let first: AddWinResponse = add_win(&store, &add_win_request("100", "Gold"), &admin()).unwrap();
    assert_eq!(first.new_count, 1);

    let second: AddWinResponse =
        add_win(&store, &add_win_request("100", "Gold"), &admin()).unwrap();
    assert_eq!(second.new_count, 2);
    assert_eq!(second.rank, "Gold");

    // A fresh read-only query observes the persisted count.
    let stats: StatsResponse = get_stats(&store, "100");
    assert_eq!(stats.total, 2);
}

#[test]
fn test_add_win_requires_admin() {
    let store: FileStore = temp_store();
    let err: ApiError = add_win(&store, &add_win_request("100", "Gold"), &member()).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(get_stats(&store, "100").total, 0);
}

#[test]
fn test_add_win_rejects_unknown_rank_with_catalog() {
    let store: FileStore = temp_store();
    let err: ApiError = add_win(&store, &add_win_request("100", "Wood"), &admin()).unwrap_err();
    match err {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "rank");
            assert!(message.contains("Wood"));
            assert!(message.contains("Super Sonic Legend"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_remove_win_round_trip() {
    let store: FileStore = temp_store();
    add_win(&store, &add_win_request("100", "Diamond"), &admin()).unwrap();

    let response: RemoveWinResponse = remove_win(
        &store,
        &RemoveWinRequest {
            user_id: String::from("100"),
            rank: String::from("Diamond"),
        },
        &admin(),
    )
    .unwrap();
    assert_eq!(response.new_count, 0);
    assert_eq!(get_stats(&store, "100").total, 0);
}

#[test]
fn test_remove_win_from_empty_count_is_a_rule_violation() {
    let store: FileStore = temp_store();
    let err: ApiError = remove_win(
        &store,
        &RemoveWinRequest {
            user_id: String::from("100"),
            rank: String::from("Bronze"),
        },
        &admin(),
    )
    .unwrap_err();
    match err {
        ApiError::DomainRuleViolation { rule, .. } => assert_eq!(rule, "nothing_to_remove"),
        other => panic!("expected DomainRuleViolation, got {other:?}"),
    }
}

#[test]
fn test_set_wins_overwrites_count() {
    let store: FileStore = temp_store();
    let response: SetWinsResponse = set_wins(
        &store,
        &SetWinsRequest {
            user_id: String::from("300"),
            rank: String::from("Platinum"),
            wins: 7,
        },
        &admin(),
    )
    .unwrap();
    assert_eq!(response.new_count, 7);
    assert_eq!(get_stats(&store, "300").total, 7);
}

#[test]
fn test_set_wins_rejects_negative_count() {
    let store: FileStore = temp_store();
    let err: ApiError = set_wins(
        &store,
        &SetWinsRequest {
            user_id: String::from("300"),
            rank: String::from("Platinum"),
            wins: -1,
        },
        &admin(),
    )
    .unwrap_err();
    match err {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "wins");
            assert!(message.contains("negative"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_record_match_allowed_for_members() {
    let store: FileStore = temp_store();
    let response: RecordMatchResponse = record_match(
        &store,
        &record_match_request("100", "200", "Champion", 4, 3),
        &member(),
    )
    .unwrap();

    assert_eq!(response.new_count, 1);
    assert_eq!(response.record.winner_id, "100");
    assert_eq!(response.record.loser_id, "200");
    assert_eq!(response.record.winner_score, 4);
    assert_eq!(response.record.loser_score, 3);
    assert!(response.message.contains("defeated"));

    // Only the winner is credited.
    assert_eq!(get_stats(&store, "100").total, 1);
    assert_eq!(get_stats(&store, "200").total, 0);
}

#[test]
fn test_record_match_rejects_outside_winner() {
    let store: FileStore = temp_store();
    let mut request = record_match_request("100", "200", "Gold", 4, 0);
    request.winner_id = String::from("999");

    let err: ApiError = record_match(&store, &request, &member()).unwrap_err();
    match err {
        ApiError::DomainRuleViolation { rule, .. } => {
            assert_eq!(rule, "winner_must_participate");
        }
        other => panic!("expected DomainRuleViolation, got {other:?}"),
    }
    assert_eq!(get_stats(&store, "100").total, 0);
}

#[test]
fn test_record_match_rejects_out_of_range_scores() {
    let store: FileStore = temp_store();

    let zero_winner = record_match_request("100", "200", "Gold", 0, 0);
    assert!(matches!(
        record_match(&store, &zero_winner, &member()).unwrap_err(),
        ApiError::InvalidInput { .. }
    ));

    let high_loser = record_match_request("100", "200", "Gold", 4, 7);
    assert!(matches!(
        record_match(&store, &high_loser, &member()).unwrap_err(),
        ApiError::InvalidInput { .. }
    ));
}

#[test]
fn test_successful_mutation_takes_a_backup() {
    let store: FileStore = temp_store();
    add_win(&store, &add_win_request("100", "Gold"), &admin()).unwrap();

    let listed = list_backups(&store, &admin()).unwrap();
    assert_eq!(listed.backups.len(), 1);
}
