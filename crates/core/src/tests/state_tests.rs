// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{alice, bob};
use crate::state::{Ledger, RankWins, WinTable};
use score_ledger_domain::{Rank, UserId};

#[test]
fn test_ensure_is_idempotent_and_zero_initializes() {
    let mut table: WinTable = WinTable::new();
    table.ensure(&alice()).set(Rank::Gold, 2);
    table.ensure(&alice());

    assert_eq!(table.len(), 1);
    let wins: &RankWins = table.get(&alice()).unwrap();
    assert_eq!(wins.get(Rank::Gold), 2);
    for rank in Rank::ALL {
        if rank != Rank::Gold {
            assert_eq!(wins.get(rank), 0);
        }
    }
}

#[test]
fn test_win_table_preserves_first_touch_order() {
    let mut table: WinTable = WinTable::new();
    table.ensure(&bob());
    table.ensure(&alice());
    table.ensure(&bob());

    let order: Vec<&str> = table.iter().map(|entry| entry.user.value()).collect();
    assert_eq!(order, vec!["200", "100"]);
}

#[test]
fn test_win_table_serializes_as_object_in_first_touch_order() {
    let mut table: WinTable = WinTable::new();
    table.ensure(&bob()).set(Rank::Gold, 1);
    table.ensure(&alice());

    let json: String = serde_json::to_string(&table).unwrap();
    // Keys appear in first-touch order, every rank written explicitly.
    assert!(json.starts_with("{\"200\":{\"Bronze\":0"));
    assert!(json.contains("\"Gold\":1"));

    let parsed: WinTable = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, table);
}

#[test]
fn test_rank_wins_deserialize_defaults_missing_ranks() {
    let wins: RankWins = serde_json::from_str("{\"Gold\": 4}").unwrap();
    assert_eq!(wins.get(Rank::Gold), 4);
    assert_eq!(wins.get(Rank::Bronze), 0);
    assert_eq!(wins.total(), 4);
}

#[test]
fn test_rank_wins_deserialize_rejects_unknown_rank() {
    let result: Result<RankWins, serde_json::Error> = serde_json::from_str("{\"Iron\": 4}");
    assert!(result.is_err());
}

#[test]
fn test_rank_wins_deserialize_rejects_negative_count() {
    let result: Result<RankWins, serde_json::Error> = serde_json::from_str("{\"Gold\": -1}");
    assert!(result.is_err());
}

#[test]
fn test_ledger_defaults_missing_document_fields() {
    // Older documents carried only "scores".
    let ledger: Ledger =
        serde_json::from_str("{\"scores\": {\"100\": {\"Gold\": 2}}}").unwrap();
    assert_eq!(ledger.scores.len(), 1);
    assert!(ledger.matches.is_empty());

    let empty: Ledger = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Ledger::new());
}

#[test]
fn test_ledger_document_round_trip() {
    let mut ledger: Ledger = Ledger::new();
    ledger.scores.ensure(&UserId::new("100")).set(Rank::Champion, 9);

    let json: String = serde_json::to_string_pretty(&ledger).unwrap();
    let parsed: Ledger = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ledger);
}
