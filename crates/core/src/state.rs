// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use score_ledger_domain::{MatchRecord, Rank, UserId};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-user win counts, one slot per catalog rank.
///
/// Absent ranks are implicitly zero; the array is zero-initialized the
/// first time a user is touched and every rank is written out explicitly
/// when serialized, matching the stored document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankWins {
    counts: [u32; Rank::COUNT],
}

impl RankWins {
    /// Creates a zeroed counter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Rank::COUNT],
        }
    }

    /// The win count for a rank.
    #[must_use]
    pub const fn get(&self, rank: Rank) -> u32 {
        self.counts[rank.index()]
    }

    /// Overwrites the win count for a rank.
    pub const fn set(&mut self, rank: Rank, wins: u32) {
        self.counts[rank.index()] = wins;
    }

    /// The sum of wins across all ranks.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Serialize for RankWins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Rank::COUNT))?;
        for rank in Rank::ALL {
            map.serialize_entry(rank.as_str(), &self.get(rank))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RankWins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RankWinsVisitor;

        impl<'de> Visitor<'de> for RankWinsVisitor {
            type Value = RankWins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a map of rank names to non-negative win counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                // Missing ranks default to zero; unknown rank names are a
                // parse failure surfaced by Rank's own deserializer.
                let mut wins: RankWins = RankWins::new();
                while let Some((rank, count)) = access.next_entry::<Rank, u32>()? {
                    wins.set(rank, count);
                }
                Ok(wins)
            }
        }

        deserializer.deserialize_map(RankWinsVisitor)
    }
}

/// One user's row in the win table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinTableEntry {
    /// The user this row belongs to.
    pub user: UserId,
    /// The user's per-rank win counts.
    pub wins: RankWins,
}

/// All users' win counters, in first-touch order.
///
/// The backing `Vec` preserves the order in which users were first seen.
/// That order is the stable tie-break for leaderboard and overview sorting,
/// and it is the iteration order of the serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinTable {
    entries: Vec<WinTableEntry>,
}

impl WinTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The row for a user, if the user has been touched.
    #[must_use]
    pub fn get(&self, user: &UserId) -> Option<&RankWins> {
        self.entries
            .iter()
            .find(|entry| &entry.user == user)
            .map(|entry| &entry.wins)
    }

    /// The row for a user, creating a zeroed row on first touch.
    ///
    /// Idempotent: an existing row is returned untouched. Rows are never
    /// destroyed once created.
    pub fn ensure(&mut self, user: &UserId) -> &mut RankWins {
        let position: usize = match self.entries.iter().position(|entry| &entry.user == user) {
            Some(found) => found,
            None => {
                self.entries.push(WinTableEntry {
                    user: user.clone(),
                    wins: RankWins::new(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].wins
    }

    /// Iterates rows in first-touch order.
    pub fn iter(&self) -> std::slice::Iter<'_, WinTableEntry> {
        self.entries.iter()
    }

    /// Number of users that have been touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no user has been touched yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a WinTable {
    type Item = &'a WinTableEntry;
    type IntoIter = std::slice::Iter<'a, WinTableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for WinTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.user.value(), &entry.wins)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WinTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WinTableVisitor;

        impl<'de> Visitor<'de> for WinTableVisitor {
            type Value = WinTable;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a map of user identifiers to rank win counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                // Document order is first-touch order; preserve it.
                let mut entries: Vec<WinTableEntry> = Vec::new();
                while let Some((user, wins)) = access.next_entry::<UserId, RankWins>()? {
                    entries.push(WinTableEntry { user, wins });
                }
                Ok(WinTable { entries })
            }
        }

        deserializer.deserialize_map(WinTableVisitor)
    }
}

/// The aggregate root: all win counters plus the match history log.
///
/// Both fields default so that older documents carrying only `scores`
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Per-user per-rank win counters.
    #[serde(default)]
    pub scores: WinTable,
    /// The append-only match history, in insertion order.
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scores: WinTable::new(),
            matches: Vec::new(),
        }
    }
}

/// The result of a successful ledger transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects on the input ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new ledger after the transition.
    pub new_ledger: Ledger,
    /// What the transition did.
    pub outcome: Outcome,
}

/// What a successful transition did, for the caller's response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A win was added.
    WinAdded {
        /// The user credited.
        user: UserId,
        /// The rank the win was added in.
        rank: Rank,
        /// The user's count in that rank after the transition.
        new_count: u32,
    },
    /// A win was removed.
    WinRemoved {
        /// The user debited.
        user: UserId,
        /// The rank the win was removed in.
        rank: Rank,
        /// The user's count in that rank after the transition.
        new_count: u32,
    },
    /// A win count was overwritten.
    WinsSet {
        /// The user whose count was set.
        user: UserId,
        /// The rank the count was set in.
        rank: Rank,
        /// The count after the transition.
        new_count: u32,
    },
    /// A match was recorded and the winner credited one win.
    MatchRecorded {
        /// The appended record.
        record: MatchRecord,
        /// The winner's count in the match rank after the transition.
        new_count: u32,
    },
}
