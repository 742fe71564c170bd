// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A named skill tier.
///
/// The catalog is fixed and ordered; the declaration order below is the
/// display and default-initialization order everywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Bronze tier.
    Bronze,
    /// Silver tier.
    Silver,
    /// Gold tier.
    Gold,
    /// Platinum tier.
    Platinum,
    /// Diamond tier.
    Diamond,
    /// Champion tier.
    Champion,
    /// Grand Champion tier.
    GrandChampion,
    /// Super Sonic Legend tier.
    SuperSonicLegend,
}

impl Rank {
    /// Number of ranks in the catalog.
    pub const COUNT: usize = 8;

    /// The full catalog in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
        Self::Diamond,
        Self::Champion,
        Self::GrandChampion,
        Self::SuperSonicLegend,
    ];

    /// Converts this rank to its catalog name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
            Self::Champion => "Champion",
            Self::GrandChampion => "Grand Champion",
            Self::SuperSonicLegend => "Super Sonic Legend",
        }
    }

    /// The position of this rank within the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a rank by its exact catalog name.
    ///
    /// This is the membership test used for stored documents, where names
    /// are always written exactly as the catalog declares them.
    #[must_use]
    pub fn from_exact(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rank| rank.as_str() == name)
    }

    /// Parses user-supplied input into a rank.
    ///
    /// The input is case-normalized (first character uppercased, remainder
    /// lowercased) before the catalog membership test. Multi-word catalog
    /// names carry interior capitals that normalization erases, so they
    /// never match here; they are reachable only through stored documents
    /// via [`Self::from_exact`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRank` if the normalized input is not a
    /// catalog member.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized: String = normalize(input);
        Self::from_exact(&normalized).ok_or_else(|| DomainError::InvalidRank(input.to_string()))
    }

    /// All catalog names joined for display, e.g. in error messages.
    #[must_use]
    pub fn catalog_names() -> String {
        Self::ALL
            .iter()
            .map(|rank| rank.as_str())
            .collect::<Vec<&'static str>>()
            .join(", ")
    }
}

/// Uppercases the first character and lowercases the remainder.
fn normalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut normalized: String = first.to_uppercase().collect();
        normalized.push_str(&chars.as_str().to_lowercase());
        normalized
    })
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name: String = String::deserialize(deserializer)?;
        Self::from_exact(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown rank '{name}'")))
    }
}
