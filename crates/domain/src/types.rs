// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// An opaque user identifier assigned by the chat platform.
///
/// The ledger never interprets the identifier; display names are resolved
/// by the external identity provider and captured separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new user identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A match participant: identifier plus the display name captured at the
/// moment the match was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// The participant's user identifier.
    pub id: UserId,
    /// The display name at record time.
    pub username: String,
}

impl Participant {
    /// Creates a new participant.
    #[must_use]
    pub fn new(id: UserId, username: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
        }
    }
}
