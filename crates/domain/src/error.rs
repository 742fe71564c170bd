// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The supplied rank string is not a member of the catalog.
    InvalidRank(String),
    /// The declared winner is not one of the two match participants.
    InvalidWinner {
        /// The user identifier that was declared as the winner.
        winner: String,
    },
    /// A negative win count was requested.
    InvalidValue(i64),
    /// A decrement was attempted on a user/rank whose count is already zero.
    NothingToRemove {
        /// The user whose count was targeted.
        user: String,
        /// The rank whose count was targeted.
        rank: String,
    },
    /// A game-count score is outside its permitted range.
    InvalidScore {
        /// Which score field was invalid.
        field: &'static str,
        /// The supplied value.
        value: i64,
        /// The minimum permitted value.
        min: u8,
        /// The maximum permitted value.
        max: u8,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRank(input) => {
                write!(f, "Invalid rank '{input}'")
            }
            Self::InvalidWinner { winner } => {
                write!(f, "Winner '{winner}' is not one of the match participants")
            }
            Self::InvalidValue(value) => {
                write!(f, "Invalid win count {value}: must be 0 or higher")
            }
            Self::NothingToRemove { user, rank } => {
                write!(f, "User '{user}' has no wins to remove in {rank}")
            }
            Self::InvalidScore {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Invalid {field} {value}: must be between {min} and {max}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
