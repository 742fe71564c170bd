// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
/// Roles apply to actors (chat users driving the bot), never to the
/// players being tracked in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: actors with corrective authority over the ledger.
    ///
    /// Admins may:
    /// - add and remove wins directly
    /// - overwrite a win count
    /// - create, list, and restore backups
    Admin,
    /// Member role: ordinary actors.
    ///
    /// Members may report match results and run any read-only query.
    Member,
}

impl Role {
    /// Parses a role from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the value names no
    /// known role.
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        match value {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("unknown role '{other}'"),
            }),
        }
    }

    /// The wire representation of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents a chat user who has been authenticated and has
/// permission to perform certain actions based on their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Authenticates an actor from the identity asserted by the transport.
///
/// The chat platform has already verified who is speaking; this boundary
/// only rejects identities the platform should never hand us.
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the actor id is empty.
pub fn authenticate_stub(actor_id: &str, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("actor id must not be empty"),
        });
    }
    Ok(AuthenticatedActor::new(String::from(actor_id), role))
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific action based on their role.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to add a win directly.
    ///
    /// Only Admin actors may add wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_add_win(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "add_win")
    }

    /// Checks if an actor is authorized to remove a win.
    ///
    /// Only Admin actors may remove wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_remove_win(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "remove_win")
    }

    /// Checks if an actor is authorized to overwrite a win count.
    ///
    /// Only Admin actors may set win counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_set_wins(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "set_wins")
    }

    /// Checks if an actor is authorized to manage backups.
    ///
    /// Only Admin actors may create, list, or restore backups.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_manage_backups(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "manage_backups")
    }

    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Member => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Admin"),
            }),
        }
    }
}
