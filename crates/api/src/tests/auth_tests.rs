// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{admin, member};
use crate::auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
use crate::error::AuthError;

#[test]
fn test_role_parse_known_values() {
    assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
    assert_eq!(Role::parse("member").unwrap(), Role::Member);
}

#[test]
fn test_role_parse_rejects_unknown_value() {
    let err: AuthError = Role::parse("owner").unwrap_err();
    assert_eq!(
        err,
        AuthError::AuthenticationFailed {
            reason: String::from("unknown role 'owner'"),
        }
    );
}

#[test]
fn test_role_round_trips_through_wire_form() {
    assert_eq!(Role::parse(Role::Admin.as_str()).unwrap(), Role::Admin);
    assert_eq!(Role::parse(Role::Member.as_str()).unwrap(), Role::Member);
}

#[test]
fn test_authenticate_stub_rejects_empty_id() {
    let err: AuthError = authenticate_stub("", Role::Member).unwrap_err();
    assert!(matches!(err, AuthError::AuthenticationFailed { .. }));
}

#[test]
fn test_authenticate_stub_accepts_identity() {
    let actor: AuthenticatedActor = authenticate_stub("42", Role::Admin).unwrap();
    assert_eq!(actor.id, "42");
    assert_eq!(actor.role, Role::Admin);
}

#[test]
fn test_admin_passes_every_authorization_gate() {
    let actor: AuthenticatedActor = admin();
    assert!(AuthorizationService::authorize_add_win(&actor).is_ok());
    assert!(AuthorizationService::authorize_remove_win(&actor).is_ok());
    assert!(AuthorizationService::authorize_set_wins(&actor).is_ok());
    assert!(AuthorizationService::authorize_manage_backups(&actor).is_ok());
}

#[test]
fn test_member_is_denied_with_action_name() {
    let actor: AuthenticatedActor = member();
    let err: AuthError = AuthorizationService::authorize_set_wins(&actor).unwrap_err();
    assert_eq!(
        err,
        AuthError::Unauthorized {
            action: String::from("set_wins"),
            required_role: String::from("Admin"),
        }
    );
    assert!(AuthorizationService::authorize_add_win(&actor).is_err());
    assert!(AuthorizationService::authorize_remove_win(&actor).is_err());
    assert!(AuthorizationService::authorize_manage_backups(&actor).is_err());
}
