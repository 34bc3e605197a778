//! Per-operation access rules.
//!
//! # Purpose
//! Pure functions mapping [`AccessArgs`] to a [`Decision`]. These are the
//! building blocks the list wiring in [`crate::schema`] refers to.
//!
//! # Key invariants
//! - An absent session is denied before any role is looked at.
//! - Admin is checked before Editor; owner filters compare the target row id
//!   with `session.item_id` only.
//!
//! # Common pitfalls
//! - [`can_create`] returns `Deny` for admins. The flag doubles as the
//!   "hide create" switch and is kept exactly as the list wiring consumes it.
use crate::permissions;
use crate::{AccessArgs, Decision};

/// Baseline gate: any signed-in caller.
pub fn signed_in_only(args: &AccessArgs<'_>) -> Decision {
    Decision::from(permissions::is_signed_in(args))
}

pub fn admin_only(args: &AccessArgs<'_>) -> Decision {
    Decision::from(permissions::is_admin(args))
}

pub fn admin_or_editor(args: &AccessArgs<'_>) -> Decision {
    Decision::from(permissions::admin(args) || permissions::editor(args))
}

/// Generic create path.
///
/// Anonymous: `Deny`. Admin: `Deny` (admins do not go through this path).
/// Everyone else: `Allow`.
pub fn can_create(args: &AccessArgs<'_>) -> Decision {
    if !permissions::is_signed_in(args) {
        return Decision::Deny;
    }
    if permissions::admin(args) {
        return Decision::Deny;
    }
    Decision::Allow
}

pub fn can_read(args: &AccessArgs<'_>) -> Decision {
    scoped_to_owner(args)
}

pub fn can_read_people(args: &AccessArgs<'_>) -> Decision {
    scoped_to_owner(args)
}

pub fn can_update(args: &AccessArgs<'_>) -> Decision {
    scoped_to_owner(args)
}

pub fn can_read_update(args: &AccessArgs<'_>) -> Decision {
    scoped_to_owner(args)
}

/// Delete is admin-exclusive.
pub fn can_delete(args: &AccessArgs<'_>) -> Decision {
    if !permissions::is_signed_in(args) {
        return Decision::Deny;
    }
    if permissions::admin(args) {
        return Decision::Allow;
    }
    Decision::Deny
}

fn scoped_to_owner(args: &AccessArgs<'_>) -> Decision {
    let Some(session) = args.session else {
        return Decision::Deny;
    };
    if permissions::admin(args) || permissions::editor(args) {
        return Decision::Allow;
    }
    // Without a principal id there is nothing to scope to.
    match &session.item_id {
        Some(owner) => Decision::owned_by(owner.clone()),
        None => Decision::Deny,
    }
}
