//! Role predicates over the caller's session.
//!
//! Every predicate returns `false` for an anonymous caller or missing role
//! data, so they can be combined with `||` without further checks.
use crate::{AccessArgs, Role};

/// True iff a session is present.
pub fn is_signed_in(args: &AccessArgs<'_>) -> bool {
    args.session.is_some()
}

fn has_role(args: &AccessArgs<'_>, role: Role) -> bool {
    args.role() == Some(role)
}

pub fn admin(args: &AccessArgs<'_>) -> bool {
    has_role(args, Role::Admin)
}

pub fn editor(args: &AccessArgs<'_>) -> bool {
    has_role(args, Role::Editor)
}

pub fn user(args: &AccessArgs<'_>) -> bool {
    has_role(args, Role::User)
}

pub fn pending(args: &AccessArgs<'_>) -> bool {
    has_role(args, Role::Pending)
}

/// Single entry point for the admin / non-admin split used by privileged
/// fields (race and role assignment).
pub fn is_admin(args: &AccessArgs<'_>) -> bool {
    admin(args)
}
