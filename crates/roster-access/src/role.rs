//! Role model for signed-in principals.
//!
//! # Purpose
//! Replaces the loosely typed role flags carried in session data with one
//! tagged [`Role`] value.
//!
//! # Key invariants
//! - Every principal has exactly one role; `Role::None` covers missing data.
//! - Precedence when several flags are set is Admin > Editor > User > Pending.
//!
//! # Examples
//! ```rust
//! use roster_access::Role;
//!
//! let role = Role::from_flags(true, true, false, false);
//! assert_eq!(role, Role::Admin);
//! assert!(role.is_privileged());
//! ```
use crate::AccessError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Editor,
    User,
    Pending,
    #[default]
    None,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Editor,
        Role::User,
        Role::Pending,
        Role::None,
    ];

    /// Collapse independent role flags into a single role.
    ///
    /// # Parameters
    /// - `admin`, `editor`, `user`, `pending`: raw flags from session data.
    ///
    /// # Returns
    /// - The highest-precedence role whose flag is set, or `Role::None`.
    pub fn from_flags(admin: bool, editor: bool, user: bool, pending: bool) -> Self {
        if admin {
            Role::Admin
        } else if editor {
            Role::Editor
        } else if user {
            Role::User
        } else if pending {
            Role::Pending
        } else {
            Role::None
        }
    }

    /// Admins and editors see and edit every row of a list.
    pub fn is_privileged(self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::User => "user",
            Role::Pending => "pending",
            Role::None => "none",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "user" => Ok(Role::User),
            "pending" => Ok(Role::Pending),
            "none" => Ok(Role::None),
            _ => Err(AccessError::InvalidRole(value.to_string())),
        }
    }
}
