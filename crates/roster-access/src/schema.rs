//! Rule wiring for every list the backend exposes.
//!
//! # Purpose
//! Records which rule guards each operation hook, field update, and admin UI
//! switch. The host framework owns the list and field definitions; this module
//! only names the rule attached at each call site.
//!
//! # Key invariants
//! - Every operation on every list has exactly one rule.
//! - Field rules are only listed for fields with their own update gate; all
//!   other fields fall back to the list's update rule.
//!
//! # Examples
//! ```rust
//! use roster_access::{ListKey, Operation, Rule};
//!
//! assert_eq!(ListKey::Log.operation_rule(Operation::Query), Rule::AdminOrEditor);
//! assert_eq!(ListKey::User.field_rule("race"), Some(Rule::AdminOnly));
//! assert_eq!(ListKey::User.field_rule("email"), None);
//! ```
use crate::{AccessError, Operation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKey {
    User,
    Post,
    Race,
    Tag,
    Log,
}

/// Named rule attached to a hook. Evaluated by [`crate::AccessPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    SignedIn,
    AdminOnly,
    AdminOrEditor,
    CanCreate,
    CanRead,
    CanUpdate,
    CanDelete,
}

impl ListKey {
    pub const ALL: [ListKey; 5] = [
        ListKey::User,
        ListKey::Post,
        ListKey::Race,
        ListKey::Tag,
        ListKey::Log,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListKey::User => "User",
            ListKey::Post => "Post",
            ListKey::Race => "Race",
            ListKey::Tag => "Tag",
            ListKey::Log => "Log",
        }
    }

    pub fn operation_rule(self, operation: Operation) -> Rule {
        match (self, operation) {
            (ListKey::User | ListKey::Post | ListKey::Race, Operation::Create) => Rule::CanCreate,
            (ListKey::User | ListKey::Post | ListKey::Race, Operation::Query) => Rule::CanRead,
            (ListKey::User | ListKey::Post | ListKey::Race, Operation::Update) => Rule::CanUpdate,
            (ListKey::User | ListKey::Post | ListKey::Race | ListKey::Log, Operation::Delete) => {
                Rule::CanDelete
            }
            (ListKey::Log, Operation::Create) => Rule::SignedIn,
            (ListKey::Log, Operation::Query) => Rule::AdminOrEditor,
            (ListKey::Log, Operation::Update) => Rule::AdminOnly,
            (ListKey::Tag, _) => Rule::SignedIn,
        }
    }

    /// Update gate of a single field, if the field carries its own.
    pub fn field_rule(self, field: &str) -> Option<Rule> {
        match (self, field) {
            (ListKey::User, "race" | "role" | "isAdmin" | "isEditor") => Some(Rule::AdminOnly),
            (ListKey::User, "name" | "isUser" | "isPending") => Some(Rule::CanUpdate),
            _ => None,
        }
    }

    /// Lists whose create/delete buttons are driven by the access rules.
    pub fn has_ui_hooks(self) -> bool {
        matches!(self, ListKey::User | ListKey::Race)
    }

    /// Lists kept out of the admin UI navigation entirely.
    pub fn is_hidden(self) -> bool {
        matches!(self, ListKey::Tag)
    }
}

impl std::fmt::Display for ListKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListKey {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ListKey::ALL
            .into_iter()
            .find(|list| list.as_str() == value)
            .ok_or_else(|| AccessError::UnknownList(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_key_parse() {
        for list in ListKey::ALL {
            assert_eq!(list.as_str().parse::<ListKey>().ok(), Some(list));
        }
        assert!("user".parse::<ListKey>().is_err());
        assert!("Comment".parse::<ListKey>().is_err());
    }

    #[test]
    fn content_lists_share_wiring() {
        for list in [ListKey::User, ListKey::Post, ListKey::Race] {
            assert_eq!(list.operation_rule(Operation::Create), Rule::CanCreate);
            assert_eq!(list.operation_rule(Operation::Query), Rule::CanRead);
            assert_eq!(list.operation_rule(Operation::Update), Rule::CanUpdate);
            assert_eq!(list.operation_rule(Operation::Delete), Rule::CanDelete);
        }
    }

    #[test]
    fn tag_and_log_wiring() {
        for operation in Operation::ALL {
            assert_eq!(ListKey::Tag.operation_rule(operation), Rule::SignedIn);
        }
        assert_eq!(ListKey::Log.operation_rule(Operation::Query), Rule::AdminOrEditor);
        assert_eq!(ListKey::Log.operation_rule(Operation::Delete), Rule::CanDelete);
        assert!(ListKey::Tag.is_hidden());
        assert!(!ListKey::Log.has_ui_hooks());
    }

    #[test]
    fn privileged_fields_are_admin_only() {
        for field in ["race", "role", "isAdmin", "isEditor"] {
            assert_eq!(ListKey::User.field_rule(field), Some(Rule::AdminOnly));
        }
        for field in ["name", "isUser", "isPending"] {
            assert_eq!(ListKey::User.field_rule(field), Some(Rule::CanUpdate));
        }
        assert_eq!(ListKey::Race.field_rule("name"), None);
    }
}
