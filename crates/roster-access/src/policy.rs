//! Policy evaluator consumed by the host framework's access hooks.
//!
//! # Purpose
//! Evaluates the rule wired to a list operation, a field update, or an admin
//! UI switch under the configured policy generation.
//!
//! # How it fits
//! The framework calls one method per hook with the request's session and,
//! for item-level checks, the target row. The evaluator holds no state beyond
//! its two configuration switches and is `Copy`, so it can be shared across
//! concurrent requests without synchronisation.
//!
//! # Key invariants
//! - Anonymous callers are denied every operation under every configuration.
//! - Field updates are the conjunction of the field rule and the list's update
//!   rule; the stricter one wins.
//!
//! # Examples
//! ```rust
//! use roster_access::{AccessArgs, AccessPolicy, Decision, ListKey, Operation, Role, Session};
//!
//! let policy = AccessPolicy::default();
//! let editor = Session::new("5", Role::Editor);
//! let args = AccessArgs::signed_in(&editor);
//! assert_eq!(policy.operation(ListKey::Post, Operation::Query, &args), Decision::Allow);
//! assert_eq!(policy.operation(ListKey::Post, Operation::Delete, &args), Decision::Deny);
//! ```
use crate::rules;
use crate::{AccessArgs, AccessError, Decision, ListKey, Operation, Rule};
use serde::{Deserialize, Serialize};

/// Which read/update semantics are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyGeneration {
    /// Admins and editors see everything; others only their own row.
    #[default]
    RoleScoped,
    /// Any signed-in caller may read and update.
    SignedIn,
}

impl PolicyGeneration {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyGeneration::RoleScoped => "role_scoped",
            PolicyGeneration::SignedIn => "signed_in",
        }
    }
}

impl std::str::FromStr for PolicyGeneration {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "role_scoped" => Ok(PolicyGeneration::RoleScoped),
            "signed_in" => Ok(PolicyGeneration::SignedIn),
            _ => Err(AccessError::InvalidGeneration(value.to_string())),
        }
    }
}

impl std::fmt::Display for PolicyGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How `Rule::CanCreate` call sites are evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateGate {
    /// Evaluate [`rules::can_create`] as written, admins included.
    #[default]
    Rule,
    /// Any signed-in caller may create.
    Open,
}

impl CreateGate {
    pub fn as_str(self) -> &'static str {
        match self {
            CreateGate::Rule => "rule",
            CreateGate::Open => "open",
        }
    }
}

impl std::str::FromStr for CreateGate {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "rule" => Ok(CreateGate::Rule),
            "open" => Ok(CreateGate::Open),
            _ => Err(AccessError::InvalidCreateGate(value.to_string())),
        }
    }
}

impl std::fmt::Display for CreateGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    pub generation: PolicyGeneration,
    pub create_gate: CreateGate,
}

impl AccessPolicy {
    pub fn new(generation: PolicyGeneration, create_gate: CreateGate) -> Self {
        Self {
            generation,
            create_gate,
        }
    }

    /// Evaluate a named rule under this policy's switches.
    pub fn evaluate(&self, rule: Rule, args: &AccessArgs<'_>) -> Decision {
        if args.session.is_none() {
            tracing::trace!(?rule, "anonymous caller denied");
            return Decision::Deny;
        }
        match rule {
            Rule::SignedIn => rules::signed_in_only(args),
            Rule::AdminOnly => rules::admin_only(args),
            Rule::AdminOrEditor => rules::admin_or_editor(args),
            Rule::CanCreate => match self.create_gate {
                CreateGate::Rule => rules::can_create(args),
                CreateGate::Open => rules::signed_in_only(args),
            },
            Rule::CanRead => match self.generation {
                PolicyGeneration::RoleScoped => rules::can_read(args),
                PolicyGeneration::SignedIn => rules::signed_in_only(args),
            },
            Rule::CanUpdate => match self.generation {
                PolicyGeneration::RoleScoped => rules::can_update(args),
                PolicyGeneration::SignedIn => rules::signed_in_only(args),
            },
            Rule::CanDelete => rules::can_delete(args),
        }
    }

    /// Decision for an operation hook on a list.
    pub fn operation(&self, list: ListKey, operation: Operation, args: &AccessArgs<'_>) -> Decision {
        let rule = list.operation_rule(operation);
        let decision = self.evaluate(rule, args);
        tracing::debug!(
            list = %list,
            operation = %operation,
            ?rule,
            decision = %decision,
            "operation access evaluated"
        );
        decision
    }

    /// Decision for writing a single field; both the field gate and the
    /// list's update gate must pass.
    pub fn field_update(&self, list: ListKey, field: &str, args: &AccessArgs<'_>) -> Decision {
        let list_decision = self.evaluate(list.operation_rule(Operation::Update), args);
        let decision = match list.field_rule(field) {
            Some(rule) => self.evaluate(rule, args).and(list_decision),
            None => list_decision,
        };
        tracing::debug!(
            list = %list,
            field,
            decision = %decision,
            "field update access evaluated"
        );
        decision
    }

    /// Resolve an operation against a concrete row.
    pub fn permits_item(&self, list: ListKey, operation: Operation, args: &AccessArgs<'_>) -> bool {
        self.operation(list, operation, args).permits(args.item_id)
    }

    /// Whether the admin UI hides the create button. The create rule's
    /// grant doubles as the "hidden" flag.
    pub fn hide_create(&self, list: ListKey, args: &AccessArgs<'_>) -> bool {
        if !list.has_ui_hooks() {
            return false;
        }
        rules::can_create(args).is_allowed()
    }

    /// Whether the admin UI hides the delete button.
    pub fn hide_delete(&self, list: ListKey, args: &AccessArgs<'_>) -> bool {
        if !list.has_ui_hooks() {
            return false;
        }
        !rules::can_delete(args).is_allowed()
    }

    pub fn is_hidden(&self, list: ListKey) -> bool {
        list.is_hidden()
    }
}
