//! Access decisions returned to the host framework.
//!
//! # Purpose
//! A rule either grants an operation outright, denies it, or grants it only
//! for rows owned by the caller. [`Decision`] makes the three outcomes
//! explicit instead of mixing booleans and filter objects.
//!
//! # Key invariants
//! - `AllowFiltered` always carries the caller's own identifier.
//! - Combining decisions never widens access: `Deny` dominates and two
//!   filters on different owners collapse to `Deny`.
//!
//! # Examples
//! ```rust
//! use roster_access::{Decision, ItemId};
//!
//! let owner = Decision::owned_by(ItemId::new("42"));
//! assert!(owner.permits(Some(&ItemId::new("42"))));
//! assert!(!owner.permits(Some(&ItemId::new("43"))));
//! assert_eq!(owner.to_value(), serde_json::json!({"id": {"equals": "42"}}));
//! ```
use crate::ItemId;
use serde::{Serialize, Serializer};

/// Row filter meaning "`id` equals the owner".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemFilter {
    pub owner: ItemId,
}

impl ItemFilter {
    pub fn new(owner: ItemId) -> Self {
        Self { owner }
    }

    pub fn matches(&self, item_id: &ItemId) -> bool {
        &self.owner == item_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    Deny,
    AllowFiltered(ItemFilter),
}

impl Decision {
    pub fn owned_by(owner: ItemId) -> Self {
        Decision::AllowFiltered(ItemFilter::new(owner))
    }

    /// True for both unconditional and filtered grants.
    pub fn is_allowed(&self) -> bool {
        !self.is_denied()
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Deny)
    }

    pub fn filter(&self) -> Option<&ItemFilter> {
        match self {
            Decision::AllowFiltered(filter) => Some(filter),
            _ => None,
        }
    }

    /// Resolve the decision against a concrete target row.
    ///
    /// # Returns
    /// - `true` when the row may be touched. A filtered grant without a target
    ///   row permits nothing.
    pub fn permits(&self, item_id: Option<&ItemId>) -> bool {
        match self {
            Decision::Allow => true,
            Decision::Deny => false,
            Decision::AllowFiltered(filter) => item_id.is_some_and(|id| filter.matches(id)),
        }
    }

    /// Conjunction of two checks that must both pass, e.g. a field-level
    /// rule and the list-level rule around it.
    pub fn and(self, other: Decision) -> Decision {
        match (self, other) {
            (Decision::Deny, _) | (_, Decision::Deny) => Decision::Deny,
            (Decision::Allow, other) => other,
            (this, Decision::Allow) => this,
            (Decision::AllowFiltered(left), Decision::AllowFiltered(right)) => {
                if left == right {
                    Decision::AllowFiltered(left)
                } else {
                    Decision::Deny
                }
            }
        }
    }

    /// Render in the shape the framework expects: `true`, `false`, or
    /// `{"id": {"equals": <owner>}}`.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Decision::Allow => serde_json::Value::Bool(true),
            Decision::Deny => serde_json::Value::Bool(false),
            Decision::AllowFiltered(filter) => {
                serde_json::json!({ "id": { "equals": filter.owner.as_str() } })
            }
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Deny => "deny",
            Decision::AllowFiltered(_) => "allow_filtered",
        }
    }
}

impl From<bool> for Decision {
    fn from(value: bool) -> Self {
        if value { Decision::Allow } else { Decision::Deny }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::AllowFiltered(filter) => write!(f, "allow(id = {})", filter.owner),
            other => f.write_str(other.as_label()),
        }
    }
}

impl Serialize for Decision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owner(id: &str) -> Decision {
        Decision::owned_by(ItemId::new(id))
    }

    #[test]
    fn wire_shapes() {
        assert_eq!(Decision::Allow.to_value(), json!(true));
        assert_eq!(Decision::Deny.to_value(), json!(false));
        assert_eq!(
            serde_json::to_value(owner("42")).expect("serialize"),
            json!({ "id": { "equals": "42" } })
        );
    }

    #[test]
    fn permits_resolves_filters_against_target() {
        let target = ItemId::new("7");
        assert!(Decision::Allow.permits(None));
        assert!(!Decision::Deny.permits(Some(&target)));
        assert!(owner("7").permits(Some(&target)));
        assert!(!owner("8").permits(Some(&target)));
        assert!(!owner("7").permits(None));
    }

    #[test]
    fn conjunction_never_widens() {
        assert_eq!(Decision::Allow.and(Decision::Allow), Decision::Allow);
        assert_eq!(Decision::Allow.and(Decision::Deny), Decision::Deny);
        assert_eq!(owner("1").and(Decision::Deny), Decision::Deny);
        assert_eq!(Decision::Allow.and(owner("1")), owner("1"));
        assert_eq!(owner("1").and(Decision::Allow), owner("1"));
        assert_eq!(owner("1").and(owner("1")), owner("1"));
        assert_eq!(owner("1").and(owner("2")), Decision::Deny);
    }

    #[test]
    fn from_bool_and_predicates() {
        assert_eq!(Decision::from(true), Decision::Allow);
        assert_eq!(Decision::from(false), Decision::Deny);
        assert!(owner("3").is_allowed());
        assert!(Decision::Deny.is_denied());
        assert_eq!(owner("3").filter().map(|f| f.owner.as_str()), Some("3"));
        assert_eq!(owner("3").to_string(), "allow(id = 3)");
    }
}
