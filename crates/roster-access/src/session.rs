//! Session view consumed by the access rules.
//!
//! # Purpose
//! Decodes the session object handed over by the host framework into a
//! typed, read-only [`Session`] and bundles it with an optional target row as
//! [`AccessArgs`].
//!
//! # How it fits
//! The framework issues one session per authenticated request. Rules only
//! read it; nothing here is cached or mutated across calls.
//!
//! # Key invariants
//! - Both role shapes (flattened `isAdmin`/`isEditor`/`isUser` flags and a
//!   nested `role` record) decode into one [`Role`].
//! - Missing `data`, role data, or flags decode to `Role::None`, never an error.
//! - A missing `itemId` is kept as absence; owner filters then deny.
//!
//! # Examples
//! ```rust
//! use roster_access::{Role, Session};
//!
//! let session = Session::from_json(r#"{"itemId":"42","data":{"isEditor":true}}"#).unwrap();
//! assert_eq!(session.role(), Role::Editor);
//! assert_eq!(session.item_id.as_ref().map(|id| id.as_str()), Some("42"));
//! ```
//!
//! # Common pitfalls
//! - When a nested `role` record is present the flattened flags are ignored;
//!   a deployment carries only one of the two shapes.
use crate::{AccessResult, Role};
use serde::{Deserialize, Deserializer, Serialize};

/// Row / principal identifier wrapper.
///
/// # Invariants
/// - The inner string is preserved exactly; numeric ids are kept in decimal.
///
/// # Example
/// ```rust
/// use roster_access::ItemId;
///
/// let id = ItemId::new("42");
/// assert_eq!(id.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Integer primary keys arrive as JSON numbers.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(value) => ItemId(value),
            Raw::Number(value) => ItemId(value.to_string()),
        })
    }
}

/// Projection of the signed-in principal carried in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub id: Option<ItemId>,
    pub name: String,
    pub role: Role,
}

/// Authenticated request context issued by the host framework.
///
/// # Summary
/// Holds the principal identifier, the list the identity was issued against,
/// and the decoded principal data.
///
/// # Example
/// ```rust
/// use roster_access::{Role, Session};
///
/// let session = Session::new("7", Role::Admin).with_name("Ada");
/// assert!(session.role() == Role::Admin);
/// assert_eq!(session.data.name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "SessionWire")]
pub struct Session {
    pub item_id: Option<ItemId>,
    pub list_key: String,
    pub data: SessionData,
}

impl Session {
    /// Build a session for a principal of the `User` list.
    pub fn new(item_id: impl Into<String>, role: Role) -> Self {
        let item_id = ItemId::new(item_id);
        Self {
            item_id: Some(item_id.clone()),
            list_key: "User".to_string(),
            data: SessionData {
                id: Some(item_id),
                name: String::new(),
                role,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.data.name = name.into();
        self
    }

    pub fn with_list_key(mut self, list_key: impl Into<String>) -> Self {
        self.list_key = list_key.into();
        self
    }

    /// Decode a session from the framework's JSON representation.
    ///
    /// # Errors
    /// - [`crate::AccessError::Session`] if the payload is not a JSON object
    ///   of the expected shape. Missing fields are not errors.
    pub fn from_json(raw: &str) -> AccessResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: serde_json::Value) -> AccessResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn role(&self) -> Role {
        self.data.role
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionWire {
    item_id: Option<ItemId>,
    list_key: Option<String>,
    data: Option<SessionDataWire>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDataWire {
    id: Option<ItemId>,
    name: Option<String>,
    role: Option<RoleRecord>,
    is_admin: Option<bool>,
    is_editor: Option<bool>,
    is_user: Option<bool>,
    is_pending: Option<bool>,
}

#[derive(Default, Deserialize)]
struct RoleRecord {
    admin: Option<bool>,
    editor: Option<bool>,
    user: Option<bool>,
    pending: Option<bool>,
}

impl From<SessionWire> for Session {
    fn from(wire: SessionWire) -> Self {
        let data = wire.data.unwrap_or_default();
        let role = match data.role {
            Some(record) => Role::from_flags(
                record.admin.unwrap_or(false),
                record.editor.unwrap_or(false),
                record.user.unwrap_or(false),
                record.pending.unwrap_or(false),
            ),
            None => Role::from_flags(
                data.is_admin.unwrap_or(false),
                data.is_editor.unwrap_or(false),
                data.is_user.unwrap_or(false),
                data.is_pending.unwrap_or(false),
            ),
        };
        Self {
            item_id: wire.item_id,
            list_key: wire.list_key.unwrap_or_default(),
            data: SessionData {
                id: data.id,
                name: data.name.unwrap_or_default(),
                role,
            },
        }
    }
}

/// Arguments handed to every rule: the optional session and, for item-level
/// checks, the target row.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessArgs<'a> {
    pub session: Option<&'a Session>,
    pub item_id: Option<&'a ItemId>,
}

impl<'a> AccessArgs<'a> {
    pub fn new(session: Option<&'a Session>) -> Self {
        Self {
            session,
            item_id: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(session: &'a Session) -> Self {
        Self::new(Some(session))
    }

    pub fn for_item(mut self, item_id: &'a ItemId) -> Self {
        self.item_id = Some(item_id);
        self
    }

    pub fn role(&self) -> Option<Role> {
        self.session.map(Session::role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_role_record_decodes() {
        let session = Session::from_value(json!({
            "itemId": "42",
            "listKey": "User",
            "data": {
                "id": "42",
                "name": "Kira",
                "role": { "id": "r1", "name": "Felhasználó", "admin": false, "editor": false, "user": true }
            }
        }))
        .expect("session");
        assert_eq!(session.role(), Role::User);
        assert_eq!(session.list_key, "User");
        assert_eq!(session.data.name, "Kira");
        assert_eq!(session.item_id, Some(ItemId::new("42")));
    }

    #[test]
    fn flattened_flags_decode_to_same_role() {
        let nested = Session::from_value(json!({
            "itemId": "1",
            "data": { "role": { "editor": true } }
        }))
        .expect("nested");
        let flat = Session::from_value(json!({
            "itemId": "1",
            "data": { "isEditor": true, "isUser": true }
        }))
        .expect("flat");
        assert_eq!(nested.role(), Role::Editor);
        assert_eq!(flat.role(), nested.role());
    }

    #[test]
    fn missing_role_data_defaults_to_none() {
        let empty_data = Session::from_value(json!({ "itemId": "3", "data": {} })).expect("empty");
        assert_eq!(empty_data.role(), Role::None);

        let no_data = Session::from_value(json!({ "itemId": "3" })).expect("no data");
        assert_eq!(no_data.role(), Role::None);
        assert_eq!(no_data.data.name, "");

        let null_role = Session::from_value(json!({
            "data": { "role": null, "isAdmin": null }
        }))
        .expect("nulls");
        assert_eq!(null_role.role(), Role::None);
        assert_eq!(null_role.item_id, None);
    }

    #[test]
    fn numeric_item_ids_are_kept_as_text() {
        let session = Session::from_value(json!({ "itemId": 42, "data": {} })).expect("numeric");
        assert_eq!(session.item_id.as_ref().map(ItemId::as_str), Some("42"));
    }

    #[test]
    fn non_object_payload_is_an_error() {
        assert!(Session::from_json("[1, 2]").is_err());
        assert!(Session::from_json("not json").is_err());
    }

    #[test]
    fn access_args_builders() {
        let session = Session::new("9", Role::Pending);
        let target = ItemId::new("10");
        let args = AccessArgs::signed_in(&session).for_item(&target);
        assert_eq!(args.role(), Some(Role::Pending));
        assert_eq!(args.item_id, Some(&target));
        assert_eq!(AccessArgs::anonymous().role(), None);
    }
}
