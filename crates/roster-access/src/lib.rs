//! Access rules for the roster content backend.
//!
//! # Purpose
//! Decides, for a session handed over by the host CMS framework, whether a
//! create/query/update/delete on a list is permitted, and narrows reads and
//! updates to the caller's own row where the role requires it.
//!
//! # How it fits
//! The framework owns lists, fields, persistence, and session issuance. It
//! calls into [`AccessPolicy`] at each operation hook, field update hook, and
//! admin UI switch, and consumes the returned [`Decision`].
//!
//! # Key invariants
//! - No session means `Decision::Deny` for every guarded operation.
//! - Delete is admin-exclusive on the content lists (User, Post, Race) and Log.
//! - Evaluation is pure; nothing is cached between calls.
//!
//! # Important configuration
//! - `ROSTER_POLICY_GENERATION` / `ROSTER_CREATE_GATE` select the read/update
//!   semantics and the create path (see [`PolicyConfig`]).
//!
//! # Examples
//! ```rust
//! use roster_access::{AccessArgs, AccessPolicy, ListKey, Operation, Session};
//!
//! let session = Session::from_json(
//!     r#"{"itemId":"42","data":{"role":{"admin":false,"editor":false,"user":true}}}"#,
//! )
//! .unwrap();
//! let decision = AccessPolicy::default().operation(
//!     ListKey::User,
//!     Operation::Query,
//!     &AccessArgs::signed_in(&session),
//! );
//! assert_eq!(decision.to_value(), serde_json::json!({"id": {"equals": "42"}}));
//! ```
//!
//! # Common pitfalls
//! - `rules::can_create` denies admins; it is also the "hide create" flag.
//!   Switch to [`CreateGate::Open`] for the open create path.

mod config;
mod decision;
mod errors;
mod operation;
pub mod permissions;
mod policy;
mod role;
pub mod rules;
mod schema;
mod session;

pub use config::{ENV_CONFIG_PATH, ENV_CREATE_GATE, ENV_GENERATION, PolicyConfig};
pub use decision::{Decision, ItemFilter};
pub use errors::{AccessError, AccessResult};
pub use operation::Operation;
pub use policy::{AccessPolicy, CreateGate, PolicyGeneration};
pub use role::Role;
pub use schema::{ListKey, Rule};
pub use session::{AccessArgs, ItemId, Session, SessionData};
