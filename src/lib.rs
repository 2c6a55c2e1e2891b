//! # Scope Inspector
//!
//! Administrative inspector core for an authorization scope model: roles
//! and clients each carry a fully expanded list of permission scopes,
//! optionally terminated by a `*` wildcard. The crate provides the
//! scope-pattern matching engine, the derived scope universe, and a thin
//! session layer over an external authorization service.
//!
//! ## Example
//!
//! ```
//! use scope_inspector::scope::{MatchMode, ScopeIndex, ScopeMatcher, matching_roles};
//! use scope_inspector::types::{Client, Role};
//!
//! let roles = vec![
//!     Role::new("queue-admin").with_scope("queue:create-task:*"),
//!     Role::new("reader").with_scope("queue:view"),
//! ];
//! let clients = vec![Client::new("worker").with_scope("queue:view")];
//!
//! // The browsable scope universe: deduplicated and sorted.
//! let index = ScopeIndex::build(&roles, &clients);
//! assert_eq!(index.scopes(), ["queue:create-task:*", "queue:view"]);
//!
//! // Which roles cover a concrete scope?
//! let matcher = ScopeMatcher::new(MatchMode::HasScope, "queue:create-task:my-queue");
//! let covering = matching_roles(&roles, &matcher);
//! assert_eq!(covering.len(), 1);
//! assert_eq!(covering[0].role_id, "queue-admin");
//! ```

pub mod error;
pub mod inspector;
pub mod scope;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use error::{InspectorError, Result};
pub use inspector::{InspectorView, ScopeInspector};
pub use scope::{matching_clients, matching_entities, matching_roles, MatchMode, ScopeIndex, ScopeMatcher};
pub use service::{AuthService, InMemoryAuthService};
pub use types::{Client, ClientId, Entity, EntityRef, Role, RoleId};
