//! Core inspector types
//!
//! Roles and clients arrive from the authorization service as JSON with
//! camelCase field names and an already-expanded scope list; role-in-role
//! expansion happens upstream and is never repeated here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InspectorError;

/// Unique role identifier
pub type RoleId = String;

/// Unique client identifier
pub type ClientId = String;

/// Common view over roles and clients: a unique identifier plus the fully
/// expanded scope grant list. The inspector core only ever reads through
/// this trait.
pub trait Entity {
    /// Identifier used for sorting and navigation tokens
    fn id(&self) -> &str;

    /// Fully expanded scope grants (read-only)
    fn expanded_scopes(&self) -> &[String];
}

/// A role and its expanded scope grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role identifier
    pub role_id: RoleId,

    /// Expanded scopes granted to the role
    #[serde(default)]
    pub expanded_scopes: Vec<String>,
}

impl Role {
    /// Create a role with no scopes
    pub fn new(role_id: impl Into<RoleId>) -> Self {
        Self {
            role_id: role_id.into(),
            expanded_scopes: Vec::new(),
        }
    }

    /// Add a scope grant to the role
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.expanded_scopes.push(scope.into());
        self
    }
}

impl Entity for Role {
    fn id(&self) -> &str {
        &self.role_id
    }

    fn expanded_scopes(&self) -> &[String] {
        &self.expanded_scopes
    }
}

/// A client and its expanded scope grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Client identifier
    pub client_id: ClientId,

    /// Expanded scopes granted to the client
    #[serde(default)]
    pub expanded_scopes: Vec<String>,
}

impl Client {
    /// Create a client with no scopes
    pub fn new(client_id: impl Into<ClientId>) -> Self {
        Self {
            client_id: client_id.into(),
            expanded_scopes: Vec::new(),
        }
    }

    /// Add a scope grant to the client
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.expanded_scopes.push(scope.into());
        self
    }
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.client_id
    }

    fn expanded_scopes(&self) -> &[String] {
        &self.expanded_scopes
    }
}

/// Navigation token for a single role or client, rendered as `role:<id>`
/// or `client:<id>`. Identifiers may themselves contain `:`; only the
/// leading tag is split off when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// Reference to a role by id
    Role(RoleId),
    /// Reference to a client by id
    Client(ClientId),
}

impl EntityRef {
    /// The referenced identifier, without the leading tag
    pub fn id(&self) -> &str {
        match self {
            Self::Role(id) => id,
            Self::Client(id) => id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role(id) => write!(f, "role:{}", id),
            Self::Client(id) => write!(f, "client:{}", id),
        }
    }
}

impl FromStr for EntityRef {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix("role:") {
            Ok(Self::Role(id.to_string()))
        } else if let Some(id) = s.strip_prefix("client:") {
            Ok(Self::Client(id.to_string()))
        } else {
            Err(InspectorError::InvalidEntityRef(s.to_string()))
        }
    }
}
