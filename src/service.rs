//! External authorization service boundary
//!
//! The inspector never talks to a transport itself; it consumes whatever
//! implements [`AuthService`]. Listings are full replacement lists, never
//! incremental deltas, so the core never observes a partially-populated
//! collection.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::{Client, ClientId, Role, RoleId};

/// Authorization service operations the inspector depends on
///
/// Errors are opaque to the core; the session layer wraps them into its
/// own taxonomy and otherwise passes them through.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// List all roles with their expanded scopes
    async fn list_roles(&self) -> anyhow::Result<Vec<Role>>;

    /// List all clients with their expanded scopes
    async fn list_clients(&self) -> anyhow::Result<Vec<Client>>;

    /// Delete a role
    async fn delete_role(&self, role_id: &str) -> anyhow::Result<()>;

    /// Delete a client
    async fn delete_client(&self, client_id: &str) -> anyhow::Result<()>;
}

/// In-memory authorization service
///
/// Backs tests and demos; listing order is unspecified, which is fine
/// because the core sorts everything it reports.
pub struct InMemoryAuthService {
    roles: Arc<RwLock<HashMap<RoleId, Role>>>,
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryAuthService {
    /// Create an empty in-memory service
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace a role
    pub async fn put_role(&self, role: Role) {
        self.roles.write().await.insert(role.role_id.clone(), role);
    }

    /// Insert or replace a client
    pub async fn put_client(&self, client: Client) {
        self.clients.write().await.insert(client.client_id.clone(), client);
    }
}

impl Default for InMemoryAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn list_roles(&self) -> anyhow::Result<Vec<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.values().cloned().collect())
    }

    async fn list_clients(&self) -> anyhow::Result<Vec<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.values().cloned().collect())
    }

    async fn delete_role(&self, role_id: &str) -> anyhow::Result<()> {
        let mut roles = self.roles.write().await;
        match roles.remove(role_id) {
            Some(_) => Ok(()),
            None => anyhow::bail!("no such role: {}", role_id),
        }
    }

    async fn delete_client(&self, client_id: &str) -> anyhow::Result<()> {
        let mut clients = self.clients.write().await;
        match clients.remove(client_id) {
            Some(_) => Ok(()),
            None => anyhow::bail!("no such client: {}", client_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_put_and_list() {
        block_on(async {
            let service = InMemoryAuthService::new();
            service.put_role(Role::new("admin").with_scope("auth:*")).await;
            service.put_client(Client::new("worker")).await;

            let roles = service.list_roles().await.unwrap();
            assert_eq!(roles.len(), 1);
            assert_eq!(roles[0].role_id, "admin");
            assert_eq!(service.list_clients().await.unwrap().len(), 1);
        });
    }

    #[test]
    fn test_put_replaces_existing() {
        block_on(async {
            let service = InMemoryAuthService::new();
            service.put_role(Role::new("admin").with_scope("auth:*")).await;
            service.put_role(Role::new("admin").with_scope("queue:*")).await;

            let roles = service.list_roles().await.unwrap();
            assert_eq!(roles.len(), 1);
            assert_eq!(roles[0].expanded_scopes, vec!["queue:*"]);
        });
    }

    #[test]
    fn test_delete_missing_fails() {
        block_on(async {
            let service = InMemoryAuthService::new();
            assert!(service.delete_role("ghost").await.is_err());
            assert!(service.delete_client("ghost").await.is_err());
        });
    }

    #[test]
    fn test_delete_removes() {
        block_on(async {
            let service = InMemoryAuthService::new();
            service.put_client(Client::new("worker")).await;
            service.delete_client("worker").await.unwrap();
            assert!(service.list_clients().await.unwrap().is_empty());
        });
    }
}
