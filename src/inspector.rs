//! Inspection session state
//!
//! Holds the transient selection state of one inspection session and the
//! last successfully loaded role/client snapshot, and projects them into
//! the view the caller should present. All scope logic is delegated to the
//! pure [`crate::scope`] module; this layer only sequences the external
//! service calls and gates on readiness.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{InspectorError, Result};
use crate::scope::{matching_clients, matching_roles, MatchMode, ScopeIndex, ScopeMatcher};
use crate::service::AuthService;
use crate::types::{Client, EntityRef, Role};

/// What the caller should present, in precedence order: a selected entity
/// wins over a selected scope, which wins over the browse list. Nothing is
/// reported until both listings have loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorView<'a> {
    /// Listings not yet loaded (or discarded after a failure)
    NotLoaded,
    /// Drilled into a single role or client
    Entity(&'a EntityRef),
    /// Inspecting one scope: the sorted identifiers of matching entities,
    /// roles before clients
    Scope {
        /// The selected query scope
        scope: &'a str,
        /// Matching role ids, ascending
        roles: Vec<&'a str>,
        /// Matching client ids, ascending
        clients: Vec<&'a str>,
    },
    /// Browsing the scope universe, filtered by the search term
    Browse {
        /// Sorted, deduplicated, filtered scopes
        scopes: Vec<&'a str>,
    },
}

/// One inspection session over an external authorization service
pub struct ScopeInspector {
    service: Arc<dyn AuthService>,
    roles: Option<Vec<Role>>,
    clients: Option<Vec<Client>>,
    index: ScopeIndex,
    selected_scope: Option<String>,
    selected_entity: Option<EntityRef>,
    search_term: String,
    mode: MatchMode,
}

impl ScopeInspector {
    /// Create a session with nothing loaded and the default match mode
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self {
            service,
            roles: None,
            clients: None,
            index: ScopeIndex::default(),
            selected_scope: None,
            selected_entity: None,
            search_term: String::new(),
            mode: MatchMode::default(),
        }
    }

    /// Load both listings as one atomic replacement
    ///
    /// On failure any previously loaded state is discarded; the session
    /// reports [`InspectorView::NotLoaded`] until a reload succeeds.
    pub async fn load(&mut self) -> Result<()> {
        let loaded = self.fetch_both().await;

        match loaded {
            Ok((roles, clients)) => {
                info!(roles = roles.len(), clients = clients.len(), "listings loaded");
                self.roles = Some(roles);
                self.clients = Some(clients);
                self.rebuild_index();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "load failed, discarding state");
                self.roles = None;
                self.clients = None;
                self.rebuild_index();
                Err(err)
            }
        }
    }

    async fn fetch_both(&self) -> Result<(Vec<Role>, Vec<Client>)> {
        let roles = self
            .service
            .list_roles()
            .await
            .map_err(|err| InspectorError::LoadFailure {
                what: "roles",
                reason: err.to_string(),
            })?;
        let clients = self
            .service
            .list_clients()
            .await
            .map_err(|err| InspectorError::LoadFailure {
                what: "clients",
                reason: err.to_string(),
            })?;
        Ok((roles, clients))
    }

    /// Refresh only the role listing, keeping clients as loaded
    pub async fn reload_roles(&mut self) -> Result<()> {
        match self.service.list_roles().await {
            Ok(roles) => {
                debug!(roles = roles.len(), "roles reloaded");
                self.roles = Some(roles);
                self.rebuild_index();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "role reload failed");
                self.roles = None;
                self.rebuild_index();
                Err(InspectorError::LoadFailure {
                    what: "roles",
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Refresh only the client listing, keeping roles as loaded
    pub async fn reload_clients(&mut self) -> Result<()> {
        match self.service.list_clients().await {
            Ok(clients) => {
                debug!(clients = clients.len(), "clients reloaded");
                self.clients = Some(clients);
                self.rebuild_index();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "client reload failed");
                self.clients = None;
                self.rebuild_index();
                Err(InspectorError::LoadFailure {
                    what: "clients",
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Delete a role; on success the session navigates back to the browse
    /// list. Failures propagate and leave the selection untouched.
    pub async fn delete_role(&mut self, role_id: &str) -> Result<()> {
        self.service
            .delete_role(role_id)
            .await
            .map_err(|err| InspectorError::MutationFailure {
                what: EntityRef::Role(role_id.to_string()).to_string(),
                reason: err.to_string(),
            })?;
        debug!(role_id, "role deleted");
        self.selected_entity = None;
        self.selected_scope = None;
        Ok(())
    }

    /// Delete a client; same navigation and failure semantics as
    /// [`Self::delete_role`]
    pub async fn delete_client(&mut self, client_id: &str) -> Result<()> {
        self.service
            .delete_client(client_id)
            .await
            .map_err(|err| InspectorError::MutationFailure {
                what: EntityRef::Client(client_id.to_string()).to_string(),
                reason: err.to_string(),
            })?;
        debug!(client_id, "client deleted");
        self.selected_entity = None;
        self.selected_scope = None;
        Ok(())
    }

    /// Whether both listings are present
    pub fn is_loaded(&self) -> bool {
        self.roles.is_some() && self.clients.is_some()
    }

    /// The derived scope universe (empty until loaded)
    pub fn index(&self) -> &ScopeIndex {
        &self.index
    }

    /// Select a scope to inspect
    pub fn select_scope(&mut self, scope: impl Into<String>) {
        self.selected_scope = Some(scope.into());
    }

    /// Return to the browse list, dropping scope and entity selection
    pub fn clear_selected_scope(&mut self) {
        self.selected_scope = None;
        self.selected_entity = None;
    }

    /// Currently selected scope, if any
    pub fn selected_scope(&self) -> Option<&str> {
        self.selected_scope.as_deref()
    }

    /// Drill into a single role or client
    pub fn select_entity(&mut self, entity: EntityRef) {
        self.selected_entity = Some(entity);
    }

    /// Return from the entity view to the selected scope
    pub fn clear_selected_entity(&mut self) {
        self.selected_entity = None;
    }

    /// Currently selected entity, if any
    pub fn selected_entity(&self) -> Option<&EntityRef> {
        self.selected_entity.as_ref()
    }

    /// Change the match mode for the scope view
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.mode = mode;
    }

    /// Current match mode
    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// Change the free-text filter for the browse list
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Reset the free-text filter
    pub fn clear_search_term(&mut self) {
        self.search_term.clear();
    }

    /// Current free-text filter
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Project the session into what should be presented
    pub fn view(&self) -> InspectorView<'_> {
        let (roles, clients) = match (&self.roles, &self.clients) {
            (Some(roles), Some(clients)) => (roles, clients),
            _ => return InspectorView::NotLoaded,
        };

        if let Some(entity) = &self.selected_entity {
            return InspectorView::Entity(entity);
        }

        if let Some(scope) = &self.selected_scope {
            let matcher = ScopeMatcher::new(self.mode, scope.clone());
            return InspectorView::Scope {
                scope,
                roles: matching_roles(roles, &matcher)
                    .into_iter()
                    .map(|role| role.role_id.as_str())
                    .collect(),
                clients: matching_clients(clients, &matcher)
                    .into_iter()
                    .map(|client| client.client_id.as_str())
                    .collect(),
            };
        }

        InspectorView::Browse {
            scopes: self.index.filter(&self.search_term),
        }
    }

    fn rebuild_index(&mut self) {
        self.index = match (&self.roles, &self.clients) {
            (Some(roles), Some(clients)) => ScopeIndex::build(roles, clients),
            _ => ScopeIndex::default(),
        };
    }
}
