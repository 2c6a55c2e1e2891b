//! Scope universe derivation and entity matching
//!
//! The deduplicated sorted universe is derived once per snapshot load, so
//! the interactive substring filter stays a cheap pure-string pass over an
//! already-canonical list instead of re-flattening on every keystroke.

use std::collections::BTreeSet;

use crate::scope::matcher::ScopeMatcher;
use crate::types::{Client, Entity, Role};

/// Deduplicated, lexicographically sorted universe of every scope granted
/// to any role or client in a snapshot
///
/// # Examples
///
/// ```
/// use scope_inspector::scope::ScopeIndex;
/// use scope_inspector::types::{Client, Role};
///
/// let roles = vec![Role::new("admin").with_scope("auth:*")];
/// let clients = vec![Client::new("worker").with_scope("auth:*").with_scope("queue:claim")];
///
/// let index = ScopeIndex::build(&roles, &clients);
/// assert_eq!(index.scopes(), ["auth:*", "queue:claim"]);
/// assert_eq!(index.filter("queue"), ["queue:claim"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeIndex {
    scopes: Vec<String>,
}

impl ScopeIndex {
    /// Flatten every entity's expanded scopes, deduplicate, and sort
    /// ascending. A scope granted by several entities appears once.
    pub fn build(roles: &[Role], clients: &[Client]) -> Self {
        let universe: BTreeSet<&str> = roles
            .iter()
            .flat_map(|role| role.expanded_scopes.iter())
            .chain(clients.iter().flat_map(|client| client.expanded_scopes.iter()))
            .map(String::as_str)
            .collect();

        Self {
            // BTreeSet iteration is already ascending
            scopes: universe.into_iter().map(str::to_owned).collect(),
        }
    }

    /// The full sorted universe
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Number of distinct scopes
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether the universe is empty
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Scopes containing `term` as a case-sensitive substring, in universe
    /// order. An empty term keeps everything.
    pub fn filter(&self, term: &str) -> Vec<&str> {
        self.scopes
            .iter()
            .filter(|scope| scope.contains(term))
            .map(String::as_str)
            .collect()
    }
}

/// Entities for which any expanded scope satisfies the predicate, sorted
/// ascending by identifier
pub fn matching_entities<'a, E: Entity>(entities: &'a [E], matcher: &ScopeMatcher) -> Vec<&'a E> {
    let mut matching: Vec<&E> = entities
        .iter()
        .filter(|entity| entity.expanded_scopes().iter().any(|scope| matcher.matches(scope)))
        .collect();
    matching.sort_by(|a, b| a.id().cmp(b.id()));
    matching
}

/// Roles for which any expanded scope satisfies the predicate, sorted by
/// role id
pub fn matching_roles<'a>(roles: &'a [Role], matcher: &ScopeMatcher) -> Vec<&'a Role> {
    matching_entities(roles, matcher)
}

/// Clients for which any expanded scope satisfies the predicate, sorted by
/// client id
pub fn matching_clients<'a>(clients: &'a [Client], matcher: &ScopeMatcher) -> Vec<&'a Client> {
    matching_entities(clients, matcher)
}
