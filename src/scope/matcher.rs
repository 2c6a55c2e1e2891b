//! Scope-pattern matching
//!
//! The grammar is a single trailing `*`: a grant such as
//! `queue:create-task:*` covers any concrete scope under that prefix.
//! A `*` anywhere else is an ordinary literal character and is never
//! validated or rejected. Matching is an explicit two-case comparison
//! (equality, or prefix with the trailing star stripped), not a regex.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InspectorError;

/// How a query scope is compared against granted scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Byte-for-byte equality
    Exact,
    /// Does the granted scope cover the query? A wildcard grant covers
    /// everything under its prefix.
    HasScope,
    /// Does the granted scope fall under the query as a namespace?
    HasSubScope,
}

impl Default for MatchMode {
    fn default() -> Self {
        Self::HasScope
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::HasScope => write!(f, "Has Scope"),
            Self::HasSubScope => write!(f, "Has Sub-Scope"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Exact" => Ok(Self::Exact),
            "Has Scope" => Ok(Self::HasScope),
            "Has Sub-Scope" => Ok(Self::HasSubScope),
            other => Err(InspectorError::UnknownMatchMode(other.to_string())),
        }
    }
}

/// Pure predicate over granted scope strings, closed over a match mode and
/// a query scope
///
/// Always yields a defined boolean; no input is an error, including empty
/// strings. Under `HasScope` and `HasSubScope` an empty query degenerates
/// to "starts with the empty prefix" and stays permissive on purpose.
///
/// # Examples
///
/// ```
/// use scope_inspector::scope::{MatchMode, ScopeMatcher};
///
/// let exact = ScopeMatcher::new(MatchMode::Exact, "queue:view");
/// assert!(exact.matches("queue:view"));
/// assert!(!exact.matches("queue:view:*"));
///
/// let nested = ScopeMatcher::new(MatchMode::HasSubScope, "queue:");
/// assert!(nested.matches("queue:create-task:*"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMatcher {
    mode: MatchMode,
    query: String,
}

impl ScopeMatcher {
    /// Build the predicate for a mode and query scope
    pub fn new(mode: MatchMode, query: impl Into<String>) -> Self {
        Self {
            mode,
            query: query.into(),
        }
    }

    /// The match mode this predicate applies
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The query scope this predicate compares against
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apply the predicate to a granted scope
    pub fn matches(&self, scope: &str) -> bool {
        match self.mode {
            MatchMode::Exact => scope == self.query,
            MatchMode::HasScope => self.has_scope(scope),
            MatchMode::HasSubScope => self.has_sub_scope(scope),
        }
    }

    /// The grant satisfies the query: equal, or a wildcard grant whose
    /// prefix the query starts with
    fn has_scope(&self, scope: &str) -> bool {
        if scope == self.query {
            return true;
        }

        match scope.strip_suffix('*') {
            Some(prefix) => self.query.starts_with(prefix),
            None => false,
        }
    }

    /// The grant is nested under the query namespace. The derived pattern
    /// is the query with a trailing `*` appended unless already present;
    /// both "equals the pattern" and "starts with the pattern minus its
    /// star" reduce to a prefix check on the namespace.
    fn has_sub_scope(&self, scope: &str) -> bool {
        let namespace = self.query.strip_suffix('*').unwrap_or(&self.query);
        scope.starts_with(namespace)
    }
}
