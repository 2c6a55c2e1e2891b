/// Scope matching and indexing module
///
/// Implements the two pure pieces of the inspector: the per-mode scope
/// predicate and the derived scope universe with its entity filters.
///
/// # Examples
///
/// ```
/// use scope_inspector::scope::{MatchMode, ScopeMatcher};
///
/// let matcher = ScopeMatcher::new(MatchMode::HasScope, "queue:create-task:my-queue");
/// assert!(matcher.matches("queue:create-task:*"));
/// assert!(!matcher.matches("queue:create-task:other:*"));
/// ```

mod index;
mod matcher;


pub use index::{matching_clients, matching_entities, matching_roles, ScopeIndex};
pub use matcher::{MatchMode, ScopeMatcher};
