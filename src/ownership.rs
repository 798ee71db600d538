//! Client-side ownership gate for mutation affordances.

use crate::models::OwnedResource;

/// True when `current_user` is the owner of `resource`.
///
/// Exact identifier equality only: no casefolding, no trimming, no role
/// escalation. An anonymous caller (`None`) never matches. This gates what
/// the client offers; the backend still re-validates every mutation, so a
/// rejected call after this passes is a handled failure, not a bug.
pub fn can_mutate<R: OwnedResource>(current_user: Option<&str>, resource: &R) -> bool {
    current_user.is_some_and(|user| user == resource.owner_id())
}
