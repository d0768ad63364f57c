//! Ownership Guard
//!
//! Decides whether an authenticated identity may act on a user-owned
//! resource. Reads need only an identity; updates and deletes need the
//! identity to be the recorded owner.
//!
//! A refusal is [`BackendError::Forbidden`], which renders exactly like
//! "not found" so a non-owner learns nothing about the resource.

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthenticatedUser;

/// A resource with a fixed owning user
pub trait Owned {
    /// Name used in client-facing messages ("Post not found")
    const RESOURCE: &'static str;

    /// The user the resource was created by
    fn owner_id(&self) -> Uuid;
}

/// What the caller wants to do with an existing resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Update,
    Delete,
}

impl Action {
    /// Whether only the owner may perform this action
    pub fn requires_ownership(self) -> bool {
        matches!(self, Action::Update | Action::Delete)
    }
}

/// Stateless ownership checks
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipGuard;

impl OwnershipGuard {
    /// Allow or refuse `action` on `resource` for `identity`
    pub fn authorize<R: Owned>(
        identity: &AuthenticatedUser,
        action: Action,
        resource: &R,
    ) -> Result<(), BackendError> {
        if !action.requires_ownership() || resource.owner_id() == identity.user_id {
            return Ok(());
        }

        tracing::warn!(
            user_id = %identity.user_id,
            owner_id = %resource.owner_id(),
            ?action,
            "{} access refused to non-owner",
            R::RESOURCE
        );
        Err(BackendError::Forbidden {
            resource: R::RESOURCE,
        })
    }

    /// Owner of a resource the identity is creating: always the actor
    pub fn owner_for_new(identity: &AuthenticatedUser) -> Uuid {
        identity.user_id
    }
}
