mod memory;
pub use self::memory::MemoryStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{User, UserId};

/// Lookup of persisted users by identifier.
///
/// An unknown id is `Ok(None)`. Errors are reserved for a store that could
/// not answer.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, id: &UserId) -> crate::Result<Option<User>>;
}

#[async_trait]
impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    async fn find_user_by_id(&self, id: &UserId) -> crate::Result<Option<User>> {
        (**self).find_user_by_id(id).await
    }
}

#[async_trait]
impl<S> UserStore for &S
where
    S: UserStore + ?Sized,
{
    async fn find_user_by_id(&self, id: &UserId) -> crate::Result<Option<User>> {
        (**self).find_user_by_id(id).await
    }
}
