use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::common::{debug, warn};
use crate::core::store::UserStore;
use crate::core::{User, UserEntry, UserId};

/// UserStore keeping every user in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = UserEntry>) -> Self {
        let mut users = HashMap::new();
        for entry in entries {
            let user = User::from(entry);
            if let Some(prev) = users.insert(user.id().clone(), user) {
                warn!(user_id=%prev.id(), "Duplicate user entry, later one wins");
            }
        }
        debug!(users = users.len(), "Memory store loaded");

        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn insert(&self, user: User) -> Option<User> {
        self.users.write().await.insert(user.id().clone(), user)
    }

    pub async fn remove(&self, id: &UserId) -> Option<User> {
        self.users.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl FromIterator<User> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let users = iter
            .into_iter()
            .map(|user| (user.id().clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_id(&self, id: &UserId) -> crate::Result<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }
}
