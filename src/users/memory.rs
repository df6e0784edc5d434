use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    context::RequestContext,
    users::{
        error::StoreError,
        repo_types::{NewUser, User},
        store::UserStore,
    },
};

/// Process-local [`UserStore`]. Keeps the same rules as the Postgres schema:
/// ids start at 1 and emails are unique.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save_user(&self, ctx: &RequestContext, user: &NewUser) -> Result<i64, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict);
        }
        let id = users.len() as i64 + 1;
        users.push(user.clone().into_user(id));
        debug!(request_id = %ctx.request_id, id, "user stored in memory");
        Ok(id)
    }

    async fn get_user_by_email(
        &self,
        _ctx: &RequestContext,
        email: &str,
    ) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn close(&self) {}
}
