use async_trait::async_trait;

use crate::{
    context::RequestContext,
    users::{
        error::StoreError,
        repo_types::{NewUser, User},
    },
};

/// Durable storage for users.
///
/// Implementations must be safe to share between concurrently handled
/// requests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the id assigned by the backend.
    async fn save_user(&self, ctx: &RequestContext, user: &NewUser) -> Result<i64, StoreError>;

    /// Fetch the user with this email. Absence is [`StoreError::NotFound`].
    async fn get_user_by_email(&self, ctx: &RequestContext, email: &str)
        -> Result<User, StoreError>;

    /// Release the underlying resources. Calling it twice is harmless.
    async fn close(&self);
}
