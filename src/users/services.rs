use tracing::info;

use crate::{
    context::RequestContext,
    users::{
        dto::{CreateUserRequest, GetUserRequest},
        error::UserError,
        password::hash_password,
        repo_types::{NewUser, User},
        store::UserStore,
        validation::{validate, validate_lookup},
    },
};

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validate, hash and persist a new user. Returns the assigned id.
pub async fn create_user(
    store: &dyn UserStore,
    ctx: &RequestContext,
    req: CreateUserRequest,
) -> Result<i64, UserError> {
    validate(&req)?;

    let password = hash_password(&req.password)?;
    let user = NewUser {
        name: req.name.trim().to_string(),
        email: normalize_email(&req.email),
        password,
        image_url: non_empty(req.image_url),
        description: non_empty(req.description),
        interests: req.interests,
    };

    let id = store.save_user(ctx, &user).await?;
    info!(request_id = %ctx.request_id, id, "user saved");
    Ok(id)
}

/// Validate the email and look the user up.
pub async fn get_user(
    store: &dyn UserStore,
    ctx: &RequestContext,
    req: GetUserRequest,
) -> Result<User, UserError> {
    validate_lookup(&req)?;
    let user = store
        .get_user_by_email(ctx, &normalize_email(&req.email))
        .await?;
    Ok(user)
}
