use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{debug, instrument, warn};

use crate::{
    context::RequestContext,
    state::AppState,
    users::{
        dto::{CreateUserRequest, CreatedUserResponse, ErrorResponse, GetUserRequest, PublicUser, Status},
        error::UserError,
        services,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/lookup", post(get_user))
}

fn decode_failure(rejection: JsonRejection) -> Response {
    warn!(error = %rejection.body_text(), "failed to decode request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("failed to decode request")),
    )
        .into_response()
}

#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub async fn create_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => return decode_failure(rejection),
    };
    debug!(request = ?payload, "request body decoded");

    match services::create_user(state.store.as_ref(), &ctx, payload).await {
        Ok(id) => Json(CreatedUserResponse { status: Status::Ok, id }).into_response(),
        Err(e) => e.into_response(),
    }
}

#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub async fn get_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<GetUserRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => return decode_failure(rejection),
    };
    debug!(request = ?payload, "request body decoded");

    let result: Result<PublicUser, UserError> = services::get_user(state.store.as_ref(), &ctx, payload)
        .await
        .map(PublicUser::from);
    match result {
        Ok(user) => Json(user).into_response(),
        Err(e) => e.into_response(),
    }
}
