use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tower_sessions::Session;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, SignupRequest, UserBody},
        extractors::{AuthUser, SESSION_USER_ID_KEY},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    recipes::repo::Recipe,
    state::AppState,
};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/check_session", get(check_session))
        .route("/logout", delete(logout))
}

#[instrument(skip(state, session, payload))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserBody>), ApiError> {
    let valid = payload.validate()?;
    let hash = hash_password(&valid.password)?;

    let user = User::create(
        &state.db,
        &valid.username,
        &hash,
        valid.image_url.as_deref(),
        valid.bio.as_deref(),
    )
    .await?;

    session.insert(SESSION_USER_ID_KEY, user.id).await?;

    info!(user_id = user.id, username = %user.username, "user signed up");
    Ok((
        StatusCode::CREATED,
        Json(UserBody::from_parts(user, Vec::new())),
    ))
}

#[instrument(skip(state))]
pub async fn check_session(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserBody>, ApiError> {
    // A session pointing at a deleted user counts as no session.
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    let recipes = Recipe::list_by_user(&state.db, user.id).await?;
    Ok(Json(UserBody::from_parts(user, recipes)))
}

#[instrument(skip(state, session, payload))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserBody>, ApiError> {
    let username = payload.username.as_deref().unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    let user = User::find_by_username(&state.db, username)
        .await?
        .ok_or_else(|| {
            warn!(%username, "login unknown username");
            ApiError::Unauthorized
        })?;

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::Unauthorized);
    }

    session.insert(SESSION_USER_ID_KEY, user.id).await?;
    let recipes = Recipe::list_by_user(&state.db, user.id).await?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(UserBody::from_parts(user, recipes)))
}

#[instrument(skip(session))]
pub async fn logout(
    AuthUser(user_id): AuthUser,
    session: Session,
) -> Result<StatusCode, ApiError> {
    session.flush().await?;
    info!(user_id, "user logged out");
    Ok(StatusCode::NO_CONTENT)
}
