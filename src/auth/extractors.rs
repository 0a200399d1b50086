use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::ApiError;

pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Extracts the logged-in user's id from the request session, rejecting with
/// 401 when no user id has been stored.
#[derive(Debug)]
pub struct AuthUser(pub i64);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::Internal(anyhow::anyhow!(msg)))?;

        let user_id = session
            .get::<i64>(SESSION_USER_ID_KEY)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthUser(user_id))
    }
}
