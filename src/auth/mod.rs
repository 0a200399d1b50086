use axum::Router;

use crate::state::AppState;

pub mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub(crate) mod password;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::account_routes())
        .merge(handlers::session_routes())
}
