use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{extractors::AuthUser, repo::User},
    error::ApiError,
    recipes::{
        dto::{CreateRecipeRequest, RecipeBody},
        repo::Recipe,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/recipes", get(list_recipes))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/recipes", post(create_recipe))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<RecipeBody>>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    let recipes = Recipe::list_by_user(&state.db, user.id).await?;
    let items = recipes
        .into_iter()
        .map(|r| RecipeBody::from_parts(r, &user))
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeBody>), ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let valid = payload.validate()?;
    let recipe = Recipe::create(
        &state.db,
        user.id,
        &valid.title,
        &valid.instructions,
        valid.minutes_to_complete,
    )
    .await?;

    info!(user_id = user.id, recipe_id = recipe.id, "recipe created");
    Ok((
        StatusCode::CREATED,
        Json(RecipeBody::from_parts(recipe, &user)),
    ))
}
