use sqlx::{FromRow, PgPool};

use crate::error::ApiError;

/// User row. Deliberately not `Serialize`; responses go through
/// [`crate::auth::dto::UserBody`] so the password hash can never leak.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl User {
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, image_url, bio
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, image_url, bio
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn create(
        db: &PgPool,
        username: &str,
        password_hash: &str,
        image_url: Option<&str>,
        bio: Option<&str>,
    ) -> Result<User, ApiError> {
        let mut tx = db.begin().await?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, image_url, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password_hash, image_url, bio
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(image_url)
        .bind(bio)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(user)
    }
}
