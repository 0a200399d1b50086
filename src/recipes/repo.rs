use sqlx::{FromRow, PgPool};

use crate::error::ApiError;

#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: i32,
    pub user_id: i64,
}

impl Recipe {
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> Result<Vec<Recipe>, ApiError> {
        let rows = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, instructions, minutes_to_complete, user_id
            FROM recipes
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: i64,
        title: &str,
        instructions: &str,
        minutes_to_complete: i32,
    ) -> Result<Recipe, ApiError> {
        let mut tx = db.begin().await?;
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (title, instructions, minutes_to_complete, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, instructions, minutes_to_complete, user_id
            "#,
        )
        .bind(title)
        .bind(instructions)
        .bind(minutes_to_complete)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(recipe)
    }
}
