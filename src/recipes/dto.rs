use serde::{Deserialize, Serialize};

use crate::auth::dto::UserProfile;
use crate::auth::repo::User;
use crate::error::ApiError;
use crate::recipes::repo::Recipe;

const MIN_INSTRUCTIONS_CHARS: usize = 50;

/// Request body for creating a recipe. `minutes_to_complete` is taken as a
/// raw JSON value so a wrong-typed field reaches the validator instead of
/// failing body deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub minutes_to_complete: Option<serde_json::Value>,
}

/// Recipe fields that passed validation.
#[derive(Debug)]
pub struct ValidatedRecipe {
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: i32,
}

impl CreateRecipeRequest {
    /// Checks every field and collects all failures into one error.
    pub fn validate(self) -> Result<ValidatedRecipe, ApiError> {
        let mut errors = Vec::new();

        let title = match self.title {
            Some(t) if !t.trim().is_empty() => Some(t),
            _ => {
                errors.push("Title must not be empty.".to_string());
                None
            }
        };
        let instructions = match self.instructions {
            Some(i) if i.chars().count() >= MIN_INSTRUCTIONS_CHARS => Some(i),
            _ => {
                errors.push("Instructions must be at least 50 characters.".to_string());
                None
            }
        };
        // Floats, strings, and out-of-range numbers all fail the same way.
        let minutes = match self
            .minutes_to_complete
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .and_then(|m| i32::try_from(m).ok())
        {
            Some(m) if m > 0 => Some(m),
            _ => {
                errors.push("Minutes must be a positive integer.".to_string());
                None
            }
        };

        match (title, instructions, minutes) {
            (Some(title), Some(instructions), Some(minutes_to_complete)) => Ok(ValidatedRecipe {
                title,
                instructions,
                minutes_to_complete,
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Recipe fields without the owning user, as nested inside a user response.
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: i32,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
        }
    }
}

/// Full recipe response with its owner nested.
#[derive(Debug, Serialize)]
pub struct RecipeBody {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: i32,
    pub user: UserProfile,
}

impl RecipeBody {
    pub fn from_parts(recipe: Recipe, user: &User) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user: UserProfile::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_INSTRUCTIONS: &str =
        "Dice the onions, soften them in butter, then add the stock and simmer for an hour.";

    fn request(
        title: Option<&str>,
        instructions: Option<&str>,
        minutes: Option<i32>,
    ) -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: title.map(String::from),
            instructions: instructions.map(String::from),
            minutes_to_complete: minutes.map(serde_json::Value::from),
        }
    }

    fn expect_errors(req: CreateRecipeRequest) -> Vec<String> {
        match req.validate() {
            Err(ApiError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn valid_recipe_passes() {
        let valid = request(Some("Onion soup"), Some(LONG_INSTRUCTIONS), Some(70))
            .validate()
            .expect("should validate");
        assert_eq!(valid.minutes_to_complete, 70);
    }

    #[test]
    fn instructions_of_exactly_50_chars_pass() {
        let instructions = "a".repeat(50);
        assert!(request(Some("Test"), Some(&instructions), Some(5))
            .validate()
            .is_ok());
    }

    #[test]
    fn short_instructions_are_rejected() {
        let instructions = "a".repeat(49);
        let errors = expect_errors(request(Some("Test"), Some(&instructions), Some(5)));
        assert_eq!(errors, vec!["Instructions must be at least 50 characters."]);
    }

    #[test]
    fn empty_title_is_rejected() {
        let errors = expect_errors(request(Some("  "), Some(LONG_INSTRUCTIONS), Some(5)));
        assert_eq!(errors, vec!["Title must not be empty."]);
    }

    #[test]
    fn non_positive_minutes_are_rejected() {
        let errors = expect_errors(request(Some("Test"), Some(LONG_INSTRUCTIONS), Some(0)));
        assert_eq!(errors, vec!["Minutes must be a positive integer."]);

        let errors = expect_errors(request(Some("Test"), Some(LONG_INSTRUCTIONS), Some(-10)));
        assert_eq!(errors, vec!["Minutes must be a positive integer."]);
    }

    #[test]
    fn wrong_typed_minutes_reach_the_validator() {
        // The same deserialization the Json extractor performs must accept
        // these bodies so the field fails as a validation message.
        for minutes in [r#"7.5"#, r#""ten""#, r#"null"#] {
            let body = format!(
                r#"{{"title": "Test", "instructions": "{}", "minutes_to_complete": {}}}"#,
                LONG_INSTRUCTIONS, minutes
            );
            let req: CreateRecipeRequest =
                serde_json::from_str(&body).expect("body should deserialize");
            let errors = expect_errors(req);
            assert_eq!(errors, vec!["Minutes must be a positive integer."]);
        }
    }

    #[test]
    fn empty_body_reports_every_field() {
        let errors = expect_errors(request(None, None, None));
        assert_eq!(errors.len(), 3);
    }
}
