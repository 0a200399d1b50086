use serde::{Deserialize, Serialize};

use crate::auth::repo::User;
use crate::error::ApiError;
use crate::recipes::dto::RecipeSummary;
use crate::recipes::repo::Recipe;

/// Request body for account signup. Fields are optional so that missing
/// values produce validation messages rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Signup fields that passed validation.
#[derive(Debug)]
pub struct ValidatedSignup {
    pub username: String,
    pub password: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl SignupRequest {
    /// Checks every field and collects all failures into one error.
    pub fn validate(self) -> Result<ValidatedSignup, ApiError> {
        let mut errors = Vec::new();

        let username = match self.username {
            Some(u) if !u.trim().is_empty() => Some(u),
            _ => {
                errors.push("Username must not be empty.".to_string());
                None
            }
        };
        let password = match self.password {
            Some(p) if p.chars().count() >= 6 => Some(p),
            _ => {
                errors.push("Password must be at least 6 characters.".to_string());
                None
            }
        };

        match (username, password) {
            (Some(username), Some(password)) => Ok(ValidatedSignup {
                username,
                password,
                image_url: self.image_url,
                bio: self.bio,
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Full user response: public fields plus the user's recipes.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub recipes: Vec<RecipeSummary>,
}

impl UserBody {
    pub fn from_parts(user: User, recipes: Vec<Recipe>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image_url: user.image_url,
            bio: user.bio,
            recipes: recipes.into_iter().map(RecipeSummary::from).collect(),
        }
    }
}

/// User fields nested inside a recipe response.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            image_url: user.image_url.clone(),
            bio: user.bio.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(username: Option<&str>, password: Option<&str>) -> SignupRequest {
        SignupRequest {
            username: username.map(String::from),
            password: password.map(String::from),
            image_url: None,
            bio: None,
        }
    }

    fn expect_errors(req: SignupRequest) -> Vec<String> {
        match req.validate() {
            Err(ApiError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn valid_signup_passes() {
        let valid = signup(Some("chef_kaz"), Some("supersecret"))
            .validate()
            .expect("should validate");
        assert_eq!(valid.username, "chef_kaz");
    }

    #[test]
    fn short_password_is_rejected() {
        let errors = expect_errors(signup(Some("chef_kaz"), Some("tiny")));
        assert_eq!(errors, vec!["Password must be at least 6 characters."]);
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Three characters, six bytes.
        let errors = expect_errors(signup(Some("chef_kaz"), Some("ñññ")));
        assert_eq!(errors, vec!["Password must be at least 6 characters."]);

        // Six characters is enough, multibyte or not.
        assert!(signup(Some("chef_kaz"), Some("ñañáñé")).validate().is_ok());
    }

    #[test]
    fn missing_password_is_rejected() {
        let errors = expect_errors(signup(Some("chef_kaz"), None));
        assert_eq!(errors, vec!["Password must be at least 6 characters."]);
    }

    #[test]
    fn whitespace_username_is_rejected() {
        let errors = expect_errors(signup(Some("   "), Some("supersecret")));
        assert_eq!(errors, vec!["Username must not be empty."]);
    }

    #[test]
    fn all_failures_are_collected() {
        let errors = expect_errors(signup(None, Some("tiny")));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn user_body_never_contains_the_password_hash() {
        let user = User {
            id: 1,
            username: "chef_kaz".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            image_url: None,
            bio: Some("home cook".into()),
        };
        let json = serde_json::to_string(&UserBody::from_parts(user, Vec::new())).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("chef_kaz"));
    }
}
