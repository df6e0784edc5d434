use serde::Serialize;
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // Argon2 PHC string, never exposed in JSON
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub interests: Vec<String>, // TEXT[]
}

/// A validated user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub interests: Vec<String>,
}

impl NewUser {
    pub(crate) fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            image_url: self.image_url,
            description: self.description,
            interests: self.interests,
        }
    }
}
