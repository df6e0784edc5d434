use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::users::{repo_types::User, validation::FieldViolation};

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for user creation.
///
/// Every field defaults so that a missing key surfaces as a `required`
/// violation instead of a decode error.
#[derive(Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
}

// Plaintext password must never reach the logs.
impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("image_url", &self.image_url)
            .field("description", &self.description)
            .field("interests", &self.interests)
            .finish()
    }
}

/// Request body for lookup by email.
#[derive(Debug, Default, Deserialize)]
pub struct GetUserRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Response returned after a user is created.
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub status: Status,
    pub id: i64,
}

/// Error envelope shared by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldViolation>,
}

impl ErrorResponse {
    pub fn new(error: &'static str) -> Self {
        Self {
            status: Status::Error,
            error,
            fields: Vec::new(),
        }
    }
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub interests: Vec<String>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image_url: user.image_url,
            description: user.description,
            interests: user.interests,
        }
    }
}
