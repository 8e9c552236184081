use feed_core::CoreUser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl From<&UserDto> for CoreUser {
    fn from(dto: &UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.clone(),
            email: dto.email.clone(),
            is_active: dto.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// One user and that user's posts, as returned by a record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub user: UserDto,
    #[serde(default)]
    pub posts: Vec<PostDto>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub users: Vec<UserDto>,
    pub posts: Vec<PostDto>,
    pub raw_hash: i32,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record {key} not found")]
    NotFound { key: i64 },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("invalid fixture: {0}")]
    Fixture(#[from] serde_json::Error),
}
