use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::entity::Entity;
use crate::models::requests::{CreateUserRequest, UpdateUserRequest};

/// A user account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the store on first save.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl Entity for User {
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;

    const RESOURCE: &'static str = "User";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_create(input: CreateUserRequest) -> Self {
        Self {
            id: None,
            username: input.username,
            email: input.email,
        }
    }

    fn apply_update(&mut self, input: UpdateUserRequest) {
        self.username = input.username;
        self.email = input.email;
    }
}
