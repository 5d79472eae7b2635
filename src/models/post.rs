use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::entity::Entity;
use crate::models::requests::{CreatePostRequest, UpdatePostRequest};

/// A post record: an identity id plus two free-form text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Unique identifier, assigned by the store on first save.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Hello world")]
    pub title: String,
    #[schema(example = "First post body")]
    pub content: String,
}

impl Entity for Post {
    type Create = CreatePostRequest;
    type Update = UpdatePostRequest;

    const RESOURCE: &'static str = "Post";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_create(input: CreatePostRequest) -> Self {
        Self {
            id: None,
            title: input.title,
            content: input.content,
        }
    }

    fn apply_update(&mut self, input: UpdatePostRequest) {
        self.title = input.title;
        self.content = input.content;
    }
}
