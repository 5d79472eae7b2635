//! Data models organized by type.

pub mod entity;
pub mod post;
pub mod requests;
pub mod responses;
pub mod user;

pub use entity::*;
pub use post::*;
pub use requests::*;
pub use responses::*;
pub use user::*;
