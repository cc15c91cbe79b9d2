pub mod models;
pub mod user_handlers;

pub use models::{CreateUserRequest, UpdateUserRequest, User};
