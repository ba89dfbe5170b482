pub mod article;
pub mod auth;
pub mod comment;
pub mod user;

// Re-export commonly used types
pub use article::*;
pub use auth::*;
pub use comment::*;
pub use user::*;
