pub mod client;
pub mod rbac;
pub mod session;

// Re-export commonly used types
pub use client::AuthClient;
pub use rbac::{Capability, Role};
pub use session::{Session, SessionKey, SessionStore};
