pub mod authentication;
pub mod google_api;
pub mod google_auth;
pub mod publisher;

pub use authentication::check_or_setup_auth;
pub use publisher::{PublishError, Publisher};
