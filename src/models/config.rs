//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    #[validate(range(min = 1))]
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for flash message cookies; at least 64 bytes.
    #[validate(length(min = 64))]
    pub secret: String,
    /// Base URL of the customer REST backend.
    #[validate(url)]
    pub backend_url: String,
    /// Prefix of the customer detail and edit pages.
    #[validate(length(min = 1))]
    pub customer_pages_url: String,
    /// Confirmation string required by the delete dialog.
    #[validate(length(min = 1))]
    pub delete_password: String,
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
