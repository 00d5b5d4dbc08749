//! Access to the customer backend.
//!
//! The traits split reads from writes the same way the service functions
//! consume them, so each service can ask only for what it needs.

use async_trait::async_trait;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpRepository;

#[async_trait]
pub trait CustomerReader {
    /// Returns the full customer collection in backend order.
    async fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

#[async_trait]
pub trait CustomerWriter {
    async fn delete_customer(&self, customer_id: CustomerId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait ActivityReader {
    /// Number of activity records attached to the customer.
    async fn count_customer_activities(&self, customer_id: CustomerId) -> RepositoryResult<usize>;
}
