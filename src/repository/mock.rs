//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ActivityReader, CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl CustomerReader for Repository {
        async fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }

    #[async_trait]
    impl ActivityReader for Repository {
        async fn count_customer_activities(&self, customer_id: CustomerId) -> RepositoryResult<usize>;
    }

    #[async_trait]
    impl CustomerWriter for Repository {
        async fn delete_customer(&self, customer_id: CustomerId) -> RepositoryResult<()>;
    }
}
