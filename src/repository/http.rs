//! `reqwest` implementation of the repository traits against the REST backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ActivityReader, CustomerReader, CustomerWriter};

/// HTTP client for the customer backend.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: String,
}

impl HttpRepository {
    /// Builds a client for `base_url` where every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RepositoryResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RepositoryError::ValidationError(
                "backend url cannot be empty".to_string(),
            ));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn ensure_success(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(match status.as_u16() {
        404 => RepositoryError::NotFound,
        code => RepositoryError::UnexpectedStatus(code),
    })
}

/// Decodes each record separately so that one unusable entry is skipped
/// instead of failing the whole collection.
fn parse_customers(records: Vec<Value>) -> Vec<Customer> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Customer>(record) {
            Ok(customer) => Some(customer),
            Err(err) => {
                log::warn!("Skipping customer record: {err}");
                None
            }
        })
        .collect()
}

#[async_trait]
impl CustomerReader for HttpRepository {
    async fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        let url = self.url("/customers/");
        log::debug!("GET {url}");

        let response = ensure_success(self.client.get(&url).send().await?)?;
        let records = response.json::<Vec<Value>>().await?;

        Ok(parse_customers(records))
    }
}

#[async_trait]
impl ActivityReader for HttpRepository {
    async fn count_customer_activities(&self, customer_id: CustomerId) -> RepositoryResult<usize> {
        let url = self.url(&format!("/activities/customer/{customer_id}"));
        log::debug!("GET {url}");

        let response = ensure_success(self.client.get(&url).send().await?)?;
        let activities = response.json::<Vec<Value>>().await?;

        Ok(activities.len())
    }
}

#[async_trait]
impl CustomerWriter for HttpRepository {
    async fn delete_customer(&self, customer_id: CustomerId) -> RepositoryResult<()> {
        let url = self.url(&format!("/customers/{customer_id}"));
        log::debug!("DELETE {url}");

        ensure_success(self.client.delete(&url).send().await?)?;

        Ok(())
    }
}
