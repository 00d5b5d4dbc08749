//! Loads the customer collection together with per-customer activity counts.
//!
//! The count requests are polled concurrently, at most
//! [`MAX_CONCURRENT_COUNTS`] at a time, and merged as each one resolves. They
//! live inside the caller's future, so dropping that future (for example when
//! the HTTP client disconnects) cancels them.

use futures::StreamExt;
use futures::stream::{self, Stream};

use crate::domain::activity::ActivityCounts;
use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::{ActivityReader, CustomerReader};

/// User-facing message shown when the customer collection cannot be fetched.
pub const LOAD_FAILED: &str = "Failed to load customers";

/// Upper bound on activity count requests in flight for one reload.
pub const MAX_CONCURRENT_COUNTS: usize = 16;

/// Result of a full reload.
#[derive(Debug, Default)]
pub struct CustomerSnapshot {
    pub customers: Vec<Customer>,
    pub activity_counts: ActivityCounts,
    /// Set when the collection fetch failed; `customers` is then empty.
    pub load_error: Option<String>,
}

/// Fetches every customer, then all activity counts concurrently.
pub async fn load_customers<R>(repo: &R) -> CustomerSnapshot
where
    R: CustomerReader + ActivityReader + ?Sized,
{
    let customers = match repo.list_customers().await {
        Ok(customers) => customers,
        Err(err) => {
            log::error!("Failed to fetch customers: {err}");
            return CustomerSnapshot {
                load_error: Some(format!("{LOAD_FAILED}: {err}")),
                ..CustomerSnapshot::default()
            };
        }
    };

    let ids = customers.iter().map(|c| c.customer_id).collect();
    let activity_counts = activity_count_stream(repo, ids)
        .fold(ActivityCounts::new(), |mut counts, (customer_id, count)| async move {
            counts.merge(customer_id, count);
            counts
        })
        .await;

    log::debug!("Loaded {} customers with activity counts", customers.len());

    CustomerSnapshot {
        customers,
        activity_counts,
        load_error: None,
    }
}

/// Yields `(customer, count)` pairs in completion order. A failed request
/// yields zero for that customer.
pub fn activity_count_stream<R>(
    repo: &R,
    ids: Vec<CustomerId>,
) -> impl Stream<Item = (CustomerId, usize)> + '_
where
    R: ActivityReader + ?Sized,
{
    stream::iter(ids)
        .map(move |customer_id| async move {
            let count = match repo.count_customer_activities(customer_id).await {
                Ok(count) => count,
                Err(err) => {
                    log::warn!("Failed to count activities for customer {customer_id}: {err}");
                    0
                }
            };
            (customer_id, count)
        })
        .buffer_unordered(MAX_CONCURRENT_COUNTS)
}
