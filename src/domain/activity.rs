use std::collections::HashMap;

use crate::domain::types::CustomerId;

/// Per-customer activity counts, filled in as the individual fetches resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCounts(HashMap<CustomerId, usize>);

impl ActivityCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the count for a customer, replacing any earlier value.
    pub fn merge(&mut self, customer_id: CustomerId, count: usize) {
        self.0.insert(customer_id, count);
    }

    /// Count for the customer; customers without a resolved count read as zero.
    pub fn get(&self, customer_id: CustomerId) -> usize {
        self.0.get(&customer_id).copied().unwrap_or(0)
    }
}
