//! Table view state and the pure reducer deriving the visible page from it.

use serde::Serialize;

use crate::domain::customer::Customer;
use crate::domain::types::{PageSize, StatusFilter};
use crate::pagination::Paginated;

/// Search text, status filter, and pagination position of the customer table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub search: String,
    pub status: StatusFilter,
    /// 1-indexed page.
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::Any,
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ViewState {
    pub fn new(search: impl Into<String>, status: StatusFilter, page: usize, page_size: PageSize) -> Self {
        Self {
            search: search.into(),
            status,
            page: page.max(1),
            page_size,
        }
    }

    /// Both the search and the status predicate must pass.
    pub fn is_visible(&self, customer: &Customer) -> bool {
        customer.matches_search(&self.search)
            && self.status.matches(customer.activity_status.as_deref())
    }

    /// Customers passing the filters, in their original order.
    pub fn filter<'a>(&self, customers: &'a [Customer]) -> Vec<&'a Customer> {
        customers.iter().filter(|c| self.is_visible(c)).collect()
    }

    /// Filters, clamps the page into range and cuts the visible slice.
    pub fn apply<'a>(&self, customers: &'a [Customer]) -> Paginated<&'a Customer> {
        Paginated::from_all(self.filter(customers), self.page, self.page_size.get())
    }
}

/// Distinct non-empty activity statuses in first-seen order.
pub fn status_options(customers: &[Customer]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for status in customers
        .iter()
        .filter_map(|c| c.activity_status.as_deref())
        .filter(|s| !s.is_empty())
    {
        if !options.iter().any(|o| o == status) {
            options.push(status.to_string());
        }
    }
    options
}
