//! DTOs shaped for the customer list template.

use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::domain::delete::DeleteWorkflow;
use crate::domain::types::{CustomerId, PageSize, StatusFilter};
use crate::domain::view::ViewState;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexQuery {
    /// Free-form search string entered by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Activity status filter; empty or `all` disables it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    /// Customer whose delete confirmation dialog should be open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<i64>,
}

impl IndexQuery {
    /// Builds the view state; unsupported page sizes fall back to the default.
    pub fn view_state(&self) -> ViewState {
        let page_size = match self.per_page.map(PageSize::try_from) {
            Some(Ok(page_size)) => page_size,
            Some(Err(err)) => {
                log::warn!("Ignoring page size from query: {err}");
                PageSize::default()
            }
            None => PageSize::default(),
        };

        ViewState::new(
            self.search.clone().unwrap_or_default(),
            StatusFilter::new(self.status.clone().unwrap_or_default()),
            self.page.unwrap_or(1),
            page_size,
        )
    }

    pub fn delete_target(&self) -> Option<CustomerId> {
        self.delete.and_then(|id| CustomerId::new(id).ok())
    }

    /// Query parameters reproducing `view` without the page number.
    pub fn for_view(view: &ViewState) -> Self {
        Self {
            search: Some(view.search.clone()).filter(|s| !s.is_empty()),
            status: match &view.status {
                StatusFilter::Any => None,
                StatusFilter::Exact(status) => Some(status.clone()),
            },
            page: None,
            per_page: Some(view.page_size.get()),
            delete: None,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_else(|err| {
            log::error!("Failed to encode index query: {err}");
            String::new()
        })
    }
}

/// One table row: the customer plus its activity count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerRow {
    pub customer_id: CustomerId,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub activities: usize,
}

impl CustomerRow {
    pub fn new(customer: &Customer, activities: usize) -> Self {
        Self {
            customer_id: customer.customer_id,
            name: customer.name.clone(),
            mobile: customer.mobile.clone(),
            email: customer.email.clone(),
            activities,
        }
    }
}

/// Data required to render the customer list template.
#[derive(Debug)]
pub struct IndexPageData {
    /// Visible page of rows, with the page already clamped into range.
    pub customers: Paginated<CustomerRow>,
    pub view: ViewState,
    pub status_options: Vec<String>,
    pub load_error: Option<String>,
    pub delete: DeleteWorkflow,
    /// A delete request is in flight somewhere; delete buttons are disabled.
    pub deleting: bool,
}
