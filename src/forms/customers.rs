use serde::Deserialize;

use crate::domain::view::ViewState;
use crate::dto::customers::IndexQuery;

/// Delete confirmation dialog submission. The view-state fields come from
/// hidden inputs so the table reopens where the user left it.
#[derive(Debug, Deserialize)]
pub struct DeleteCustomerForm {
    #[serde(default)]
    pub password: String,
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl DeleteCustomerForm {
    pub fn view_state(&self) -> ViewState {
        IndexQuery {
            search: self.search.clone(),
            status: self.status.clone(),
            page: self.page,
            per_page: self.per_page,
            delete: None,
        }
        .view_state()
    }
}
