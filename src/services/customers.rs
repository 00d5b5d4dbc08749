//! Services behind the customer list page: loading the visible page and
//! driving the delete confirmation workflow.

use crate::domain::delete::{Confirmation, DeleteWorkflow};
use crate::domain::navigation::Navigation;
use crate::domain::types::CustomerId;
use crate::domain::view::{ViewState, status_options};
use crate::dto::customers::{CustomerRow, IndexPageData};
use crate::repository::errors::RepositoryError;
use crate::repository::{ActivityReader, CustomerReader, CustomerWriter};
use crate::services::ServiceResult;
use crate::services::gate::DeleteGate;
use crate::services::loader::load_customers;

/// Shown when the backend refuses the deletion.
pub const DELETE_FAILED: &str = "Failed to delete item";
/// Shown when another delete submission holds the gate.
pub const DELETE_IN_PROGRESS: &str = "A deletion is already in progress";

/// Reloads everything and derives the page described by `view`.
pub async fn load_index_page<R>(
    repo: &R,
    gate: &DeleteGate,
    view: ViewState,
    delete: DeleteWorkflow,
) -> IndexPageData
where
    R: CustomerReader + ActivityReader + ?Sized,
{
    let snapshot = load_customers(repo).await;

    let page = view.apply(&snapshot.customers);
    let view = ViewState {
        page: page.page,
        ..view
    };
    let counts = &snapshot.activity_counts;
    let customers = page.map(|customer| CustomerRow::new(customer, counts.get(customer.customer_id)));

    IndexPageData {
        customers,
        status_options: status_options(&snapshot.customers),
        view,
        load_error: snapshot.load_error,
        delete,
        deleting: gate.is_busy(),
    }
}

/// Dialog state for an index request carrying `?delete=<id>`.
pub fn open_delete_dialog(customer_id: Option<CustomerId>) -> ServiceResult<DeleteWorkflow> {
    let mut workflow = DeleteWorkflow::default();
    if let Some(customer_id) = customer_id {
        workflow.request(customer_id)?;
    }
    Ok(workflow)
}

/// Location of the view or edit page for a row action.
pub fn navigate(
    action: impl FnOnce(CustomerId) -> Navigation,
    customer_id: i64,
    customer_pages_url: &str,
) -> ServiceResult<String> {
    let customer_id = CustomerId::new(customer_id)?;
    Ok(action(customer_id).location(customer_pages_url))
}

/// Runs the confirmation for `customer_id` and, when it passes, the delete
/// request. Returns `Idle` after a successful deletion; otherwise the dialog
/// stays pending with the error to show.
pub async fn delete_customer<R>(
    repo: &R,
    gate: &DeleteGate,
    secret: &str,
    customer_id: i64,
    password: String,
) -> ServiceResult<DeleteWorkflow>
where
    R: CustomerWriter + ?Sized,
{
    let customer_id = CustomerId::new(customer_id)?;
    let mut workflow = DeleteWorkflow::default();
    workflow.request(customer_id)?;
    workflow.set_password(password)?;

    let Confirmation::Submit(customer_id) = workflow.confirm(secret)? else {
        log::info!("Rejected delete confirmation for customer {customer_id}");
        return Ok(workflow);
    };

    let Some(_guard) = gate.try_acquire() else {
        log::warn!("Delete of customer {customer_id} refused, another deletion is in flight");
        workflow.failed(DELETE_IN_PROGRESS)?;
        return Ok(workflow);
    };

    match repo.delete_customer(customer_id).await {
        Ok(()) => {
            workflow.succeeded()?;
            log::info!("Deleted customer {customer_id}");
        }
        Err(err) => {
            log::error!("Failed to delete customer {customer_id}: {err}");
            let message = match err {
                RepositoryError::NotFound | RepositoryError::UnexpectedStatus(_) => {
                    DELETE_FAILED.to_string()
                }
                other => format!("{DELETE_FAILED}: {other}"),
            };
            workflow.failed(message)?;
        }
    }

    Ok(workflow)
}
