use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::delete::DeleteWorkflow;
use crate::domain::navigation::Navigation;
use crate::domain::types::{CustomerId, PageSize};
use crate::dto::customers::{IndexPageData, IndexQuery};
use crate::forms::customers::DeleteCustomerForm;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::customers as customers_service;
use crate::services::ServiceError;
use crate::services::gate::DeleteGate;

/// Delete dialog as the template sees it.
#[derive(Serialize)]
struct DeleteDialog<'a> {
    customer_id: CustomerId,
    error: Option<&'a str>,
}

fn index_context(mut context: Context, data: &IndexPageData) -> Context {
    let base_query = IndexQuery::for_view(&data.view);
    let current_query = base_query.clone().with_page(data.view.page);

    context.insert("customers", &data.customers);
    context.insert("previous_page", &data.customers.previous_page());
    context.insert("next_page", &data.customers.next_page());
    context.insert("view", &data.view);
    context.insert("page_sizes", &PageSize::ALL);
    context.insert("status_options", &data.status_options);
    context.insert("load_error", &data.load_error);
    context.insert("deleting", &(data.deleting || data.delete.is_submitting()));
    context.insert("base_query", &base_query.to_query_string());
    context.insert("current_query", &current_query.to_query_string());
    if let Some(customer_id) = data.delete.target() {
        context.insert(
            "delete_dialog",
            &DeleteDialog {
                customer_id,
                error: data.delete.error(),
            },
        );
    }
    context
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQuery>,
    repo: web::Data<HttpRepository>,
    gate: web::Data<DeleteGate>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();

    let workflow = match customers_service::open_delete_dialog(query.delete_target()) {
        Ok(workflow) => workflow,
        Err(err) => {
            log::error!("Failed to open delete dialog: {err}");
            DeleteWorkflow::Idle
        }
    };

    let data = customers_service::load_index_page(
        repo.get_ref(),
        gate.get_ref(),
        query.view_state(),
        workflow,
    )
    .await;

    let context = index_context(base_context(&flash_messages, "customers"), &data);
    render_template(&tera, "customers/index.html", &context)
}

#[get("/customers/{customer_id}/view")]
pub async fn view_customer(
    customer_id: web::Path<i64>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    navigate_to(Navigation::View, customer_id.into_inner(), &server_config)
}

#[get("/customers/{customer_id}/edit")]
pub async fn edit_customer(
    customer_id: web::Path<i64>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    navigate_to(Navigation::Edit, customer_id.into_inner(), &server_config)
}

fn navigate_to(
    action: impl FnOnce(CustomerId) -> Navigation,
    customer_id: i64,
    server_config: &ServerConfig,
) -> HttpResponse {
    match customers_service::navigate(action, customer_id, &server_config.customer_pages_url) {
        Ok(location) => redirect(&location),
        Err(err) => {
            log::warn!("Refusing navigation to customer {customer_id}: {err}");
            FlashMessage::error("Customer not found.").send();
            redirect("/")
        }
    }
}

#[post("/customers/{customer_id}/delete")]
pub async fn delete_customer(
    customer_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
    gate: web::Data<DeleteGate>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<DeleteCustomerForm>,
) -> impl Responder {
    let view = form.view_state();
    let back_to_table = format!(
        "/?{}",
        IndexQuery::for_view(&view)
            .with_page(view.page)
            .to_query_string()
    );

    let result = customers_service::delete_customer(
        repo.get_ref(),
        gate.get_ref(),
        &server_config.delete_password,
        customer_id.into_inner(),
        form.password,
    )
    .await;

    match result {
        Ok(workflow) if !workflow.is_open() => {
            FlashMessage::success("Customer deleted.").send();
            redirect(&back_to_table)
        }
        Ok(workflow) => {
            let data =
                customers_service::load_index_page(repo.get_ref(), gate.get_ref(), view, workflow)
                    .await;
            let context = index_context(base_context(&flash_messages, "customers"), &data);
            render_template(&tera, "customers/index.html", &context)
        }
        Err(ServiceError::TypeConstraint(err)) => {
            log::warn!("Rejected delete request: {err}");
            FlashMessage::error("Customer not found.").send();
            redirect(&back_to_table)
        }
        Err(err) => {
            log::error!("Failed to delete customer: {err}");
            FlashMessage::error("Failed to delete customer.").send();
            redirect(&back_to_table)
        }
    }
}
