use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use pushkind_customers::configure;
use pushkind_customers::models::config::ServerConfig;
use pushkind_customers::repository::HttpRepository;
use pushkind_customers::routes::alert_level_to_str;
use pushkind_customers::services::gate::DeleteGate;
use serde_json::json;
use tera::Tera;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_config(backend_url: &str) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 8080,
        templates_dir: "templates/**/*".to_string(),
        secret: "s".repeat(64),
        backend_url: backend_url.to_string(),
        customer_pages_url: "/dashboard/customers".to_string(),
        delete_password: "Mytro".to_string(),
        request_timeout_secs: 5,
    }
}

macro_rules! init_app {
    ($backend:expr) => {{
        let config = server_config(&$backend.uri());
        let repo = HttpRepository::new(&config.backend_url, config.request_timeout()).unwrap();
        let tera = Tera::new(&config.templates_dir).unwrap();
        let store = CookieMessageStore::builder(Key::generate()).build();
        let flash = FlashMessagesFramework::builder(store).build();
        test::init_service(
            App::new()
                .wrap(flash)
                .configure(configure)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(repo))
                .app_data(web::Data::new(DeleteGate::new()))
                .app_data(web::Data::new(config)),
        )
        .await
    }};
}

async fn mount_customers(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/customers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"customer_id": 1, "name": "Alice", "mobile": "555-1234", "email": "alice@x.com"},
            {"customer_id": 2, "name": "Bob", "mobile": "555-9999", "email": "bob@y.com"}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities/customer/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 10}, {"id": 11}, {"id": 12}])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities/customer/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

/// Twelve customers `c01`..`c12`; odd ones are `active`, even ones `idle`.
async fn mount_many_customers(server: &MockServer) {
    let customers: Vec<_> = (1..=12)
        .map(|i| {
            let status = if i % 2 == 1 { "active" } else { "idle" };
            json!({
                "customer_id": i,
                "name": format!("Customer {i:02}"),
                "mobile": format!("555-{i:04}"),
                "email": format!("c{i:02}@x.com"),
                "activity_status": status,
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/customers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customers))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/activities/customer/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}

fn location(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn test_index_renders_customers_with_activity_counts() {
    let backend = MockServer::start().await;
    mount_customers(&backend).await;
    let app = init_app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Alice"));
    assert!(body.contains("bob@y.com"));
    assert!(body.contains("<td>3</td>"));
    assert!(body.contains("Page 1 of 1"));
    assert!(!body.contains("Confirm Delete"));
}

#[actix_web::test]
async fn test_index_filters_by_search() {
    let backend = MockServer::start().await;
    mount_customers(&backend).await;
    let app = init_app!(backend);

    let req = test::TestRequest::get().uri("/?search=BOB").to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("bob@y.com"));
    assert!(!body.contains("alice@x.com"));
}

#[actix_web::test]
async fn test_index_without_matches_shows_empty_state() {
    let backend = MockServer::start().await;
    mount_customers(&backend).await;
    let app = init_app!(backend);

    let req = test::TestRequest::get().uri("/?search=zzz").to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("No matching customers found."));
    assert!(body.contains("Page 1 of 1"));
}

#[actix_web::test]
async fn test_index_reports_backend_failure() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Failed to load customers"));
    assert!(body.contains("No matching customers found."));
}

#[actix_web::test]
async fn test_delete_query_opens_confirmation_dialog() {
    let backend = MockServer::start().await;
    mount_customers(&backend).await;
    let app = init_app!(backend);

    let req = test::TestRequest::get().uri("/?delete=1").to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("Confirm Delete"));
    assert!(body.contains("action=\"/customers/1/delete\""));
}

#[actix_web::test]
async fn test_delete_with_wrong_password_keeps_dialog_open() {
    let backend = MockServer::start().await;
    mount_customers(&backend).await;
    Mock::given(method("DELETE"))
        .and(path("/customers/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::post()
        .uri("/customers/1/delete")
        .set_form([("password", "mytro"), ("per_page", "10")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Confirm Delete"));
    assert!(body.contains("Incorrect password"));
}

#[actix_web::test]
async fn test_delete_with_correct_password_redirects_to_table() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/customers/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::post()
        .uri("/customers/1/delete")
        .set_form([("password", "Mytro"), ("search", "ali"), ("page", "1")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = location(&resp);
    assert!(location.starts_with("/?"));
    assert!(location.contains("search=ali"));
}

#[actix_web::test]
async fn test_delete_backend_failure_shows_error_in_dialog() {
    let backend = MockServer::start().await;
    mount_customers(&backend).await;
    Mock::given(method("DELETE"))
        .and(path("/customers/2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&backend)
        .await;
    let app = init_app!(backend);

    let req = test::TestRequest::post()
        .uri("/customers/2/delete")
        .set_form([("password", "Mytro")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Failed to delete item"));
    assert!(body.contains("action=\"/customers/2/delete\""));
}

#[actix_web::test]
async fn test_view_and_edit_redirect_to_customer_pages() {
    let backend = MockServer::start().await;
    let app = init_app!(backend);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/customers/5/view").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard/customers/5");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/customers/5/edit").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard/customers/update/5");
}

#[actix_web::test]
async fn test_view_rejects_non_positive_identifier() {
    let backend = MockServer::start().await;
    let app = init_app!(backend);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/customers/0/view").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[actix_web::test]
async fn test_first_page_links_forward_only() {
    let backend = MockServer::start().await;
    mount_many_customers(&backend).await;
    let app = init_app!(backend);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = body_text(resp).await;

    assert!(body.contains("Page 1 of 2"));
    assert!(body.contains("c10@x.com"));
    assert!(!body.contains("c11@x.com"));
    assert!(body.contains(r#"<button type="button" class="btn btn-outline-primary" disabled>Previous</button>"#));
    assert!(body.contains(r#"href="/?per_page=10&page=2">Next</a>"#));
}

#[actix_web::test]
async fn test_page_past_the_end_is_clamped_to_last_page() {
    let backend = MockServer::start().await;
    mount_many_customers(&backend).await;
    let app = init_app!(backend);

    let req = test::TestRequest::get()
        .uri("/?page=99&per_page=10")
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("Page 2 of 2"));
    assert!(body.contains("c11@x.com"));
    assert!(body.contains("c12@x.com"));
    assert!(!body.contains("c01@x.com"));
    assert!(body.contains(r#"href="/?per_page=10&page=1">Previous</a>"#));
    assert!(body.contains(r#"<button type="button" class="btn btn-outline-primary" disabled>Next</button>"#));
}

#[actix_web::test]
async fn test_larger_page_size_fits_everything_on_one_page() {
    let backend = MockServer::start().await;
    mount_many_customers(&backend).await;
    let app = init_app!(backend);

    let req = test::TestRequest::get().uri("/?per_page=25").to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("Page 1 of 1"));
    assert!(body.contains("c12@x.com"));
    assert!(body.contains(r#"disabled>Previous</button>"#));
    assert!(body.contains(r#"disabled>Next</button>"#));
}

#[actix_web::test]
async fn test_status_filter_from_query_string() {
    let backend = MockServer::start().await;
    mount_many_customers(&backend).await;
    let app = init_app!(backend);

    let req = test::TestRequest::get().uri("/?status=idle").to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("Page 1 of 1"));
    assert!(body.contains("c02@x.com"));
    assert!(body.contains("c12@x.com"));
    assert!(!body.contains("c01@x.com"));
    assert!(!body.contains("c11@x.com"));
    assert!(body.contains(r#"<option value="idle" selected>idle</option>"#));
}
