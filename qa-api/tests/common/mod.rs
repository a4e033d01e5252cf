#![allow(dead_code)]

use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{test, web, App};
use qa_api::config::PaginationConfig;
use qa_api::handlers::AppState;
use qa_api::routes::configure_routes;
use qa_api::storage::{QaStorage, SqliteQaStorage};
use serde_json::{json, Value};
use std::sync::Arc;

pub const USER_ID: &str = "2f1c6a0e-8a9b-4c3d-9e7f-1a2b3c4d5e6f";

pub struct TestApp<S> {
    pub storage: Arc<dyn QaStorage>,
    pub app: S,
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    setup_test_app_with_page_size(PaginationConfig::default().page_size).await
}

pub async fn setup_test_app_with_page_size(
    page_size: u64,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let storage: Arc<dyn QaStorage> = Arc::new(SqliteQaStorage::open_in_memory()?);
    let state = web::Data::new(AppState::new(
        storage.clone(),
        PaginationConfig { page_size },
    ));

    let app = test::init_service(
        App::new()
            .app_data(state)
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp { storage, app })
}

pub async fn post_json<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, value)
}

pub async fn get_json<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, value)
}

pub async fn delete<S>(app: &S, uri: &str) -> u16
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::delete().uri(uri).to_request();
    test::call_service(app, req).await.status().as_u16()
}

/// Creates a question through the API and returns its id
pub async fn create_question<S>(app: &S, text: &str) -> i64
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let (status, body) = post_json(app, "/api/questions/", json!({ "text": text })).await;
    assert_eq!(status, 201, "unexpected body: {body}");
    body["id"].as_i64().expect("question id")
}

pub async fn create_answer<S>(app: &S, question_id: i64, text: &str) -> i64
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let (status, body) = post_json(
        app,
        &format!("/api/questions/{question_id}/answers/"),
        json!({ "user_id": USER_ID, "text": text }),
    )
    .await;
    assert_eq!(status, 201, "unexpected body: {body}");
    body["id"].as_i64().expect("answer id")
}
