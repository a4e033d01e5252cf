//! Route table shared by the server and the integration tests.

use crate::error::ApiError;
use crate::handlers::{answers, questions, root};
use actix_web::web;
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // malformed bodies get the usual error envelope instead of actix's plain text
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "Rejected request body");
        ApiError::InvalidRequest(err.to_string()).into()
    });

    // ids that are not integers never match a resource
    let path_config = web::PathConfig::default().error_handler(|err, req| {
        debug!(error = %err, path = req.path(), "Unparseable path parameter");
        ApiError::NotFound(format!("No resource at {}", req.path())).into()
    });

    cfg.app_data(json_config).app_data(path_config).service(
        web::scope("/api")
            .service(root::api_root)
            .service(questions::list_questions)
            .service(questions::create_question)
            .service(questions::get_question)
            .service(questions::delete_question)
            .service(answers::answer_form_view)
            .service(answers::create_answer)
            .service(answers::get_answer)
            .service(answers::delete_answer),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationConfig;
    use crate::handlers::AppState;
    use crate::storage::{InMemoryStorage, QaStorage};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_rt::test]
    async fn test_routes_over_memory_storage() {
        let storage = InMemoryStorage::new();
        let state = web::Data::new(AppState::new(
            Arc::new(storage.clone()) as Arc<dyn QaStorage>,
            PaginationConfig::default(),
        ));
        let app =
            test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/questions/")
            .set_json(json!({ "text": "Does the memory store work?" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/api/questions/{id}/answers/"))
            .set_json(json!({
                "user_id": "123e4567-e89b-12d3-a456-426614174000",
                "text": "It does."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);

        let req = test::TestRequest::get()
            .uri(&format!("/api/questions/{id}/"))
            .to_request();
        let detail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["answers"].as_array().map(Vec::len), Some(1));
        assert_eq!(storage.count_answers(id).await.unwrap(), 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/questions/{id}/"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 204);
        assert_eq!(storage.count_questions().await.unwrap(), 0);
    }
}
