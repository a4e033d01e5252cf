use super::absolute_url;
use actix_web::{get, HttpRequest, HttpResponse, Responder};
use qa_types::ApiRoot;

#[get("/")]
pub async fn api_root(req: HttpRequest) -> impl Responder {
    let base = req.path().trim_end_matches('/');

    HttpResponse::Ok().json(ApiRoot {
        questions: absolute_url(&req, &format!("{}/questions/", base)),
    })
}
