use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::fields::NewAnswer;
use crate::serializers::answer_form;
use actix_web::{delete, get, post, web, HttpResponse};
use qa_types::{AnswerItem, CreateAnswerRequest};
use tracing::{info, warn};

fn question_not_found(question_id: i64) -> ApiError {
    warn!(question_id, "Question not found");
    ApiError::NotFound(format!("Question {} not found", question_id))
}

fn answer_not_found(answer_id: i64) -> ApiError {
    warn!(answer_id, "Answer not found");
    ApiError::NotFound(format!("Answer {} not found", answer_id))
}

/// Question with its answers plus an empty answer template
#[get("/questions/{question_id}/answers/")]
pub async fn answer_form_view(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let question_id = path.into_inner();

    let (question, answers) = state
        .storage
        .get_question_with_answers(question_id)
        .await?
        .ok_or_else(|| question_not_found(question_id))?;

    Ok(HttpResponse::Ok().json(answer_form(question, answers)))
}

#[post("/questions/{question_id}/answers/")]
pub async fn create_answer(
    path: web::Path<i64>,
    body: web::Json<CreateAnswerRequest>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let question_id = path.into_inner();

    // an unknown question is a 404 even when the body is invalid too
    if state.storage.get_question(question_id).await?.is_none() {
        return Err(question_not_found(question_id));
    }

    let new_answer = NewAnswer::from_request(&body).map_err(|errors| {
        warn!(question_id, fields = ?errors.fields().collect::<Vec<_>>(), "Rejected answer");
        ApiError::Validation(errors)
    })?;

    let answer = state.storage.create_answer(question_id, new_answer).await?;
    info!(answer_id = answer.id, question_id, "Created answer");

    Ok(HttpResponse::Created().json(AnswerItem::from(answer)))
}

#[get("/answers/{id}/")]
pub async fn get_answer(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    let answer = state
        .storage
        .get_answer(id)
        .await?
        .ok_or_else(|| answer_not_found(id))?;

    Ok(HttpResponse::Ok().json(AnswerItem::from(answer)))
}

#[delete("/answers/{id}/")]
pub async fn delete_answer(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    let answer = state
        .storage
        .get_answer(id)
        .await?
        .ok_or_else(|| answer_not_found(id))?;

    if !state.storage.delete_answer(id).await? {
        return Err(answer_not_found(id));
    }
    info!(answer_id = id, question_id = answer.question_id, "Deleted answer");

    Ok(HttpResponse::NoContent().finish())
}
