use super::{absolute_url, AppState};
use crate::error::{ApiError, ApiResult};
use crate::fields::NewQuestion;
use crate::models::QuestionSummary;
use crate::pagination::{PageQuery, PageWindow};
use crate::serializers::question_detail;
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use qa_types::{CreateQuestionRequest, QuestionListItem, QuestionListPage};
use tracing::{info, warn};

#[get("/questions/")]
pub async fn list_questions(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let total = state.storage.count_questions().await?;

    let window = PageWindow::resolve(query.page.as_deref(), total, state.pagination.page_size)
        .map_err(|e| {
            warn!(page = ?query.page, total, "Requested page out of range");
            ApiError::NotFound(e.to_string())
        })?;

    let results = state
        .storage
        .list_questions(window.limit(), window.offset())
        .await?
        .into_iter()
        .map(QuestionListItem::from)
        .collect();

    let base_url = absolute_url(&req, req.path());

    Ok(HttpResponse::Ok().json(QuestionListPage {
        count: total,
        next: window.next_link(&base_url),
        previous: window.previous_link(&base_url),
        results,
    }))
}

#[post("/questions/")]
pub async fn create_question(
    body: web::Json<CreateQuestionRequest>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let new_question = NewQuestion::from_request(&body).map_err(|errors| {
        warn!(fields = ?errors.fields().collect::<Vec<_>>(), "Rejected question");
        ApiError::Validation(errors)
    })?;

    let question = state.storage.create_question(new_question).await?;
    let answers_count = state.storage.count_answers(question.id).await?;
    info!(question_id = question.id, "Created question");

    Ok(HttpResponse::Created().json(QuestionListItem::from(QuestionSummary {
        question,
        answers_count,
    })))
}

#[get("/questions/{id}/")]
pub async fn get_question(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    let Some((question, answers)) = state.storage.get_question_with_answers(id).await? else {
        warn!(question_id = id, "Question not found");
        return Err(ApiError::NotFound(format!("Question {} not found", id)));
    };

    Ok(HttpResponse::Ok().json(question_detail(question, answers)))
}

#[delete("/questions/{id}/")]
pub async fn delete_question(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    match state.storage.delete_question(id).await? {
        Some(answers_deleted) => {
            info!(question_id = id, answers_deleted, "Deleted question");
            Ok(HttpResponse::NoContent().finish())
        }
        None => {
            warn!(question_id = id, "Question not found");
            Err(ApiError::NotFound(format!("Question {} not found", id)))
        }
    }
}
