use crate::question::QuestionDetail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerItem {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(type = "number")]
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/questions/{question_id}/answers/`.
///
/// The owning question comes from the path, never from the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateAnswerRequest {
    pub user_id: Option<String>,
    pub text: Option<String>,
}

/// Empty answer template returned alongside the question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerForm {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerFormResponse {
    pub question: QuestionDetail,
    pub answer_form: AnswerForm,
}
