use crate::answer::AnswerItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Question as it appears in the paginated list and in create responses
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionListItem {
    #[ts(type = "number")]
    pub id: i64,
    pub text: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    /// Live count of answers at the time the response was built
    #[ts(type = "number")]
    pub answers_count: u64,
}

/// Question with all of its answers, oldest answer first
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDetail {
    #[ts(type = "number")]
    pub id: i64,
    pub text: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub answers: Vec<AnswerItem>,
}

/// One page of the newest-first question list
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionListPage {
    #[ts(type = "number")]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<QuestionListItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateQuestionRequest {
    pub text: Option<String>,
}
