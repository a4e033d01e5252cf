use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A question together with the number of answers it had when it was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSummary {
    pub question: Question,
    pub answers_count: u64,
}

/// Creation timestamp with the precision the store keeps (microseconds)
pub fn creation_timestamp() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}
