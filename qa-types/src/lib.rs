use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

pub mod answer;
pub mod question;
pub mod typescript_gen;

pub use answer::{AnswerForm, AnswerFormResponse, AnswerItem, CreateAnswerRequest};
pub use question::{CreateQuestionRequest, QuestionDetail, QuestionListItem, QuestionListPage};
pub use typescript_gen::generate_typescript_definitions;

// Shared wire types for the qa-service REST API

/// Discovery document served at the API root
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApiRoot {
    pub questions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Field-level validation errors, keyed by request field name.
///
/// Serializes as a plain object: `{"text": ["..."], "user_id": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(reason.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
