//! Request field pipeline: every input field has a [`FieldKind`] bound to its
//! validator. Create requests go through validate -> normalize and only a
//! fully valid request yields a [`NewQuestion`] or [`NewAnswer`], which are the
//! only values the storage layer accepts for inserts.

use crate::validation::{
    validate_answer_text, validate_question_text, validate_uuid, ValidationError,
};
use qa_types::{CreateAnswerRequest, CreateQuestionRequest, FieldErrors};

pub const REQUIRED_FIELD: &str = "This field is required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    QuestionText,
    AnswerText,
    UserId,
}

impl FieldKind {
    /// Name of the field in request bodies and error maps
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::QuestionText | FieldKind::AnswerText => "text",
            FieldKind::UserId => "user_id",
        }
    }

    pub fn validate(self, raw: &str) -> Result<String, ValidationError> {
        match self {
            FieldKind::QuestionText => validate_question_text(raw),
            FieldKind::AnswerText => validate_answer_text(raw),
            FieldKind::UserId => validate_uuid(raw),
        }
    }
}

/// Collects per-field failures while a request is being validated
#[derive(Debug, Default)]
struct FieldPipeline {
    errors: FieldErrors,
}

impl FieldPipeline {
    fn field(&mut self, kind: FieldKind, raw: Option<&str>) -> Option<String> {
        let Some(raw) = raw else {
            self.errors.add(kind.name(), REQUIRED_FIELD);
            return None;
        };

        match kind.validate(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.add(kind.name(), e.to_string());
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, FieldErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }
}

/// Validated input for a new question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    text: String,
}

impl NewQuestion {
    pub fn from_request(request: &CreateQuestionRequest) -> Result<Self, FieldErrors> {
        let mut pipeline = FieldPipeline::default();
        let text = pipeline.field(FieldKind::QuestionText, request.text.as_deref());
        pipeline.finish(text.map(|text| NewQuestion { text }))
    }

    pub fn parse(text: &str) -> Result<Self, FieldErrors> {
        Self::from_request(&CreateQuestionRequest {
            text: Some(text.to_string()),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Validated input for a new answer. The owning question id is supplied
/// separately by the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    user_id: String,
    text: String,
}

impl NewAnswer {
    pub fn from_request(request: &CreateAnswerRequest) -> Result<Self, FieldErrors> {
        let mut pipeline = FieldPipeline::default();
        let user_id = pipeline.field(FieldKind::UserId, request.user_id.as_deref());
        let text = pipeline.field(FieldKind::AnswerText, request.text.as_deref());

        let answer = match (user_id, text) {
            (Some(user_id), Some(text)) => Some(NewAnswer { user_id, text }),
            _ => None,
        };
        pipeline.finish(answer)
    }

    pub fn parse(user_id: &str, text: &str) -> Result<Self, FieldErrors> {
        Self::from_request(&CreateAnswerRequest {
            user_id: Some(user_id.to_string()),
            text: Some(text.to_string()),
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
