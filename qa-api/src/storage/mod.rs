use crate::fields::{NewAnswer, NewQuestion};
use crate::models::{Answer, Question, QuestionSummary};
use async_trait::async_trait;

mod memory;
pub mod migrations;
mod sqlite;

pub use memory::InMemoryStorage;
pub use sqlite::SqliteQaStorage;

/// Persistence for questions and answers.
///
/// Questions are always listed newest first and answers oldest first, ties
/// broken by id. Deleting a question removes its answers in the same atomic
/// operation.
#[async_trait]
pub trait QaStorage: Send + Sync {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, StorageError>;
    async fn count_questions(&self) -> Result<u64, StorageError>;
    async fn list_questions(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<QuestionSummary>, StorageError>;
    async fn get_question(&self, question_id: i64) -> Result<Option<Question>, StorageError>;
    async fn get_question_with_answers(
        &self,
        question_id: i64,
    ) -> Result<Option<(Question, Vec<Answer>)>, StorageError>;

    /// Deletes the question and all of its answers in one transaction.
    ///
    /// Returns `None` when the question does not exist, otherwise the number
    /// of answers removed with it.
    async fn delete_question(&self, question_id: i64) -> Result<Option<u64>, StorageError>;

    /// Fails with [`StorageError::NotFound`] if the question does not exist.
    async fn create_answer(
        &self,
        question_id: i64,
        answer: NewAnswer,
    ) -> Result<Answer, StorageError>;
    async fn count_answers(&self, question_id: i64) -> Result<u64, StorageError>;
    async fn get_answer(&self, answer_id: i64) -> Result<Option<Answer>, StorageError>;

    /// Returns `false` when there was no such answer.
    async fn delete_answer(&self, answer_id: i64) -> Result<bool, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage operation failed: {0}")]
    OperationFailed(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::OperationFailed(err.to_string())
    }
}

impl From<refinery::Error> for StorageError {
    fn from(err: refinery::Error) -> Self {
        StorageError::Migration(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Other(err.to_string())
    }
}
