use super::{QaStorage, StorageError};
use crate::fields::{NewAnswer, NewQuestion};
use crate::models::{creation_timestamp, Answer, Question, QuestionSummary};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    next_question_id: i64,
    next_answer_id: i64,
    questions: BTreeMap<i64, Question>,
    answers: BTreeMap<i64, Answer>,
}

impl Tables {
    fn answers_of(&self, question_id: i64) -> impl Iterator<Item = &Answer> {
        self.answers
            .values()
            .filter(move |answer| answer.question_id == question_id)
    }
}

/// Process-local store with the same semantics as the SQLite one. Both tables
/// sit behind a single lock, so every operation is atomic.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StorageError> {
        self.tables
            .lock()
            .map_err(|e| StorageError::OperationFailed(format!("Lock error: {}", e)))
    }
}

#[async_trait::async_trait]
impl QaStorage for InMemoryStorage {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, StorageError> {
        let mut tables = self.lock()?;
        tables.next_question_id += 1;

        let question = Question {
            id: tables.next_question_id,
            text: question.text().to_string(),
            created_at: creation_timestamp(),
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn count_questions(&self) -> Result<u64, StorageError> {
        Ok(self.lock()?.questions.len() as u64)
    }

    async fn list_questions(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<QuestionSummary>, StorageError> {
        let tables = self.lock()?;

        let mut questions: Vec<&Question> = tables.questions.values().collect();
        questions.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(questions
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|question| QuestionSummary {
                question: question.clone(),
                answers_count: tables.answers_of(question.id).count() as u64,
            })
            .collect())
    }

    async fn get_question(&self, question_id: i64) -> Result<Option<Question>, StorageError> {
        Ok(self.lock()?.questions.get(&question_id).cloned())
    }

    async fn get_question_with_answers(
        &self,
        question_id: i64,
    ) -> Result<Option<(Question, Vec<Answer>)>, StorageError> {
        let tables = self.lock()?;

        let Some(question) = tables.questions.get(&question_id).cloned() else {
            return Ok(None);
        };

        let mut answers: Vec<Answer> = tables.answers_of(question_id).cloned().collect();
        answers.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(Some((question, answers)))
    }

    async fn delete_question(&self, question_id: i64) -> Result<Option<u64>, StorageError> {
        let mut tables = self.lock()?;

        if tables.questions.remove(&question_id).is_none() {
            return Ok(None);
        }

        let before = tables.answers.len();
        tables
            .answers
            .retain(|_, answer| answer.question_id != question_id);
        Ok(Some((before - tables.answers.len()) as u64))
    }

    async fn create_answer(
        &self,
        question_id: i64,
        answer: NewAnswer,
    ) -> Result<Answer, StorageError> {
        let mut tables = self.lock()?;

        if !tables.questions.contains_key(&question_id) {
            return Err(StorageError::NotFound(format!(
                "Question {} not found",
                question_id
            )));
        }

        tables.next_answer_id += 1;
        let answer = Answer {
            id: tables.next_answer_id,
            question_id,
            user_id: answer.user_id().to_string(),
            text: answer.text().to_string(),
            created_at: creation_timestamp(),
        };
        tables.answers.insert(answer.id, answer.clone());
        Ok(answer)
    }

    async fn count_answers(&self, question_id: i64) -> Result<u64, StorageError> {
        Ok(self.lock()?.answers_of(question_id).count() as u64)
    }

    async fn get_answer(&self, answer_id: i64) -> Result<Option<Answer>, StorageError> {
        Ok(self.lock()?.answers.get(&answer_id).cloned())
    }

    async fn delete_answer(&self, answer_id: i64) -> Result<bool, StorageError> {
        Ok(self.lock()?.answers.remove(&answer_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::contract;

    #[actix_rt::test]
    async fn test_create_and_read_back() {
        contract::create_and_read_back(&InMemoryStorage::new()).await;
    }

    #[actix_rt::test]
    async fn test_missing_rows() {
        contract::missing_rows(&InMemoryStorage::new()).await;
    }

    #[actix_rt::test]
    async fn test_ordering() {
        contract::ordering(&InMemoryStorage::new()).await;
    }

    #[actix_rt::test]
    async fn test_pagination_window() {
        contract::pagination_window(&InMemoryStorage::new()).await;
    }

    #[actix_rt::test]
    async fn test_answer_counts() {
        contract::answer_counts(&InMemoryStorage::new()).await;
    }

    #[actix_rt::test]
    async fn test_cascade_delete() {
        contract::cascade_delete(&InMemoryStorage::new()).await;
    }

    #[actix_rt::test]
    async fn test_answer_round_trip() {
        contract::answer_round_trip(&InMemoryStorage::new()).await;
    }

    #[actix_rt::test]
    async fn test_clones_share_tables() {
        let storage = InMemoryStorage::new();
        let clone = storage.clone();

        contract::question(&storage, "Is the state shared?").await;
        assert_eq!(clone.count_questions().await.unwrap(), 1);
    }
}
