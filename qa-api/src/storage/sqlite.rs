use super::migrations::run_migrations;
use super::{QaStorage, StorageError};
use crate::fields::{NewAnswer, NewQuestion};
use crate::models::{creation_timestamp, Answer, Question, QuestionSummary};
use crate::DbConnection;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub struct SqliteQaStorage {
    connection: DbConnection,
}

impl SqliteQaStorage {
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::from_connection(Connection::open(db_path)?)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, StorageError> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        run_migrations(&mut conn)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Shared handle to the underlying connection
    pub fn connection(&self) -> DbConnection {
        self.connection.clone()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.connection
            .lock()
            .map_err(|e| StorageError::OperationFailed(format!("Lock error: {}", e)))
    }
}

fn timestamp_from_micros(column: usize, micros: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(column, micros))
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        text: row.get(1)?,
        created_at: timestamp_from_micros(2, row.get(2)?)?,
    })
}

fn answer_from_row(row: &Row<'_>) -> rusqlite::Result<Answer> {
    Ok(Answer {
        id: row.get(0)?,
        question_id: row.get(1)?,
        user_id: row.get(2)?,
        text: row.get(3)?,
        created_at: timestamp_from_micros(4, row.get(4)?)?,
    })
}

fn to_sql_int(value: u64) -> Result<i64, StorageError> {
    i64::try_from(value)
        .map_err(|_| StorageError::OperationFailed(format!("Value out of range: {}", value)))
}

fn question_exists(conn: &Connection, question_id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM questions WHERE id = ?1)",
        params![question_id],
        |row| row.get(0),
    )
}

fn answers_count(conn: &Connection, question_id: i64) -> rusqlite::Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM answers WHERE question_id = ?1",
        params![question_id],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

#[async_trait]
impl QaStorage for SqliteQaStorage {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, StorageError> {
        let conn = self.lock()?;
        let created_at = creation_timestamp();

        conn.execute(
            "INSERT INTO questions (text, created_at) VALUES (?1, ?2)",
            params![question.text(), created_at.timestamp_micros()],
        )?;

        Ok(Question {
            id: conn.last_insert_rowid(),
            text: question.text().to_string(),
            created_at,
        })
    }

    async fn count_questions(&self) -> Result<u64, StorageError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    async fn list_questions(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<QuestionSummary>, StorageError> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT q.id, q.text, q.created_at,
                   (SELECT COUNT(*) FROM answers a WHERE a.question_id = q.id)
            FROM questions q
            ORDER BY q.created_at DESC, q.id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )?;

        let summaries = stmt
            .query_map(params![to_sql_int(limit)?, to_sql_int(offset)?], |row| {
                let answers_count: i64 = row.get(3)?;
                Ok(QuestionSummary {
                    question: question_from_row(row)?,
                    answers_count: answers_count as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    async fn get_question(&self, question_id: i64) -> Result<Option<Question>, StorageError> {
        let conn = self.lock()?;

        let question = conn
            .query_row(
                "SELECT id, text, created_at FROM questions WHERE id = ?1",
                params![question_id],
                question_from_row,
            )
            .optional()?;

        Ok(question)
    }

    async fn get_question_with_answers(
        &self,
        question_id: i64,
    ) -> Result<Option<(Question, Vec<Answer>)>, StorageError> {
        let conn = self.lock()?;

        let Some(question) = conn
            .query_row(
                "SELECT id, text, created_at FROM questions WHERE id = ?1",
                params![question_id],
                question_from_row,
            )
            .optional()?
        else {
            return Ok(None);
        };

        let answers = conn
            .prepare(
                r#"
                SELECT id, question_id, user_id, text, created_at
                FROM answers
                WHERE question_id = ?1
                ORDER BY created_at ASC, id ASC
                "#,
            )?
            .query_map(params![question_id], answer_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some((question, answers)))
    }

    async fn delete_question(&self, question_id: i64) -> Result<Option<u64>, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        if !question_exists(&tx, question_id)? {
            return Ok(None);
        }

        let removed_answers = answers_count(&tx, question_id)?;
        tx.execute(
            "DELETE FROM answers WHERE question_id = ?1",
            params![question_id],
        )?;
        tx.execute("DELETE FROM questions WHERE id = ?1", params![question_id])?;
        tx.commit()?;

        Ok(Some(removed_answers))
    }

    async fn create_answer(
        &self,
        question_id: i64,
        answer: NewAnswer,
    ) -> Result<Answer, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        if !question_exists(&tx, question_id)? {
            return Err(StorageError::NotFound(format!(
                "Question {} not found",
                question_id
            )));
        }

        let created_at = creation_timestamp();
        tx.execute(
            r#"
            INSERT INTO answers (question_id, user_id, text, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                question_id,
                answer.user_id(),
                answer.text(),
                created_at.timestamp_micros(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Answer {
            id,
            question_id,
            user_id: answer.user_id().to_string(),
            text: answer.text().to_string(),
            created_at,
        })
    }

    async fn count_answers(&self, question_id: i64) -> Result<u64, StorageError> {
        let conn = self.lock()?;
        Ok(answers_count(&conn, question_id)?)
    }

    async fn get_answer(&self, answer_id: i64) -> Result<Option<Answer>, StorageError> {
        let conn = self.lock()?;

        let answer = conn
            .query_row(
                r#"
                SELECT id, question_id, user_id, text, created_at
                FROM answers
                WHERE id = ?1
                "#,
                params![answer_id],
                answer_from_row,
            )
            .optional()?;

        Ok(answer)
    }

    async fn delete_answer(&self, answer_id: i64) -> Result<bool, StorageError> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM answers WHERE id = ?1", params![answer_id])?;
        Ok(deleted > 0)
    }
}
