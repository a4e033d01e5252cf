/// Create the answers table. Answers belong to exactly one question and are
/// removed together with it.
pub fn migration() -> String {
    r#"
CREATE TABLE answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id INTEGER NOT NULL,
    user_id TEXT NOT NULL,
    text TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    FOREIGN KEY (question_id) REFERENCES questions (id) ON DELETE CASCADE
);

CREATE INDEX idx_answers_question_created
    ON answers(question_id, created_at);
"#
    .to_string()
}
