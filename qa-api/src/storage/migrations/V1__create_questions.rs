/// Create the questions table
pub fn migration() -> String {
    r#"
CREATE TABLE questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    created_at INTEGER NOT NULL
);

CREATE INDEX idx_questions_created
    ON questions(created_at);
"#
    .to_string()
}
