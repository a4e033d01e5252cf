use super::StorageError;
use refinery::embed_migrations;

embed_migrations!("src/storage/migrations");

/// Brings the schema up to date. Already applied migrations are skipped.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), StorageError> {
    migrations::runner().run(conn)?;
    Ok(())
}
