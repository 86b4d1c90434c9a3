// Database service module
// SQLite connection and schema for devotee records

mod connection;
pub mod migrations;
mod schema;

pub use connection::Database;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn table_exists(db: &Database, table: &str) -> bool {
        let count: i64 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        count == 1
    }

    #[test]
    fn test_new_database_in_memory() {
        let result = Database::new(":memory:");
        assert!(result.is_ok(), "Should create in-memory database");
    }

    #[test]
    fn test_new_database_with_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("devotees.db");

        let result = Database::open(&db_path);
        assert!(result.is_ok(), "Should create file-based database");
        assert!(Path::new(&db_path).exists(), "Database file should exist");
    }

    #[test]
    fn test_initialize_schema_creates_tables() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        assert!(table_exists(&db, "devotees"));
        assert!(table_exists(&db, "devotee_children"));
        assert!(table_exists(&db, "completion_records"));
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        assert!(db.initialize_schema().is_ok());
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::new(":memory:").unwrap();

        let enabled: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1, "Foreign keys should be enabled");
    }

    #[test]
    fn test_legacy_completion_table_gains_related_person() {
        let db = Database::new(":memory:").unwrap();
        db.connection()
            .execute_batch(
                "CREATE TABLE devotees (id TEXT PRIMARY KEY, full_name TEXT NOT NULL, date_of_birth TEXT NOT NULL);
                 CREATE TABLE completion_records (
                    devotee_id TEXT NOT NULL REFERENCES devotees(id) ON DELETE CASCADE,
                    position INTEGER NOT NULL,
                    occasion_date TEXT NOT NULL,
                    occasion_type TEXT NOT NULL,
                    completed_at TEXT NOT NULL
                 );",
            )
            .unwrap();

        db.initialize_schema().unwrap();

        let conn = db.connection();
        assert!(migrations::column_exists(conn, "completion_records", "related_person").unwrap());
        assert!(migrations::column_exists(conn, "devotees", "spouse_date_of_birth").unwrap());
        assert!(migrations::column_exists(conn, "devotees", "gothram").unwrap());
    }
}
