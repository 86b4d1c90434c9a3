use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_devotees_table(conn)?;
    run_devotee_migrations(conn)?;
    create_children_table(conn)?;
    create_completion_table(conn)?;
    run_completion_migrations(conn)?;
    Ok(())
}

fn create_devotees_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS devotees (
            id TEXT PRIMARY KEY,
            full_name TEXT NOT NULL,
            phone_number TEXT NOT NULL DEFAULT '',
            gothram TEXT NOT NULL DEFAULT '',
            address TEXT NOT NULL DEFAULT '',
            notes TEXT,
            date_of_birth TEXT NOT NULL,
            marriage_date TEXT,
            spouse_name TEXT,
            spouse_date_of_birth TEXT,
            created_at TEXT
        )",
        [],
    )
    .context("Failed to create devotees table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_devotees_name ON devotees(full_name)",
        [],
    )
    .context("Failed to create devotee name index")?;

    Ok(())
}

fn run_devotee_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(conn, "devotees", "phone_number", "TEXT NOT NULL DEFAULT ''")?;
    migrations::ensure_column(conn, "devotees", "gothram", "TEXT NOT NULL DEFAULT ''")?;
    migrations::ensure_column(conn, "devotees", "address", "TEXT NOT NULL DEFAULT ''")?;
    migrations::ensure_column(conn, "devotees", "notes", "TEXT")?;
    migrations::ensure_column(conn, "devotees", "marriage_date", "TEXT")?;
    migrations::ensure_column(conn, "devotees", "spouse_name", "TEXT")?;
    migrations::ensure_column(conn, "devotees", "spouse_date_of_birth", "TEXT")?;
    migrations::ensure_column(conn, "devotees", "created_at", "TEXT")?;
    Ok(())
}

fn create_children_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS devotee_children (
            devotee_id TEXT NOT NULL REFERENCES devotees(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            date_of_birth TEXT,
            PRIMARY KEY (devotee_id, position)
        )",
        [],
    )
    .context("Failed to create devotee_children table")?;

    Ok(())
}

fn create_completion_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS completion_records (
            devotee_id TEXT NOT NULL REFERENCES devotees(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            occasion_date TEXT NOT NULL,
            occasion_type TEXT NOT NULL,
            related_person TEXT,
            completed_at TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create completion_records table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_completion_devotee
         ON completion_records(devotee_id, position)",
        [],
    )
    .context("Failed to create completion index")?;

    Ok(())
}

fn run_completion_migrations(conn: &Connection) -> Result<()> {
    // spouse/child label column for completion tables created without it
    migrations::ensure_column(conn, "completion_records", "related_person", "TEXT")
}
