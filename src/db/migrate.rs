use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260105_0001_create_production_records",
        description: "Created production_records table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS production_records (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            time        TEXT,
            shift       TEXT NOT NULL CHECK(shift IN ('A','B')),
            line        TEXT,
            product     TEXT,
            operator    TEXT,
            count       INTEGER NOT NULL CHECK(count >= 0),
            defects     INTEGER NOT NULL DEFAULT 0 CHECK(defects >= 0),
            notes       TEXT,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20260112_0002_add_updated_at",
        description: "Added updated_at metadata to production_records",
        sql: r#"
        ALTER TABLE production_records ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
        UPDATE production_records SET updated_at = created_at WHERE updated_at = '';
        "#,
    },
    Migration {
        version: "20260112_0003_index_date_shift",
        description: "Indexed production_records by date and shift",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_production_date_shift
            ON production_records(date, shift);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Check if a table exists in the current database.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
    }

    Ok(())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    tracing::info!(version = m.version, "{}", m.description);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PRODUCTION_TABLE;

    #[test]
    fn migrations_are_applied_once() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, MIGRATIONS.len() as i64);
        assert!(table_exists(&conn, PRODUCTION_TABLE).unwrap());
    }

    #[test]
    fn schema_rejects_invalid_shift_and_negative_count() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let bad_shift = conn.execute(
            "INSERT INTO production_records (date, shift, count, created_at, updated_at)
             VALUES ('2024-01-01', 'C', 1, 'x', 'x')",
            [],
        );
        assert!(bad_shift.is_err());

        let bad_count = conn.execute(
            "INSERT INTO production_records (date, shift, count, created_at, updated_at)
             VALUES ('2024-01-01', 'A', -1, 'x', 'x')",
            [],
        );
        assert!(bad_count.is_err());
    }
}
