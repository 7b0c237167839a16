use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_optional};
use rusqlite::OptionalExtension;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL RECORDS
    //
    let count = count_records(&pool.conn)?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM production_records",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let fmt_first = colorize_optional(first_date.as_deref().unwrap_or_default());
    let fmt_last = colorize_optional(last_date.as_deref().unwrap_or_default());

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) TOTALS PER SHIFT
    //
    let mut stmt = pool.conn.prepare(
        "SELECT shift, SUM(count), SUM(defects) FROM production_records
         GROUP BY shift ORDER BY shift",
    )?;
    let totals = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i64>(2)?,
        ))
    })?;

    for t in totals {
        let (shift, good, defects) = t?;
        println!(
            "{}• Shift {}:{} {} good / {} defects",
            CYAN, shift, RESET, good, defects
        );
    }

    println!();
    Ok(())
}

/// Connectivity report for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub connected: bool,
    pub detail: String,
    pub collections: Vec<String>,
}

/// Probe the store at `db_path` without creating it.
pub fn store_status(db_path: &Path) -> StoreStatus {
    let pool = match DbPool::open_existing(db_path) {
        Ok(p) => p,
        Err(e) => {
            return StoreStatus {
                connected: false,
                detail: truncate(&format!("Not available: {e}"), 50),
                collections: Vec::new(),
            };
        }
    };

    match list_tables(&pool) {
        Ok(collections) => StoreStatus {
            connected: true,
            detail: "Connected & Working".to_string(),
            collections,
        },
        Err(e) => StoreStatus {
            connected: true,
            detail: truncate(&format!("Connected but Error: {e}"), 50),
            collections: Vec::new(),
        },
    }
}

fn list_tables(pool: &DbPool) -> rusqlite::Result<Vec<String>> {
    let mut stmt = pool.conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name LIMIT 10",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
