use crate::core::filter::RecordFilter;
use crate::errors::{AppError, AppResult};
use crate::models::{ProductionRecord, Shift, StoredRecord};
use crate::utils::date::now_rfc3339;
use crate::utils::time::{format_storage, parse_time};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, ToSql, params, params_from_iter};

const SELECT_COLUMNS: &str = "SELECT id, date, time, shift, line, product, operator, count, defects, notes, created_at, updated_at
     FROM production_records";

/// Insert a canonical record and return the id assigned by the store.
pub fn insert_record(conn: &Connection, rec: &ProductionRecord) -> AppResult<i64> {
    let now = now_rfc3339();

    conn.execute(
        "INSERT INTO production_records
            (date, time, shift, line, product, operator, count, defects, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
        params![
            rec.date_str(),
            rec.time.as_ref().map(format_storage),
            rec.shift.to_db_str(),
            rec.line,
            rec.product,
            rec.operator,
            rec.count,
            rec.defects,
            rec.notes,
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Load every record matching `filter` exactly, oldest entry first.
pub fn query_records(conn: &Connection, filter: &RecordFilter) -> AppResult<Vec<StoredRecord>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut args: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(d) = filter.date {
        clauses.push("date = ?");
        args.push(Box::new(d.format("%Y-%m-%d").to_string()));
    }
    if let Some(s) = filter.shift {
        clauses.push("shift = ?");
        args.push(Box::new(s.to_db_str()));
    }

    let mut sql = SELECT_COLUMNS.to_string();
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY date ASC, time ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM production_records", [], |row| {
        row.get(0)
    })?;
    Ok(n)
}

pub fn map_row(row: &Row) -> Result<StoredRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            Box::new(AppError::InvalidDateFormat(date_str.clone())),
        )
    })?;

    let time_str: Option<String> = row.get("time")?;
    let time = match time_str {
        Some(s) => Some(parse_time(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                Box::new(AppError::InvalidTime(s.clone())),
            )
        })?),
        None => None,
    };

    let shift_str: String = row.get("shift")?;
    let shift = Shift::from_db_str(&shift_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            Box::new(AppError::InvalidShift(shift_str.clone())),
        )
    })?;

    Ok(StoredRecord {
        id: row.get("id")?,
        record: ProductionRecord {
            date,
            time,
            shift,
            line: row.get("line")?,
            product: row.get("product")?,
            operator: row.get("operator")?,
            count: row.get("count")?,
            defects: row.get("defects")?,
            notes: row.get("notes")?,
        },
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use chrono::NaiveTime;

    fn record(date: &str, time: (u32, u32), shift: Shift, count: u32) -> ProductionRecord {
        ProductionRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0),
            shift,
            line: Some("L1".into()),
            product: None,
            operator: None,
            count,
            defects: 1,
            notes: None,
        }
    }

    fn store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    #[test]
    fn insert_then_read_back() {
        let conn = store();
        let rec = record("2024-01-01", (8, 15), Shift::A, 10);

        let id = insert_record(&conn, &rec).unwrap();
        let all = query_records(&conn, &RecordFilter::default()).unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].record, rec);
        assert_eq!(all[0].created_at, all[0].updated_at);
    }

    #[test]
    fn filter_matches_both_fields_exactly() {
        let conn = store();
        insert_record(&conn, &record("2024-01-01", (8, 0), Shift::A, 1)).unwrap();
        insert_record(&conn, &record("2024-01-01", (16, 0), Shift::B, 2)).unwrap();
        insert_record(&conn, &record("2024-01-02", (17, 0), Shift::B, 3)).unwrap();

        let f = RecordFilter::from_params(Some("2024-01-01"), Some("B")).unwrap();
        let hits = query_records(&conn, &f).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits.iter().all(|h| f.matches(&h.record)));
        assert_eq!(hits[0].record.count, 2);

        let by_shift = RecordFilter::from_params(None, Some("B")).unwrap();
        assert_eq!(query_records(&conn, &by_shift).unwrap().len(), 2);

        assert_eq!(count_records(&conn).unwrap(), 3);
    }
}
