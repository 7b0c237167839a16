use crate::core::normalize::normalize;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::AppResult;
use crate::models::{ProductionInput, ProductionRecord};
use chrono::NaiveDateTime;

/// High-level business logic for recording a production entry.
pub struct AddLogic;

impl AddLogic {
    /// Normalize `input` against `now`, then store it together with its
    /// audit line. Nothing is written when normalization fails.
    pub fn apply(
        pool: &mut DbPool,
        input: ProductionInput,
        now: NaiveDateTime,
    ) -> AppResult<(i64, ProductionRecord)> {
        let record = normalize(input, now)?;

        let tx = pool.conn.transaction()?;
        let id = insert_record(&tx, &record)?;
        ttlog(
            &tx,
            "add",
            &format!("{} shift {}", record.date_str(), record.shift),
            &format!(
                "Recorded #{id}: {} good, {} defects",
                record.count, record.defects
            ),
        )?;
        tx.commit()?;

        tracing::info!(
            id,
            date = %record.date,
            shift = %record.shift,
            count = record.count,
            defects = record.defects,
            "production record saved"
        );

        Ok((id, record))
    }
}
