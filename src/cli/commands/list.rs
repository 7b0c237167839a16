use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::RecordFilter;
use crate::db::initialize::open_store;
use crate::db::queries::query_records;
use crate::errors::{AppError, AppResult};
use crate::models::StoredRecord;
use crate::utils::colors::{RESET, color_for_defects, color_for_shift};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date, shift, json } = cmd {
        let filter = RecordFilter::from_params(date.as_deref(), shift.as_deref())?;

        let pool = open_store(&cfg.database)?;
        let records = query_records(&pool.conn, &filter)?;

        if *json {
            let out = serde_json::to_string_pretty(&records)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        if records.is_empty() {
            if filter.is_empty() {
                println!("No records found.");
            } else {
                println!("No records found matching the given date/shift.");
            }
            return Ok(());
        }

        print_table(&records);
    }
    Ok(())
}

fn print_table(records: &[StoredRecord]) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("TIME", 5),
        Column::new("SHIFT", 5),
        Column::new("LINE", 8),
        Column::new("PRODUCT", 12),
        Column::new("OPERATOR", 12),
        Column::new("GOOD", 6),
        Column::new("DEFECTS", 7),
        Column::new("NOTES", 20),
    ]);

    let mut good: u64 = 0;
    let mut defects: u64 = 0;

    for r in records {
        let rec = &r.record;
        good += u64::from(rec.count);
        defects += u64::from(rec.defects);

        table.add_row(vec![
            r.id.to_string(),
            rec.date_str(),
            rec.time_str(),
            rec.shift.to_string(),
            rec.line.clone().unwrap_or_default(),
            rec.product.clone().unwrap_or_default(),
            rec.operator.clone().unwrap_or_default(),
            rec.count.to_string(),
            rec.defects.to_string(),
            rec.notes.clone().unwrap_or_default(),
        ]);
    }

    for (i, line) in table.render().lines().enumerate() {
        match i.checked_sub(1).and_then(|idx| records.get(idx)) {
            Some(r) => println!(
                "{}{}{}",
                color_for_shift(r.record.shift),
                line,
                RESET
            ),
            None => println!("{line}"),
        }
    }

    println!(
        "\nTotals: {} record(s), good={} defects={}{}{}",
        records.len(),
        good,
        color_for_defects(u32::try_from(defects).unwrap_or(u32::MAX)),
        defects,
        RESET
    );
}
