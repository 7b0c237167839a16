use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::ProductionInput;
use crate::ui::messages::success;
use crate::utils::date::{now_local, parse_optional_date};
use crate::utils::time::parse_optional_time;

/// Record a production entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        count,
        date,
        time,
        shift,
        line,
        product,
        operator,
        defects,
        notes,
    } = cmd
    {
        let date = parse_optional_date(date.as_ref())?;
        let time = parse_optional_time(time.as_ref())?;

        let input = ProductionInput {
            date,
            time,
            shift: shift.clone(),
            line: line.clone(),
            product: product.clone(),
            operator: operator.clone(),
            count: *count,
            defects: *defects,
            notes: notes.clone(),
        };

        let mut pool = open_store(&cfg.database)?;
        let (id, record) = AddLogic::apply(&mut pool, input, now_local())?;

        success(format!(
            "Record #{} saved: {} {} shift {} | good={} defects={}",
            id,
            record.date_str(),
            record.time_str(),
            record.shift,
            record.count,
            record.defects
        ));
    }

    Ok(())
}
