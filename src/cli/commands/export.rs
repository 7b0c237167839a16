use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        date,
        shift,
        file,
        format,
        force,
    } = cmd
    {
        let mut pool = open_store(&cfg.database)?;
        ExportLogic::export(&mut pool, format, file, date, shift, *force)?;
    }
    Ok(())
}
