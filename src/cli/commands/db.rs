use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::PRODUCTION_TABLE;
use crate::db::initialize::open_store;
use crate::db::migrate::table_exists;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info } = cmd {
        if !*check && !*info {
            println!("Use --info or --check.");
            return Ok(());
        }

        let mut pool = open_store(&cfg.database)?;

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if !table_exists(&pool.conn, PRODUCTION_TABLE)? {
                println!("{}✘ Table '{}' is missing.{}", RED, PRODUCTION_TABLE, RESET);
            }

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }
    }

    Ok(())
}
