use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_store;
use crate::db::log;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Creates the config directory and file (unless `--test`), then the
/// SQLite store with every pending migration applied.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // `cfg.database` already holds the resolved --db path
    let custom_db = cli.db.as_ref().map(|_| cfg.database.as_str());
    let db_path = Config::init_all(custom_db, cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing prodtracker…");
    println!("🗄️  Database   : {}", db_str);

    let pool = open_store(&db_path)?;

    println!("✅ Database initialized at {}", db_str);

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_str),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 prodtracker initialization completed!");
    Ok(())
}
