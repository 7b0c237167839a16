use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RESET, YELLOW};

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" => GREEN,
        "export" => BLUE,
        "migration_applied" => MAGENTA,
        "init" => YELLOW,
        _ => RESET,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        // op + target, capped at 60 visible chars
        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                let joined = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                if joined.chars().count() > 60 {
                    let mut s: String = joined.chars().take(57).collect();
                    s.push_str("...");
                    s
                } else {
                    joined
                }
            })
            .collect();
        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, op_target) in entries.iter().zip(op_targets) {
            let color = color_for_operation(&e.operation);
            let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {color}{op_target}{RESET}{padding} => {}",
                e.id,
                e.date,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
