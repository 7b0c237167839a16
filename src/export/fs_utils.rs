use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Decide whether `path` may be (over)written.
///
/// A new file or `force` passes. An existing file asks for confirmation on
/// an interactive terminal and is refused otherwise.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::Export(
            "output file exists; pass --force to overwrite".to_string(),
        ));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_file_and_forced_overwrite_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        assert!(ensure_writable(&path, false).is_ok());

        std::fs::write(&path, "x").unwrap();
        assert!(ensure_writable(&path, true).is_ok());
    }
}
