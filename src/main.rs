//! prodtracker main entrypoint.

use prodtracker::run;
use prodtracker::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prodtracker=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
