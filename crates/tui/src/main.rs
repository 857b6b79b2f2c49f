mod app;
mod config;
mod error;
mod totals;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},ledger={level}",
            level = config.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting budget session");
    let mut app = app::App::new(config);
    app.run()?;
    Ok(())
}
