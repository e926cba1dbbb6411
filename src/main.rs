mod app;
mod cli;
mod clipboard;
mod color;
mod db;
mod event;
mod logging;
mod palette;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let db_path = cli_opts.db.clone().unwrap_or_else(db::default_db_path);
    logging::init(&db_path.with_extension("log"))?;

    let conn = db::init(&db_path)?;
    let mut storage = db::SqliteStorage::new(conn);
    if let Some(command) = cli_opts.command {
        return cli::run(command, &mut storage);
    }

    tracing::info!(path = %db_path.display(), "starting tui");
    let mut app = app::App::new(
        storage,
        clipboard::SystemClipboard,
        types::Theme::system_preference(),
    );
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
