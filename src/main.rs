//! roster entry point.

use clap::Parser;
use roster::config;
use roster::model::{AppError, EntryList, Options};
use roster::state::AppState;
use roster::view::{restore_terminal, TuiApp};
use std::path::PathBuf;
use tracing::info;

/// TUI for filtering, paginating, and editing a named roster.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Filter, paginate, and edit a named roster in the terminal")]
pub struct Args {
    /// Start with this filter term already committed
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Startup page size (0 shows an empty list)
    #[arg(short, long)]
    pub page_size: Option<usize>,

    /// Start with the controls header hidden
    #[arg(long)]
    pub hide_header: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Resolve configuration: defaults → config file → env vars → CLI.
    let resolved = {
        let file = config::load_config_file(args.config.clone())?;
        let merged = config::merge_config(file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(
            with_env,
            args.page_size,
            args.hide_header,
            args.log_file.clone(),
        )
    };

    roster::logging::init(&resolved.log_file_path)?;
    info!(config = ?resolved, "configuration resolved");

    let options = Options {
        filter: args.filter.unwrap_or_default(),
        page_size: resolved.page_size,
        show_header: resolved.show_header,
    };
    let entries = EntryList::from_names(resolved.seed_entries);
    let state = AppState::with_options(options, entries);

    let mut app = match TuiApp::new(state, config::KeyBindings::default()) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err.into());
        }
    };

    // Restore the terminal before surfacing any run error so the message
    // lands on a usable screen.
    let result = app.run();
    let restored = restore_terminal();
    result?;
    restored?;
    Ok(())
}
