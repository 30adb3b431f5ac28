use std::io::Write;
use std::path::PathBuf;

use configs::AppConfig;
use service::Quantity;
use tracing::info;

use crate::args::{Cli, Command};
use crate::{commands, demo};

/// Effective settings after applying CLI overrides on top of the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl Settings {
    pub fn resolve(cfg: &AppConfig, cli: &Cli) -> Self {
        let data_file = cli.file.clone().unwrap_or_else(|| cfg.inventory.data_file.clone());
        let threshold = match &cli.command {
            Some(Command::Low { threshold: Some(t) }) | Some(Command::Demo { threshold: Some(t) }) => *t,
            _ => cfg.inventory.low_stock_threshold,
        };
        Self { data_file, low_stock_threshold: threshold }
    }
}

/// Dispatch one CLI invocation, writing all console output to `out`.
pub fn run<W: Write>(cli: Cli, cfg: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    let settings = Settings::resolve(cfg, &cli);
    let path = settings.data_file.as_path();
    let command = cli.command.unwrap_or(Command::Demo { threshold: None });
    info!(data_file = %path.display(), ?command, "dispatching command");

    match command {
        Command::Demo { .. } => {
            demo::run(path, settings.low_stock_threshold, out)?;
        }
        Command::Add { item, qty } => commands::add(path, &item, &qty, out)?,
        Command::Remove { item, qty } => commands::remove(path, &item, &qty, out)?,
        Command::Get { item } => commands::get(path, &item, out)?,
        Command::Report => commands::report(path, out)?,
        Command::Low { .. } => commands::low(path, settings.low_stock_threshold, out)?,
    }
    Ok(())
}
