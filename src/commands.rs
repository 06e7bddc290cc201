use crate::cli::{Cli, Command};
use crate::config::AppConfig;

pub mod browse;
pub mod launch;
pub mod list;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let config = AppConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => browse::run(config).await,
        Command::List(args) => list::run(args, config).await,
        Command::Launch(args) => launch::run(args, config).await,
    }
}
