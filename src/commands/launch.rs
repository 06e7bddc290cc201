//! portal-library launch コマンド
//!
//! ワールド ID から起動リンクを生成して開く。

use crate::config::AppConfig;
use crate::library::{launch_url, Launcher, SystemLauncher};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// World ID (e.g. wrld_xxxxxxxx)
    pub world_id: String,

    /// Print the launch link without opening it
    #[arg(long)]
    pub print: bool,
}

pub async fn run(args: Args, config: AppConfig) -> Result<(), String> {
    let url = launch_url(&config.launch_base_url, &args.world_id);
    println!("{}", url);

    if args.print {
        return Ok(());
    }

    SystemLauncher.launch(&url).map_err(|e| e.to_string())
}
