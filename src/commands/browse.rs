//! ワールド閲覧（TUI）コマンド
//!
//! `portal-library browse`（サブコマンド省略時も同じ）でタブ付きの一覧画面を起動する。

use crate::config::AppConfig;
use crate::library::{Loader, SystemLauncher};
use crate::tui;
use std::sync::Arc;
use tokio::runtime::Handle;

pub async fn run(config: AppConfig) -> Result<(), String> {
    let session = tui::Session {
        handle: Handle::current(),
        loader: Arc::new(Loader::new(&config)),
        launcher: &SystemLauncher,
        launch_base_url: config.launch_base_url,
    };

    tokio::task::block_in_place(|| tui::run(session)).map_err(|e| e.to_string())
}
