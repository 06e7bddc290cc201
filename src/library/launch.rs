//! 起動リンクの生成と起動

use crate::error::{PortalError, Result};

/// 起動リンクを生成（`{base}?worldId={id}`）
pub fn launch_url(base: &str, world_id: &str) -> String {
    format!("{}?worldId={}", base, urlencoding::encode(world_id))
}

/// 起動リンクを開く処理
pub trait Launcher {
    fn launch(&self, url: &str) -> Result<()>;
}

/// OS の既定ハンドラ（ブラウザ / VRChat）で開く
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        tracing::info!(%url, "opening launch link");
        open::that_detached(url).map_err(|e| PortalError::Launch(e.to_string()))
    }
}

#[cfg(test)]
#[path = "launch_test.rs"]
mod tests;
