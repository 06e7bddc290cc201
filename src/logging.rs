//! ログ初期化
//!
//! TUI の代替スクリーンを乱さないよう、ログはファイルにのみ出力する。

use crate::env::EnvVar;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// ログ出力を維持するガード（drop 時にフラッシュ）
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// ログディレクトリ
///
/// `$XDG_STATE_HOME/portal-library/logs` → `~/.local/state/portal-library/logs`
fn log_dir() -> PathBuf {
    EnvVar::get("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".local").join("state")))
        .unwrap_or_else(std::env::temp_dir)
        .join("portal-library")
        .join("logs")
}

/// tracing を初期化（失敗してもアプリは継続する）
pub fn init() -> Option<LoggingGuard> {
    let log_dir = {
        let dir = log_dir();
        std::fs::create_dir_all(&dir)
            .map(|_| dir)
            .or_else(|_| -> std::io::Result<PathBuf> {
                let dir = std::env::temp_dir().join("portal-library").join("logs");
                std::fs::create_dir_all(&dir)?;
                Ok(dir)
            })
            .ok()?
    };

    let file_appender = tracing_appender::rolling::daily(&log_dir, "portal-library.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portal_library=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        default_hook(panic_info);
    }));

    tracing::debug!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
