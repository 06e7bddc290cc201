//! 設定ファイル（config.toml）と HTTP 設定

use crate::env::EnvVar;
use crate::error::{PortalError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 既定のデータ取得先
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/Riluchi/MyPortalLibrary_data/refs/heads/main/MyPortalLibrary.json";

/// 既定の起動リンクのベース URL
pub const DEFAULT_LAUNCH_BASE_URL: &str = "https://vrchat.com/home/launch";

/// データ取得先を上書きする環境変数
pub const DATA_URL_ENV: &str = "PORTAL_LIBRARY_DATA_URL";

/// 起動リンクのベース URL を上書きする環境変数
pub const LAUNCH_BASE_URL_ENV: &str = "PORTAL_LIBRARY_LAUNCH_BASE_URL";

/// HTTP設定
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// タイムアウト（秒）。未指定ならタイムアウトなし
    pub timeout_secs: Option<u64>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: "portal-library".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// ワールド一覧 JSON の URL
    pub data_url: String,
    /// 起動リンクのベース URL
    pub launch_base_url: String,
    pub http: HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            launch_base_url: DEFAULT_LAUNCH_BASE_URL.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl AppConfig {
    /// 設定を読み込む
    ///
    /// `path` が未指定なら既定パスを使う。ファイルが無ければ既定値。
    /// いずれの場合も環境変数による上書きを適用する。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let config = match path {
            Some(p) => Self::load_from(&p)?,
            None => Self::default(),
        };

        Ok(config.with_env_overrides())
    }

    /// 指定パスから読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| {
            PortalError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// 環境変数で上書き
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = EnvVar::get(DATA_URL_ENV) {
            self.data_url = url;
        }
        if let Some(base) = EnvVar::get(LAUNCH_BASE_URL_ENV) {
            self.launch_base_url = base;
        }
        self
    }
}

/// 既定の設定ファイルパス
///
/// `$XDG_CONFIG_HOME/portal-library/config.toml` → `$HOME/.config/portal-library/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    let base = EnvVar::get("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("portal-library").join("config.toml"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
