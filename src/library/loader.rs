//! ライブラリドキュメントの取得

use super::document::Document;
use crate::config::AppConfig;
use crate::error::{PortalError, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

/// ドキュメント取得クライアント
pub struct Loader {
    client: Client,
    url: String,
}

impl Loader {
    /// 設定からクライアントを構築
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: config.http.build_client(),
            url: config.data_url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// ドキュメントを取得（キャッシュ無効化ヘッダー付き）
    pub async fn fetch(&self) -> Result<Document> {
        tracing::info!(url = %self.url, "fetching world library");

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "world library fetch failed");
            return Err(PortalError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let document = Document::from_json_str(&body)?;

        tracing::info!(
            categories = document.categories.len(),
            "world library loaded"
        );
        Ok(document)
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
