use thiserror::Error;

/// ポータルライブラリ統一エラー型
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("fetch failed {status}")]
    HttpStatus { status: u16 },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to open launch link: {0}")]
    Launch(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    /// 取得処理（通信・ステータス・本文）由来のエラーかどうか
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            PortalError::Network(_) | PortalError::HttpStatus { .. } | PortalError::Json(_)
        )
    }
}
