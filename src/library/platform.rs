//! プラットフォーム表示
//!
//! データ提供側のキーは大文字・小文字が混在し、値も真偽値と文字列 `"true"` が
//! 混在している。受け付ける組み合わせは提供側に合わせて固定している。

use serde_json::Value;

/// 対応プラットフォーム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformSupport {
    pub pc: bool,
    pub android: bool,
}

/// 表示用バッジ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformBadge {
    Pc,
    Android,
    NotAvailable,
}

impl PlatformBadge {
    pub fn label(&self) -> &'static str {
        match self {
            PlatformBadge::Pc => "PC",
            PlatformBadge::Android => "Android",
            PlatformBadge::NotAvailable => "N/A",
        }
    }
}

impl PlatformSupport {
    /// `Platform` の値から判定（オブジェクト以外はどちらも非対応）
    pub fn from_value(platform: Option<&Value>) -> Self {
        let Some(obj) = platform.and_then(Value::as_object) else {
            return Self::default();
        };

        let is_true = |key: &str| matches!(obj.get(key), Some(Value::Bool(true)));
        let is_true_str = |key: &str| matches!(obj.get(key), Some(Value::String(s)) if s == "true");

        Self {
            pc: is_true("PC") || is_true("pc") || is_true_str("PC"),
            android: is_true("Android") || is_true("android") || is_true_str("Android"),
        }
    }

    /// 表示するバッジ（PC → Android の順、どちらも無ければ N/A のみ）
    pub fn badges(&self) -> Vec<PlatformBadge> {
        let mut badges = Vec::new();
        if self.pc {
            badges.push(PlatformBadge::Pc);
        }
        if self.android {
            badges.push(PlatformBadge::Android);
        }
        if badges.is_empty() {
            badges.push(PlatformBadge::NotAvailable);
        }
        badges
    }

    /// バッジを空白区切りで連結したラベル
    pub fn label(&self) -> String {
        self.badges()
            .iter()
            .map(|b| b.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "platform_test.rs"]
mod tests;
