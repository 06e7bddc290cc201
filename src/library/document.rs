//! ライブラリドキュメントのデータモデル
//!
//! リモート JSON のキー（`Categorys`, `Worlds`, `ID` など）をそのまま受け付ける。
//! 構造が不正な部分は失敗させず、空として扱う。

use super::platform::PlatformSupport;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 説明が無い場合の表示
pub const NO_DESCRIPTION: &str = "No description";

/// 人数が無い場合の表示
pub const NO_CAPACITY: &str = "-";

// ============================================================================
// Document
// ============================================================================

/// リモート JSON 全体
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    #[serde(rename = "Categorys")]
    pub categories: Vec<Category>,
}

impl Document {
    /// JSON 文字列からパース（JSON として不正な場合のみエラー）
    pub fn from_json_str(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    /// JSON 値から構築（`Categorys` が配列でなければ空）
    pub fn from_value(value: &Value) -> Self {
        let categories = value
            .get("Categorys")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Category::from_value).collect())
            .unwrap_or_default();

        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// カテゴリ名の一覧（ドキュメント順）
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}

// ============================================================================
// Category
// ============================================================================

/// タブ1つ分のワールドのまとまり
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Category {
    #[serde(rename = "Category")]
    pub name: String,
    #[serde(rename = "Worlds")]
    pub worlds: Vec<World>,
}

impl Category {
    /// オブジェクト以外は名前・ワールドとも空のカテゴリになる
    fn from_value(value: &Value) -> Self {
        let name = match value.get("Category") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => number_text(n),
            _ => String::new(),
        };

        let worlds = value
            .get("Worlds")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(World::from_value).collect())
            .unwrap_or_default();

        Self { name, worlds }
    }
}

// ============================================================================
// World
// ============================================================================

/// ワールド1件
///
/// 全フィールドが任意で、値の型も保証されないため生の JSON 値で保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct World {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_capacity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Value>,
}

impl World {
    /// オブジェクト以外は全フィールド未定義のワールドになる（位置は保持）
    fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// 表示名（Name → ID → `World {index}`）
    pub fn title(&self, index: usize) -> String {
        display_text(self.name.as_ref())
            .or_else(|| display_text(self.id.as_ref()))
            .unwrap_or_else(|| format!("World {}", index))
    }

    pub fn description_text(&self) -> String {
        display_text(self.description.as_ref()).unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }

    /// 推奨人数
    pub fn min_capacity(&self) -> String {
        display_text(self.recommended_capacity.as_ref()).unwrap_or_else(|| NO_CAPACITY.to_string())
    }

    /// 最大人数
    pub fn max_capacity(&self) -> String {
        display_text(self.capacity.as_ref()).unwrap_or_else(|| NO_CAPACITY.to_string())
    }

    /// 起動リンク用の ID（無ければ空文字列）
    pub fn launch_id(&self) -> String {
        match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => number_text(n),
            _ => String::new(),
        }
    }

    pub fn platform_support(&self) -> PlatformSupport {
        PlatformSupport::from_value(self.platform.as_ref())
    }
}

/// 表示可能な値なら文字列化する
///
/// `null` / `false` / `0` / `""` / 未定義はフォールバック対象として None。
fn display_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(number_text(n)),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// 数値を文字列化（整数値の浮動小数点数は小数部なしで表示）
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
