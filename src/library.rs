//! ワールドライブラリ
//!
//! リモートの JSON ドキュメントとその取得・表示用ヘルパーを提供する。
//!
//! ## モジュール構成
//!
//! - `document`: Document / Category / World
//! - `platform`: プラットフォーム表示の判定
//! - `launch`: 起動リンクの生成と起動
//! - `loader`: HTTP 取得

mod document;
mod launch;
mod loader;
mod platform;

pub use document::{Category, Document, World};
pub use launch::{launch_url, Launcher, SystemLauncher};
pub use loader::Loader;
pub use platform::PlatformBadge;
