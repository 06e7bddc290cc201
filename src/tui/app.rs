//! ワールドライブラリ TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: 画面全体の状態（ドキュメント + 読み込み状態 + 選択中カテゴリ）
//! - `Msg`: アプリケーションへのメッセージ
//! - `Effect`: update 後に実行すべき副作用

use crate::library::{launch_url, Category, Document, World};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Status（読み込み状態）
// ============================================================================

/// 読み込み状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// 取得中
    Loading,
    /// 取得失敗
    Failed(String),
    /// 表示可能
    Ready,
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug)]
pub enum Msg {
    /// 終了
    Quit,
    /// 次のカテゴリへ
    NextCategory,
    /// 前のカテゴリへ
    PrevCategory,
    /// 指定インデックスのカテゴリへ
    SelectCategory(usize),
    /// 次のワールドを選択
    NextWorld,
    /// 前のワールドを選択
    PrevWorld,
    /// 選択中のワールドを起動
    Launch,
    /// 再読み込み
    Refresh,
    /// 取得完了
    Loaded(Result<Document, String>),
    /// 起動リンクを開けなかった
    LaunchFailed(String),
}

// ============================================================================
// Effect（副作用）
// ============================================================================

/// update() の戻り値
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// 取得タスクを開始
    StartLoad,
    /// 起動リンクを開く
    Launch(String),
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub document: Document,
    pub status: Status,
    /// 選択中のカテゴリ（ドキュメント読み込み時に先頭へ戻る）
    pub active: Option<usize>,
    /// カード一覧の選択状態
    pub world_state: ListState,
    /// ステータス行に出す一時メッセージ
    pub notice: Option<String>,
    pub launch_base_url: String,
    pub should_quit: bool,
}

impl Model {
    /// 初回取得中の状態で作成
    pub fn new(launch_base_url: impl Into<String>) -> Self {
        Self {
            document: Document::default(),
            status: Status::Loading,
            active: None,
            world_state: ListState::default(),
            notice: None,
            launch_base_url: launch_base_url.into(),
            should_quit: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.document.category(self.active?)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active_category().map(|c| c.name.as_str())
    }

    /// 選択中のワールド（カテゴリ内インデックス付き）
    pub fn selected_world(&self) -> Option<(usize, &World)> {
        let index = self.world_state.selected()?;
        let world = self.active_category()?.worlds.get(index)?;
        Some((index, world))
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Tab | KeyCode::Right => Some(Msg::NextCategory),
            KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevCategory),
            KeyCode::Char(c @ '1'..='9') => Some(Msg::SelectCategory(c as usize - '1' as usize)),
            KeyCode::Up | KeyCode::Char('k') => Some(Msg::PrevWorld),
            KeyCode::Down | KeyCode::Char('j') => Some(Msg::NextWorld),
            KeyCode::Enter => Some(Msg::Launch),
            KeyCode::Char('r') | KeyCode::F(5) => Some(Msg::Refresh),
            _ => None,
        }
    }

    /// カテゴリを切り替え、カード選択を先頭に戻す
    fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
        let has_worlds = self
            .active_category()
            .is_some_and(|c| !c.worlds.is_empty());
        self.world_state.select(if has_worlds { Some(0) } else { None });
        tracing::debug!(category = ?self.active_name(), "active category changed");
    }

    fn category_count(&self) -> usize {
        self.document.categories.len()
    }

    fn world_count(&self) -> usize {
        self.active_category().map_or(0, |c| c.worlds.len())
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) -> Effect {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
            Effect::None
        }
        Msg::NextCategory => {
            let len = model.category_count();
            if model.status == Status::Ready && len > 0 {
                let next = model.active.map_or(0, |i| (i + 1) % len);
                model.set_active(Some(next));
            }
            Effect::None
        }
        Msg::PrevCategory => {
            let len = model.category_count();
            if model.status == Status::Ready && len > 0 {
                let prev = model.active.map_or(0, |i| (i + len - 1) % len);
                model.set_active(Some(prev));
            }
            Effect::None
        }
        Msg::SelectCategory(index) => {
            if model.status == Status::Ready && index < model.category_count() {
                model.set_active(Some(index));
            }
            Effect::None
        }
        Msg::NextWorld => {
            let len = model.world_count();
            if len > 0 {
                let current = model.world_state.selected().unwrap_or(0);
                model.world_state.select(Some((current + 1).min(len - 1)));
            }
            Effect::None
        }
        Msg::PrevWorld => {
            if model.world_count() > 0 {
                let current = model.world_state.selected().unwrap_or(0);
                model.world_state.select(Some(current.saturating_sub(1)));
            }
            Effect::None
        }
        Msg::Launch => {
            if model.status != Status::Ready {
                return Effect::None;
            }
            let Some((url, title)) = model.selected_world().map(|(index, world)| {
                (
                    launch_url(&model.launch_base_url, &world.launch_id()),
                    world.title(index),
                )
            }) else {
                return Effect::None;
            };
            model.notice = Some(format!("Launching {}", title));
            Effect::Launch(url)
        }
        Msg::Refresh => {
            // 取得中は無効
            if model.is_loading() {
                return Effect::None;
            }
            model.status = Status::Loading;
            model.notice = None;
            Effect::StartLoad
        }
        Msg::Loaded(Ok(document)) => {
            model.document = document;
            model.status = Status::Ready;
            let first = if model.document.is_empty() { None } else { Some(0) };
            model.set_active(first);
            Effect::None
        }
        Msg::Loaded(Err(message)) => {
            model.document = Document::default();
            model.status = Status::Failed(message);
            model.set_active(None);
            Effect::None
        }
        Msg::LaunchFailed(message) => {
            model.notice = Some(message);
            Effect::None
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
