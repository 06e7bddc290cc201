//! ワールドライブラリ TUI
//!
//! ratatui/crossterm を使用したタブ付きカード一覧を提供する。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update
//! - `view`: 画面描画

mod app;
mod view;

use crate::library::{Launcher, Loader};
use app::{Effect, Model, Msg};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// イベント待ちの間隔（取得結果の反映もこの周期で行う）
const TICK: Duration = Duration::from_millis(100);

/// TUI の実行に必要な依存一式
pub struct Session<'a, L: Launcher> {
    pub handle: Handle,
    pub loader: Arc<Loader>,
    pub launcher: &'a L,
    pub launch_base_url: String,
}

/// TUI を実行
///
/// ブロッキングで動作する。取得処理は `handle` 上のタスクとして実行する。
pub fn run<L: Launcher>(session: Session<'_, L>) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;

    let result = stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout())))
        .and_then(|mut terminal| event_loop(&mut terminal, &session));

    // ターミナルを復元（途中で失敗していても必ず実行）
    let restored = restore_terminal();

    first_error(result, restored)
}

/// raw モードと代替スクリーンを解除（両方試行し、最初のエラーを返す）
fn restore_terminal() -> io::Result<()> {
    let raw = terminal::disable_raw_mode();
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    first_error(raw, screen)
}

/// 先に起きたエラーを優先して結合
fn first_error(primary: io::Result<()>, secondary: io::Result<()>) -> io::Result<()> {
    primary.and(secondary)
}

/// メインループ
fn event_loop<L: Launcher>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &Session<'_, L>,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = Model::new(session.launch_base_url.clone());
    spawn_load(session, &tx);

    while !model.should_quit {
        terminal.draw(|f| view::view(f, &model))?;

        drain_loaded(&mut model, &mut rx, session, &tx);

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = model.key_to_msg(key.code) {
                        dispatch(&mut model, msg, session, &tx);
                    }
                }
            }
        }
    }

    Ok(())
}

/// 完了した取得結果を到着順に反映（最後に届いたものが残る）
fn drain_loaded<L: Launcher>(
    model: &mut Model,
    rx: &mut UnboundedReceiver<Msg>,
    session: &Session<'_, L>,
    tx: &UnboundedSender<Msg>,
) {
    while let Ok(msg) = rx.try_recv() {
        dispatch(model, msg, session, tx);
    }
}

/// update を実行し、返された副作用を処理
fn dispatch<L: Launcher>(
    model: &mut Model,
    msg: Msg,
    session: &Session<'_, L>,
    tx: &UnboundedSender<Msg>,
) {
    match app::update(model, msg) {
        Effect::None => {}
        Effect::StartLoad => spawn_load(session, tx),
        Effect::Launch(url) => {
            if let Err(err) = session.launcher.launch(&url) {
                tracing::warn!(%url, error = %err, "launch failed");
                app::update(model, Msg::LaunchFailed(err.to_string()));
            }
        }
    }
}

/// 取得タスクを開始（キャンセルはしない）
fn spawn_load<L: Launcher>(session: &Session<'_, L>, tx: &UnboundedSender<Msg>) {
    let loader = Arc::clone(&session.loader);
    let tx = tx.clone();

    session.handle.spawn(async move {
        let result = loader.fetch().await.map_err(|err| {
            if err.is_fetch_error() {
                tracing::warn!(error = %err, "world library unavailable");
            } else {
                tracing::error!(error = %err, "unexpected error while loading world library");
            }
            err.to_string()
        });
        let _ = tx.send(Msg::Loaded(result));
    });
}

#[cfg(test)]
#[path = "tui_test.rs"]
mod tests;
