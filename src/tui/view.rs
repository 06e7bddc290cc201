//! ワールドライブラリ TUI の描画処理
//!
//! Model から画面を組み立てる純粋な描画関数。

use super::app::{Model, Status};
use crate::library::{PlatformBadge, World};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};

const TITLE: &str = "MyPortalLibrary Viewer";
const SUBTITLE: &str = "Share your favorite VRChat worlds";

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // ヘッダー
            Constraint::Length(1), // タブバー / 状態
            Constraint::Min(1),    // カード一覧
            Constraint::Length(1), // 通知
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_tab_bar(f, model, chunks[1]);

    if model.status == Status::Ready {
        render_cards(f, model, chunks[2]);
    }

    if let Some(notice) = &model.notice {
        let line = Paragraph::new(format!(" {}", notice)).style(Style::default().fg(Color::Yellow));
        f.render_widget(line, chunks[3]);
    }

    render_help(f, model, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", TITLE),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", SUBTITLE),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(header, area);
}

/// 読み込み中・エラー・空・タブのいずれか1つを表示
fn render_tab_bar(f: &mut Frame, model: &Model, area: Rect) {
    if model.is_loading() {
        let loading = Paragraph::new(" Loading...").style(Style::default().fg(Color::DarkGray));
        f.render_widget(loading, area);
    } else if let Some(message) = model.error() {
        let error =
            Paragraph::new(format!(" Error: {}", message)).style(Style::default().fg(Color::Red));
        f.render_widget(error, area);
    } else if model.document.is_empty() {
        let empty =
            Paragraph::new(" No categories found.").style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
    } else {
        let tabs = Tabs::new(model.document.category_names())
            .select(model.active.unwrap_or(0))
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(" | ");
        f.render_widget(tabs, area);
    }
}

fn render_cards(f: &mut Frame, model: &Model, area: Rect) {
    let Some(category) = model.active_category() else {
        return;
    };

    let selected = model.world_state.selected();
    let items: Vec<ListItem> = category
        .worlds
        .iter()
        .enumerate()
        .map(|(idx, world)| world_card(idx, world, selected == Some(idx)))
        .collect();

    let title = format!(" {} ({}) ", category.name, category.worlds.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::TOP))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = model.world_state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// ワールド1件分のカード
fn world_card(index: usize, world: &World, selected: bool) -> ListItem<'static> {
    let mut title_line = vec![
        Span::styled(world.title(index), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
    ];
    title_line.extend(platform_spans(&world.platform_support().badges()));

    let mut capacity_line = vec![
        Span::raw(format!("  min {} · max {}", world.min_capacity(), world.max_capacity())),
    ];
    if selected {
        capacity_line.push(Span::styled(
            "   [Launch World]",
            Style::default().fg(Color::Green),
        ));
    }

    ListItem::new(vec![
        Line::from(title_line),
        Line::from(Span::styled(
            format!("  {}", world.description_text()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(capacity_line),
        Line::default(),
    ])
}

fn platform_spans(badges: &[PlatformBadge]) -> Vec<Span<'static>> {
    badges
        .iter()
        .flat_map(|badge| {
            let style = match badge {
                PlatformBadge::Pc => Style::default().fg(Color::Black).bg(Color::Blue),
                PlatformBadge::Android => Style::default().fg(Color::Black).bg(Color::Green),
                PlatformBadge::NotAvailable => Style::default().fg(Color::DarkGray),
            };
            [Span::styled(format!(" {} ", badge.label()), style), Span::raw(" ")]
        })
        .collect()
}

fn render_help(f: &mut Frame, model: &Model, area: Rect) {
    let refresh_style = if model.is_loading() {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let help = Line::from(vec![
        Span::styled(
            " Tab/←/→: category · ↑/↓: select · Enter: launch · ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("r: refresh", refresh_style),
        Span::styled(" · q: quit", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(help), area);
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
