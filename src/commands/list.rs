//! portal-library list コマンド
//!
//! ドキュメントを1回取得し、カテゴリごとの表として表示する。

use crate::config::AppConfig;
use crate::library::{Category, Document, Loader};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Show only this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output the parsed document as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, config: AppConfig) -> Result<(), String> {
    let loader = Loader::new(&config);
    let document = loader
        .fetch()
        .await
        .map_err(|e| format!("Failed to load {}: {}", loader.url(), e))?;

    let categories = select_categories(&document, args.category.as_deref())?;

    if args.json {
        let selected = Document {
            categories: categories.into_iter().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&selected).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    if categories.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    for category in categories {
        println!(
            "{} {}",
            category.name.bold().cyan(),
            format!("({} worlds)", category.worlds.len()).dimmed()
        );
        println!("{}", build_table(category));
        println!();
    }

    Ok(())
}

/// 表示対象のカテゴリを絞り込む（同名が複数あれば先頭）
fn select_categories<'a>(
    document: &'a Document,
    name: Option<&str>,
) -> Result<Vec<&'a Category>, String> {
    match name {
        Some(name) => document
            .find_category(name)
            .map(|c| vec![c])
            .ok_or_else(|| format!("Category not found: {}", name)),
        None => Ok(document.categories.iter().collect()),
    }
}

/// カテゴリ1つ分の表
fn build_table(category: &Category) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Platform", "Players", "ID"]);

    for (idx, world) in category.worlds.iter().enumerate() {
        table.add_row(vec![
            world.title(idx),
            world.platform_support().label(),
            format!("{} / {}", world.min_capacity(), world.max_capacity()),
            world.launch_id(),
        ]);
    }

    table
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
