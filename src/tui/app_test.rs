use super::*;
use crate::config::DEFAULT_LAUNCH_BASE_URL;
use serde_json::json;

fn sample_document() -> Document {
    Document::from_value(&json!({
        "Categorys": [
            { "Category": "Chill", "Worlds": [
                { "ID": "wrld_123", "Name": "Sky Lounge" },
                { "ID": "wrld_456" }
            ]},
            { "Category": "Game", "Worlds": [{ "ID": "wrld_game" }] },
            { "Category": "Horror", "Worlds": [
                { "ID": "wrld_h1", "Name": "Abandoned Ward" },
                { "ID": "wrld_h2", "Name": "Night Forest" },
                { "ID": "wrld_h3", "Name": "Deep Cellar" }
            ]},
            { "Category": "Empty", "Worlds": [] }
        ]
    }))
}

fn loaded_model() -> Model {
    let mut model = Model::new(DEFAULT_LAUNCH_BASE_URL);
    update(&mut model, Msg::Loaded(Ok(sample_document())));
    model
}

// ============================================================================
// 読み込み
// ============================================================================

#[test]
fn new_model_starts_loading() {
    let model = Model::new(DEFAULT_LAUNCH_BASE_URL);
    assert!(model.is_loading());
    assert_eq!(model.active, None);
}

#[test]
fn fresh_load_selects_first_category() {
    let model = loaded_model();

    assert_eq!(model.status, Status::Ready);
    assert_eq!(model.active_name(), Some("Chill"));
    assert_eq!(model.world_state.selected(), Some(0));
}

#[test]
fn load_of_empty_document_leaves_no_active_category() {
    let mut model = Model::new(DEFAULT_LAUNCH_BASE_URL);
    update(&mut model, Msg::Loaded(Ok(Document::default())));

    assert_eq!(model.status, Status::Ready);
    assert_eq!(model.active, None);
    assert!(model.active_category().is_none());
}

#[test]
fn failed_load_clears_document_and_stores_message() {
    let mut model = loaded_model();
    update(&mut model, Msg::Refresh);
    update(&mut model, Msg::Loaded(Err("fetch failed 500".to_string())));

    assert_eq!(model.error(), Some("fetch failed 500"));
    assert!(model.document.is_empty());
    assert_eq!(model.active, None);
}

#[test]
fn reload_resets_active_category_to_first() {
    let mut model = loaded_model();
    update(&mut model, Msg::SelectCategory(2));
    update(&mut model, Msg::Refresh);
    update(&mut model, Msg::Loaded(Ok(sample_document())));

    assert_eq!(model.active, Some(0));
}

#[test]
fn last_resolved_load_wins() {
    let mut model = Model::new(DEFAULT_LAUNCH_BASE_URL);
    let other = Document::from_value(&json!({ "Categorys": [{ "Category": "Other" }] }));

    update(&mut model, Msg::Loaded(Ok(sample_document())));
    update(&mut model, Msg::Loaded(Ok(other)));

    assert_eq!(model.document.category_names(), vec!["Other"]);
    assert_eq!(model.active_name(), Some("Other"));
}

// ============================================================================
// 再読み込み
// ============================================================================

#[test]
fn refresh_starts_load_when_idle() {
    let mut model = loaded_model();
    let effect = update(&mut model, Msg::Refresh);

    assert_eq!(effect, Effect::StartLoad);
    assert!(model.is_loading());
}

#[test]
fn refresh_is_ignored_while_loading() {
    let mut model = Model::new(DEFAULT_LAUNCH_BASE_URL);
    let effect = update(&mut model, Msg::Refresh);

    assert_eq!(effect, Effect::None);
}

#[test]
fn refresh_is_available_after_error() {
    let mut model = Model::new(DEFAULT_LAUNCH_BASE_URL);
    update(&mut model, Msg::Loaded(Err("boom".to_string())));

    assert_eq!(update(&mut model, Msg::Refresh), Effect::StartLoad);
}

// ============================================================================
// カテゴリ切替
// ============================================================================

#[test]
fn select_category_shows_only_its_worlds_in_order() {
    let mut model = loaded_model();
    update(&mut model, Msg::SelectCategory(2));

    let category = model.active_category().unwrap();
    let ids: Vec<String> = category.worlds.iter().map(|w| w.launch_id()).collect();
    assert_eq!(category.name, "Horror");
    assert_eq!(ids, vec!["wrld_h1", "wrld_h2", "wrld_h3"]);
}

#[test]
fn select_category_out_of_range_is_ignored() {
    let mut model = loaded_model();
    update(&mut model, Msg::SelectCategory(9));

    assert_eq!(model.active, Some(0));
}

#[test]
fn next_and_prev_category_wrap_around() {
    let mut model = loaded_model();

    update(&mut model, Msg::PrevCategory);
    assert_eq!(model.active_name(), Some("Empty"));

    update(&mut model, Msg::NextCategory);
    assert_eq!(model.active_name(), Some("Chill"));
}

#[test]
fn switching_category_resets_world_selection() {
    let mut model = loaded_model();
    update(&mut model, Msg::NextWorld);
    assert_eq!(model.world_state.selected(), Some(1));

    update(&mut model, Msg::SelectCategory(2));
    assert_eq!(model.world_state.selected(), Some(0));

    update(&mut model, Msg::SelectCategory(3));
    assert_eq!(model.world_state.selected(), None);
}

#[test]
fn category_switch_is_ignored_while_loading() {
    let mut model = loaded_model();
    update(&mut model, Msg::Refresh);
    update(&mut model, Msg::SelectCategory(1));

    assert_eq!(model.active, Some(0));
}

// ============================================================================
// ワールド選択と起動
// ============================================================================

#[test]
fn world_selection_is_clamped() {
    let mut model = loaded_model();
    update(&mut model, Msg::PrevWorld);
    assert_eq!(model.world_state.selected(), Some(0));

    update(&mut model, Msg::NextWorld);
    update(&mut model, Msg::NextWorld);
    assert_eq!(model.world_state.selected(), Some(1));
}

#[test]
fn launch_builds_link_for_selected_world() {
    let mut model = loaded_model();
    let effect = update(&mut model, Msg::Launch);

    match effect {
        Effect::Launch(url) => assert!(url.ends_with("worldId=wrld_123")),
        other => panic!("Expected Launch, got {:?}", other),
    }
    assert_eq!(model.notice.as_deref(), Some("Launching Sky Lounge"));
}

#[test]
fn launch_without_id_has_empty_world_id() {
    let mut model = Model::new(DEFAULT_LAUNCH_BASE_URL);
    let doc = Document::from_value(&json!({
        "Categorys": [{ "Category": "Chill", "Worlds": [{ "Name": "No Id" }] }]
    }));
    update(&mut model, Msg::Loaded(Ok(doc)));

    assert_eq!(
        update(&mut model, Msg::Launch),
        Effect::Launch("https://vrchat.com/home/launch?worldId=".to_string())
    );
}

#[test]
fn launch_in_empty_category_does_nothing() {
    let mut model = loaded_model();
    update(&mut model, Msg::SelectCategory(3));

    assert_eq!(update(&mut model, Msg::Launch), Effect::None);
}

#[test]
fn launch_failure_is_shown_as_notice() {
    let mut model = loaded_model();
    update(&mut model, Msg::LaunchFailed("no handler".to_string()));

    assert_eq!(model.notice.as_deref(), Some("no handler"));
    assert_eq!(model.status, Status::Ready);
}

// ============================================================================
// キー入力
// ============================================================================

#[test]
fn digit_keys_select_category_by_position() {
    let model = loaded_model();
    assert!(matches!(
        model.key_to_msg(KeyCode::Char('3')),
        Some(Msg::SelectCategory(2))
    ));
}

#[test]
fn navigation_keys_map_to_messages() {
    let model = loaded_model();

    assert!(matches!(model.key_to_msg(KeyCode::Tab), Some(Msg::NextCategory)));
    assert!(matches!(model.key_to_msg(KeyCode::Left), Some(Msg::PrevCategory)));
    assert!(matches!(model.key_to_msg(KeyCode::Char('j')), Some(Msg::NextWorld)));
    assert!(matches!(model.key_to_msg(KeyCode::Enter), Some(Msg::Launch)));
    assert!(matches!(model.key_to_msg(KeyCode::Char('r')), Some(Msg::Refresh)));
    assert!(matches!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Quit)));
    assert!(model.key_to_msg(KeyCode::Char('x')).is_none());
}
