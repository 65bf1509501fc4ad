//! App-level tests driven through key events, without a terminal

use ratatui::crossterm::event::KeyCode;
use tempfile::TempDir;

use super::app::{App, CurrentScreen, EditingField, NoticeKind};
use super::event_handler::handle_key_event;
use crate::config::AppConfig;
use crate::model::{EntryListModel, EntryPolicy};
use crate::storage::DocumentFile;

fn app_in(dir: &TempDir) -> App {
    let config = AppConfig::default();
    let document = DocumentFile::new(dir.path().join("data.json"));
    App::new(&config, EntryListModel::new(config.editor.policy()), document)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key_event(app, KeyCode::Char(c)).unwrap();
    }
}

fn press(app: &mut App, key: KeyCode) -> bool {
    handle_key_event(app, key).unwrap()
}

#[test]
fn test_add_entry_from_form() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    assert_eq!(app.form.currently_editing, Some(EditingField::Title));

    type_text(&mut app, "Hi");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "  Hello world  ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.model.len(), 1);
    assert_eq!(app.model.entries()[0].content, "Hello world");
    assert!(app.form.title.is_empty() && app.form.content.is_empty());
    assert_eq!(app.metrics.total_content_chars, 11);
    assert!(app.dirty);
}

#[test]
fn test_empty_content_flags_content_field() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    type_text(&mut app, "Only a title");
    press(&mut app, KeyCode::Enter);

    assert!(app.model.is_empty());
    assert!(app.has_validation_errors());
    assert!(app.form.get_error(EditingField::Content).is_some());
    assert_eq!(app.form.currently_editing, Some(EditingField::Content));
}

#[test]
fn test_live_counter_error_for_long_title() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    type_text(&mut app, &"t".repeat(26));
    assert!(app.field_counter(EditingField::Title).is_exceeded());
    assert!(app.form.get_error(EditingField::Title).is_some());

    press(&mut app, KeyCode::Backspace);
    assert!(app.form.get_error(EditingField::Title).is_none());
}

#[test]
fn test_edit_session_via_table() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.model.add_entry("A", "hello").unwrap();
    app.model.add_entry("B", "world").unwrap();
    app.refresh_metrics();

    press(&mut app, KeyCode::Esc); // focus table
    assert!(!app.form_focused());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));

    assert_eq!(app.model.editing(), Some(1));
    assert_eq!(app.form.content, "world");
    assert!(app.form_focused());

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "!");
    press(&mut app, KeyCode::Enter);

    assert!(!app.model.is_editing());
    assert_eq!(app.model.entries()[1].content, "world!");
    assert_eq!(app.model.len(), 2);
}

#[test]
fn test_escape_cancels_edit() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.model.add_entry("A", "hello").unwrap();
    app.refresh_metrics();

    app.begin_edit_selected();
    type_text(&mut app, "changed");
    press(&mut app, KeyCode::Esc);

    assert!(!app.model.is_editing());
    assert!(app.form.title.is_empty());
    assert_eq!(app.model.entries()[0].title, "A");
}

#[test]
fn test_delete_with_confirmation() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.model.add_entry("A", "hello").unwrap();
    app.model.add_entry("B", "world").unwrap();
    app.refresh_metrics();

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.model.len(), 2);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.current_screen, CurrentScreen::Main);
    assert_eq!(app.model.len(), 1);
    assert_eq!(app.model.entries()[0].content, "world");
}

#[test]
fn test_removing_edited_entry_clears_form() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.model.add_entry("A", "hello").unwrap();
    app.refresh_metrics();

    app.begin_edit_selected();
    app.delete_selected_entry();

    assert!(!app.model.is_editing());
    assert!(app.form.content.is_empty());
    assert!(app.table_state.selected().is_none());
}

#[test]
fn test_export_then_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.model.add_entry("Hi", "Hello world").unwrap();
    app.model.add_entry("", "Second entry").unwrap();
    app.refresh_metrics();

    let out = dir.path().join("out.json");
    app.export_filename_input = out.display().to_string();
    app.current_screen = CurrentScreen::ExportFileName;
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        r#"[{"Title":"Hi","Content":"Hello world"},{"Title":"","Content":"Second entry"}]"#
    );
    assert!(!app.dirty);

    let mut other = app_in(&dir);
    other.import_path_input = out.display().to_string();
    other.current_screen = CurrentScreen::ImportPath;
    press(&mut other, KeyCode::Enter);
    assert_eq!(other.model.entries(), app.model.entries());
    assert_eq!(other.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
}

#[test]
fn test_import_missing_file_reports_error() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.import_path_input = dir.path().join("nope.json").display().to_string();
    app.current_screen = CurrentScreen::ImportPath;
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    assert!(app.model.is_empty());
}

#[test]
fn test_over_limit_warns_and_blocks_export() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::default();
    let policy = EntryPolicy::default().with_size_limit(40);
    let mut app = App::new(
        &config,
        EntryListModel::new(policy),
        DocumentFile::new(dir.path().join("data.json")),
    );

    type_text(&mut app, "Title");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "content that pushes past forty bytes");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.model.len(), 1);
    assert!(app.metrics.over_limit);
    assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Warning));

    let out = dir.path().join("big.json");
    app.export_filename_input = out.display().to_string();
    assert!(app.export_to_file().is_err());
    assert!(!out.exists());
}

#[test]
fn test_notice_expires_on_tick() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.set_warning("JSON size exceeds the limit".to_string());
    let shown = app.notice.as_ref().unwrap().shown_at;

    app.tick(shown + std::time::Duration::from_secs(1));
    assert!(app.notice.is_some());
    app.tick(shown + app.notice_ttl);
    assert!(app.notice.is_none());
}

#[test]
fn test_quit_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    press(&mut app, KeyCode::Esc);
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.current_screen, CurrentScreen::Exiting);
    assert!(!press(&mut app, KeyCode::Char('n')));
    press(&mut app, KeyCode::Char('q'));
    assert!(press(&mut app, KeyCode::Char('y')));
}
