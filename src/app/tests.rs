use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use tempfile::TempDir;

fn app_with_dirs(left: &Path, right: &Path) -> App {
    App::with_directories(left, right).unwrap()
}

fn select_by_name(pane: &mut PaneState, name: &str) {
    let index = pane
        .entries
        .iter()
        .position(|entry| entry.name == name)
        .unwrap();
    pane.selected = Some(index);
}

fn is_error_dialog(app: &App) -> bool {
    matches!(app.dialog, Some(DialogKind::Error { .. }))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_copy_to_other_pane() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("a.txt"), "content").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    select_by_name(&mut app.left_pane, "a.txt");

    app.copy_to_other();

    // 원본 유지, 대상 생성, 대상 패널 새로고침
    assert!(left.path().join("a.txt").exists());
    assert_eq!(
        fs::read_to_string(right.path().join("a.txt")).unwrap(),
        "content"
    );
    assert_eq!(app.right_pane.entries.len(), 1);
    assert!(app.dialog.is_none());
}

#[test]
fn test_copy_overwrites_existing_name() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("a.txt"), "new").unwrap();
    fs::write(right.path().join("a.txt"), "old").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    select_by_name(&mut app.left_pane, "a.txt");

    app.copy_to_other();

    assert_eq!(
        fs::read_to_string(right.path().join("a.txt")).unwrap(),
        "new"
    );
    assert!(left.path().join("a.txt").exists());
}

#[test]
fn test_copy_rejects_directory() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::create_dir(left.path().join("subdir")).unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    select_by_name(&mut app.left_pane, "subdir");

    app.copy_to_other();

    assert!(is_error_dialog(&app));
    assert!(!right.path().join("subdir").exists());
}

#[test]
fn test_ambiguous_selection_is_error_without_mutation() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("a.txt"), "x").unwrap();
    fs::write(right.path().join("b.txt"), "x").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    // 양쪽 패널이 동시에 선택을 보고하는 비정상 상태
    app.left_pane.focused = true;
    app.right_pane.focused = true;

    app.copy_to_other();

    assert!(is_error_dialog(&app));
    assert_eq!(fs::read_dir(left.path()).unwrap().count(), 1);
    assert_eq!(fs::read_dir(right.path()).unwrap().count(), 1);
}

#[test]
fn test_no_selection_is_error_without_mutation() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(right.path().join("b.txt"), "x").unwrap();

    // 포커스된 좌측 패널이 비어 있음
    let mut app = app_with_dirs(left.path(), right.path());
    assert!(app.left_pane.selection().is_none());

    app.move_to_other();

    assert!(is_error_dialog(&app));
    assert_eq!(fs::read_dir(right.path()).unwrap().count(), 1);
}

#[test]
fn test_move_onto_directory_target_lands_inside() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("x.txt"), "payload").unwrap();
    fs::create_dir(right.path().join("inbox")).unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    select_by_name(&mut app.left_pane, "x.txt");
    select_by_name(&mut app.right_pane, "inbox");

    app.move_to_other();

    assert!(!left.path().join("x.txt").exists());
    assert_eq!(
        fs::read_to_string(right.path().join("inbox").join("x.txt")).unwrap(),
        "payload"
    );
    // 대상 패널만 새로고침되고, 원래 패널 목록은 그대로
    assert!(app.left_pane.entries.iter().any(|e| e.name == "x.txt"));
}

#[test]
fn test_move_without_target_cursor_uses_directory() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("x.txt"), "payload").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    select_by_name(&mut app.left_pane, "x.txt");
    assert!(app.right_pane.cursor_entry().is_none());

    app.move_to_other();

    assert!(right.path().join("x.txt").exists());
    assert!(app.right_pane.entries.iter().any(|e| e.name == "x.txt"));
}

#[test]
fn test_delete_requires_confirmation() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("doomed.txt"), "x").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    select_by_name(&mut app.left_pane, "doomed.txt");

    app.request_delete();
    assert!(matches!(app.dialog, Some(DialogKind::Confirm { .. })));
    assert!(left.path().join("doomed.txt").exists());

    // 기본 버튼은 Cancel
    app.handle_dialog_key(key(KeyCode::Enter));
    assert!(app.dialog.is_none());
    assert!(left.path().join("doomed.txt").exists());

    app.request_delete();
    app.handle_dialog_key(key(KeyCode::Char('y')));
    assert!(!left.path().join("doomed.txt").exists());
    assert!(app.left_pane.entries.is_empty());
}

#[test]
fn test_delete_rejects_directory() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::create_dir(left.path().join("keep")).unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    select_by_name(&mut app.left_pane, "keep");

    app.request_delete();

    assert!(is_error_dialog(&app));
    assert!(left.path().join("keep").exists());
}

#[test]
fn test_create_file_in_active_pane() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    app.create_file("notes.txt");

    assert!(left.path().join("notes.txt").exists());
    assert!(app.left_pane.entries.iter().any(|e| e.name == "notes.txt"));
}

#[test]
fn test_create_rejects_existing_and_invalid_names() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("taken.txt"), "x").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());

    app.create_file("taken.txt");
    assert!(is_error_dialog(&app));
    assert_eq!(fs::read_to_string(left.path().join("taken.txt")).unwrap(), "x");

    app.dialog = None;
    app.create_file("bad/name");
    assert!(is_error_dialog(&app));

    app.dialog = None;
    app.create_directory("  ");
    assert!(is_error_dialog(&app));
}

#[test]
fn test_create_directory_via_input_dialog() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    app.open_make_directory_dialog();

    for c in "docs".chars() {
        app.handle_dialog_key(key(KeyCode::Char(c)));
    }
    app.handle_dialog_key(key(KeyCode::Enter));

    assert!(app.dialog.is_none());
    assert!(left.path().join("docs").is_dir());
    assert!(app.left_pane.entries.iter().any(|e| e.name == "docs"));
}

#[test]
fn test_toggle_panel_moves_focus() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::write(left.path().join("a.txt"), "x").unwrap();
    fs::write(right.path().join("b.txt"), "x").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    assert!(app.left_pane.focused);
    assert!(app.left_pane.selection().is_some());
    assert!(app.right_pane.selection().is_none());

    app.toggle_panel();
    assert!(app.right_pane.focused);
    assert!(app.left_pane.selection().is_none());
    assert_eq!(app.right_pane.selection().unwrap().name, "b.txt");
}

#[test]
fn test_text_save_back_does_not_refresh_pane() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    let path = left.path().join("note.txt");
    fs::write(&path, "hello").unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    app.open_file(&path);
    assert!(matches!(app.viewer, Some(ViewerState::Text(_))));

    if let Some(ViewerState::Text(text)) = &mut app.viewer {
        text.insert_char('X');
    }

    // 나열 이후 디스크에 생긴 파일은 저장으로는 보이지 않아야 함
    fs::write(left.path().join("later.txt"), "x").unwrap();
    app.save_text_viewer();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Xhello");
    assert_eq!(app.left_pane.entries.len(), 1);
    if let Some(ViewerState::Text(text)) = &app.viewer {
        assert!(!text.modified);
    }
}

#[test]
fn test_open_unknown_format_is_error() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    let path = left.path().join("blob.zip");
    fs::write(&path, [0x50, 0x4b, 0x03, 0x04]).unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    app.open_file(&path);

    assert!(app.viewer.is_none());
    assert!(is_error_dialog(&app));
}

#[test]
fn test_go_to_path_and_parent() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    let nested = left.path().join("nested");
    fs::create_dir(&nested).unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    app.go_to_path(&nested.display().to_string());
    assert!(app.left_pane.current_path.ends_with("nested"));

    let filesystem = app.filesystem;
    app.left_pane.navigate_up(&filesystem).unwrap();
    assert_eq!(
        app.left_pane.current_path,
        std::path::absolute(left.path()).unwrap()
    );
}

#[test]
fn test_go_to_missing_path_is_error() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();

    let mut app = app_with_dirs(left.path(), right.path());
    let before = app.left_pane.current_path.clone();

    app.go_to_path("/no/such/path/anywhere");

    assert!(is_error_dialog(&app));
    assert_eq!(app.left_pane.current_path, before);
}

#[test]
fn test_filter_applies_to_active_pane_only() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    for name in ["report.txt", "image.png", "reply.doc"] {
        fs::write(left.path().join(name), "x").unwrap();
        fs::write(right.path().join(name), "x").unwrap();
    }

    let mut app = app_with_dirs(left.path(), right.path());
    app.apply_filter("rep");

    assert_eq!(app.left_pane.entries.len(), 2);
    assert_eq!(app.right_pane.entries.len(), 3);
}
