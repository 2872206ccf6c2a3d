use super::*;
use super::text_edit::TextBufferEdit;
use crate::ui::components::dialog::InputPurpose;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    fn open_input_dialog(&mut self, title: &str, prompt: &str, value: &str, purpose: InputPurpose) {
        self.dialog = Some(DialogKind::Input {
            title: title.to_string(),
            prompt: prompt.to_string(),
            value: value.to_string(),
            cursor_pos: value.len(),
            selected_button: 0,
            purpose,
        });
    }

    pub fn open_create_file_dialog(&mut self) {
        self.open_input_dialog("Create File", "File name:", "", InputPurpose::CreateFile);
    }

    pub fn open_make_directory_dialog(&mut self) {
        self.open_input_dialog(
            "Make Directory",
            "Directory name:",
            "",
            InputPurpose::MakeDirectory,
        );
    }

    /// 경로 입력은 현재 경로로 미리 채움
    pub fn open_go_to_path_dialog(&mut self) {
        let current = self.active_pane().current_path.display().to_string();
        self.open_input_dialog("Go To Path", "Path:", &current, InputPurpose::GoToPath);
    }

    /// 필터 입력은 기존 필터로 미리 채움
    pub fn open_filter_dialog(&mut self) {
        let current = self.active_pane().filter.clone().unwrap_or_default();
        self.open_input_dialog("Filter", "Pattern:", &current, InputPurpose::Filter);
    }

    pub fn open_roots_dialog(&mut self) {
        let items = self.filesystem.list_roots();
        self.dialog = Some(DialogKind::Roots {
            items,
            selected_index: 0,
        });
    }

    /// 다이얼로그가 열려 있을 때의 키 처리
    pub fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = &mut self.dialog else {
            return;
        };

        match dialog {
            DialogKind::Error { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.dialog = None;
                }
            }
            DialogKind::Confirm {
                selected_button, ..
            } => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    *selected_button = 1 - *selected_button;
                }
                KeyCode::Esc | KeyCode::Char('n') => {
                    self.dialog = None;
                }
                KeyCode::Char('y') => {
                    self.dialog = None;
                    self.confirm_delete();
                }
                KeyCode::Enter => {
                    let confirmed = *selected_button == 0;
                    self.dialog = None;
                    if confirmed {
                        self.confirm_delete();
                    }
                }
                _ => {}
            },
            DialogKind::Roots {
                items,
                selected_index,
            } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    *selected_index = selected_index.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected_index + 1 < items.len() {
                        *selected_index += 1;
                    }
                }
                KeyCode::Esc => {
                    self.dialog = None;
                }
                KeyCode::Enter => {
                    let target = items.get(*selected_index).map(|root| root.path.clone());
                    self.dialog = None;
                    if let Some(path) = target {
                        self.go_to_path(&path.display().to_string());
                    }
                }
                _ => {}
            },
            DialogKind::Input {
                value,
                cursor_pos,
                selected_button,
                purpose,
                ..
            } => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if key.code == KeyCode::Char('w') {
                        TextBufferEdit::delete_prev_word(value, cursor_pos);
                    }
                    return;
                }
                match key.code {
                    KeyCode::Char(c) => TextBufferEdit::insert_char(value, cursor_pos, c),
                    KeyCode::Backspace => TextBufferEdit::backspace(value, cursor_pos),
                    KeyCode::Delete => TextBufferEdit::delete(value, cursor_pos),
                    KeyCode::Left => TextBufferEdit::left(value, cursor_pos),
                    KeyCode::Right => TextBufferEdit::right(value, cursor_pos),
                    KeyCode::Home => TextBufferEdit::home(cursor_pos),
                    KeyCode::End => TextBufferEdit::end(value, cursor_pos),
                    KeyCode::Tab => *selected_button = 1 - *selected_button,
                    KeyCode::Esc => {
                        self.dialog = None;
                    }
                    KeyCode::Enter => {
                        let confirmed = *selected_button == 0;
                        let input = value.clone();
                        let purpose = *purpose;
                        self.dialog = None;
                        if confirmed {
                            self.submit_input(purpose, &input);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// 입력 다이얼로그 확정 라우팅
    fn submit_input(&mut self, purpose: InputPurpose, input: &str) {
        match purpose {
            InputPurpose::CreateFile => self.create_file(input),
            InputPurpose::MakeDirectory => self.create_directory(input),
            InputPurpose::GoToPath => self.go_to_path(input),
            InputPurpose::Filter => self.apply_filter(input),
        }
    }
}
