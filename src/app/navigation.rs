use super::*;
use crate::core::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// 일반 모드 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::MoveUp => {
                self.active_pane_mut().move_up();
                self.scroll_active_pane();
            }
            Action::MoveDown => {
                self.active_pane_mut().move_down();
                self.scroll_active_pane();
            }
            Action::GoToTop => {
                self.active_pane_mut().select_first();
                self.scroll_active_pane();
            }
            Action::GoToBottom => {
                self.active_pane_mut().select_last();
                self.scroll_active_pane();
            }
            Action::GoToParent => {
                let filesystem = self.filesystem;
                if let Err(error) = self.active_pane_mut().navigate_up(&filesystem) {
                    self.show_error("Navigation failed", &error.to_string());
                }
            }
            Action::EnterSelected => self.enter_selected(),
            Action::TogglePanel => self.toggle_panel(),
            Action::Refresh => {
                let filesystem = self.filesystem;
                if let Err(error) = self.active_pane_mut().refresh(&filesystem) {
                    self.show_error("Refresh failed", &error.to_string());
                }
            }
            Action::GoToPath => self.open_go_to_path_dialog(),
            Action::SelectRoot => self.open_roots_dialog(),
            Action::CopyToOther => self.copy_to_other(),
            Action::MoveToOther => self.move_to_other(),
            Action::Delete => self.request_delete(),
            Action::CreateFile => self.open_create_file_dialog(),
            Action::MakeDirectory => self.open_make_directory_dialog(),
            Action::StartFilter => self.open_filter_dialog(),
            Action::ClearFilter => {
                let filesystem = self.filesystem;
                if let Err(error) = self.active_pane_mut().clear_filter(&filesystem) {
                    self.show_error("Refresh failed", &error.to_string());
                }
            }
            Action::Quit => self.quit(),
        }
    }

    /// 커서 항목 열기: 디렉토리는 진입, 파일은 뷰어로
    fn enter_selected(&mut self) {
        let Some(entry) = self.active_pane().cursor_entry() else {
            return;
        };
        let path = entry.path.clone();

        if entry.is_directory() {
            let filesystem = self.filesystem;
            if let Err(error) = self.active_pane_mut().change_directory(&path, &filesystem) {
                self.show_error("Navigation failed", &error.to_string());
            }
        } else {
            self.open_file(&path);
        }
    }

    /// 경로 문자열로 활성 패널 이동
    pub fn go_to_path(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        let filesystem = self.filesystem;
        if let Err(error) = self
            .active_pane_mut()
            .change_directory(Path::new(trimmed), &filesystem)
        {
            self.show_error("Navigation failed", &error.to_string());
        }
    }

    /// 활성 패널에 검색 필터 적용
    pub fn apply_filter(&mut self, query: &str) {
        let filesystem = self.filesystem;
        if let Err(error) = self.active_pane_mut().apply_filter(query, &filesystem) {
            self.show_error("Filter failed", &error.to_string());
        }
    }

    fn scroll_active_pane(&mut self) {
        let height = self.layout.panel_viewport_height();
        self.active_pane_mut().ensure_visible(height);
    }

    /// 뷰어가 열려 있을 때의 키 처리
    pub fn handle_viewer_key(&mut self, key: KeyEvent) {
        if self.viewer.is_none() {
            return;
        }
        if key.code == KeyCode::Esc {
            self.close_viewer();
            return;
        }

        if matches!(self.viewer, Some(ViewerState::Text(_))) {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if key.code == KeyCode::Char('s') {
                    self.save_text_viewer();
                }
                return;
            }
            let height = self.layout.panel_viewport_height();
            if let Some(ViewerState::Text(text)) = &mut self.viewer {
                match key.code {
                    KeyCode::Char(c) => text.insert_char(c),
                    KeyCode::Enter => text.insert_newline(),
                    KeyCode::Backspace => text.backspace(),
                    KeyCode::Left => text.move_left(),
                    KeyCode::Right => text.move_right(),
                    KeyCode::Up => text.move_up(),
                    KeyCode::Down => text.move_down(),
                    KeyCode::Home => text.cursor_col = 0,
                    KeyCode::End => text.cursor_col = text.lines[text.cursor_line].len(),
                    _ => {}
                }
                text.ensure_visible(height);
            }
            return;
        }

        if let Some(ViewerState::Image(image)) = &mut self.viewer {
            if matches!(key.code, KeyCode::Char('f') | KeyCode::Enter) {
                image.toggle_fullscreen();
            }
            return;
        }

        if let Some(ViewerState::Video(video)) = &mut self.viewer {
            match key.code {
                KeyCode::Char(' ') | KeyCode::Char('p') => video.toggle_play(),
                KeyCode::Char('r') => video.rewind(),
                _ => {}
            }
        }
    }
}
