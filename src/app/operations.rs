use super::*;
use crate::utils::error::TwinPaneError;
use std::path::PathBuf;

impl App {
    /// 양쪽 패널의 선택을 검사해 소스 패널을 결정
    ///
    /// 정확히 한쪽만 선택을 보고해야 하며, 둘 다이거나 둘 다 아니면
    /// 파일 시스템을 건드리기 전에 에러로 끝납니다.
    fn resolve_source_pane(&self) -> Result<ActivePanel> {
        let left = self.left_pane.selection().is_some();
        let right = self.right_pane.selection().is_some();
        match (left, right) {
            (true, true) => Err(TwinPaneError::AmbiguousSelection),
            (true, false) => Ok(ActivePanel::Left),
            (false, true) => Ok(ActivePanel::Right),
            (false, false) => Err(TwinPaneError::NoSelection),
        }
    }

    /// 선택 규칙 위반을 에러 다이얼로그로 보고
    fn report_selection_error(&mut self, error: &TwinPaneError) {
        self.show_error("Selection", &error.to_string());
    }

    /// 선택 파일을 반대편 패널의 현재 디렉토리로 복사
    ///
    /// 같은 이름이 이미 있으면 덮어씁니다. 성공 시 대상 패널만
    /// 새로고침합니다.
    pub fn copy_to_other(&mut self) {
        let source_slot = match self.resolve_source_pane() {
            Ok(slot) => slot,
            Err(error) => {
                self.report_selection_error(&error);
                return;
            }
        };

        let Some(entry) = self.pane(source_slot).selection() else {
            return;
        };
        if entry.is_directory() {
            self.show_error("Copy failed", "Directories cannot be copied.");
            return;
        }
        let src = entry.path.clone();
        let name = entry.name.clone();

        let dest_slot = source_slot.other();
        let dest = self.pane(dest_slot).current_path.join(&name);

        match self.filesystem.copy_file(&src, &dest) {
            Ok(_) => {
                self.refresh_pane_after_operation(dest_slot);
                self.set_toast(&format!("Copied {}", name));
            }
            Err(error) => {
                self.show_error("Copy failed", &error.to_string());
            }
        }
    }

    /// 선택 항목을 반대편 패널로 이동
    ///
    /// 대상은 반대편 패널의 커서 항목으로 결정합니다. 커서가
    /// 디렉토리면 그 안으로, 파일이면 그 경로를 대체하고, 커서가
    /// 없으면 반대편 현재 디렉토리로 들어갑니다.
    pub fn move_to_other(&mut self) {
        let source_slot = match self.resolve_source_pane() {
            Ok(slot) => slot,
            Err(error) => {
                self.report_selection_error(&error);
                return;
            }
        };

        let Some(entry) = self.pane(source_slot).selection() else {
            return;
        };
        let src = entry.path.clone();
        let name = entry.name.clone();

        let dest_slot = source_slot.other();
        let dest = self.resolve_drop_target(dest_slot, &name);

        match self.filesystem.move_entry(&src, &dest) {
            Ok(()) => {
                self.refresh_pane_after_operation(dest_slot);
                self.set_toast(&format!("Moved {}", name));
            }
            Err(error) => {
                self.show_error("Move failed", &error.to_string());
            }
        }
    }

    /// 이동 대상 경로 계산
    fn resolve_drop_target(&self, dest_slot: ActivePanel, src_name: &str) -> PathBuf {
        let dest_pane = self.pane(dest_slot);
        match dest_pane.cursor_entry() {
            Some(target) if target.is_directory() => target.path.join(src_name),
            Some(target) => target.path.clone(),
            None => dest_pane.current_path.join(src_name),
        }
    }

    /// 삭제 확인 다이얼로그 표시
    pub fn request_delete(&mut self) {
        let source_slot = match self.resolve_source_pane() {
            Ok(slot) => slot,
            Err(error) => {
                self.report_selection_error(&error);
                return;
            }
        };

        let Some(entry) = self.pane(source_slot).selection() else {
            return;
        };
        if entry.is_directory() {
            self.show_error("Delete failed", "Directories cannot be deleted.");
            return;
        }

        let name = entry.name.clone();
        self.dialog = Some(DialogKind::Confirm {
            title: "Delete".to_string(),
            message: format!("Delete '{}'?", name),
            selected_button: 1,
        });
    }

    /// 확인된 삭제 실행
    ///
    /// 다이얼로그가 모달이므로 선택은 요청 시점 그대로입니다.
    pub fn confirm_delete(&mut self) {
        let source_slot = match self.resolve_source_pane() {
            Ok(slot) => slot,
            Err(error) => {
                self.report_selection_error(&error);
                return;
            }
        };

        let Some(entry) = self.pane(source_slot).selection() else {
            return;
        };
        let path = entry.path.clone();
        let name = entry.name.clone();

        match self.filesystem.delete_file(&path) {
            Ok(()) => {
                self.refresh_pane_after_operation(source_slot);
                self.set_toast(&format!("Deleted {}", name));
            }
            Err(error) => {
                self.show_error("Delete failed", &error.to_string());
            }
        }
    }

    /// 활성 패널의 현재 디렉토리에 새 파일 생성
    pub fn create_file(&mut self, name: &str) {
        let Some(name) = valid_entry_name(name) else {
            self.show_error("Create failed", "Invalid file name.");
            return;
        };

        let path = self.active_pane().current_path.join(&name);
        match self.filesystem.create_file(&path) {
            Ok(()) => {
                self.refresh_pane_after_operation(self.layout.active_panel());
                self.set_toast(&format!("Created {}", name));
            }
            Err(error) => {
                self.show_error("Create failed", &error.to_string());
            }
        }
    }

    /// 활성 패널의 현재 디렉토리에 새 디렉토리 생성
    pub fn create_directory(&mut self, name: &str) {
        let Some(name) = valid_entry_name(name) else {
            self.show_error("Create failed", "Invalid directory name.");
            return;
        };

        let path = self.active_pane().current_path.join(&name);
        match self.filesystem.create_directory(&path) {
            Ok(()) => {
                self.refresh_pane_after_operation(self.layout.active_panel());
                self.set_toast(&format!("Created {}", name));
            }
            Err(error) => {
                self.show_error("Create failed", &error.to_string());
            }
        }
    }

    /// 작업 후 새로고침
    ///
    /// 새로고침 실패는 작업 자체의 실패가 아니므로 다이얼로그 대신
    /// 토스트로만 알립니다.
    fn refresh_pane_after_operation(&mut self, slot: ActivePanel) {
        let filesystem = self.filesystem;
        if self.pane_mut(slot).refresh(&filesystem).is_err() {
            self.set_toast("Refresh failed");
        }
    }
}

/// 단일 경로 구성 요소로 쓸 수 있는 이름인지 검증
fn valid_entry_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return None;
    }
    if trimmed.contains(['/', '\\']) {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry_name() {
        assert_eq!(valid_entry_name("  notes.txt "), Some("notes.txt".to_string()));
        assert_eq!(valid_entry_name(""), None);
        assert_eq!(valid_entry_name("   "), None);
        assert_eq!(valid_entry_name("."), None);
        assert_eq!(valid_entry_name(".."), None);
        assert_eq!(valid_entry_name("a/b"), None);
        assert_eq!(valid_entry_name("a\\b"), None);
    }
}
