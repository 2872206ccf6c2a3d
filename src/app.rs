use crate::core::actions::generate_command_bar_items;
use crate::models::PaneState;
use crate::system::FileSystem;
use crate::ui::components::command_bar::CommandItem;
use crate::ui::components::dialog::DialogKind;
use crate::ui::layout::{ActivePanel, LayoutManager};
use crate::ui::theme::Theme;
use crate::utils::error::Result;
use std::path::Path;
use std::time::{Duration, Instant};

mod dialogs;
mod navigation;
mod operations;
mod text_edit;
mod viewer;

#[cfg(test)]
mod tests;

pub use viewer::{ImageViewerState, PlaybackStatus, TextViewerState, VideoViewerState, ViewerState};

/// 토스트 메시지 표시 시간
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 앱 상태
///
/// 두 패널과 모든 모달 상태를 소유합니다. 모든 변경은 이벤트 루프
/// 스레드에서만 일어납니다.
pub struct App {
    /// 종료 플래그
    should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 좌측 패널
    pub left_pane: PaneState,
    /// 우측 패널
    pub right_pane: PaneState,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 테마
    pub theme: Theme,
    /// 커맨드바 항목 (액션 레지스트리에서 1회 생성)
    pub command_items: Vec<CommandItem>,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 현재 열린 뷰어
    pub viewer: Option<ViewerState>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    /// 새 앱 생성 (양쪽 패널 모두 현재 디렉토리에서 시작)
    pub fn new() -> Result<Self> {
        let current = std::env::current_dir()?;
        Self::with_directories(&current, &current)
    }

    /// 지정 디렉토리로 시작하는 앱 생성
    pub fn with_directories(left_dir: &Path, right_dir: &Path) -> Result<Self> {
        let filesystem = FileSystem::new();

        let mut left_pane = PaneState::new(left_dir.to_path_buf());
        left_pane.change_directory(left_dir, &filesystem)?;

        let mut right_pane = PaneState::new(right_dir.to_path_buf());
        right_pane.change_directory(right_dir, &filesystem)?;

        let mut app = Self {
            should_quit: false,
            layout: LayoutManager::new(),
            left_pane,
            right_pane,
            filesystem,
            theme: Theme::dark(),
            command_items: generate_command_bar_items(),
            dialog: None,
            viewer: None,
            toast_message: None,
        };
        app.sync_focus();
        Ok(app)
    }

    /// 패널 슬롯으로 상태 참조
    pub fn pane(&self, slot: ActivePanel) -> &PaneState {
        match slot {
            ActivePanel::Left => &self.left_pane,
            ActivePanel::Right => &self.right_pane,
        }
    }

    /// 패널 슬롯으로 상태 가변 참조
    pub fn pane_mut(&mut self, slot: ActivePanel) -> &mut PaneState {
        match slot {
            ActivePanel::Left => &mut self.left_pane,
            ActivePanel::Right => &mut self.right_pane,
        }
    }

    /// 활성 패널 상태 반환
    pub fn active_pane(&self) -> &PaneState {
        self.pane(self.layout.active_panel())
    }

    /// 활성 패널 상태 가변 반환
    pub fn active_pane_mut(&mut self) -> &mut PaneState {
        self.pane_mut(self.layout.active_panel())
    }

    /// 패널 전환 (포커스 동기화 포함)
    pub fn toggle_panel(&mut self) {
        self.layout.toggle_active_panel();
        self.sync_focus();
    }

    /// 레이아웃의 활성 패널과 패널 상태의 포커스 플래그 동기화
    ///
    /// 선택 조회가 포커스된 패널에서만 유효하도록 유지하는 단일 지점입니다.
    pub fn sync_focus(&mut self) {
        let active = self.layout.active_panel();
        self.left_pane.focused = active == ActivePanel::Left;
        self.right_pane.focused = active == ActivePanel::Right;
    }

    /// 종료 요청
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 다이얼로그 활성 여부
    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 뷰어 활성 여부
    pub fn is_viewer_active(&self) -> bool {
        self.viewer.is_some()
    }

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거 후 현재 토스트 텍스트 반환
    pub fn toast_text(&mut self) -> Option<String> {
        match &self.toast_message {
            Some((_, since)) if since.elapsed() > TOAST_DURATION => {
                self.toast_message = None;
                None
            }
            Some((message, _)) => Some(message.clone()),
            None => None,
        }
    }

    /// 에러 다이얼로그 표시
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.dialog = Some(DialogKind::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 주기적 갱신 (비디오 재생 위치 전진)
    pub fn tick(&mut self) {
        if let Some(ViewerState::Video(video)) = &mut self.viewer {
            video.tick();
        }
    }

    /// 비디오 재생 중 여부 (이벤트 폴 타임아웃 단축용)
    pub fn is_video_playing(&self) -> bool {
        matches!(
            &self.viewer,
            Some(ViewerState::Video(video)) if video.is_playing()
        )
    }
}
