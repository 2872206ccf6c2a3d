// Layout system - 듀얼 패널 레이아웃
//
// 터미널 크기에 따른 레이아웃 모드:
// - 60+ cols, 10+ rows: 듀얼 패널 모드
// - 그 미만: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 10;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 듀얼 패널 모드
    DualPanel,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 활성 패널
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    Left,
    Right,
}

impl ActivePanel {
    /// 패널 전환
    pub fn toggle(&mut self) {
        *self = match self {
            ActivePanel::Left => ActivePanel::Right,
            ActivePanel::Right => ActivePanel::Left,
        };
    }

    /// 반대쪽 패널
    pub fn other(self) -> Self {
        match self {
            ActivePanel::Left => ActivePanel::Right,
            ActivePanel::Right => ActivePanel::Left,
        }
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 좌측 패널 영역
    pub left_panel: Rect,
    /// 우측 패널 영역
    pub right_panel: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
}

/// 레이아웃 매니저
#[derive(Debug, Clone)]
pub struct LayoutManager {
    mode: LayoutMode,
    active_panel: ActivePanel,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::DualPanel,
            active_panel: ActivePanel::default(),
            terminal_size: (0, 0),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 맞춰 레이아웃 재계산
    pub fn update(&mut self, size: Rect) {
        self.terminal_size = (size.width, size.height);

        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            self.mode = LayoutMode::TooSmall;
            return;
        }
        self.mode = LayoutMode::DualPanel;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // 패널 영역
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(size);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        self.areas = LayoutAreas {
            left_panel: panels[0],
            right_panel: panels[1],
            status_bar: rows[1],
            command_bar: rows[2],
        };
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn active_panel(&self) -> ActivePanel {
        self.active_panel
    }

    pub fn toggle_active_panel(&mut self) {
        self.active_panel.toggle();
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 패널 목록 뷰포트 높이 (테두리 2줄 제외)
    pub fn panel_viewport_height(&self) -> usize {
        self.areas.left_panel.height.saturating_sub(2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small_mode() {
        let mut layout = LayoutManager::new();
        layout.update(Rect::new(0, 0, 50, 8));
        assert_eq!(layout.mode(), LayoutMode::TooSmall);
    }

    #[test]
    fn test_dual_panel_split() {
        let mut layout = LayoutManager::new();
        layout.update(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.mode(), LayoutMode::DualPanel);
        let areas = layout.areas();
        assert_eq!(areas.left_panel.width + areas.right_panel.width, 100);
        assert_eq!(areas.status_bar.height, 1);
        assert_eq!(areas.command_bar.height, 1);
    }

    #[test]
    fn test_active_panel_toggle() {
        let mut layout = LayoutManager::new();
        assert_eq!(layout.active_panel(), ActivePanel::Left);
        layout.toggle_active_panel();
        assert_eq!(layout.active_panel(), ActivePanel::Right);
        assert_eq!(layout.active_panel().other(), ActivePanel::Left);
    }
}
