// 색상 테마
//
// 설정 파일 없이 고정 팔레트만 제공합니다.

use ratatui::style::Color;

/// 애플리케이션 색상 테마
#[derive(Debug, Clone)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: Color,
    pub fg_primary: Color,

    // 패널
    pub panel_active_border: Color,
    pub panel_inactive_border: Color,

    // 파일 리스트
    pub file_normal: Color,
    pub file_selected: Color,
    pub file_selected_bg: Color,
    pub directory: Color,

    // UI 컴포넌트
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub command_bar_bg: Color,
    pub command_bar_fg: Color,

    // 강조
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_primary: Color::Rgb(30, 30, 30),
            fg_primary: Color::Rgb(212, 212, 212),
            panel_active_border: Color::Rgb(0, 120, 212),
            panel_inactive_border: Color::Rgb(60, 60, 60),
            file_normal: Color::Rgb(212, 212, 212),
            file_selected: Color::Rgb(255, 255, 255),
            file_selected_bg: Color::Rgb(0, 120, 212),
            directory: Color::Rgb(86, 156, 214),
            status_bar_bg: Color::Rgb(0, 120, 212),
            status_bar_fg: Color::Rgb(255, 255, 255),
            command_bar_bg: Color::Rgb(40, 40, 40),
            command_bar_fg: Color::Rgb(180, 180, 180),
            accent: Color::Rgb(0, 120, 212),
            warning: Color::Rgb(255, 204, 0),
            error: Color::Rgb(244, 71, 71),
            success: Color::Rgb(78, 201, 176),
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self::default()
    }
}
