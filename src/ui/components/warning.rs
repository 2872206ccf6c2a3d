// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 표시되는 경고 화면

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    theme: Theme,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            theme: Theme::default(),
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.current_size;

        let lines = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Style::default().fg(self.theme.fg_primary)),
                Span::styled(
                    format!("{}x{}", width, height),
                    Style::default().fg(self.theme.error),
                ),
            ]),
            Line::from(vec![
                Span::styled("Required: ", Style::default().fg(self.theme.fg_primary)),
                Span::styled(
                    format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(self.theme.success),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.warning)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(self.theme.bg_primary));

        paragraph.render(area, buf);
    }
}
