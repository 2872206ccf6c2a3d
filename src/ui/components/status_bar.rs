// Status bar component - 상태바 컴포넌트
//
// 파일/디렉토리 개수, 총 크기, 토스트 메시지 표시

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 파일 개수
    file_count: usize,
    /// 디렉토리 개수
    dir_count: usize,
    /// 총 크기 (포맷된 문자열)
    total_size: &'a str,
    /// 토스트 메시지 (있으면 카운트 대신 표시)
    toast: Option<&'a str>,
    /// 테마
    theme: Theme,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            file_count: 0,
            dir_count: 0,
            total_size: "0 B",
            toast: None,
            theme: Theme::default(),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn dir_count(mut self, count: usize) -> Self {
        self.dir_count = count;
        self
    }

    pub fn total_size(mut self, size: &'a str) -> Self {
        self.total_size = size;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.status_bar_bg)
            .fg(self.theme.status_bar_fg);

        let text = match self.toast {
            Some(message) => format!(" {}", message),
            None => format!(
                " {} files, {} dirs | {}",
                self.file_count, self.dir_count, self.total_size
            ),
        };

        let line = Line::from(Span::styled(text, style));
        Paragraph::new(line).style(style).render(area, buf);
    }
}
