// Panel component - 파일 패널 컴포넌트
//
// 파일 리스트 표시, 커서, 필터 배지, 테두리 렌더링

use crate::models::file_entry::FileEntry;
use crate::ui::theme::Theme;
use crate::utils::formatter::{format_date, format_entry_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

/// 크기 컬럼 너비
const SIZE_COL_WIDTH: usize = 10;
/// 날짜 컬럼 너비 ("YYYY-MM-DD HH:MM:SS")
const DATE_COL_WIDTH: usize = 19;

/// 패널 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Inactive,
    Active,
}

/// 패널 컴포넌트
pub struct Panel<'a> {
    /// 패널 제목 (현재 절대 경로)
    title: &'a str,
    /// 패널 상태
    status: PanelStatus,
    /// 파일 목록
    entries: &'a [FileEntry],
    /// 커서 위치
    selected: Option<usize>,
    /// 스크롤 오프셋
    scroll_offset: usize,
    /// 필터 배지 (활성 필터 표시)
    filter: Option<&'a str>,
    /// 테마
    theme: Theme,
}

impl<'a> Panel<'a> {
    pub fn new() -> Self {
        Self {
            title: "",
            status: PanelStatus::default(),
            entries: &[],
            selected: None,
            scroll_offset: 0,
            filter: None,
            theme: Theme::default(),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn status(mut self, status: PanelStatus) -> Self {
        self.status = status;
        self
    }

    pub fn entries(mut self, entries: &'a [FileEntry]) -> Self {
        self.entries = entries;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn filter(mut self, filter: Option<&'a str>) -> Self {
        self.filter = filter;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }
}

impl<'a> Default for Panel<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// 표시 너비에 맞게 문자열 자르기
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result
}

impl<'a> Widget for Panel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = match self.status {
            PanelStatus::Active => self.theme.panel_active_border,
            PanelStatus::Inactive => self.theme.panel_inactive_border,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(truncate_to_width(self.title, area.width.saturating_sub(2) as usize));

        if let Some(filter) = self.filter {
            block = block.title_bottom(format!(" filter: {} ", filter));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let name_width = (inner.width as usize)
            .saturating_sub(SIZE_COL_WIDTH + DATE_COL_WIDTH + 4)
            .max(4);

        let visible = self
            .entries
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize);

        for (row, (index, entry)) in visible.enumerate() {
            let is_cursor = self.selected == Some(index);

            let fg = if is_cursor {
                self.theme.file_selected
            } else if entry.is_directory() {
                self.theme.directory
            } else {
                self.theme.file_normal
            };

            let mut style = Style::default().fg(fg);
            if is_cursor {
                style = style.bg(self.theme.file_selected_bg);
            }
            if entry.is_directory() {
                style = style.add_modifier(Modifier::BOLD);
            }

            let marker = if entry.is_directory() { "/" } else { " " };
            let name = truncate_to_width(&entry.name, name_width);
            let size = format_entry_size(entry.size);
            let date = format_date(entry.modified);

            let line = Line::from(vec![Span::styled(
                format!(
                    "{}{:<name_w$} {:>size_w$} {:>date_w$}",
                    marker,
                    name,
                    size,
                    date,
                    name_w = name_width,
                    size_w = SIZE_COL_WIDTH,
                    date_w = DATE_COL_WIDTH,
                ),
                style,
            )]);

            buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // 한글은 폭 2
        assert_eq!(truncate_to_width("한글이름", 4), "한글");
        assert_eq!(truncate_to_width("한글이름", 5), "한글");
    }
}
