// Command bar component - 하단 키 힌트 바
//
// 액션 레지스트리에서 생성된 항목을 표시합니다.

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드바 항목 (키 + 라벨)
#[derive(Debug, Clone)]
pub struct CommandItem {
    pub key: &'static str,
    pub label: &'static str,
}

impl CommandItem {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// 커맨드바 컴포넌트
pub struct CommandBar<'a> {
    items: &'a [CommandItem],
    theme: Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(items: &'a [CommandItem]) -> Self {
        Self {
            items,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }
}

impl<'a> Widget for CommandBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar_style = Style::default()
            .bg(self.theme.command_bar_bg)
            .fg(self.theme.command_bar_fg);
        let key_style = bar_style
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        for item in self.items {
            spans.push(Span::styled(format!(" {}", item.key), key_style));
            spans.push(Span::styled(format!(":{} ", item.label), bar_style));
        }

        Paragraph::new(Line::from(spans))
            .style(bar_style)
            .render(area, buf);
    }
}
