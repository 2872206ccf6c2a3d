// Dialog component - 모달 다이얼로그
//
// 입력/확인/에러/메시지/루트 선택 다이얼로그 렌더링

use crate::system::filesystem::RootEntry;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// 입력 다이얼로그 목적
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// 새 파일 생성
    CreateFile,
    /// 새 디렉토리 생성
    MakeDirectory,
    /// 경로 직접 이동
    GoToPath,
    /// 검색 필터 입력
    Filter,
}

/// 다이얼로그 종류
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// 입력 다이얼로그
    Input {
        title: String,
        prompt: String,
        value: String,
        cursor_pos: usize,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: InputPurpose,
    },
    /// 확인 다이얼로그 (Yes/No)
    Confirm {
        title: String,
        message: String,
        selected_button: usize, // 0: OK, 1: Cancel
    },
    /// 에러 다이얼로그
    Error { title: String, message: String },
    /// 파일 시스템 루트 선택 다이얼로그
    Roots {
        items: Vec<RootEntry>,
        selected_index: usize,
    },
}

/// 다이얼로그 렌더링 컴포넌트
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    theme: Theme,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }
}

/// 화면 중앙의 고정 크기 영역 계산
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl<'a> Dialog<'a> {
    fn button_line(&self, selected_button: usize) -> Line<'static> {
        let normal = Style::default().fg(self.theme.fg_primary);
        let highlight = Style::default()
            .fg(self.theme.file_selected)
            .bg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        Line::from(vec![
            Span::styled(
                "[ OK ]",
                if selected_button == 0 { highlight } else { normal },
            ),
            Span::raw("   "),
            Span::styled(
                "[ Cancel ]",
                if selected_button == 1 { highlight } else { normal },
            ),
        ])
        .centered()
    }

    fn render_box(&self, title: &str, border: ratatui::style::Color, area: Rect, buf: &mut Buffer) -> Rect {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.theme.bg_primary))
            .title(format!(" {} ", title));
        let inner = block.inner(area);
        block.render(area, buf);
        inner
    }
}

impl<'a> Widget for Dialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.kind {
            DialogKind::Input {
                title,
                prompt,
                value,
                cursor_pos,
                selected_button,
                ..
            } => {
                let rect = centered_rect(50, 7, area);
                let inner = self.render_box(title, self.theme.accent, rect, buf);

                let text_style = Style::default().fg(self.theme.fg_primary);
                let cursor_style = text_style.add_modifier(Modifier::REVERSED);

                // 커서 위치를 반전으로 표시
                let (before, rest) = value.split_at((*cursor_pos).min(value.len()));
                let mut rest_chars = rest.chars();
                let at_cursor = rest_chars.next().map(|c| c.to_string());
                let after: String = rest_chars.collect();

                let mut input_spans = vec![
                    Span::styled("> ", Style::default().fg(self.theme.accent)),
                    Span::styled(before.to_string(), text_style),
                ];
                match at_cursor {
                    Some(ch) => {
                        input_spans.push(Span::styled(ch, cursor_style));
                        input_spans.push(Span::styled(after, text_style));
                    }
                    None => input_spans.push(Span::styled(" ", cursor_style)),
                }

                let lines = vec![
                    Line::from(Span::styled(prompt.clone(), text_style)),
                    Line::from(input_spans),
                    Line::default(),
                    self.button_line(*selected_button),
                ];
                Paragraph::new(lines).render(inner, buf);
            }
            DialogKind::Confirm {
                title,
                message,
                selected_button,
            } => {
                let rect = centered_rect(50, 7, area);
                let inner = self.render_box(title, self.theme.warning, rect, buf);

                let lines = vec![
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(self.theme.fg_primary),
                    )),
                    Line::default(),
                    self.button_line(*selected_button),
                ];
                Paragraph::new(lines).render(inner, buf);
            }
            DialogKind::Error { title, message } => {
                let rect = centered_rect(50, 6, area);
                let inner = self.render_box(title, self.theme.error, rect, buf);

                let lines = vec![
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(self.theme.fg_primary),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Press Enter to close",
                        Style::default().fg(self.theme.command_bar_fg),
                    ))
                    .centered(),
                ];
                Paragraph::new(lines).render(inner, buf);
            }
            DialogKind::Roots {
                items,
                selected_index,
            } => {
                let height = (items.len() as u16 + 2).clamp(4, area.height);
                let rect = centered_rect(50, height, area);
                let inner = self.render_box("Select root", self.theme.accent, rect, buf);

                let lines: Vec<Line> = items
                    .iter()
                    .enumerate()
                    .map(|(index, root)| {
                        let style = if index == *selected_index {
                            Style::default()
                                .fg(self.theme.file_selected)
                                .bg(self.theme.file_selected_bg)
                        } else {
                            Style::default().fg(self.theme.fg_primary)
                        };
                        Line::from(Span::styled(format!(" {} ", root.name), style))
                    })
                    .collect();
                Paragraph::new(lines).render(inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamped() {
        let area = Rect::new(0, 0, 30, 5);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 5);
    }
}
