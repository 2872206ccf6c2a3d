// Viewer component - 파일 뷰어 오버레이
//
// 텍스트 에디터, 이미지 정보, 비디오 트랜스포트 렌더링

use crate::app::{ImageViewerState, TextViewerState, VideoViewerState, ViewerState};
use crate::ui::components::dialog::centered_rect;
use crate::ui::theme::Theme;
use crate::utils::formatter::{format_file_size, format_playback_position};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 뷰어 오버레이 컴포넌트
pub struct ViewerOverlay<'a> {
    state: &'a ViewerState,
    theme: Theme,
}

impl<'a> ViewerOverlay<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self {
            state,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }
}

impl<'a> Widget for ViewerOverlay<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            ViewerState::Text(text) => render_text(text, &self.theme, area, buf),
            ViewerState::Image(image) => render_image(image, &self.theme, area, buf),
            ViewerState::Video(video) => render_video(video, &self.theme, area, buf),
        }
    }
}

fn render_text(text: &TextViewerState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let marker = if text.modified { " *" } else { "" };
    let title = format!(" {}{} ", text.path.display(), marker);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(title)
        .title_bottom(" Ctrl+S: save  Esc: close ");
    let inner = block.inner(area);

    Clear.render(area, buf);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let visible = text
        .lines
        .iter()
        .enumerate()
        .skip(text.scroll_offset)
        .take(inner.height as usize);

    for (row, (index, line)) in visible.enumerate() {
        let y = inner.y + row as u16;
        let rendered = Line::from(Span::styled(
            line.clone(),
            Style::default().fg(theme.fg_primary),
        ));
        buf.set_line(inner.x, y, &rendered, inner.width);

        // 커서 셀 반전
        if index == text.cursor_line {
            let offset = line[..text.cursor_col].width() as u16;
            if offset < inner.width {
                buf.set_style(
                    Rect::new(inner.x + offset, y, 1, 1),
                    Style::default()
                        .fg(theme.fg_primary)
                        .add_modifier(Modifier::REVERSED),
                );
            }
        }
    }
}

fn render_image(image: &ImageViewerState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let target = if image.fullscreen {
        area
    } else {
        centered_rect(50, 8, area)
    };

    let name = image
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" {} ", name))
        .title_bottom(" f: fullscreen  Esc: close ");
    let inner = block.inner(target);

    Clear.render(target, buf);
    block.render(target, buf);

    let dimensions = match image.dimensions {
        Some((width, height)) => format!("{} x {} px", width, height),
        None => "size unknown".to_string(),
    };

    let lines = [
        format!("Path: {}", image.path.display()),
        format!("Size: {}", format_file_size(image.file_size)),
        format!("Dimensions: {}", dimensions),
    ];

    let style = Style::default().fg(theme.fg_primary);
    for (row, line) in lines.iter().enumerate() {
        if row as u16 >= inner.height {
            break;
        }
        buf.set_line(
            inner.x,
            inner.y + row as u16,
            &Line::from(Span::styled(line.clone(), style)),
            inner.width,
        );
    }
}

fn render_video(video: &VideoViewerState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let target = centered_rect(50, 8, area);

    let name = video
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" {} ", name))
        .title_bottom(" space: play/pause  r: rewind  Esc: close ");
    let inner = block.inner(target);

    Clear.render(target, buf);
    block.render(target, buf);

    let status = if video.is_playing() {
        Span::styled("Playing", Style::default().fg(theme.success))
    } else {
        Span::styled("Paused", Style::default().fg(theme.warning))
    };

    let position = format_playback_position(video.position.as_secs());
    let style = Style::default().fg(theme.fg_primary);
    let lines = [
        Line::from(Span::styled(
            format!("Size: {}", format_file_size(video.file_size)),
            style,
        )),
        Line::from(vec![status, Span::styled(format!("  {}", position), style)]),
    ];

    for (row, line) in lines.iter().enumerate() {
        if row as u16 >= inner.height {
            break;
        }
        buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
    }
}
