use super::text_edit::TextBufferEdit;
use super::*;
use crate::system::{classify, ContentKind};
use std::path::PathBuf;

/// 재생 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
}

/// 텍스트 뷰어/에디터 상태
///
/// 버퍼는 뷰어가 단독 소유하며, 저장 시에만 디스크에 반영됩니다.
#[derive(Debug, Clone)]
pub struct TextViewerState {
    pub path: PathBuf,
    pub lines: Vec<String>,
    pub cursor_line: usize,
    /// 현재 라인 내 바이트 오프셋 (항상 문자 경계)
    pub cursor_col: usize,
    pub scroll_offset: usize,
    pub modified: bool,
    /// 원본이 개행으로 끝났는지 (저장 시 보존)
    had_trailing_newline: bool,
}

impl TextViewerState {
    pub fn from_content(path: PathBuf, content: &str) -> Self {
        let had_trailing_newline = content.ends_with('\n');
        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            path,
            lines,
            cursor_line: 0,
            cursor_col: 0,
            scroll_offset: 0,
            modified: false,
            had_trailing_newline,
        }
    }

    /// 저장할 전체 내용
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        if self.had_trailing_newline {
            content.push('\n');
        }
        content
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_line];
        TextBufferEdit::insert_char(line, &mut self.cursor_col, c);
        self.modified = true;
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_line];
            TextBufferEdit::backspace(line, &mut self.cursor_col);
            self.modified = true;
        } else if self.cursor_line > 0 {
            // 이전 라인과 병합
            let current = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].len();
            self.lines[self.cursor_line].push_str(&current);
            self.modified = true;
        }
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor_line];
        let rest = line.split_off(self.cursor_col);
        self.lines.insert(self.cursor_line + 1, rest);
        self.cursor_line += 1;
        self.cursor_col = 0;
        self.modified = true;
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            TextBufferEdit::left(&self.lines[self.cursor_line], &mut self.cursor_col);
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].len();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.lines[self.cursor_line].len() {
            TextBufferEdit::right(&self.lines[self.cursor_line], &mut self.cursor_col);
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.clamp_col();
        }
    }

    pub fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.cursor_line < self.scroll_offset {
            self.scroll_offset = self.cursor_line;
        } else if self.cursor_line >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor_line + 1 - viewport_height;
        }
    }

    fn clamp_col(&mut self) {
        self.cursor_col =
            TextBufferEdit::clamp_to_boundary(&self.lines[self.cursor_line], self.cursor_col);
    }
}

/// 이미지 뷰어 상태
#[derive(Debug, Clone)]
pub struct ImageViewerState {
    pub path: PathBuf,
    pub file_size: u64,
    /// 픽셀 크기 (헤더 프로브 실패 시 None, 막지 않음)
    pub dimensions: Option<(u32, u32)>,
    pub fullscreen: bool,
}

impl ImageViewerState {
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }
}

/// 비디오 플레이어 상태
///
/// 경과 위치 시계만 유지합니다. 재생 중이면 틱마다 경과 시간을
/// 누적하고, 되감기는 위치를 0으로 되돌립니다.
#[derive(Debug, Clone)]
pub struct VideoViewerState {
    pub path: PathBuf,
    pub file_size: u64,
    pub status: PlaybackStatus,
    pub position: Duration,
    last_tick: Option<Instant>,
}

impl VideoViewerState {
    pub fn new(path: PathBuf, file_size: u64) -> Self {
        // 원본처럼 열리자마자 자동 재생
        Self {
            path,
            file_size,
            status: PlaybackStatus::Playing,
            position: Duration::ZERO,
            last_tick: Some(Instant::now()),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn toggle_play(&mut self) {
        match self.status {
            PlaybackStatus::Playing => {
                self.tick();
                self.status = PlaybackStatus::Paused;
                self.last_tick = None;
            }
            PlaybackStatus::Paused => {
                self.status = PlaybackStatus::Playing;
                self.last_tick = Some(Instant::now());
            }
        }
    }

    pub fn rewind(&mut self) {
        self.position = Duration::ZERO;
        if self.is_playing() {
            self.last_tick = Some(Instant::now());
        }
    }

    /// 재생 중이면 마지막 틱 이후 경과 시간을 위치에 누적
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last_tick {
            self.position += now.duration_since(last);
        }
        self.last_tick = Some(now);
    }
}

/// 뷰어 상태
///
/// 각 뷰어는 독립적인 오버레이이며, 열려 있는 동안 패널과는
/// 상호작용하지 않습니다 (텍스트 저장의 쓰기 제외).
#[derive(Debug, Clone)]
pub enum ViewerState {
    Text(TextViewerState),
    Image(ImageViewerState),
    Video(VideoViewerState),
}

impl App {
    /// 파일 열기: 분류 후 해당 뷰어 실행
    ///
    /// Unknown은 "열 수 없음" 에러 다이얼로그로 라우팅됩니다.
    pub fn open_file(&mut self, path: &Path) {
        match classify(path) {
            ContentKind::Text => self.open_text_viewer(path),
            ContentKind::Image => self.open_image_viewer(path),
            ContentKind::Video => self.open_video_viewer(path),
            ContentKind::Unknown => {
                self.show_error("Unknown file format", "Cannot open this file.");
            }
        }
    }

    fn open_text_viewer(&mut self, path: &Path) {
        match self.filesystem.read_text(path) {
            Ok(content) => {
                self.viewer = Some(ViewerState::Text(TextViewerState::from_content(
                    path.to_path_buf(),
                    &content,
                )));
            }
            Err(_) => {
                self.show_error("Open failed", "Could not open the file.");
            }
        }
    }

    fn open_image_viewer(&mut self, path: &Path) {
        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        // 프로브 실패는 크기 미상으로 강등될 뿐 열기를 막지 않음
        let dimensions = image::image_dimensions(path).ok();
        self.viewer = Some(ViewerState::Image(ImageViewerState {
            path: path.to_path_buf(),
            file_size,
            dimensions,
            fullscreen: false,
        }));
    }

    fn open_video_viewer(&mut self, path: &Path) {
        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        self.viewer = Some(ViewerState::Video(VideoViewerState::new(
            path.to_path_buf(),
            file_size,
        )));
    }

    /// 뷰어 닫기
    ///
    /// 패널 상태는 건드리지 않습니다.
    pub fn close_viewer(&mut self) {
        self.viewer = None;
    }

    /// 텍스트 뷰어 버퍼를 같은 경로에 저장
    ///
    /// 파일 내용만 바뀌고 디렉토리 구성은 그대로이므로,
    /// 원래 패널 목록은 새로고침하지 않습니다.
    pub fn save_text_viewer(&mut self) {
        let Some(ViewerState::Text(text)) = &mut self.viewer else {
            return;
        };

        let path = text.path.clone();
        let content = text.content();
        match self.filesystem.write_text(&path, &content) {
            Ok(()) => {
                text.modified = false;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.set_toast(&format!("Saved {}", name));
            }
            Err(_) => {
                self.show_error("Save failed", "Could not save the file.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_viewer_editing() {
        let mut text =
            TextViewerState::from_content(PathBuf::from("/tmp/a.txt"), "hello\nworld\n");
        assert_eq!(text.lines, vec!["hello", "world"]);
        assert!(!text.modified);

        text.move_down();
        text.insert_char('!');
        assert_eq!(text.lines[1], "!world");
        assert!(text.modified);

        text.insert_newline();
        assert_eq!(text.lines, vec!["hello", "!", "world"]);
        assert_eq!(text.cursor_line, 2);
        assert_eq!(text.cursor_col, 0);

        text.backspace();
        assert_eq!(text.lines, vec!["hello", "!world"]);
        assert_eq!(text.cursor_line, 1);
        assert_eq!(text.cursor_col, 1);
    }

    #[test]
    fn test_text_viewer_preserves_trailing_newline() {
        let with = TextViewerState::from_content(PathBuf::from("/tmp/a"), "one\ntwo\n");
        assert_eq!(with.content(), "one\ntwo\n");

        let without = TextViewerState::from_content(PathBuf::from("/tmp/b"), "one\ntwo");
        assert_eq!(without.content(), "one\ntwo");
    }

    #[test]
    fn test_text_viewer_empty_file() {
        let text = TextViewerState::from_content(PathBuf::from("/tmp/e"), "");
        assert_eq!(text.lines, vec![String::new()]);
        assert_eq!(text.content(), "");
    }

    #[test]
    fn test_image_fullscreen_toggle() {
        let mut image = ImageViewerState {
            path: PathBuf::from("/tmp/p.png"),
            file_size: 10,
            dimensions: Some((800, 600)),
            fullscreen: false,
        };
        image.toggle_fullscreen();
        assert!(image.fullscreen);
        image.toggle_fullscreen();
        assert!(!image.fullscreen);
    }

    #[test]
    fn test_video_playback_transitions() {
        let mut video = VideoViewerState::new(PathBuf::from("/tmp/v.mp4"), 100);
        assert!(video.is_playing());

        std::thread::sleep(Duration::from_millis(15));
        video.tick();
        assert!(video.position >= Duration::from_millis(15));

        video.toggle_play();
        assert!(!video.is_playing());
        let paused_at = video.position;

        std::thread::sleep(Duration::from_millis(10));
        video.tick();
        assert_eq!(video.position, paused_at);

        video.rewind();
        assert_eq!(video.position, Duration::ZERO);
        assert!(!video.is_playing());

        video.toggle_play();
        assert!(video.is_playing());
    }
}
