use crate::models::file_entry::FileEntry;
use crate::system::filesystem::FileSystem;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 패널 상태
///
/// 하나의 디렉토리 브라우저 뷰가 소유하는 전체 상태입니다.
/// 탐색, 필터, 작업 후 새로고침으로만 변경되며, 항상 이벤트 루프
/// 스레드 한 곳에서만 수정됩니다.
#[derive(Debug, Clone)]
pub struct PaneState {
    /// 현재 절대 경로 (정규화됨)
    pub current_path: PathBuf,
    /// 마지막 새로고침 시점의 (필터 적용된) 디렉토리 목록
    pub entries: Vec<FileEntry>,
    /// 선택된 항목 인덱스 (최대 하나)
    pub selected: Option<usize>,
    /// 스크롤 오프셋
    pub scroll_offset: usize,
    /// 포커스 여부 (선택 조회는 포커스된 패널에서만 유효)
    pub focused: bool,
    /// 검색 필터 (대소문자 무시 부분 문자열)
    pub filter: Option<String>,
}

impl PaneState {
    /// 새 패널 상태 생성
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_path: path,
            entries: Vec::new(),
            selected: None,
            scroll_offset: 0,
            focused: false,
            filter: None,
        }
    }

    /// 디렉토리 나열
    ///
    /// 직계 자식만 다시 읽어 표시 목록을 통째로 교체하고, 성공 시
    /// 현재 경로를 정규화된 절대 경로로 저장합니다. 실패하면 기존
    /// 목록과 경로는 그대로 유지됩니다.
    pub fn list(&mut self, path: &Path, filesystem: &FileSystem) -> Result<()> {
        let absolute = std::path::absolute(path)?;
        let mut entries = filesystem.read_directory(&absolute)?;

        // 필터 적용 (항상 방금 읽은 live 목록에 대해)
        if let Some(ref filter) = self.filter {
            let needle = filter.to_lowercase();
            entries.retain(|entry| entry.name.to_lowercase().contains(&needle));
        }

        self.current_path = absolute;
        self.entries = entries;

        // 선택 인덱스가 범위를 벗어나면 조정
        match self.selected {
            Some(_) if self.entries.is_empty() => {
                self.selected = None;
            }
            Some(index) if index >= self.entries.len() => {
                self.selected = Some(self.entries.len() - 1);
            }
            _ => {}
        }

        Ok(())
    }

    /// 현재 경로 다시 나열
    pub fn refresh(&mut self, filesystem: &FileSystem) -> Result<()> {
        let path = self.current_path.clone();
        self.list(&path, filesystem)
    }

    /// 경로 변경
    ///
    /// 성공 시 선택과 스크롤을 초기화합니다.
    pub fn change_directory(&mut self, path: &Path, filesystem: &FileSystem) -> Result<()> {
        self.list(path, filesystem)?;
        self.selected = if self.entries.is_empty() {
            None
        } else {
            Some(0)
        };
        self.scroll_offset = 0;
        Ok(())
    }

    /// 상위 디렉토리로 이동
    ///
    /// 이미 루트이면 조용히 아무것도 하지 않습니다.
    pub fn navigate_up(&mut self, filesystem: &FileSystem) -> Result<()> {
        let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
            return Ok(());
        };
        self.change_directory(&parent, filesystem)
    }

    /// 검색 필터 적용 (live 목록 기준 재나열 + 필터를 한 번에)
    ///
    /// 빈 쿼리는 일반 새로고침과 동일합니다.
    pub fn apply_filter(&mut self, query: &str, filesystem: &FileSystem) -> Result<()> {
        let trimmed = query.trim();
        self.filter = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.refresh(filesystem)
    }

    /// 필터 해제 후 새로고침
    pub fn clear_filter(&mut self, filesystem: &FileSystem) -> Result<()> {
        self.filter = None;
        self.refresh(filesystem)
    }

    /// 선택된 항목 반환 (포커스된 패널에서만)
    pub fn selection(&self) -> Option<&FileEntry> {
        if !self.focused {
            return None;
        }
        self.cursor_entry()
    }

    /// 커서 위치의 항목 반환 (포커스 무관, 드롭 대상 판별용)
    pub fn cursor_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected?)
    }

    /// 커서 위로
    pub fn move_up(&mut self) {
        match self.selected {
            Some(index) if index > 0 => self.selected = Some(index - 1),
            None if !self.entries.is_empty() => self.selected = Some(0),
            _ => {}
        }
    }

    /// 커서 아래로
    pub fn move_down(&mut self) {
        match self.selected {
            Some(index) if index + 1 < self.entries.len() => {
                self.selected = Some(index + 1);
            }
            None if !self.entries.is_empty() => self.selected = Some(0),
            _ => {}
        }
    }

    /// 첫 항목으로
    pub fn select_first(&mut self) {
        if !self.entries.is_empty() {
            self.selected = Some(0);
        }
    }

    /// 마지막 항목으로
    pub fn select_last(&mut self) {
        if !self.entries.is_empty() {
            self.selected = Some(self.entries.len() - 1);
        }
    }

    /// 커서가 보이도록 스크롤 오프셋 조정
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        let Some(selected) = self.selected else {
            return;
        };
        if viewport_height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected + 1 - viewport_height;
        }
    }

    /// 파일 개수 반환
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    /// 디렉토리 개수 반환
    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    /// 전체 크기 반환 (바이트, 디렉토리 센티널 제외)
    pub fn total_size(&self) -> u64 {
        self.entries.iter().filter_map(|e| e.size).sum()
    }
}

impl Default for PaneState {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}
