use std::path::PathBuf;
use std::time::SystemTime;

/// 엔트리 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 디렉토리
    Directory,
    /// 일반 파일
    File,
}

/// 파일 엔트리
///
/// 목록 갱신 시점의 불변 스냅샷입니다. 파일 시스템이 변하면
/// 그 즉시 낡은 정보가 되며, 별도의 무효화 메커니즘은 없습니다.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// 파일/디렉토리 이름
    pub name: String,
    /// 전체 경로
    pub path: PathBuf,
    /// 엔트리 종류
    pub kind: EntryKind,
    /// 바이트 단위 크기 (디렉토리는 None 센티널)
    pub size: Option<u64>,
    /// 수정 시간 (UTC로 표시)
    pub modified: SystemTime,
}

impl FileEntry {
    /// 새 파일 엔트리 생성
    pub fn new(
        name: String,
        path: PathBuf,
        kind: EntryKind,
        size: Option<u64>,
        modified: SystemTime,
    ) -> Self {
        Self {
            name,
            path,
            kind,
            size,
            modified,
        }
    }

    /// 디렉토리 여부 확인
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// 파일 여부 확인
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
