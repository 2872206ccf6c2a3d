use std::path::PathBuf;
use thiserror::Error;

/// 애플리케이션 전체 에러 타입
///
/// 모든 사용자 노출 에러는 모달 다이얼로그로 표시되며,
/// 재시도 없이 단일 작업 단위로 포기합니다.
#[derive(Error, Debug)]
pub enum TwinPaneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to copy {src} -> {dest}: {reason}")]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Failed to move {src} -> {dest}: {reason}")]
    MoveFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Failed to delete {path}: {reason}")]
    DeleteFailed { path: PathBuf, reason: String },

    #[error("Failed to create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// 두 패널 모두 선택 항목이 없는 경우
    #[error("No file is selected")]
    NoSelection,

    /// 두 패널 모두 선택 항목이 있는 경우
    #[error("Both panes have a selection")]
    AmbiguousSelection,
}

impl TwinPaneError {
    /// 선택 관련 에러 여부 (파일 시스템을 건드리기 전에 발생)
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            TwinPaneError::NoSelection | TwinPaneError::AmbiguousSelection
        )
    }
}

pub type Result<T> = std::result::Result<T, TwinPaneError>;
