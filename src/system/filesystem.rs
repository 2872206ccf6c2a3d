use crate::models::file_entry::{EntryKind, FileEntry};
use crate::utils::error::{Result, TwinPaneError};
use std::fs;
use std::path::{Path, PathBuf};

/// 파일 시스템 루트 정보
#[derive(Debug, Clone)]
pub struct RootEntry {
    pub name: String,
    pub path: PathBuf,
}

/// 파일 시스템 모듈
///
/// 모든 파일 시스템 호출은 이 구조체를 통해서만 수행됩니다.
/// 전부 동기 호출이며 이벤트 루프 스레드에서 실행됩니다.
#[derive(Debug, Clone, Copy)]
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리 읽기
    ///
    /// 주어진 경로의 직계 자식만 열거하여 파일 엔트리 리스트를 반환합니다.
    /// 재귀 탐색은 하지 않습니다.
    pub fn read_directory(&self, path: &Path) -> Result<Vec<FileEntry>> {
        // 1. 경로 존재 확인
        if !path.exists() {
            return Err(TwinPaneError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        // 2. 디렉토리 여부 확인
        if !path.is_dir() {
            return Err(TwinPaneError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        // 3. 디렉토리 읽기
        let read_dir = fs::read_dir(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                TwinPaneError::PermissionDenied {
                    path: path.to_path_buf(),
                }
            } else {
                TwinPaneError::Io(e)
            }
        })?;

        // 4. 각 엔트리에 대해 메타데이터 파싱
        let mut entries = Vec::new();

        for entry in read_dir {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let entry_path = entry.path();

            // 심볼릭 링크는 대상 기준으로 판단 (깨진 링크는 링크 자체 메타데이터)
            let metadata = match fs::metadata(&entry_path) {
                Ok(m) => m,
                Err(_) => {
                    let Ok(m) = fs::symlink_metadata(&entry_path) else {
                        continue;
                    };
                    m
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();

            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            // 크기 (디렉토리는 센티널)
            let size = match kind {
                EntryKind::Directory => None,
                EntryKind::File => Some(metadata.len()),
            };

            // 수정 시간
            let modified = metadata
                .modified()
                .unwrap_or_else(|_| std::time::SystemTime::now());

            entries.push(FileEntry::new(name, entry_path, kind, size, modified));
        }

        // 디렉토리 우선, 이름 오름차순 (대소문자 무시)
        entries.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        Ok(entries)
    }

    /// 파일 복사
    ///
    /// 소스 파일을 대상 경로로 복사합니다. 대상에 같은 이름의 파일이
    /// 이미 있으면 덮어씁니다. 디렉토리는 복사 대상이 아닙니다.
    /// 반환값: 복사된 바이트 수
    #[allow(clippy::unused_self)]
    pub fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        if !src.exists() {
            return Err(TwinPaneError::PathNotFound {
                path: src.to_path_buf(),
            });
        }

        if src.is_dir() {
            return Err(TwinPaneError::NotAFile {
                path: src.to_path_buf(),
            });
        }

        fs::copy(src, dest).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                TwinPaneError::PermissionDenied {
                    path: dest.to_path_buf(),
                }
            } else {
                TwinPaneError::CopyFailed {
                    src: src.to_path_buf(),
                    dest: dest.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })
    }

    /// 파일 삭제
    ///
    /// 디렉토리는 삭제 대상이 아닙니다.
    #[allow(clippy::unused_self)]
    pub fn delete_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(TwinPaneError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        if path.is_dir() {
            return Err(TwinPaneError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        fs::remove_file(path).map_err(|e| TwinPaneError::DeleteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// 엔트리 이동 (원자적 rename)
    ///
    /// 플랫폼이 허용하는 경우에만 성공합니다. 파일 시스템 경계를
    /// 넘는 이동은 복사 폴백 없이 에러로 반환됩니다.
    #[allow(clippy::unused_self)]
    pub fn move_entry(&self, src: &Path, dest: &Path) -> Result<()> {
        if !src.exists() {
            return Err(TwinPaneError::PathNotFound {
                path: src.to_path_buf(),
            });
        }

        fs::rename(src, dest).map_err(|e| TwinPaneError::MoveFailed {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// 빈 파일 생성
    ///
    /// 같은 이름의 파일이 이미 있으면 실패합니다.
    #[allow(clippy::unused_self)]
    pub fn create_file(&self, path: &Path) -> Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| TwinPaneError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// 디렉토리 생성
    #[allow(clippy::unused_self)]
    pub fn create_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir(path).map_err(|e| TwinPaneError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// 텍스트 파일 읽기
    #[allow(clippy::unused_self)]
    pub fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| TwinPaneError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// 텍스트 파일 쓰기 (저장)
    #[allow(clippy::unused_self)]
    pub fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| TwinPaneError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// 사용 가능한 파일 시스템 루트 목록 반환
    #[allow(clippy::unused_self)]
    pub fn list_roots(&self) -> Vec<RootEntry> {
        let mut roots = Vec::new();

        #[cfg(unix)]
        {
            // 루트
            roots.push(RootEntry {
                name: "/".to_string(),
                path: PathBuf::from("/"),
            });

            // 홈 디렉토리
            if let Ok(home) = std::env::var("HOME") {
                let home_path = PathBuf::from(&home);
                if home_path.is_dir() {
                    roots.push(RootEntry {
                        name: format!("~ ({})", home),
                        path: home_path,
                    });
                }
            }

            // 마운트된 볼륨
            for base in &["/mnt", "/media", "/Volumes"] {
                let base_path = PathBuf::from(base);
                if let Ok(entries) = fs::read_dir(&base_path) {
                    for entry in entries.flatten() {
                        let path = entry.path();
                        if path.is_dir() {
                            let name = path.to_string_lossy().to_string();
                            roots.push(RootEntry { name, path });
                        }
                    }
                }
            }
        }

        #[cfg(windows)]
        {
            for letter in b'A'..=b'Z' {
                let drive = format!("{}:\\", letter as char);
                let path = PathBuf::from(&drive);
                if path.is_dir() {
                    roots.push(RootEntry { name: drive, path });
                }
            }
        }

        roots
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// N개 파일 + M개 디렉토리를 나열하면 정확히 N+M 엔트리
    #[test]
    fn test_read_directory_counts_and_kinds() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "a.txt", "a");
        write_file(temp.path(), "b.txt", "b");
        write_file(temp.path(), "c.txt", "c");
        fs::create_dir(temp.path().join("sub1")).unwrap();
        fs::create_dir(temp.path().join("sub2")).unwrap();

        let filesystem = FileSystem::new();
        let entries = filesystem.read_directory(temp.path()).unwrap();

        assert_eq!(entries.len(), 5);
        assert_eq!(entries.iter().filter(|e| e.is_file()).count(), 3);
        assert_eq!(entries.iter().filter(|e| e.is_directory()).count(), 2);
    }

    /// 디렉토리 엔트리는 바이트 수 대신 센티널 크기
    #[test]
    fn test_directory_entries_have_sentinel_size() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        write_file(temp.path(), "f.txt", "hello");

        let filesystem = FileSystem::new();
        let entries = filesystem.read_directory(temp.path()).unwrap();

        let dir = entries.iter().find(|e| e.name == "sub").unwrap();
        let file = entries.iter().find(|e| e.name == "f.txt").unwrap();
        assert_eq!(dir.size, None);
        assert_eq!(file.size, Some(5));
    }

    #[test]
    fn test_read_directory_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let filesystem = FileSystem::new();
        match filesystem.read_directory(&missing) {
            Err(TwinPaneError::PathNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected PathNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_directory_on_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = write_file(temp.path(), "f.txt", "x");

        let filesystem = FileSystem::new();
        assert!(matches!(
            filesystem.read_directory(&file),
            Err(TwinPaneError::NotADirectory { .. })
        ));
    }

    /// 같은 이름의 대상 파일이 있으면 덮어쓰고, 소스는 그대로
    #[test]
    fn test_copy_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let src_dir = temp.path().join("a");
        let dst_dir = temp.path().join("b");
        fs::create_dir_all(&src_dir).unwrap();
        fs::create_dir_all(&dst_dir).unwrap();

        let src = write_file(&src_dir, "a.txt", "from A");
        let dst = write_file(&dst_dir, "a.txt", "old B content");

        let filesystem = FileSystem::new();
        filesystem.copy_file(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "from A");
        assert_eq!(fs::read_to_string(&src).unwrap(), "from A");
    }

    #[test]
    fn test_copy_directory_rejected() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dir");
        fs::create_dir(&dir).unwrap();

        let filesystem = FileSystem::new();
        assert!(matches!(
            filesystem.copy_file(&dir, &temp.path().join("dest")),
            Err(TwinPaneError::NotAFile { .. })
        ));
    }

    /// 삭제 후 상위 디렉토리 목록에 더 이상 나타나지 않음
    #[test]
    fn test_delete_file_removes_from_listing() {
        let temp = TempDir::new().unwrap();
        let file = write_file(temp.path(), "doomed.txt", "x");

        let filesystem = FileSystem::new();
        filesystem.delete_file(&file).unwrap();

        assert!(!file.exists());
        let entries = filesystem.read_directory(temp.path()).unwrap();
        assert!(!entries.iter().any(|e| e.name == "doomed.txt"));
    }

    #[test]
    fn test_delete_directory_rejected() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dir");
        fs::create_dir(&dir).unwrap();

        let filesystem = FileSystem::new();
        assert!(matches!(
            filesystem.delete_file(&dir),
            Err(TwinPaneError::NotAFile { .. })
        ));
        assert!(dir.exists());
    }

    #[test]
    fn test_move_entry_renames() {
        let temp = TempDir::new().unwrap();
        let src = write_file(temp.path(), "x.txt", "payload");
        let dest = temp.path().join("moved.txt");

        let filesystem = FileSystem::new();
        filesystem.move_entry(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "payload");
    }

    #[test]
    fn test_create_file_refuses_existing() {
        let temp = TempDir::new().unwrap();
        let existing = write_file(temp.path(), "there.txt", "keep");

        let filesystem = FileSystem::new();
        filesystem.create_file(&temp.path().join("new.txt")).unwrap();
        assert!(matches!(
            filesystem.create_file(&existing),
            Err(TwinPaneError::CreateFailed { .. })
        ));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "keep");
    }

    #[test]
    fn test_read_write_text_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");

        let filesystem = FileSystem::new();
        filesystem.write_text(&path, "line one\nline two").unwrap();
        assert_eq!(filesystem.read_text(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_list_roots_not_empty() {
        let filesystem = FileSystem::new();
        assert!(!filesystem.list_roots().is_empty());
    }
}
