// Content classifier - 뷰어 선택을 위한 MIME 타입 추정
//
// 확장자 기반 MIME 추정이 우선이고, 확장자를 모르면 내용 스니핑으로
// 폴백합니다. 어떤 실패도 Unknown으로 강등될 뿐 에러로 표면화되지 않습니다.

use mime_guess::mime;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 뷰어 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// 텍스트 에디터로 열기
    Text,
    /// 이미지 뷰어로 열기
    Image,
    /// 비디오 플레이어로 열기
    Video,
    /// 열 수 없음
    Unknown,
}

/// 내용 스니핑 시 읽는 최대 바이트 수
const SNIFF_LEN: usize = 1024;

/// 경로를 뷰어 분류로 매핑
///
/// MIME 최상위 타입이 text/image/video인 경우에만 해당 뷰어로
/// 라우팅합니다. application/* 등 나머지는 전부 Unknown입니다.
pub fn classify(path: &Path) -> ContentKind {
    if let Some(guess) = mime_guess::from_path(path).first() {
        let top_level = guess.type_();
        return if top_level == mime::TEXT {
            ContentKind::Text
        } else if top_level == mime::IMAGE {
            ContentKind::Image
        } else if top_level == mime::VIDEO {
            ContentKind::Video
        } else {
            ContentKind::Unknown
        };
    }

    // 확장자로 판단 불가 - 내용 스니핑 폴백
    if sniff_is_text(path) {
        ContentKind::Text
    } else {
        ContentKind::Unknown
    }
}

/// 파일 앞부분을 읽어 텍스트 여부를 추정
///
/// 읽기 실패는 조용히 false로 강등됩니다.
fn sniff_is_text(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buf = [0u8; SNIFF_LEN];
    let Ok(len) = file.read(&mut buf) else {
        return false;
    };

    let head = &buf[..len];

    // NUL 바이트가 있으면 바이너리
    if head.contains(&0) {
        return false;
    }

    // 유효한 UTF-8 프리픽스인지 확인 (경계에서 잘린 문자는 허용)
    match std::str::from_utf8(head) {
        Ok(_) => true,
        Err(e) => e.valid_up_to() + 4 > len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify_by_extension() {
        let base = Path::new("/tmp");
        assert_eq!(classify(&base.join("readme.txt")), ContentKind::Text);
        assert_eq!(classify(&base.join("notes.md")), ContentKind::Text);
        assert_eq!(classify(&base.join("photo.png")), ContentKind::Image);
        assert_eq!(classify(&base.join("photo.jpeg")), ContentKind::Image);
        assert_eq!(classify(&base.join("clip.mp4")), ContentKind::Video);
        assert_eq!(classify(&base.join("clip.avi")), ContentKind::Video);
    }

    #[test]
    fn test_classify_other_mime_is_unknown() {
        // application/* 은 텍스트처럼 보여도 Unknown
        assert_eq!(classify(Path::new("/tmp/archive.zip")), ContentKind::Unknown);
        assert_eq!(classify(Path::new("/tmp/binary.exe")), ContentKind::Unknown);
    }

    #[test]
    fn test_sniff_fallback_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("noext");
        fs::write(&path, "plain utf-8 content\nwith lines\n").unwrap();

        assert_eq!(classify(&path), ContentKind::Text);
    }

    #[test]
    fn test_sniff_fallback_binary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob");
        fs::write(&path, [0u8, 159, 146, 150, 0, 1, 2]).unwrap();

        assert_eq!(classify(&path), ContentKind::Unknown);
    }

    #[test]
    fn test_probe_failure_degrades_to_unknown() {
        // 존재하지 않는 확장자 없는 경로: 스니핑 실패는 Unknown으로 강등
        assert_eq!(
            classify(Path::new("/definitely/not/here")),
            ContentKind::Unknown
        );
    }
}
