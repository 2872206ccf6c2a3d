// Formatters - 파일 크기, 날짜 포맷팅

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
///
/// # Examples
/// ```
/// use twinpane::utils::formatter::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(512), "512 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1_048_576), "1.0 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes == 0 {
        "0 B".to_string()
    } else if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        let kb = bytes as f64 / KB as f64;
        format!("{:.1} KB", kb)
    } else if bytes < GB {
        let mb = bytes as f64 / MB as f64;
        format!("{:.1} MB", mb)
    } else {
        let gb = bytes as f64 / GB as f64;
        format!("{:.1} GB", gb)
    }
}

/// 엔트리 크기 컬럼 포맷팅
///
/// 디렉토리는 바이트 수 대신 "[DIR]" 센티널을 표시합니다.
pub fn format_entry_size(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format_file_size(bytes),
        None => "[DIR]".to_string(),
    }
}

/// 시스템 시간을 통일된 날짜 형식으로 포맷팅 (UTC)
///
/// 항상 "YYYY-MM-DD HH:MM:SS" 형식 (19자 고정)
pub fn format_date(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 재생 위치를 "MM:SS" 형식으로 포맷팅
pub fn format_playback_position(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
