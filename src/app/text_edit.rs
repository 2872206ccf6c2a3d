// 단일 라인 텍스트 버퍼 편집 헬퍼
//
// 다이얼로그 입력 필드와 텍스트 뷰어의 라인 편집에서 공유합니다.
// 커서 위치는 바이트 인덱스이며 항상 문자 경계에 놓입니다.

pub(super) struct TextBufferEdit;

impl TextBufferEdit {
    pub(super) fn insert_char(value: &mut String, cursor_pos: &mut usize, c: char) {
        value.insert(*cursor_pos, c);
        *cursor_pos += c.len_utf8();
    }

    pub(super) fn backspace(value: &mut String, cursor_pos: &mut usize) {
        if *cursor_pos == 0 {
            return;
        }

        let prev = Self::prev_char_start(value, *cursor_pos);
        value.remove(prev);
        *cursor_pos = prev;
    }

    pub(super) fn delete(value: &mut String, cursor_pos: &mut usize) {
        if *cursor_pos < value.len() {
            value.remove(*cursor_pos);
        }
    }

    pub(super) fn left(value: &str, cursor_pos: &mut usize) {
        if *cursor_pos == 0 {
            return;
        }

        *cursor_pos = Self::prev_char_start(value, *cursor_pos);
    }

    pub(super) fn right(value: &str, cursor_pos: &mut usize) {
        if *cursor_pos >= value.len() {
            return;
        }

        *cursor_pos = value[*cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| *cursor_pos + i)
            .unwrap_or(value.len());
    }

    pub(super) fn home(cursor_pos: &mut usize) {
        *cursor_pos = 0;
    }

    pub(super) fn end(value: &str, cursor_pos: &mut usize) {
        *cursor_pos = value.len();
    }

    /// 커서 앞의 단어 하나 삭제 (Ctrl+W)
    pub(super) fn delete_prev_word(value: &mut String, cursor_pos: &mut usize) {
        if *cursor_pos == 0 {
            return;
        }

        let original = *cursor_pos;
        let mut pos = original;

        // 1) 커서 왼쪽의 구분자들을 먼저 건너뜀
        while pos > 0 {
            let prev = Self::prev_char_start(value, pos);
            let ch = value[prev..pos].chars().next().unwrap_or_default();
            if Self::is_word_delimiter(ch) {
                pos = prev;
            } else {
                break;
            }
        }

        // 2) 실제 단어 시작까지 이동
        while pos > 0 {
            let prev = Self::prev_char_start(value, pos);
            let ch = value[prev..pos].chars().next().unwrap_or_default();
            if Self::is_word_delimiter(ch) {
                break;
            }
            pos = prev;
        }

        value.replace_range(pos..original, "");
        *cursor_pos = pos;
    }

    /// 커서를 가장 가까운 문자 경계로 내림
    pub(super) fn clamp_to_boundary(value: &str, cursor_pos: usize) -> usize {
        let mut pos = cursor_pos.min(value.len());
        while pos > 0 && !value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn prev_char_start(value: &str, cursor_pos: usize) -> usize {
        value[..cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn is_word_delimiter(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '/' | '\\' | ':' | ';' | '.' | ',' | '-' | '_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut value = String::new();
        let mut cursor = 0;

        TextBufferEdit::insert_char(&mut value, &mut cursor, 'a');
        TextBufferEdit::insert_char(&mut value, &mut cursor, 'b');
        assert_eq!(value, "ab");
        assert_eq!(cursor, 2);

        TextBufferEdit::backspace(&mut value, &mut cursor);
        assert_eq!(value, "a");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut value = "한a글".to_string();
        let mut cursor = value.len();

        TextBufferEdit::left(&value, &mut cursor);
        assert_eq!(cursor, 4); // '글' 시작
        TextBufferEdit::left(&value, &mut cursor);
        assert_eq!(cursor, 3); // 'a' 시작
        TextBufferEdit::left(&value, &mut cursor);
        assert_eq!(cursor, 0);

        TextBufferEdit::right(&value, &mut cursor);
        assert_eq!(cursor, 3);

        TextBufferEdit::backspace(&mut value, &mut cursor);
        assert_eq!(value, "a글");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_delete_prev_word() {
        let mut value = "path/to/file".to_string();
        let mut cursor = value.len();

        TextBufferEdit::delete_prev_word(&mut value, &mut cursor);
        assert_eq!(value, "path/to/");

        TextBufferEdit::delete_prev_word(&mut value, &mut cursor);
        assert_eq!(value, "path/");
    }

    #[test]
    fn test_clamp_to_boundary() {
        let value = "한글";
        assert_eq!(TextBufferEdit::clamp_to_boundary(value, 1), 0);
        assert_eq!(TextBufferEdit::clamp_to_boundary(value, 3), 3);
        assert_eq!(TextBufferEdit::clamp_to_boundary(value, 99), 6);
    }
}
