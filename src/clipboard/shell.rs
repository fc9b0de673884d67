//! Shell 转义
//!
//! 对本地文件路径中的 shell 敏感字符逐个加反斜杠，使其可以原样粘贴进命令行。
//! 只用于文件路径；纯文本由调用方自行决定是否转义。

/// 需要转义的字符
pub const ESCAPE_CHARACTERS: &str = "\\ ()[]{}<>\"'`!#$&;|*?\t";

/// 转义 shell 敏感字符
///
/// # 示例
/// ```rust
/// use clipboard_paste::clipboard::shell_escape;
///
/// assert_eq!(shell_escape("/Users/a/My File.txt"), "/Users/a/My\\ File.txt");
/// ```
pub fn shell_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        if ESCAPE_CHARACTERS.contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unescape(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn escapes_space_in_path() {
        assert_eq!(shell_escape("/Users/a/My File.txt"), "/Users/a/My\\ File.txt");
    }

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(
            shell_escape("a\\b (c)[d]{e}<f>\"g'h`i!j#k$l&m;n|o*p?q\tr"),
            "a\\\\b\\ \\(c\\)\\[d\\]\\{e\\}\\<f\\>\\\"g\\'h\\`i\\!j\\#k\\$l\\&m\\;n\\|o\\*p\\?q\\\tr"
        );
    }

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(shell_escape("/tmp/plain-file_1.png"), "/tmp/plain-file_1.png");
        assert_eq!(shell_escape("/tmp/日本語.txt"), "/tmp/日本語.txt");
    }

    proptest! {
        #[test]
        fn escape_is_reversible(input in ".*") {
            prop_assert_eq!(unescape(&shell_escape(&input)), input);
        }

        #[test]
        fn no_special_character_left_bare(input in ".*") {
            let escaped = shell_escape(&input);
            let mut chars = escaped.chars();
            while let Some(ch) = chars.next() {
                if ch == '\\' {
                    prop_assert!(chars.next().is_some());
                } else {
                    prop_assert!(!ESCAPE_CHARACTERS.contains(ch));
                }
            }
        }
    }
}
