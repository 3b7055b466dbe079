//! # 字符/行清理器
//!
//! 从一行文本中删除中文字符与中文标点，并清理删除后残留的
//! 分隔符和空括号。两个处理器共用。
//!
//! ## 清理步骤（按顺序）
//! 1. 删除 U+4E00..=U+9FFF 范围内的连续汉字
//! 2. 删除全角标点
//! 3. 删除行尾的 ` /`
//! 4. 删除行尾的 ` - `
//! 5. 删除空的 `()` 与 `[]`
//! 6. 去掉首尾空白
//!
//! 第 3~6 步重复执行直到结果不再变化，保证清理结果幂等。
//!
//! ## 依赖关系
//! - 被 `text/markdown.rs`, `text/comments.rs` 使用
//! - 使用 `regex`

use crate::models::LineClass;

use regex::Regex;
use std::sync::LazyLock;

/// 需要删除的全角标点
pub const CJK_PUNCTUATION: &[char] = &[
    '，', '。', '；', '：', '？', '！', '（', '）', '【', '】', '《', '》', '“', '”', '‘', '’',
    '、',
];

static CJK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}]+").unwrap());

static TRAILING_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+/\s*$").unwrap());

static TRAILING_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+-\s+$").unwrap());

static EMPTY_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s*\)").unwrap());

static EMPTY_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\s*\]").unwrap());

/// 是否包含中文字符
pub fn has_cjk(text: &str) -> bool {
    CJK_RUN.is_match(text)
}

/// 是否包含拉丁字母（仅 ASCII a-z / A-Z）
pub fn has_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// 行分类
pub fn classify(line: &str) -> LineClass {
    match (has_cjk(line), has_latin(line)) {
        (true, false) => LineClass::PureCjk,
        (true, true) => LineClass::Mixed,
        (false, _) => LineClass::Plain,
    }
}

/// 清理一行文本
pub fn clean_line(line: &str) -> String {
    let stripped = CJK_RUN.replace_all(line, "");
    let mut current: String = stripped
        .chars()
        .filter(|c| !CJK_PUNCTUATION.contains(c))
        .collect();

    loop {
        let next = tidy(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

/// 第 3~6 步
fn tidy(line: &str) -> String {
    let line = TRAILING_SLASH.replace(line, "");
    let line = TRAILING_DASH.replace(&line, "");
    let line = EMPTY_PARENS.replace_all(&line, "");
    let line = EMPTY_BRACKETS.replace_all(&line, "");
    line.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_cjk() {
        assert!(has_cjk("Hello 世界"));
        assert!(has_cjk("中"));
        assert!(!has_cjk("Hello world"));
        // 全角标点本身不算汉字
        assert!(!has_cjk("，。"));
        // 日文假名不在范围内
        assert!(!has_cjk("カタカナ"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("完全中文内容"), LineClass::PureCjk);
        assert_eq!(classify("## 安装 123"), LineClass::PureCjk);
        assert_eq!(classify("Hello 世界 world"), LineClass::Mixed);
        assert_eq!(classify("Keep this line"), LineClass::Plain);
        assert_eq!(classify(""), LineClass::Plain);
    }

    #[test]
    fn test_clean_mixed_line() {
        let cleaned = clean_line("Hello 世界 world");
        assert!(!has_cjk(&cleaned));
        assert!(cleaned.starts_with("Hello"));
        assert!(cleaned.ends_with("world"));
        assert_eq!(cleaned, "Hello  world");
    }

    #[test]
    fn test_clean_punctuation() {
        assert_eq!(clean_line("Run the server（运行服务器）"), "Run the server");
        assert_eq!(clean_line("标题 Title：说明。"), "Title");
        assert_eq!(clean_line("“引用” quoted、text"), "quotedtext");
        assert_eq!(clean_line("【注意】Note！"), "Note");
    }

    #[test]
    fn test_clean_trailing_separators() {
        assert_eq!(clean_line("Installation / 安装"), "Installation");
        assert_eq!(clean_line("Usage - 用法"), "Usage");
        assert_eq!(clean_line("## Quick Start / 快速开始"), "## Quick Start");
        // 中间的分隔符保留
        assert_eq!(clean_line("a / b 中"), "a / b");
    }

    #[test]
    fn test_clean_empty_brackets() {
        assert_eq!(clean_line("Note (注意): text"), "Note : text");
        assert_eq!(clean_line("See [文档](docs/guide.md)"), "See (docs/guide.md)");
        assert_eq!(clean_line("Value (( 值 )) here"), "Value  here");
    }

    #[test]
    fn test_clean_idempotent() {
        let samples = [
            "Hello 世界 world",
            "Installation / 安装",
            "Usage - 用法",
            "Value (( 值 )) here",
            "Options / 选项 / 参数",
            "Keep this line",
            "  padded  ",
        ];
        for sample in samples {
            let once = clean_line(sample);
            let twice = clean_line(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_clean_removes_all_target_punctuation() {
        let line: String = CJK_PUNCTUATION.iter().collect::<String>() + " text 中文";
        let cleaned = clean_line(&line);
        assert_eq!(cleaned, "text");
        assert!(!cleaned.chars().any(|c| CJK_PUNCTUATION.contains(&c)));
    }
}
