//! # 代码注释处理器
//!
//! 只改写 TypeScript/JavaScript 源文件中的注释，注释以外的内容逐字节保留。
//!
//! ## 处理规则
//! - 行注释 `//...`：全文全局匹配，不跨行；含汉字时替换为 `//` + 清理后的正文
//! - 块注释 `/* ... */`：非贪婪匹配到最近的 `*/`；含汉字时逐行改写，
//!   含 `/*` 或 `*/` 的行原样保留
//! - 先处理行注释，结果整体交给块注释处理
//!
//! 注意：基于正则，没有词法分析，字符串字面量里的 `//`、`/*` 也会被当作注释。
//!
//! ## 依赖关系
//! - 被 `text/mod.rs` 调用
//! - 使用 `text/cleaner.rs`
//! - 使用 `regex`

use super::cleaner::{clean_line, has_cjk};
use crate::models::{ChangeStats, Processed};

use regex::{Captures, Regex};
use std::sync::LazyLock;

const LINE_MARKER: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

// 行尾的 \r 不属于注释
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\r\n]*").unwrap());

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// 处理整个源文件
pub fn strip_comments(content: &str) -> Processed {
    let mut stats = ChangeStats::default();

    let content = strip_line_comments(content, &mut stats);
    let content = strip_block_comments(&content, &mut stats);

    Processed { content, stats }
}

/// 行注释
fn strip_line_comments(content: &str, stats: &mut ChangeStats) -> String {
    LINE_COMMENT
        .replace_all(content, |caps: &Captures| {
            let comment = &caps[0];
            if !has_cjk(comment) {
                return comment.to_string();
            }
            stats.comments_cleaned += 1;
            let cleaned = clean_line(&comment[LINE_MARKER.len()..]);
            format!("{}{}", LINE_MARKER, cleaned)
        })
        .into_owned()
}

/// 块注释
fn strip_block_comments(content: &str, stats: &mut ChangeStats) -> String {
    BLOCK_COMMENT
        .replace_all(content, |caps: &Captures| {
            let comment = &caps[0];
            if !has_cjk(comment) {
                return comment.to_string();
            }
            stats.comments_cleaned += 1;
            rewrite_block(comment)
        })
        .into_owned()
}

/// 逐行改写一个块注释
fn rewrite_block(comment: &str) -> String {
    let lines: Vec<String> = comment
        .split('\n')
        .filter_map(|raw| {
            let (line, cr) = match raw.strip_suffix('\r') {
                Some(line) => (line, "\r"),
                None => (raw, ""),
            };

            if line.contains(BLOCK_OPEN) || line.contains(BLOCK_CLOSE) || !has_cjk(line) {
                return Some(raw.to_string());
            }

            let cleaned = clean_line(line);
            if cleaned.is_empty() {
                return None;
            }

            // `*` 续行：用单个空格替换原有缩进
            if line.trim().starts_with('*') {
                Some(format!(" {}{}", cleaned, cr))
            } else {
                Some(format!("{}{}", cleaned, cr))
            }
        })
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_cleaned() {
        let result = strip_comments("const a = 1; // 常量 constant\n");
        assert_eq!(result.content, "const a = 1; //constant\n");
        assert_eq!(result.stats.comments_cleaned, 1);
    }

    #[test]
    fn test_line_comment_bare_marker() {
        let result = strip_comments("let x; // 中文注释\nlet y;\n");
        assert_eq!(result.content, "let x; //\nlet y;\n");
    }

    #[test]
    fn test_multiple_line_comments() {
        let input = "// 一 one\ncall();\n// plain\n    // 二 two\n";
        let result = strip_comments(input);
        assert_eq!(result.content, "//one\ncall();\n// plain\n    //two\n");
        assert_eq!(result.stats.comments_cleaned, 2);
    }

    #[test]
    fn test_block_comment_multiline() {
        let input = "/*\n * 说明 The spec\n */\nrun();\n";
        let result = strip_comments(input);
        assert_eq!(result.content, "/*\n *  The spec\n */\nrun();\n");
        assert!(!has_cjk(&result.content));
    }

    #[test]
    fn test_block_comment_line_rules() {
        let input = "\
/**
 * 中文说明
 * English only
  缩进 indented
 * 纯中文
 */";
        let expected = "\
/**
 *
 * English only
indented
 *
 */";
        assert_eq!(strip_comments(input).content, expected);

        // 无 `*` 前缀且清理后为空的行被删除
        let input = "/*\nkeep\n  中文。\n*/";
        assert_eq!(strip_comments(input).content, "/*\nkeep\n*/");
    }

    #[test]
    fn test_single_line_block_comment_kept_verbatim() {
        let input = "/* 说明 The spec */\nrun();\n";
        assert_eq!(strip_comments(input).content, input);
    }

    #[test]
    fn test_adjacent_blocks_not_merged() {
        let input = "/* one */\nlet s = 1;\n/*\n 中文 two\n*/\nlet t = 2;\n";
        let result = strip_comments(input);
        assert_eq!(
            result.content,
            "/* one */\nlet s = 1;\n/*\ntwo\n*/\nlet t = 2;\n"
        );
        assert_eq!(result.stats.comments_cleaned, 1);
    }

    #[test]
    fn test_code_without_cjk_comments_is_identical() {
        let input = "\
import { a } from './a';
/**
 * Docs.
 */
export function f(s: string): string {
  return s + \"中文\"; // english note
}
";
        let result = strip_comments(input);
        assert_eq!(result.content, input);
        assert_eq!(result.stats, ChangeStats::default());
    }

    #[test]
    fn test_non_comment_text_preserved() {
        let input = "const label = \"标签\"; // 标签 label\nconst n = 2;\n";
        let result = strip_comments(input);
        assert_eq!(result.content, "const label = \"标签\"; //label\nconst n = 2;\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = strip_comments("// 中文 note\r\ncode();\r\n");
        assert_eq!(result.content, "//note\r\ncode();\r\n");

        let result = strip_comments("/*\r\n * 中文 x\r\n */\r\n");
        assert_eq!(result.content, "/*\r\n *  x\r\n */\r\n");
    }

    #[test]
    fn test_marker_inside_string_is_treated_as_comment() {
        let input = "const url = \"http://例子.com\";\n";
        let result = strip_comments(input);
        assert_eq!(result.content, "const url = \"http://.com\";\n");
    }
}
