//! # Markdown 行处理器
//!
//! 逐行分类并改写文本文档：
//! - 纯中文行（含汉字且无拉丁字母）整行删除
//! - 中英混排行经清理器处理，清理后为空则删除
//! - 不含汉字的行原样保留（包括换行符）
//!
//! 最后把连续的多个空行折叠为一个。
//!
//! ## 依赖关系
//! - 被 `text/mod.rs` 调用
//! - 使用 `text/cleaner.rs`

use super::cleaner::{classify, clean_line};
use crate::models::{ChangeStats, LineClass, Processed};

use std::borrow::Cow;

/// 处理整篇文本
pub fn strip_markdown(content: &str) -> Processed {
    let mut stats = ChangeStats::default();
    let mut kept: Vec<Cow<'_, str>> = Vec::new();

    for raw in content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(raw);

        match classify(body) {
            LineClass::PureCjk => stats.lines_dropped += 1,
            LineClass::Mixed => {
                let cleaned = clean_line(body);
                if cleaned.trim().is_empty() {
                    stats.lines_dropped += 1;
                } else {
                    stats.lines_cleaned += 1;
                    kept.push(Cow::Owned(format!("{}{}", cleaned, ending)));
                }
            }
            LineClass::Plain => kept.push(Cow::Borrowed(raw)),
        }
    }

    let (content, collapsed) = collapse_blank_lines(&kept);
    stats.blanks_collapsed = collapsed;

    Processed { content, stats }
}

/// 折叠连续空行，返回结果与被折叠的行数
fn collapse_blank_lines<S: AsRef<str>>(lines: &[S]) -> (String, usize) {
    let mut output = String::new();
    let mut collapsed = 0;
    let mut prev_blank = false;

    for line in lines {
        let line = line.as_ref();
        let is_blank = line.trim().is_empty();
        if is_blank && prev_blank {
            collapsed += 1;
            continue;
        }
        output.push_str(line);
        prev_blank = is_blank;
    }

    (output, collapsed)
}

/// 拆出行尾换行符（`\r\n`、`\n` 或无）
fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}
