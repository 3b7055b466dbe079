//! # 文档数据模型
//!
//! 处理过程中的瞬时数据：文档类型、行分类、改动统计。
//! 不存在任何持久化实体，文件整读整写。
//!
//! ## 依赖关系
//! - 被 `text/` 处理器使用
//! - 被 `batch/runner.rs` 和 `commands/` 使用

use std::path::Path;

/// 文档类型，决定使用哪个处理器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// 逐行处理的文本文档
    Markdown,
    /// 只改写注释的源代码
    Code,
}

impl DocumentKind {
    /// 从文件扩展名推断文档类型
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())?;

        match ext.as_str() {
            "md" | "markdown" => Some(DocumentKind::Markdown),
            "ts" | "tsx" | "js" | "jsx" | "mjs" | "cjs" => Some(DocumentKind::Code),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Markdown => write!(f, "markdown"),
            DocumentKind::Code => write!(f, "code"),
        }
    }
}

/// 行分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// 含中文且没有任何拉丁字母
    PureCjk,
    /// 中英混排
    Mixed,
    /// 不含中文
    Plain,
}

/// 改动统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeStats {
    /// 整行删除的纯中文行
    pub lines_dropped: usize,
    /// 清理后保留的混排行
    pub lines_cleaned: usize,
    /// 折叠掉的多余空行
    pub blanks_collapsed: usize,
    /// 改写过的注释
    pub comments_cleaned: usize,
}

impl ChangeStats {
    /// 是否删除过中文（仅折叠空行不算）
    pub fn removes_cjk(&self) -> bool {
        self.lines_dropped + self.lines_cleaned + self.comments_cleaned > 0
    }

    /// 合并另一份统计
    pub fn merge(&mut self, other: &ChangeStats) {
        self.lines_dropped += other.lines_dropped;
        self.lines_cleaned += other.lines_cleaned;
        self.blanks_collapsed += other.blanks_collapsed;
        self.comments_cleaned += other.comments_cleaned;
    }
}

/// 单个文档的处理结果
#[derive(Debug, Clone)]
pub struct Processed {
    /// 处理后的完整内容
    pub content: String,
    /// 改动统计
    pub stats: ChangeStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(
            DocumentKind::from_path(Path::new("README.md")),
            Some(DocumentKind::Markdown)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("docs/guide.MD")),
            Some(DocumentKind::Markdown)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("src/index.ts")),
            Some(DocumentKind::Code)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("src/app.js")),
            Some(DocumentKind::Code)
        );
        assert_eq!(DocumentKind::from_path(Path::new("Cargo.toml")), None);
        assert_eq!(DocumentKind::from_path(Path::new("LICENSE")), None);
    }

    #[test]
    fn test_removes_cjk() {
        assert!(!ChangeStats::default().removes_cjk());
        let collapsed_only = ChangeStats {
            blanks_collapsed: 2,
            ..Default::default()
        };
        assert!(!collapsed_only.removes_cjk());
        let cleaned = ChangeStats {
            comments_cleaned: 1,
            ..Default::default()
        };
        assert!(cleaned.removes_cjk());
    }

    #[test]
    fn test_stats_merge() {
        let mut total = ChangeStats::default();
        total.merge(&ChangeStats {
            lines_dropped: 2,
            lines_cleaned: 1,
            blanks_collapsed: 0,
            comments_cleaned: 0,
        });
        total.merge(&ChangeStats {
            lines_dropped: 0,
            lines_cleaned: 0,
            blanks_collapsed: 1,
            comments_cleaned: 3,
        });
        assert_eq!(total.lines_dropped, 2);
        assert_eq!(total.lines_cleaned, 1);
        assert_eq!(total.blanks_collapsed, 1);
        assert_eq!(total.comments_cleaned, 3);
    }
}
