//! # 文件收集器
//!
//! 在根目录下按 glob 模式收集待处理文件列表。
//!
//! ## 功能
//! - 多个 glob 模式，按模式顺序返回，同一模式内按路径排序
//! - 去重，只返回普通文件
//! - 按文件名排除（只比较匹配路径的最后一段，不检查父目录）
//! - 遍历中无法读取的目录直接报错
//!
//! ## 依赖关系
//! - 被 `commands/strip.rs`, `commands/check.rs` 调用
//! - 使用 `glob` 匹配路径

use crate::error::{Result, ZhstripError};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 默认文档模式
pub const DOC_PATTERNS: &[&str] = &["*.md", "docs/**/*.md"];

/// 默认源码模式
pub const CODE_PATTERNS: &[&str] = &["src/**/*.ts", "src/**/*.js"];

/// 默认排除的文件名
pub const EXCLUDED_NAMES: &[&str] = &[".git", "node_modules"];

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 匹配模式列表（相对根目录）
    patterns: Vec<String>,
    /// 排除的文件名
    excluded: Vec<String>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            patterns: Vec::new(),
            excluded: EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 设置匹配模式
    pub fn with_patterns<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
        self.patterns = patterns
            .iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// 设置排除的文件名
    pub fn excluding<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.excluded = names.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let escaped = glob::Pattern::escape(&self.root.to_string_lossy());
        let prefix = escaped.trim_end_matches('/');

        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for pattern in &self.patterns {
            let full = format!("{}/{}", prefix, pattern);
            let paths = glob::glob(&full).map_err(|e| ZhstripError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            for entry in paths {
                let path = entry.map_err(|e| ZhstripError::FileReadError {
                    path: e.path().display().to_string(),
                    source: e.into_error(),
                })?;
                if !path.is_file() || self.is_excluded(&path) {
                    continue;
                }
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }

    /// 文件名是否在排除列表中
    fn is_excluded(&self, path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => self.excluded.iter().any(|e| e == name),
            None => false,
        }
    }
}
