//! # 数据模型模块
//!
//! 定义文档类型、行分类和改动统计。
//!
//! ## 依赖关系
//! - 被 `text/`, `batch/` 和 `commands/` 使用
//! - 子模块: document

pub mod document;

pub use document::{ChangeStats, DocumentKind, LineClass, Processed};
