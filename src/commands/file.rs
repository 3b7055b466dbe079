//! # file 命令实现
//!
//! 处理命令行上指定的文件。文档类型默认由扩展名推断，可用 `--kind` 指定。
//! `--stdout` 时把结果打印到标准输出，不改动文件。
//!
//! ## 依赖关系
//! - 使用 `cli/file.rs` 定义的参数
//! - 使用 `text/` 处理内容
//! - 使用 `utils/output.rs`

use crate::cli::file::FileArgs;
use crate::error::{Result, ZhstripError};
use crate::models::DocumentKind;
use crate::text;
use crate::utils::output;

use std::io::Write;
use std::path::Path;

/// 执行 file 命令
pub fn execute(args: FileArgs) -> Result<()> {
    if !args.stdout {
        output::print_header("Stripping Files");
    }

    for path in &args.paths {
        if !path.is_file() {
            return Err(ZhstripError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let kind: DocumentKind = match args.kind {
            Some(kind) => kind.into(),
            None => resolve_kind(path)?,
        };

        if args.stdout {
            let content = text::read_document(path)?;
            let processed = text::strip_content(kind, &content);
            std::io::stdout()
                .lock()
                .write_all(processed.content.as_bytes())
                .map_err(|e| ZhstripError::Other(format!("Failed to write to stdout: {}", e)))?;
            continue;
        }

        let (processed, changed) = text::strip_file(path, kind, true)?;
        let stats = &processed.stats;
        if stats.removes_cjk() {
            output::print_success(&format!(
                "{} ({} lines dropped, {} lines cleaned, {} comments cleaned)",
                path.display(),
                stats.lines_dropped,
                stats.lines_cleaned,
                stats.comments_cleaned
            ));
        } else if changed {
            output::print_info(&format!(
                "{}: no Chinese text to strip, {} blank lines collapsed",
                path.display(),
                stats.blanks_collapsed
            ));
        } else {
            output::print_skip(&format!("{}: no Chinese text to strip", path.display()));
        }
    }

    if !args.stdout {
        output::print_done(&format!("Processed {} files", args.paths.len()));
    }

    Ok(())
}

/// 由扩展名推断文档类型
fn resolve_kind(path: &Path) -> Result<DocumentKind> {
    DocumentKind::from_path(path)
        .ok_or_else(|| ZhstripError::UnsupportedFile(path.display().to_string()))
}
