//! # strip 命令实现
//!
//! 删除仓库文档与源码注释中的中文，原地覆盖写回。
//!
//! ## 功能
//! - 先处理文档文件，再处理源码文件
//! - 逐个文件整读整写，无改动的文件同样写回
//! - 任何读写或解码错误立即中止，已处理的文件不回滚
//! - 输出处理数量、改动统计和不可逆操作提示
//!
//! ## 依赖关系
//! - 使用 `cli/strip.rs` 定义的参数
//! - 使用 `batch/` 收集与执行
//! - 使用 `text/` 处理内容
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::cli::strip::{ScanArgs, StripArgs};
use crate::error::{Result, ZhstripError};
use crate::models::DocumentKind;
use crate::text;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Files")]
    files: usize,
    #[tabled(rename = "Modified")]
    modified: usize,
    #[tabled(rename = "Lines dropped")]
    lines_dropped: usize,
    #[tabled(rename = "Lines cleaned")]
    lines_cleaned: usize,
    #[tabled(rename = "Blanks collapsed")]
    blanks_collapsed: usize,
    #[tabled(rename = "Comments cleaned")]
    comments_cleaned: usize,
}

impl SummaryRow {
    fn new(kind: DocumentKind, result: &BatchResult) -> Self {
        Self {
            kind: kind.to_string(),
            files: result.total(),
            modified: result.modified,
            lines_dropped: result.stats.lines_dropped,
            lines_cleaned: result.stats.lines_cleaned,
            blanks_collapsed: result.stats.blanks_collapsed,
            comments_cleaned: result.stats.comments_cleaned,
        }
    }
}

/// 一次扫描的结果
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// 文档文件
    pub docs: BatchResult,
    /// 源码文件
    pub code: BatchResult,
}

/// 执行 strip 命令
pub fn execute(args: StripArgs) -> Result<()> {
    output::print_header("Stripping Chinese Text");

    let summary = scan(&args.scan, !args.dry_run)?;

    println!();
    output::print_done(&format!(
        "Processed {} markdown files",
        summary.docs.total()
    ));
    output::print_done(&format!("Processed {} code files", summary.code.total()));

    let rows = vec![
        SummaryRow::new(DocumentKind::Markdown, &summary.docs),
        SummaryRow::new(DocumentKind::Code, &summary.code),
    ];
    println!("\n{}\n", Table::new(&rows));

    if args.dry_run {
        output::print_info("Dry run: no files were written.");
    } else {
        output::print_separator();
        output::print_warning("This operation modifies files in place.");
        output::print_warning("Make sure you have a backup or can revert via git.");
    }

    Ok(())
}

/// 收集并处理文档与源码；`write` 为 false 时不写回
pub fn scan(args: &ScanArgs, write: bool) -> Result<ScanSummary> {
    if !args.root.is_dir() {
        return Err(ZhstripError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let mut summary = ScanSummary::default();

    if !args.no_docs {
        summary.docs = run_set(args, DocumentKind::Markdown, &args.doc_patterns, write)?;
    }
    if !args.no_code {
        summary.code = run_set(args, DocumentKind::Code, &args.code_patterns, write)?;
    }

    Ok(summary)
}

/// 处理一组模式匹配到的文件
fn run_set(
    args: &ScanArgs,
    kind: DocumentKind,
    patterns: &[String],
    write: bool,
) -> Result<BatchResult> {
    let files = FileCollector::new(&args.root)
        .with_patterns(patterns)
        .excluding(&args.excluded)
        .collect()?;

    output::print_info(&format!("Processing {} {} files...", files.len(), kind));

    BatchRunner::new(kind)
        .quiet(args.quiet)
        .run(&files, |path| process_path(path, kind, write))
}

/// 处理单个文件并转换为批量结果
fn process_path(path: &Path, kind: DocumentKind, write: bool) -> Result<ProcessResult> {
    let (processed, changed) = text::strip_file(path, kind, write)?;

    if changed {
        Ok(ProcessResult::Modified(path.to_path_buf(), processed.stats))
    } else {
        Ok(ProcessResult::Unchanged)
    }
}
