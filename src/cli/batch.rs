//! # batch 子命令 CLI 定义
//!
//! 批量读取材料清单 CSV (`name,formula,density[,threshold]`)，
//! 每个输入文件生成一个 `<stem>.mat` 卡片组文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use super::TableArgs;
use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Material-list CSV file or directory containing them
    pub input: PathBuf,

    /// Output directory for generated decks
    #[arg(short, long, default_value = "decks")]
    pub output: PathBuf,

    /// Glob pattern for input files (comma-separated for multiple)
    #[arg(short, long, default_value = "*.csv")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Default threshold for rows that do not set one (atoms/b-cm)
    #[arg(long, default_value_t = 0.0)]
    pub threshold: f64,

    /// Material number of the first card in each deck
    #[arg(long, default_value_t = 1)]
    pub first_index: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[command(flatten)]
    pub table: TableArgs,
}
