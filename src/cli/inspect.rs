//! # inspect 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use super::TableArgs;
use clap::Args;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Element symbols, e.g. H D T C [C14] U-235
    #[arg(required = true)]
    pub symbols: Vec<String>,

    #[command(flatten)]
    pub table: TableArgs,
}
