//! # condense 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/condense.rs`

use clap::Args;

/// condense 子命令参数
#[derive(Args, Debug)]
pub struct CondenseArgs {
    /// Structural formula, e.g. 'HO-C2H4-NH2'
    pub formula: String,
}
