//! # condense 命令实现
//!
//! 将结构式（如 `HO-C2H4-NH2`）合并为各原子总数（`H7O1C2N1`）。
//!
//! ## 依赖关系
//! - 使用 `cli/condense.rs` 定义的参数
//! - 使用 `parsers/formula.rs`

use crate::cli::condense::CondenseArgs;
use matcard::error::Result;
use matcard::parsers;

/// 执行 condense 命令
pub fn execute(args: CondenseArgs) -> Result<()> {
    let condensed = parsers::condense_formula(&args.formula)?;
    println!("{}", condensed);
    Ok(())
}
