//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `chem/`, `parsers/`, `utils/`
//! - 子模块: card, batch, inspect, condense

pub mod batch;
pub mod card;
pub mod condense;
pub mod inspect;

use crate::cli::{Commands, TableArgs};
use matcard::error::{MatcardError, Result};
use matcard::models::IsotopeTable;
use matcard::parsers;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Card(args) => card::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Condense(args) => condense::execute(args),
    }
}

/// 加载同位素参考表：`--table` / `MATCARD_TABLE` 优先，否则使用内嵌表
fn open_table(args: &TableArgs) -> Result<IsotopeTable> {
    let (table, source) = match &args.path {
        Some(path) => (
            parsers::load_table_file(path)?,
            format!("'{}'", path.display()),
        ),
        None => (parsers::load_bundled_table()?, "bundled table".to_string()),
    };
    output::print_info(&format!("Loaded {} elements from {}", table.len(), source));
    Ok(table)
}

/// 浓度阈值必须为有限非负数
fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(MatcardError::InvalidArgument(format!(
            "Threshold must be a non-negative number, got {}",
            threshold
        )));
    }
    Ok(())
}
