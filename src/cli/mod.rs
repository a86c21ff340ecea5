//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `card`: 由化学式或混合物生成单个材料卡片
//! - `batch`: 批量处理材料清单 CSV，生成卡片组文件
//! - `inspect`: 查看元素符号解析出的同位素
//! - `condense`: 合并结构式中的重复原子
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: card, batch, inspect, condense

pub mod batch;
pub mod card;
pub mod condense;
pub mod inspect;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Matcard - 中子输运材料卡片生成工具
#[derive(Parser)]
#[command(name = "matcard")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Generate MCNP/PHITS material cards from chemical formulas and mixtures",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build a material card from a formula or mixture
    Card(card::CardArgs),

    /// Build material decks from material-list CSV files
    Batch(batch::BatchArgs),

    /// Show the isotopes an element symbol resolves to
    Inspect(inspect::InspectArgs),

    /// Collapse a structural formula into unique atom counts
    Condense(condense::CondenseArgs),
}

/// 同位素参考表参数（多个子命令共用），缺省使用内嵌表
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Isotopic composition table (CSV) overriding the bundled one
    #[arg(long = "table", env = "MATCARD_TABLE")]
    pub path: Option<PathBuf>,
}
