//! # card 子命令 CLI 定义
//!
//! 由单个化学式或混合物生成材料卡片
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/card.rs`

use super::TableArgs;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 卡片输出样式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CardStyle {
    /// `m<index>` card with inline comment header
    Card,
    /// Comment header followed by isotope rows
    Material,
}

impl std::fmt::Display for CardStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardStyle::Card => write!(f, "card"),
            CardStyle::Material => write!(f, "material"),
        }
    }
}

/// card 子命令参数
#[derive(Args, Debug)]
pub struct CardArgs {
    /// Formula or mixture, e.g. 'H2O', 'C2H4 B0.2', '90% CH2 + 10% B4C'
    pub composition: String,

    /// Material density (g/cm3)
    #[arg(short, long)]
    pub density: f64,

    /// Material name (defaults to the composition)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Omit isotopes below this number density (atoms/b-cm)
    #[arg(long, default_value_t = 0.0)]
    pub threshold: f64,

    /// Material number used in the card header
    #[arg(short, long, default_value_t = 1)]
    pub index: usize,

    /// Output style
    #[arg(long, value_enum, default_value_t = CardStyle::Card)]
    pub style: CardStyle,

    /// Write the card to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print an isotope summary table to stderr
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    #[command(flatten)]
    pub table: TableArgs,
}
