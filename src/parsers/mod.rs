//! # 解析器模块
//!
//! 提供化学式、混合物字符串和同位素参考表的解析器。
//!
//! ## 依赖关系
//! - 被 `chem/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: formula, table

pub mod formula;
pub mod table;

pub use formula::condense_formula;
pub use table::{load_bundled_table, load_table_file};
