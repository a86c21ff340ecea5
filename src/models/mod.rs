//! # 数据模型模块
//!
//! 定义同位素、同位素参考表等数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`chem/` 和 `commands/` 使用
//! - 子模块: isotope, table

pub mod isotope;
pub mod table;

pub use isotope::{Isotope, IsotopeCode};
pub use table::{IsotopeRecord, IsotopeTable};
