//! # 组成解析与浓度代数模块
//!
//! 从化学式到同位素原子数密度的核心计算。
//!
//! ## 子模块
//! - `resolver`: 元素符号 -> 同位素及丰度
//! - `compound`: 单一化学式的摩尔质量与原子数密度
//! - `material`: 材料缩放与相加组合
//! - `render`: 材料卡片文本输出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `parsers/formula.rs`

pub mod compound;
pub mod material;
pub mod render;
pub mod resolver;

pub use compound::{Compound, AVOGADRO};
pub use material::{BlendComponent, Material};
pub use resolver::{ElementResolver, Resolution};
