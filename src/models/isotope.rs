//! # 同位素数据模型
//!
//! 定义同位素编码 (ZAID 风格) 与解析后的同位素值。
//!
//! ## 依赖关系
//! - 被 `chem/` 和 `models/table.rs` 使用
//! - 无外部模块依赖

use std::fmt;

/// 同位素编码：原子序数拼接三位补零的质量数
///
/// 内部存储为 `Z * 1000 + A`，因此数值排序与输出卡片要求的排序一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsotopeCode(u32);

impl IsotopeCode {
    pub fn new(atomic_number: u32, mass_number: u32) -> Self {
        IsotopeCode(atomic_number * 1000 + mass_number)
    }

    pub fn atomic_number(&self) -> u32 {
        self.0 / 1000
    }

    pub fn mass_number(&self) -> u32 {
        self.0 % 1000
    }
}

impl fmt::Display for IsotopeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.atomic_number(), self.mass_number())
    }
}

/// 解析后的同位素
///
/// 由 `ElementResolver` 产生，创建后不可变。
#[derive(Debug, Clone, PartialEq)]
pub struct Isotope {
    /// 原子序数 Z
    pub atomic_number: u32,

    /// 质量数 A
    pub mass_number: u32,

    /// 同位素原子质量 (g/mol)
    pub atomic_mass: f64,

    /// 元素天然原子量 (g/mol)
    pub atomic_weight: f64,

    /// 天然丰度；显式指定同位素时为 1.0
    pub natural_abundance: f64,
}

impl Isotope {
    pub fn code(&self) -> IsotopeCode {
        IsotopeCode::new(self.atomic_number, self.mass_number)
    }
}
