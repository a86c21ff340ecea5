//! # 同位素参考表
//!
//! 按元素符号组织的同位素组成数据（NIST 同位素组成表格式）。
//! 进程启动时加载一次，之后只读，并显式传入 `ElementResolver`。
//!
//! ## 依赖关系
//! - 被 `parsers/table.rs` 构建
//! - 被 `chem/resolver.rs` 查询

use serde::Deserialize;
use std::collections::HashMap;

/// 同位素表中的一行
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IsotopeRecord {
    /// 元素符号
    pub element: String,

    pub atomic_number: u32,

    pub mass_number: u32,

    /// 同位素原子质量 (g/mol)
    pub isotope_atomic_mass: f64,

    /// 元素原子量，人工合成元素可能缺失
    pub element_atomic_weight: Option<f64>,

    /// 天然同位素组成（丰度分数），不稳定同位素可能缺失
    pub isotopic_composition: Option<f64>,
}

impl IsotopeRecord {
    /// 已定义的天然丰度（空值和 NaN 视为未定义）
    pub fn abundance(&self) -> Option<f64> {
        self.isotopic_composition.filter(|v| v.is_finite())
    }

    /// 已定义的元素原子量
    pub fn atomic_weight(&self) -> Option<f64> {
        self.element_atomic_weight.filter(|v| v.is_finite())
    }
}

/// 同位素参考表
#[derive(Debug, Clone, Default)]
pub struct IsotopeTable {
    elements: HashMap<String, Vec<IsotopeRecord>>,
}

impl IsotopeTable {
    /// 从记录列表构建，保持每个元素内部的行顺序
    pub fn from_records(records: impl IntoIterator<Item = IsotopeRecord>) -> Self {
        let mut elements: HashMap<String, Vec<IsotopeRecord>> = HashMap::new();
        for record in records {
            elements
                .entry(record.element.clone())
                .or_default()
                .push(record);
        }
        IsotopeTable { elements }
    }

    /// 按元素符号查询全部同位素行
    pub fn isotopes(&self, symbol: &str) -> Option<&[IsotopeRecord]> {
        self.elements.get(symbol).map(|rows| rows.as_slice())
    }

    /// 按 (元素符号, 质量数) 查询单个同位素行
    pub fn find(&self, symbol: &str, mass_number: u32) -> Option<&IsotopeRecord> {
        self.isotopes(symbol)?
            .iter()
            .find(|row| row.mass_number == mass_number)
    }

    /// 元素天然原子量（取该元素第一条已定义的值）
    pub fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        self.isotopes(symbol)?
            .iter()
            .find_map(|row| row.atomic_weight())
    }

    /// 全部元素符号（无序）
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
