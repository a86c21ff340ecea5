//! # 元素解析器
//!
//! 将化学式中的元素符号解析为一组同位素及其丰度。
//!
//! ## 解析规则
//! - `D` -> H-2，`T` -> H-3
//! - 带质量数的符号（`C14`、`14C`、`C-14`）只选择该同位素，丰度强制为 1.0
//! - 普通符号返回同位素表中所有具有天然丰度的同位素
//! - 元素没有任何天然丰度数据时，回退到第一条同位素（丰度 1.0），并附带诊断信息
//!
//! ## 依赖关系
//! - 被 `chem/compound.rs` 和 `commands/inspect.rs` 使用
//! - 使用 `models/table.rs` 查询同位素表

use crate::error::{MatcardError, Result};
use crate::models::{Isotope, IsotopeRecord, IsotopeTable};

use regex::Regex;
use std::sync::LazyLock;

/// 普通元素符号
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-z]?$").unwrap());

/// 带质量数的元素符号：`14C`、`14-C`、`C14`、`C-14`
static MASS_SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)-?([A-Z][a-z]?)|([A-Z][a-z]?)-?(\d+))$").unwrap()
});

/// 元素符号解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// 同位素表中的元素符号（别名已展开，例如 `D` -> `H`）
    pub element: String,

    /// 参与计算的同位素
    pub isotopes: Vec<Isotope>,

    /// 回退策略产生的诊断信息
    pub diagnostic: Option<String>,
}

impl Resolution {
    /// 同位素丰度加权平均原子质量 Σ(丰度 × 同位素质量)
    pub fn mean_atomic_mass(&self) -> f64 {
        self.isotopes
            .iter()
            .map(|iso| iso.natural_abundance * iso.atomic_mass)
            .sum()
    }
}

/// 元素解析器，持有只读的同位素表引用
#[derive(Debug, Clone, Copy)]
pub struct ElementResolver<'a> {
    table: &'a IsotopeTable,
}

impl<'a> ElementResolver<'a> {
    pub fn new(table: &'a IsotopeTable) -> Self {
        ElementResolver { table }
    }

    /// 解析一个元素符号
    pub fn resolve(&self, symbol: &str) -> Result<Resolution> {
        match split_mass_number(symbol)? {
            (element, Some(mass_number)) => self.resolve_isotope(symbol, element, mass_number),
            (element, None) => self.resolve_natural(element),
        }
    }

    /// 天然同位素组成
    fn resolve_natural(&self, element: &str) -> Result<Resolution> {
        let rows = self.rows(element)?;
        let atomic_weight = self.table.atomic_weight(element);

        let isotopes: Vec<Isotope> = rows
            .iter()
            .filter_map(|row| {
                row.abundance()
                    .map(|abundance| to_isotope(row, atomic_weight, abundance))
            })
            .collect();

        if !isotopes.is_empty() {
            return Ok(Resolution {
                element: element.to_string(),
                isotopes,
                diagnostic: None,
            });
        }

        // 没有天然丰度：使用第一条同位素，丰度 100%
        let first = &rows[0];
        Ok(Resolution {
            element: element.to_string(),
            isotopes: vec![to_isotope(first, atomic_weight, 1.0)],
            diagnostic: Some(format!(
                "No natural abundance data for '{}', using {}-{} at 100%",
                element, element, first.mass_number
            )),
        })
    }

    /// 显式指定的单一同位素
    fn resolve_isotope(&self, symbol: &str, element: &str, mass_number: u32) -> Result<Resolution> {
        self.rows(element)?;

        let row = self.table.find(element, mass_number).ok_or_else(|| {
            MatcardError::resolution(
                symbol,
                format!("isotope {}-{} not found in isotope table", element, mass_number),
            )
        })?;

        Ok(Resolution {
            element: element.to_string(),
            isotopes: vec![to_isotope(row, self.table.atomic_weight(element), 1.0)],
            diagnostic: None,
        })
    }

    fn rows(&self, element: &str) -> Result<&'a [IsotopeRecord]> {
        self.table
            .isotopes(element)
            .filter(|rows| !rows.is_empty())
            .ok_or_else(|| MatcardError::resolution(element, "unknown element symbol"))
    }
}

/// 拆分元素符号与显式质量数
fn split_mass_number(symbol: &str) -> Result<(&str, Option<u32>)> {
    match symbol {
        "D" => return Ok(("H", Some(2))),
        "T" => return Ok(("H", Some(3))),
        _ => {}
    }

    let has_digit = symbol.chars().any(|c| c.is_ascii_digit());
    let has_alpha = symbol.chars().any(|c| c.is_ascii_alphabetic());

    if !has_digit {
        return if SYMBOL_RE.is_match(symbol) {
            Ok((symbol, None))
        } else {
            Err(MatcardError::resolution(symbol, "not a valid chemical symbol"))
        };
    }

    if !has_alpha {
        return Err(MatcardError::resolution(
            symbol,
            "mass number given without element symbol",
        ));
    }

    let caps = MASS_SYMBOL_RE.captures(symbol).ok_or_else(|| {
        MatcardError::resolution(symbol, "malformed isotope (expected e.g. C14, 14C, C-14)")
    })?;

    let (element, digits) = match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
        (Some(mass), Some(el), _, _) => (el.as_str(), mass.as_str()),
        (_, _, Some(el), Some(mass)) => (el.as_str(), mass.as_str()),
        _ => {
            return Err(MatcardError::resolution(symbol, "malformed isotope"));
        }
    };

    let mass_number: u32 = digits
        .parse()
        .map_err(|_| MatcardError::resolution(symbol, "invalid mass number"))?;

    if mass_number == 0 {
        return Err(MatcardError::resolution(symbol, "mass number must be positive"));
    }

    Ok((element, Some(mass_number)))
}

fn to_isotope(row: &IsotopeRecord, atomic_weight: Option<f64>, abundance: f64) -> Isotope {
    Isotope {
        atomic_number: row.atomic_number,
        mass_number: row.mass_number,
        atomic_mass: row.isotope_atomic_mass,
        atomic_weight: atomic_weight.unwrap_or(row.isotope_atomic_mass),
        natural_abundance: abundance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::table::fixtures::sample_table;

    #[test]
    fn test_resolve_natural_hydrogen() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let res = resolver.resolve("H").unwrap();

        // H-3 没有天然丰度，不参与
        assert_eq!(res.isotopes.len(), 2);
        assert_eq!(res.isotopes[0].code().to_string(), "1001");
        assert_eq!(res.isotopes[1].code().to_string(), "1002");
        assert!((res.isotopes[0].natural_abundance - 0.999885).abs() < 1e-12);
        assert!(res.diagnostic.is_none());
        assert!((res.mean_atomic_mass() - 1.00794).abs() < 1e-4);
    }

    #[test]
    fn test_resolve_deuterium_and_tritium() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);

        let d = resolver.resolve("D").unwrap();
        assert_eq!(d.element, "H");
        assert_eq!(d.isotopes.len(), 1);
        assert_eq!(d.isotopes[0].code().to_string(), "1002");
        assert_eq!(d.isotopes[0].natural_abundance, 1.0);

        let t = resolver.resolve("T").unwrap();
        assert_eq!(t.isotopes[0].code().to_string(), "1003");
        assert!((t.mean_atomic_mass() - 3.0160492779).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_explicit_mass_number_forms() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);

        for symbol in ["C14", "14C", "C-14", "14-C"] {
            let res = resolver.resolve(symbol).unwrap();
            assert_eq!(res.isotopes.len(), 1, "{}", symbol);
            let iso = &res.isotopes[0];
            assert_eq!(iso.code().to_string(), "6014");
            assert_eq!(iso.natural_abundance, 1.0);
            // 原子量取元素天然值，原子质量取同位素自身值
            assert!((iso.atomic_weight - 12.011).abs() < 1e-9);
            assert!((iso.atomic_mass - 14.0032419884).abs() < 1e-9);
        }
    }

    #[test]
    fn test_resolve_fallback_without_abundance() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let res = resolver.resolve("Tc").unwrap();

        assert_eq!(res.isotopes.len(), 1);
        assert_eq!(res.isotopes[0].mass_number, 97);
        assert_eq!(res.isotopes[0].natural_abundance, 1.0);
        assert!(res.diagnostic.unwrap().contains("Tc"));
    }

    #[test]
    fn test_resolve_unknown_symbol() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);

        let err = resolver.resolve("Xx").unwrap_err();
        match err {
            MatcardError::ResolutionError { symbol, .. } => assert_eq!(symbol, "Xx"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_malformed_symbols() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);

        assert!(matches!(
            resolver.resolve("14"),
            Err(MatcardError::ResolutionError { .. })
        ));
        assert!(resolver.resolve("C14C").is_err());
        assert!(resolver.resolve("c").is_err());
        assert!(resolver.resolve("C0").is_err());
    }

    #[test]
    fn test_resolve_missing_isotope() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let err = resolver.resolve("C15").unwrap_err();
        assert!(err.to_string().contains("C-15"));
    }
}
