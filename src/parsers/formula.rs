//! # 化学式与混合物解析器
//!
//! 将紧凑的化学式字符串拆分为有序的 (元素符号, 数量) 列表，
//! 并将混合物字符串拆分为 (子化学式, 分数) 列表。
//!
//! ## 语法说明
//! ```text
//! 化学式:    H2O            C2H4 B0.2          Fe0.988 C0.001 Mn0.0045
//! 同位素:    D2O   T   [C14]O2   [235U]0.05 [238U]0.95   [Li-6]F
//! 混合物:    90% SiO2 + 10% B2O3      0.9CH2 + 0.1B4C      DT
//! ```
//! - 元素符号：一个大写字母，可跟一个小写字母；或方括号内的显式同位素
//! - 数量：可选的十进制数，缺省为 1；小于 1 的数量表示掺杂/杂质分数
//! - 空格分隔的多个组分各自独立计算摩尔质量
//! - 混合物分数带 `%` 时为百分数；不带 `%` 且大于 1 时也按百分数处理
//!
//! 无法识别的片段会整体拒绝并报告，而不是静默跳过。
//!
//! ## 依赖关系
//! - 被 `chem/compound.rs`、`chem/material.rs` 和 `commands/` 使用
//! - 使用 `regex`

use crate::error::{MatcardError, Result};

use regex::Regex;
use std::sync::LazyLock;

/// 单个元素记号：`H`、`Fe`、`[C14]`，后跟可选数量
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[([^\[\]]+)\]|([A-Z][a-z]?))(\d+(?:\.\d*)?|\.\d+)?").unwrap()
});

/// `90%SiO2` / `90 % SiO2`
static PERCENT_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d*)?)\s*%\s*(.+)$").unwrap());

/// `0.9CH2` / `0.9 CH2`（无百分号时分数必须带小数点）
static DECIMAL_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+)\s*(.+)$").unwrap());

/// 化学式中的一个元素记号
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    /// 元素符号，可能带显式质量数（`C14`、`14C`、`C-14`）或别名 `D`/`T`
    pub symbol: String,

    /// 数量；小于 1 表示掺杂分数
    pub quantity: f64,
}

impl ElementSpec {
    pub fn new(symbol: impl Into<String>, quantity: f64) -> Self {
        ElementSpec {
            symbol: symbol.into(),
            quantity,
        }
    }

    /// 是否为掺杂/杂质记号
    pub fn is_dopant(&self) -> bool {
        self.quantity < 1.0
    }
}

/// 空格分隔的一个组分
pub type Component = Vec<ElementSpec>;

/// 混合物中的一项
#[derive(Debug, Clone, PartialEq)]
pub struct MixturePart {
    pub formula: String,
    pub fraction: f64,
}

/// 解析化学式
///
/// `"C2H4 B0.2"` -> `[[C:2, H:4], [B:0.2]]`
pub fn parse_formula(formula: &str) -> Result<Vec<Component>> {
    let components: Vec<Component> = formula
        .split_whitespace()
        .map(|c| parse_component(c, formula))
        .collect::<Result<_>>()?;

    if components.is_empty() {
        return Err(MatcardError::parse(formula, "Empty formula"));
    }

    Ok(components)
}

/// 解析单个组分（不含空白）
fn parse_component(component: &str, formula: &str) -> Result<Component> {
    let mut specs = Vec::new();
    let mut rest = component;

    while !rest.is_empty() {
        let caps = TOKEN_RE.captures(rest).ok_or_else(|| {
            MatcardError::parse(formula, format!("Unrecognized token at '{}'", rest))
        })?;

        // 整体匹配必然存在
        let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        let symbol = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();

        if symbol.is_empty() {
            return Err(MatcardError::parse(formula, "Empty isotope brackets"));
        }

        let quantity = match caps.get(3) {
            Some(m) => parse_quantity(m.as_str(), formula)?,
            None => 1.0,
        };

        specs.push(ElementSpec::new(symbol, quantity));
        rest = &rest[whole.len()..];
    }

    Ok(specs)
}

fn parse_quantity(text: &str, formula: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| MatcardError::parse(formula, format!("Invalid quantity '{}'", text)))?;

    if value <= 0.0 {
        return Err(MatcardError::parse(
            formula,
            format!("Quantity must be positive, got '{}'", text),
        ));
    }

    Ok(value)
}

/// 解析混合物
///
/// `"90% SiO2 + 10% B2O3"` -> `[(SiO2, 0.9), (B2O3, 0.1)]`
pub fn parse_mixture(mixture: &str) -> Result<Vec<MixturePart>> {
    let mut parts = Vec::new();

    for part in mixture.split('+') {
        let part = part.trim();
        if part.is_empty() {
            return Err(MatcardError::parse(mixture, "Empty mixture term"));
        }

        // 带 `%` 的分数总是百分数；不带 `%` 时大于 1 的分数按百分数处理
        let (fraction, formula) = if let Some(caps) = PERCENT_PART_RE.captures(part) {
            let percent = parse_fraction(&caps[1], mixture)?;
            (percent / 100.0, caps[2].trim().to_string())
        } else if let Some(caps) = DECIMAL_PART_RE.captures(part) {
            let value = parse_fraction(&caps[1], mixture)?;
            let fraction = if value > 1.0 { value / 100.0 } else { value };
            (fraction, caps[2].trim().to_string())
        } else {
            (1.0, part.to_string())
        };

        if fraction <= 0.0 {
            return Err(MatcardError::parse(
                mixture,
                format!("Fraction of '{}' must be positive", formula),
            ));
        }

        parts.push(MixturePart { formula, fraction });
    }

    Ok(parts)
}

fn parse_fraction(text: &str, mixture: &str) -> Result<f64> {
    text.parse()
        .map_err(|_| MatcardError::parse(mixture, format!("Invalid fraction '{}'", text)))
}

/// 合并结构式中的重复原子
///
/// 忽略 `-` 分隔符，按首次出现的顺序累加数量：
/// `"HO-C2H4-NH2"` -> `"H7O1C2N1"`
pub fn condense_formula(formula: &str) -> Result<String> {
    let mut counts: Vec<(String, f64)> = Vec::new();

    for segment in formula.split(|c: char| c == '-' || c.is_whitespace()) {
        if segment.is_empty() {
            continue;
        }
        for spec in parse_component(segment, formula)? {
            match counts.iter_mut().find(|(s, _)| *s == spec.symbol) {
                Some((_, n)) => *n += spec.quantity,
                None => counts.push((spec.symbol, spec.quantity)),
            }
        }
    }

    if counts.is_empty() {
        return Err(MatcardError::parse(formula, "Empty formula"));
    }

    Ok(counts
        .iter()
        .map(|(symbol, n)| format!("{}{}", symbol, format_count(*n)))
        .collect())
}

fn format_count(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as u64)
    } else {
        format!("{}", n)
    }
}
