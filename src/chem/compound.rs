//! # 化合物浓度计算
//!
//! 给定一个化学式和密度，计算摩尔质量及每个同位素的原子数密度。
//!
//! ## 公式
//! N(iso) = N_A × ρ × 丰度 × 数量 / M
//!
//! 其中 N_A 以 1/(mol·g/cc) 表示，ρ 单位 g/cc 时结果单位为 atoms/(barn·cm)。
//!
//! ## 掺杂语义
//! - 数量 ≥ 1 的记号构成基体，每个组分的基体质量 Σ(M × 数量) 除以纯度后作为 M
//! - 数量 < 1 的记号视为掺杂质量分数，M 取该元素自身平均原子质量，
//!   分子中使用原始分数
//! - 纯度 = 1 − Σ(掺杂分数)，必须大于 0
//!
//! ## 依赖关系
//! - 被 `chem/material.rs` 使用
//! - 使用 `chem/resolver.rs`, `parsers/formula.rs`

use super::resolver::{ElementResolver, Resolution};
use crate::error::{MatcardError, Result};
use crate::models::IsotopeCode;
use crate::parsers::formula::{self, Component, ElementSpec};

use std::collections::BTreeMap;

/// 阿伏伽德罗常数，单位 1/(mol·g/cc)，乘以 g/cc 除以 g/mol 得到 atoms/(barn·cm)
pub const AVOGADRO: f64 = 0.602214076;

/// 单一化学式的计算结果
#[derive(Debug, Clone)]
pub struct Compound {
    formula: String,
    density: f64,
    components: Vec<Component>,
    molar_mass: f64,
    purity: f64,
    concentrations: BTreeMap<IsotopeCode, f64>,
    diagnostics: Vec<String>,
}

impl Compound {
    /// 解析化学式并计算
    pub fn from_formula(resolver: &ElementResolver, formula: &str, density: f64) -> Result<Self> {
        let components = formula::parse_formula(formula)?;
        Self::build(resolver, formula, components, density)
    }

    /// 从已解析的组分计算
    pub fn build(
        resolver: &ElementResolver,
        formula: &str,
        components: Vec<Component>,
        density: f64,
    ) -> Result<Self> {
        check_density(density)?;

        if components.iter().all(|c| c.is_empty()) {
            return Err(MatcardError::parse(formula, "Empty formula"));
        }

        // 先解析全部符号，任何失败都终止整个化合物
        let resolved: Vec<Vec<(&ElementSpec, Resolution)>> = components
            .iter()
            .map(|component| {
                component
                    .iter()
                    .map(|spec| Ok((spec, resolver.resolve(&spec.symbol)?)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<_>>()?;

        let dopant_sum: f64 = components
            .iter()
            .flatten()
            .filter(|spec| spec.is_dopant())
            .map(|spec| spec.quantity)
            .sum();
        let purity = 1.0 - dopant_sum;

        if purity <= 0.0 {
            return Err(MatcardError::ConfigurationError(format!(
                "dopant fractions in '{}' sum to {}, must be below 1",
                formula, dopant_sum
            )));
        }

        let mut concentrations: BTreeMap<IsotopeCode, f64> = BTreeMap::new();
        let mut diagnostics: Vec<String> = Vec::new();
        let mut molar_mass = 0.0;

        for component in &resolved {
            let host_mass: f64 = component
                .iter()
                .filter(|(spec, _)| !spec.is_dopant())
                .map(|(spec, res)| res.mean_atomic_mass() * spec.quantity)
                .sum();
            let host_molar_mass = host_mass / purity;
            molar_mass += host_molar_mass;

            for (spec, res) in component {
                let divisor = if spec.is_dopant() {
                    res.mean_atomic_mass()
                } else {
                    host_molar_mass
                };

                if !(divisor > 0.0) {
                    return Err(MatcardError::ConfigurationError(format!(
                        "molar mass of '{}' in '{}' is not positive",
                        spec.symbol, formula
                    )));
                }

                let factor = AVOGADRO * density * spec.quantity / divisor;
                for iso in &res.isotopes {
                    *concentrations.entry(iso.code()).or_insert(0.0) +=
                        factor * iso.natural_abundance;
                }

                if let Some(msg) = &res.diagnostic {
                    if !diagnostics.contains(msg) {
                        diagnostics.push(msg.clone());
                    }
                }
            }
        }

        Ok(Compound {
            formula: formula.to_string(),
            density,
            components,
            molar_mass,
            purity,
            concentrations,
            diagnostics,
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// 基体摩尔质量 (g/mol)，已除以纯度；纯掺杂化学式为 0
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// 纯度 = 1 − Σ(掺杂分数)
    pub fn purity(&self) -> f64 {
        self.purity
    }

    /// 同位素原子数密度 atoms/(barn·cm)
    pub fn concentrations(&self) -> &BTreeMap<IsotopeCode, f64> {
        &self.concentrations
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

/// 密度必须为有限正数
pub(crate) fn check_density(density: f64) -> Result<()> {
    if !density.is_finite() || density <= 0.0 {
        return Err(MatcardError::ConfigurationError(format!(
            "density must be a positive number, got {}",
            density
        )));
    }
    Ok(())
}
