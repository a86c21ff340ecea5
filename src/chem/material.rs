//! # 材料组合代数
//!
//! `Material` 是可组合的同位素原子数密度集合：
//! - 由化学式或混合物直接构建
//! - `scale(k)`：密度和全部浓度乘以 k（表示分密度/体积分数）
//! - `combine(&other)`：密度相加，同位素表取并集并累加浓度
//!
//! 所有组合操作都返回新的 `Material`，操作数保持不变、可重复使用。
//!
//! ## 分密度约定
//! 相加前每个操作数应已按其体积/质量分数缩放，因此相加后的密度即为混合物密度：
//! ```text
//! CH2(0.94) × 0.9 + B4C(2.52) × 0.1  ->  ρ = 1.098 g/cc
//! ```
//!
//! ## 依赖关系
//! - 被 `chem/render.rs` 和 `commands/` 使用
//! - 使用 `chem/compound.rs`, `parsers/formula.rs`

use super::compound::{check_density, Compound};
use super::resolver::ElementResolver;
use crate::error::{MatcardError, Result};
use crate::models::IsotopeCode;
use crate::parsers::formula;

use std::collections::BTreeMap;

/// 可组合的材料
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: Option<String>,
    density: f64,
    threshold: f64,
    isotopes: BTreeMap<IsotopeCode, f64>,
    diagnostics: Vec<String>,
}

/// 混合物组分：原始化合物或已累加的材料
#[derive(Debug, Clone)]
pub enum BlendComponent {
    Compound(Compound),
    Material(Material),
}

impl BlendComponent {
    /// 统一转换为累加形式
    pub fn to_material(&self) -> Material {
        match self {
            BlendComponent::Compound(compound) => Material::from(compound.clone()),
            BlendComponent::Material(material) => material.clone(),
        }
    }

    pub fn into_material(self) -> Material {
        match self {
            BlendComponent::Compound(compound) => Material::from(compound),
            BlendComponent::Material(material) => material,
        }
    }

    pub fn scale(&self, factor: f64) -> Material {
        self.to_material().scale(factor)
    }

    pub fn combine(&self, other: &BlendComponent) -> Material {
        self.to_material().combine(&other.to_material())
    }
}

impl From<Compound> for BlendComponent {
    fn from(compound: Compound) -> Self {
        BlendComponent::Compound(compound)
    }
}

impl From<Material> for BlendComponent {
    fn from(material: Material) -> Self {
        BlendComponent::Material(material)
    }
}

impl From<Compound> for Material {
    fn from(compound: Compound) -> Self {
        Material {
            name: Some(compound.formula().to_string()),
            density: compound.density(),
            threshold: 0.0,
            isotopes: compound.concentrations().clone(),
            diagnostics: compound.diagnostics().to_vec(),
        }
    }
}

impl Material {
    /// 由单一化学式构建，名称缺省为化学式本身
    pub fn from_formula(
        resolver: &ElementResolver,
        formula: &str,
        density: f64,
        name: Option<&str>,
    ) -> Result<Self> {
        let compound = Compound::from_formula(resolver, formula, density)?;
        let material = Material::from(compound);
        Ok(match name.filter(|n| !n.trim().is_empty()) {
            Some(n) => material.with_name(n),
            None => material,
        })
    }

    /// 由混合物字符串构建
    ///
    /// 每个子化学式以材料密度计算，再按其分数缩放并累加；
    /// 卡片密度为给定的材料密度。
    pub fn from_mixture(
        resolver: &ElementResolver,
        mixture: &str,
        density: f64,
        name: Option<&str>,
    ) -> Result<Self> {
        check_density(density)?;
        let parts = formula::parse_mixture(mixture)?;

        let components = parts
            .iter()
            .map(|part| {
                let compound = Compound::from_formula(resolver, &part.formula, density)?;
                Ok((BlendComponent::from(compound), part.fraction))
            })
            .collect::<Result<Vec<_>>>()?;

        if components.is_empty() {
            return Err(MatcardError::parse(mixture, "Mixture has no components"));
        }
        let blended = Material::blend(components)?;

        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => n.to_string(),
            None if parts.len() == 1 => parts[0].formula.clone(),
            None => parts
                .iter()
                .map(|p| format!("{}{}", p.fraction, p.formula))
                .collect::<Vec<_>>()
                .join(" + "),
        };

        Ok(Material {
            name: Some(name),
            density,
            ..blended
        })
    }

    /// 直接由同位素浓度构建，重复的同位素会被累加
    pub fn from_isotopes(
        name: Option<String>,
        density: f64,
        isotopes: impl IntoIterator<Item = (IsotopeCode, f64)>,
    ) -> Self {
        let mut map = BTreeMap::new();
        for (code, concentration) in isotopes {
            *map.entry(code).or_insert(0.0) += concentration;
        }
        Material {
            name,
            density,
            threshold: 0.0,
            isotopes: map,
            diagnostics: Vec::new(),
        }
    }

    /// 按权重累加多个组分：Σ component × weight
    pub fn blend(parts: impl IntoIterator<Item = (BlendComponent, f64)>) -> Result<Self> {
        parts
            .into_iter()
            .map(|(component, weight)| component.into_material().scale(weight))
            .reduce(|acc, m| acc.combine(&m))
            .ok_or_else(|| MatcardError::ConfigurationError("blend has no components".to_string()))
    }

    /// 标量缩放：密度和全部浓度乘以 factor
    pub fn scale(&self, factor: f64) -> Material {
        Material {
            name: self.name.clone(),
            density: self.density * factor,
            threshold: self.threshold,
            isotopes: self
                .isotopes
                .iter()
                .map(|(code, c)| (*code, c * factor))
                .collect(),
            diagnostics: self.diagnostics.clone(),
        }
    }

    /// 相加组合：密度相加，同位素浓度累加
    ///
    /// 名称优先取左操作数；阈值取两者中较小者。
    pub fn combine(&self, other: &Material) -> Material {
        let mut isotopes = self.isotopes.clone();
        for (code, c) in &other.isotopes {
            *isotopes.entry(*code).or_insert(0.0) += c;
        }

        let mut diagnostics = self.diagnostics.clone();
        for msg in &other.diagnostics {
            if !diagnostics.contains(msg) {
                diagnostics.push(msg.clone());
            }
        }

        Material {
            name: self.name.clone().or_else(|| other.name.clone()),
            density: self.density + other.density,
            threshold: self.threshold.min(other.threshold),
            isotopes,
            diagnostics,
        }
    }

    pub fn with_threshold(&self, threshold: f64) -> Material {
        Material {
            threshold,
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Material {
        Material {
            name: Some(name.into()),
            ..self.clone()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 输出用名称
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// 密度 (g/cc)
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn isotopes(&self) -> &BTreeMap<IsotopeCode, f64> {
        &self.isotopes
    }

    pub fn concentration(&self, code: IsotopeCode) -> Option<f64> {
        self.isotopes.get(&code).copied()
    }

    /// 回退策略等产生的诊断信息
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// 输出行：按同位素编码升序，丢弃低于阈值的浓度
    pub fn rows(&self) -> Vec<(IsotopeCode, f64)> {
        self.isotopes
            .iter()
            .filter(|(_, c)| **c >= self.threshold)
            .map(|(code, c)| (*code, *c))
            .collect()
    }

    /// 全部同位素原子数密度之和
    pub fn total_concentration(&self) -> f64 {
        self.isotopes.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::compound::AVOGADRO;
    use crate::parsers::table::fixtures::sample_table;

    fn assert_maps_close(a: &Material, b: &Material) {
        assert_eq!(
            a.isotopes().keys().collect::<Vec<_>>(),
            b.isotopes().keys().collect::<Vec<_>>()
        );
        for (code, x) in a.isotopes() {
            let y = b.isotopes()[code];
            let scale = x.abs().max(y.abs()).max(f64::MIN_POSITIVE);
            assert!((x - y).abs() / scale < 1e-9, "{}: {} vs {}", code, x, y);
        }
    }

    #[test]
    fn test_from_formula_defaults_name() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let water = Material::from_formula(&resolver, "H2O", 1.0, None).unwrap();
        assert_eq!(water.name(), Some("H2O"));
        assert_eq!(water.threshold(), 0.0);

        let named = Material::from_formula(&resolver, "H2O", 1.0, Some("Water")).unwrap();
        assert_eq!(named.name(), Some("Water"));
    }

    #[test]
    fn test_scale_identity() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let water = Material::from_formula(&resolver, "H2O", 1.0, None).unwrap();
        assert_eq!(water.scale(1.0), water);
    }

    #[test]
    fn test_scale_does_not_touch_operand() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let water = Material::from_formula(&resolver, "H2O", 1.0, None).unwrap();
        let before = water.clone();

        let half = water.scale(0.5);
        assert_eq!(water, before);
        assert!((half.density() - 0.5).abs() < 1e-12);
        let code = IsotopeCode::new(8, 16);
        assert!(
            (half.concentration(code).unwrap() - 0.5 * water.concentration(code).unwrap()).abs()
                < 1e-15
        );
    }

    #[test]
    fn test_partial_density_blend() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let pe = Material::from_formula(&resolver, "CH2", 0.94, None).unwrap();
        let b4c = Material::from_formula(&resolver, "B4C", 2.52, None).unwrap();

        let blend = pe.scale(0.9).combine(&b4c.scale(0.1));
        assert!((blend.density() - 1.098).abs() < 1e-12);
        assert_eq!(blend.name(), Some("CH2"));

        // 碳来自两个组分，累加而非覆盖
        let c12 = IsotopeCode::new(6, 12);
        let expected =
            0.9 * pe.concentration(c12).unwrap() + 0.1 * b4c.concentration(c12).unwrap();
        assert!((blend.concentration(c12).unwrap() - expected).abs() < 1e-15);
        assert!(blend.concentration(IsotopeCode::new(5, 10)).is_some());
        assert!(blend.concentration(IsotopeCode::new(1, 1)).is_some());
    }

    #[test]
    fn test_combine_associative_and_commutative() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let a = Material::from_formula(&resolver, "H2O", 1.0, None)
            .unwrap()
            .scale(0.3);
        let b = Material::from_formula(&resolver, "SiO2", 2.2, None)
            .unwrap()
            .scale(0.5);
        let c = Material::from_formula(&resolver, "B4C", 2.52, None)
            .unwrap()
            .scale(0.2);

        let left = a.combine(&b).combine(&c);
        let right = a.combine(&b.combine(&c));
        assert_maps_close(&left, &right);
        assert!((left.density() - right.density()).abs() < 1e-12);

        let swapped = c.combine(&b).combine(&a);
        assert_maps_close(&left, &swapped);
    }

    #[test]
    fn test_combine_name_and_threshold() {
        let unnamed = Material::from_isotopes(None, 1.0, vec![(IsotopeCode::new(1, 1), 0.1)])
            .with_threshold(1e-3);
        let named = Material::from_isotopes(
            Some("Water".to_string()),
            1.0,
            vec![(IsotopeCode::new(8, 16), 0.05)],
        )
        .with_threshold(1e-6);

        let combined = unnamed.combine(&named);
        assert_eq!(combined.name(), Some("Water"));
        assert_eq!(combined.threshold(), 1e-6);

        let combined = named.combine(&unnamed);
        assert_eq!(combined.name(), Some("Water"));
    }

    #[test]
    fn test_from_isotopes_accumulates_duplicates() {
        let code = IsotopeCode::new(1, 1);
        let m = Material::from_isotopes(None, 1.0, vec![(code, 0.1), (code, 0.2)]);
        assert!((m.concentration(code).unwrap() - 0.3).abs() < 1e-15);
        assert_eq!(m.display_name(), "unnamed");
    }

    #[test]
    fn test_rows_sorted_and_thresholded() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let water = Material::from_formula(&resolver, "H2O", 1.0, None)
            .unwrap()
            .with_threshold(5e-5);

        let rows = water.rows();
        assert!(rows.iter().all(|(_, c)| *c >= water.threshold()));
        assert!(rows.windows(2).all(|w| w[0].0 < w[1].0));

        let codes: Vec<String> = rows.iter().map(|(code, _)| code.to_string()).collect();
        // H-2 (~7.7e-6) 和 O-17 (~1.3e-5) 低于阈值，O-18 (~6.9e-5) 保留
        assert_eq!(codes, vec!["1001", "8016", "8018"]);
    }

    #[test]
    fn test_from_mixture() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let mix = Material::from_mixture(&resolver, "0.9CH2 + 0.1B4C", 1.0, None).unwrap();

        assert_eq!(mix.name(), Some("0.9CH2 + 0.1B4C"));
        assert!((mix.density() - 1.0).abs() < 1e-12);

        let b4c = Material::from_formula(&resolver, "B4C", 1.0, None).unwrap();
        let b11 = IsotopeCode::new(5, 11);
        assert!(
            (mix.concentration(b11).unwrap() - 0.1 * b4c.concentration(b11).unwrap()).abs()
                < 1e-15
        );
    }

    #[test]
    fn test_from_mixture_percentages() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let mix = Material::from_mixture(&resolver, "90% SiO2 + 10% B2O3", 2.23, Some("Borosilicate"))
            .unwrap();
        assert_eq!(mix.name(), Some("Borosilicate"));
        assert!((mix.density() - 2.23).abs() < 1e-12);
        assert!(mix.concentration(IsotopeCode::new(14, 28)).is_some());
    }

    #[test]
    fn test_from_mixture_dt() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let dt = Material::from_mixture(&resolver, "DT", 1.0, Some("dt")).unwrap();

        let expected = AVOGADRO / (2.01410177812 + 3.0160492779);
        let rows = dt.rows();
        assert_eq!(rows.len(), 2);
        assert!((rows[0].1 - expected).abs() < 1e-12);
        assert!((rows[1].1 - expected).abs() < 1e-12);
    }

    #[test]
    fn test_from_mixture_errors_are_all_or_nothing() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        assert!(matches!(
            Material::from_mixture(&resolver, "0.5H2O + 0.5Qq", 1.0, None),
            Err(MatcardError::ResolutionError { .. })
        ));
        assert!(matches!(
            Material::from_mixture(&resolver, "H2O", 0.0, None),
            Err(MatcardError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_blend_components() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let pe = Compound::from_formula(&resolver, "CH2", 0.94).unwrap();
        let b4c = Material::from_formula(&resolver, "B4C", 2.52, None).unwrap();

        let blend = Material::blend(vec![
            (BlendComponent::from(pe.clone()), 0.9),
            (BlendComponent::from(b4c.clone()), 0.1),
        ])
        .unwrap();
        assert!((blend.density() - 1.098).abs() < 1e-12);

        let direct = BlendComponent::from(pe)
            .scale(0.9)
            .combine(&b4c.scale(0.1));
        assert_maps_close(&blend, &direct);

        assert!(Material::blend(Vec::new()).is_err());
    }

    #[test]
    fn test_diagnostics_propagate() {
        let table = sample_table();
        let resolver = ElementResolver::new(&table);
        let tc = Material::from_formula(&resolver, "Tc", 11.5, None).unwrap();
        let water = Material::from_formula(&resolver, "H2O", 1.0, None).unwrap();
        let mix = water.scale(0.5).combine(&tc.scale(0.5)).combine(&tc.scale(0.1));
        assert_eq!(mix.diagnostics().len(), 1);
    }

    #[test]
    fn test_bundled_table_covers_common_materials() {
        let table = crate::parsers::table::load_bundled_table().unwrap();
        let resolver = ElementResolver::new(&table);

        for (formula, density) in [
            ("Gd2O3", 7.41),
            ("BaSO4", 4.5),
            ("Bi", 9.78),
            ("V", 6.11),
            ("Nb3Sn", 8.92),
            ("Ag", 10.49),
            ("In", 7.31),
            ("Hf", 13.31),
            ("Ta", 16.65),
            ("W", 19.3),
            ("Li17Pb83", 9.4),
        ] {
            let material = Material::from_formula(&resolver, formula, density, None)
                .unwrap_or_else(|e| panic!("{}: {}", formula, e));
            assert!(material.total_concentration() > 0.0, "{}", formula);
            assert!(material.diagnostics().is_empty(), "{}", formula);
        }

        let symbols: Vec<String> = table.symbols().map(str::to_string).collect();
        for symbol in &symbols {
            assert!(resolver.resolve(symbol).is_ok(), "{}", symbol);
        }

        let gd = Material::from_formula(&resolver, "Gd2O3", 7.41, None).unwrap();
        assert!(gd.concentration(IsotopeCode::new(64, 157)).unwrap() > 0.0);
        let ba = Material::from_formula(&resolver, "BaSO4", 4.5, None).unwrap();
        assert_eq!(
            ba.isotopes().keys().filter(|c| c.atomic_number() == 56).count(),
            7
        );
    }
}
