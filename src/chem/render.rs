//! # 材料卡片输出
//!
//! 将 `Material` 格式化为 MCNP/PHITS 材料卡片文本。
//!
//! ## 输出格式
//! ```text
//! $ Water;	1.000 g/cm3              (材料形式)
//! m1		$ Water; 1.000 g/cc        (卡片形式)
//! 1001	6.684818E-02
//! 8016	3.334741E-02
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/card.rs` 和 `commands/batch.rs` 调用
//! - 使用 `chem/material.rs`

use super::material::Material;

use std::fmt;

/// 科学计数法，6 位小数，指数至少两位并带符号（与 C 的 `%.6E` 一致）
pub fn format_scientific(value: f64) -> String {
    let text = format!("{:.6E}", value);
    match text.split_once('E') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}E{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => text,
        },
        // inf / NaN
        None => text,
    }
}

/// 同位素数据行
fn push_rows(out: &mut String, material: &Material) {
    for (code, concentration) in material.rows() {
        out.push('\n');
        out.push_str(&format!("{}\t{}", code, format_scientific(concentration)));
    }
}

/// 材料形式：`$ <name>;\t<density> g/cm3` + 数据行
pub fn material_block(material: &Material) -> String {
    let mut out = format!(
        "$ {};\t{:.3} g/cm3",
        material.display_name(),
        material.density()
    );
    push_rows(&mut out, material);
    out
}

/// 卡片形式：`m<index>\t\t$ <name>; <density> g/cc` + 数据行
pub fn card(material: &Material, index: usize) -> String {
    let mut out = format!(
        "m{}\t\t$ {}; {:.3} g/cc",
        index,
        material.display_name(),
        material.density()
    );
    push_rows(&mut out, material);
    out
}

/// 多个材料组成的卡片组，编号从 `first_index` 开始
pub fn deck<'a>(materials: impl IntoIterator<Item = &'a Material>, first_index: usize) -> String {
    let mut out = String::new();
    for (i, material) in materials.into_iter().enumerate() {
        out.push_str(&card(material, first_index + i));
        out.push_str("\n\n");
    }
    out
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", material_block(self))
    }
}
