//! # card 命令实现
//!
//! 由化学式或混合物构建材料并输出卡片。
//!
//! ## 功能
//! - 解析组成、计算同位素原子数密度
//! - 按阈值过滤并输出 `m<index>` 卡片或材料块
//! - 可选写入文件、打印同位素汇总表
//!
//! ## 依赖关系
//! - 使用 `cli/card.rs` 定义的参数
//! - 使用 `chem/` 计算与输出
//! - 使用 `utils/output.rs`

use matcard::chem::{render, ElementResolver, Material};
use crate::cli::card::{CardArgs, CardStyle};
use matcard::error::{MatcardError, Result};
use crate::utils::output;

use std::fs;
use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Isotope")]
    isotope: String,
    #[tabled(rename = "Z")]
    z: u32,
    #[tabled(rename = "A")]
    a: u32,
    #[tabled(rename = "Atoms/b-cm")]
    concentration: String,
    #[tabled(rename = "Atom %")]
    atom_percent: String,
}

/// 执行 card 命令
pub fn execute(args: CardArgs) -> Result<()> {
    super::validate_threshold(args.threshold)?;

    let table = super::open_table(&args.table)?;
    let resolver = ElementResolver::new(&table);

    let material = Material::from_mixture(
        &resolver,
        &args.composition,
        args.density,
        args.name.as_deref(),
    )?
    .with_threshold(args.threshold);

    for msg in material.diagnostics() {
        output::print_warning(msg);
    }

    let text = render_material(&material, args.style, args.index);

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", text)).map_err(|e| MatcardError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            output::print_written(material.display_name(), &path.display().to_string());
        }
        None => println!("{}", text),
    }

    if args.summary {
        print_summary(&material);
    }

    Ok(())
}

/// 按样式输出卡片文本
fn render_material(material: &Material, style: CardStyle, index: usize) -> String {
    match style {
        CardStyle::Card => render::card(material, index),
        CardStyle::Material => render::material_block(material),
    }
}

fn summary_rows(material: &Material) -> Vec<SummaryRow> {
    let total = material.total_concentration();
    material
        .rows()
        .into_iter()
        .map(|(code, c)| SummaryRow {
            isotope: code.to_string(),
            z: code.atomic_number(),
            a: code.mass_number(),
            concentration: render::format_scientific(c),
            atom_percent: if total > 0.0 {
                format!("{:.4}", 100.0 * c / total)
            } else {
                "-".to_string()
            },
        })
        .collect()
}

fn print_summary(material: &Material) {
    output::print_header(&format!("Isotopes of {}", material.display_name()));
    eprintln!("{}", Table::new(summary_rows(material)));
    output::print_info(&format!(
        "Total: {} atoms/b-cm over {} isotopes ({} listed)",
        render::format_scientific(material.total_concentration()),
        material.isotopes().len(),
        material.rows().len()
    ));
}
