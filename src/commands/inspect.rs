//! # inspect 命令实现
//!
//! 显示元素符号解析出的同位素、丰度与平均原子质量。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `chem/resolver.rs`
//! - 使用 `tabled` 输出表格

use matcard::chem::{ElementResolver, Resolution};
use crate::cli::inspect::InspectArgs;
use matcard::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 同位素表格行
#[derive(Debug, Clone, Tabled)]
struct IsotopeRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Isotope")]
    isotope: String,
    #[tabled(rename = "Z")]
    z: u32,
    #[tabled(rename = "A")]
    a: u32,
    #[tabled(rename = "Mass (u)")]
    atomic_mass: String,
    #[tabled(rename = "Abundance")]
    abundance: String,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    let table = super::open_table(&args.table)?;
    let resolver = ElementResolver::new(&table);

    let mut rows = Vec::new();
    for symbol in &args.symbols {
        let resolution = resolver.resolve(strip_brackets(symbol))?;
        if let Some(msg) = &resolution.diagnostic {
            output::print_warning(msg);
        }
        output::print_info(&format!(
            "{}: mean atomic mass {:.6} u",
            symbol,
            resolution.mean_atomic_mass()
        ));
        rows.extend(isotope_rows(symbol, &resolution));
    }

    println!("{}", Table::new(rows));
    Ok(())
}

/// `[C14]` 与 `C14` 等价
fn strip_brackets(symbol: &str) -> &str {
    symbol
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or_else(|| symbol.trim())
}

fn isotope_rows(symbol: &str, resolution: &Resolution) -> Vec<IsotopeRow> {
    resolution
        .isotopes
        .iter()
        .map(|iso| IsotopeRow {
            symbol: symbol.to_string(),
            isotope: iso.code().to_string(),
            z: iso.atomic_number,
            a: iso.mass_number,
            atomic_mass: format!("{:.6}", iso.atomic_mass),
            abundance: format!("{:.6}", iso.natural_abundance),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcard::parsers::table::load_bundled_table;

    #[test]
    fn test_strip_brackets() {
        assert_eq!(strip_brackets("[C14]"), "C14");
        assert_eq!(strip_brackets(" [U-235] "), "U-235");
        assert_eq!(strip_brackets("Fe"), "Fe");
        assert_eq!(strip_brackets("[C14"), "[C14");
    }

    #[test]
    fn test_isotope_rows_natural() {
        let table = load_bundled_table().unwrap();
        let resolver = ElementResolver::new(&table);
        let resolution = resolver.resolve("C").unwrap();

        let rows = isotope_rows("C", &resolution);
        let codes: Vec<&str> = rows.iter().map(|r| r.isotope.as_str()).collect();
        assert_eq!(codes, vec!["6012", "6013"]);
        assert_eq!(rows[0].abundance, "0.989300");
        assert_eq!(rows[0].atomic_mass, "12.000000");
    }

    #[test]
    fn test_isotope_rows_explicit() {
        let table = load_bundled_table().unwrap();
        let resolver = ElementResolver::new(&table);
        let resolution = resolver.resolve(strip_brackets("[C14]")).unwrap();

        let rows = isotope_rows("[C14]", &resolution);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].isotope, "6014");
        assert_eq!(rows[0].abundance, "1.000000");
    }
}
