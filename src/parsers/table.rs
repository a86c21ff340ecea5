//! # 同位素参考表 CSV 解析器
//!
//! 读取 NIST 同位素组成表 (CSV)。
//!
//! ## CSV 格式说明
//! ```text
//! element,atomic_number,mass_number,isotope_atomic_mass,element_atomic_weight,isotopic_composition
//! H,1,1,1.00782503223,1.008,0.999885
//! H,1,3,3.0160492779,1.008,
//! ```
//! 空单元格或 `NaN` 表示未定义（例如只有人工同位素的元素没有天然丰度）。
//!
//! 程序内嵌一份表（Z = 1..100 的天然同位素及常用长寿命同位素），
//! 未指定 `--table` 时使用。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/table.rs`
//! - 使用 `csv` + `serde` 反序列化

use crate::error::{MatcardError, Result};
use crate::models::{IsotopeRecord, IsotopeTable};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 内嵌的同位素表
pub const BUNDLED_TABLE: &str = include_str!("../../data/nist_isotopic_compositions.csv");

/// 加载内嵌的同位素表
pub fn load_bundled_table() -> Result<IsotopeTable> {
    load_table(BUNDLED_TABLE.as_bytes())
}

/// 从文件加载同位素表
pub fn load_table_file(path: &Path) -> Result<IsotopeTable> {
    if !path.exists() {
        return Err(MatcardError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| MatcardError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    load_table(file)
}

/// 从任意 reader 加载同位素表
pub fn load_table<R: Read>(reader: R) -> Result<IsotopeTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<IsotopeRecord>() {
        records.push(row?);
    }

    if records.is_empty() {
        return Err(MatcardError::Other(
            "Isotope table contains no rows".to_string(),
        ));
    }

    Ok(IsotopeTable::from_records(records))
}
