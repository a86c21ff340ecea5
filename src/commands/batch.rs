//! # batch 命令实现
//!
//! 批量读取材料清单并生成卡片组文件。
//!
//! ## 材料清单格式
//! ```text
//! name,formula,density,threshold
//! Water,H2O,1.0,
//! Borated PE,90% CH2 + 10% B4C,1.098,1e-8
//! ```
//! `name` 与 `threshold` 列可省略或留空；`formula` 列可以是化学式或混合物。
//!
//! ## 功能
//! - 单文件 / 目录输入，glob 过滤，可递归
//! - 文件之间并行（`BatchRunner`），文件内各材料也并行计算
//! - 每个输入文件生成 `<stem>.mat`，卡片编号从 `--first-index` 开始
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `chem/` 计算与输出

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use matcard::chem::{render, ElementResolver, Material};
use crate::cli::batch::BatchArgs;
use matcard::error::{MatcardError, Result};
use matcard::models::IsotopeTable;
use crate::utils::output;

use rayon::prelude::*;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// 材料清单中的一行
#[derive(Debug, Clone, Deserialize)]
struct MaterialRow {
    #[serde(default)]
    name: Option<String>,
    formula: String,
    density: f64,
    #[serde(default)]
    threshold: Option<f64>,
}

impl MaterialRow {
    fn build(&self, resolver: &ElementResolver, default_threshold: f64) -> Result<Material> {
        let threshold = self.threshold.unwrap_or(default_threshold);
        super::validate_threshold(threshold)?;
        let material =
            Material::from_mixture(resolver, &self.formula, self.density, self.name.as_deref())?;
        Ok(material.with_threshold(threshold))
    }
}

/// 批量处理配置
struct DeckConfig {
    output_dir: PathBuf,
    threshold: f64,
    first_index: usize,
    overwrite: bool,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Building Material Decks");
    super::validate_threshold(args.threshold)?;

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        return Err(MatcardError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} material list(s)", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| MatcardError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let table = super::open_table(&args.table)?;

    let config = DeckConfig {
        output_dir: args.output.clone(),
        threshold: args.threshold,
        first_index: args.first_index,
        overwrite: args.overwrite,
    };

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| process_file(file, &table, &config));

    output::print_separator();
    for (deck, msg) in &result.warnings {
        output::print_warning(&format!("{}: {}", deck, msg));
    }

    output::print_done(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理单个材料清单文件
fn process_file(input: &PathBuf, table: &IsotopeTable, config: &DeckConfig) -> ProcessResult {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("materials");
    let output_file = config.output_dir.join(format!("{}.mat", stem));

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    let built = read_material_list_file(input)
        .and_then(|rows| build_deck(&rows, table, config))
        .and_then(|(deck, warnings)| {
            fs::write(&output_file, deck).map_err(|e| MatcardError::FileWriteError {
                path: output_file.display().to_string(),
                source: e,
            })?;
            Ok(warnings)
        });

    match built {
        Ok(warnings) => ProcessResult::Success(output_file.display().to_string(), warnings),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

fn read_material_list_file(path: &Path) -> Result<Vec<MaterialRow>> {
    let file = File::open(path).map_err(|e| MatcardError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    read_material_list(file)
}

/// 读取材料清单
fn read_material_list<R: Read>(reader: R) -> Result<Vec<MaterialRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in rdr.deserialize::<MaterialRow>() {
        rows.push(row?);
    }

    if rows.is_empty() {
        return Err(MatcardError::Other("Material list contains no rows".to_string()));
    }
    Ok(rows)
}

/// 计算全部材料并拼接为卡片组，同时返回去重后的诊断信息
fn build_deck(
    rows: &[MaterialRow],
    table: &IsotopeTable,
    config: &DeckConfig,
) -> Result<(String, Vec<String>)> {
    let resolver = ElementResolver::new(table);

    let materials = rows
        .par_iter()
        .enumerate()
        .map(|(i, row)| {
            row.build(&resolver, config.threshold).map_err(|e| {
                MatcardError::Other(format!("row {} ('{}'): {}", i + 1, row.formula, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut warnings: Vec<String> = Vec::new();
    for material in &materials {
        for msg in material.diagnostics() {
            let line = format!("{}: {}", material.display_name(), msg);
            if !warnings.contains(&line) {
                warnings.push(line);
            }
        }
    }

    Ok((render::deck(&materials, config.first_index), warnings))
}
