//! # Matcard 库
//!
//! 组成解析、同位素解析与材料浓度代数，供 `matcard` 命令行及其他程序使用。
//!
//! ```no_run
//! use matcard::chem::{render, ElementResolver, Material};
//! use matcard::parsers::table::load_bundled_table;
//!
//! let table = load_bundled_table()?;
//! let resolver = ElementResolver::new(&table);
//!
//! // 分密度相加：CH2(0.94) × 0.9 + B4C(2.52) × 0.1，ρ = 1.098 g/cc
//! let pe = Material::from_formula(&resolver, "CH2", 0.94, None)?;
//! let b4c = Material::from_formula(&resolver, "B4C", 2.52, None)?;
//! let bpe = pe.scale(0.9).combine(&b4c.scale(0.1)).with_name("Borated PE");
//!
//! println!("{}", render::card(&bpe, 1));
//! # Ok::<(), matcard::error::MatcardError>(())
//! ```
//!
//! ## 依赖关系
//! - 子模块: error, models, parsers, chem
//! - 被 `main.rs` 的 `commands/` 使用

pub mod chem;
pub mod error;
pub mod models;
pub mod parsers;
