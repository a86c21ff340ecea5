//! # 统一错误处理模块
//!
//! 定义 Matcard 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 解析错误：化学式 / 混合物字符串无法识别
//! - 解析符号错误：元素符号或指定同位素不在同位素表中
//! - 配置错误：密度非正、掺杂分数之和不小于 1 等
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Matcard 统一错误类型
#[derive(Error, Debug)]
pub enum MatcardError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 化学式解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse '{input}'\nReason: {reason}")]
    ParseError { input: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 元素 / 同位素解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot resolve symbol '{symbol}': {reason}")]
    ResolutionError { symbol: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 材料配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid material configuration: {0}")]
    ConfigurationError(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

impl MatcardError {
    /// 构造化学式解析错误
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        MatcardError::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// 构造符号解析错误
    pub fn resolution(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        MatcardError::ResolutionError {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MatcardError>;
