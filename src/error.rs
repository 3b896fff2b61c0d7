//! # 统一错误处理模块
//!
//! 定义 specconv 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::Path;
use thiserror::Error;

/// specconv 统一错误类型
#[derive(Error, Debug)]
pub enum SpecconvError {
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

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    /// 列数无法解释（过多或过少）
    #[error("Not sure how to interpret {path}: {reason}.")]
    ColumnCount { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 可选功能
    // ─────────────────────────────────────────────────────────────
    #[error("{reason} (build with the '{feature}' feature enabled)")]
    MissingFeature {
        feature: &'static str,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl SpecconvError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        SpecconvError::FileReadError {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        SpecconvError::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn parse(format: &str, path: &Path, reason: impl Into<String>) -> Self {
        SpecconvError::ParseError {
            format: format.to_string(),
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SpecconvError>;
