//! # 数据模型模块
//!
//! 定义统一的谱与 PDOS 数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `writers/` 使用
//! - 子模块: spectrum, pdos

pub mod pdos;
pub mod spectrum;

pub use pdos::{ElementPdos, PdosTable};
pub use spectrum::Spectrum;
