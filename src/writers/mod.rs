//! # 写出模块
//!
//! 将谱数据与 PDOS 表写出为空白分隔文本或 CSV。
//!
//! ## 依赖关系
//! - 使用 `models/` 数据模型
//! - 子模块: delimited, pdos

pub mod delimited;
pub mod pdos;

pub use delimited::{format_sci, write_csv, write_csv_rows, write_txt, write_txt_rows};
pub use pdos::{pdos_columns, write_pdos, PdosColumns, PdosFileType};
