//! # specconv - 模拟谱数据格式转换
//!
//! 在各种第一性原理计算输出与统一的内存表示之间转换谱数据。
//!
//! ## 支持格式
//! - 读取: VASP DOSCAR, vasprun.xml(.gz), vasp_raman.py 输出, CSV, 空白分隔文本, PDOS 文本表
//! - 写出: 空白分隔文本（科学计数法）, CSV, 带 `total` 列的 PDOS 表
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── parsers/   (格式识别与解析)
//!   ├── writers/   (文本 / CSV 写出)
//!   ├── models/    (数据模型)
//!   └── error.rs   (错误处理)
//! ```
//!
//! ## Cargo features
//! - `vasprun`（默认开启）: 通过 `roxmltree` / `flate2` 读取 vasprun.xml(.gz)。
//!   关闭后 vasprun 相关函数返回 [`SpecconvError::MissingFeature`]。

pub mod error;
pub mod models;
pub mod parsers;
pub mod writers;

pub use error::{Result, SpecconvError};
pub use models::{ElementPdos, PdosTable, Spectrum};
pub use parsers::doscar::{read_doscar, read_doscar_header, DoscarHeader};
pub use parsers::raman::read_vasp_raman;
pub use parsers::text::{read_csv, read_pdos_files, read_pdos_txt, read_txt};
pub use parsers::vasprun::{read_vasprun, read_vasprun_pdos, read_vasprun_totaldos, VasprunDos};
pub use parsers::{
    detect_format, is_csv, is_doscar, is_vasp_raman, is_xml, read_spectrum, SpectrumFormat,
};
pub use writers::{write_csv, write_csv_rows, write_pdos, write_txt, write_txt_rows, PdosFileType};
