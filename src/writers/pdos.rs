//! # PDOS 表导出
//!
//! 将多元素 PDOS 表展平为一张表写出：
//!
//! ```text
//!  energy       total        Zn_s         Zn_p         O_s          O_p
//! ```
//!
//! `total` 列为所有轨道列的逐行之和。能量轴取第一个元素的能量轴。
//!
//! ## 依赖关系
//! - 使用 `models/pdos.rs`
//! - 调用 `writers/delimited.rs` 写出文本或 CSV

use super::delimited::{write_csv_rows, write_txt_rows};
use crate::error::{Result, SpecconvError};
use crate::models::PdosTable;
use std::path::Path;
use std::str::FromStr;

/// PDOS 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdosFileType {
    #[default]
    Txt,
    Csv,
}

impl std::fmt::Display for PdosFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdosFileType::Txt => write!(f, "txt"),
            PdosFileType::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for PdosFileType {
    type Err = SpecconvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "txt" => Ok(PdosFileType::Txt),
            "csv" => Ok(PdosFileType::Csv),
            other => Err(SpecconvError::InvalidArgument(format!(
                "filetype \"{}\" not recognised. Use \"txt\" or \"csv\".",
                other
            ))),
        }
    }
}

/// 展平后的 PDOS 表：列名与数据行
#[derive(Debug, Clone, PartialEq)]
pub struct PdosColumns {
    /// `energy`, `total`, 然后按顺序为 `<元素>_<轨道>`
    pub header: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// 展平 PDOS 表并插入 `total` 列
///
/// `flipx` 为真时能量取负（结合能）。名为 `energy` 的轨道列（不区分大小写）被跳过。
pub fn pdos_columns(table: &PdosTable, flipx: bool) -> Result<PdosColumns> {
    let first = table
        .elements
        .first()
        .ok_or_else(|| SpecconvError::InvalidArgument("PDOS table is empty".to_string()))?;

    let energy: Vec<f64> = if flipx {
        first.energy.iter().map(|e| -e).collect()
    } else {
        first.energy.clone()
    };

    let mut names = Vec::new();
    let mut columns: Vec<&[f64]> = Vec::new();
    for element in &table.elements {
        for (orbital, values) in &element.orbitals {
            if orbital.eq_ignore_ascii_case("energy") {
                continue;
            }
            if values.len() != energy.len() {
                return Err(SpecconvError::InvalidArgument(format!(
                    "column {}_{} has {} values but the energy axis has {}",
                    element.element,
                    orbital,
                    values.len(),
                    energy.len()
                )));
            }
            names.push(format!("{}_{}", element.element, orbital));
            columns.push(values);
        }
    }

    let rows = energy
        .iter()
        .enumerate()
        .map(|(i, &e)| {
            let total: f64 = columns.iter().map(|c| c[i]).sum();
            let mut row = Vec::with_capacity(columns.len() + 2);
            row.push(e);
            row.push(total);
            row.extend(columns.iter().map(|c| c[i]));
            row
        })
        .collect();

    let mut header = vec!["energy".to_string(), "total".to_string()];
    header.extend(names);

    Ok(PdosColumns { header, rows })
}

/// 写出 PDOS 表
///
/// `output` 为 `None` 时写到标准输出。
pub fn write_pdos(
    table: &PdosTable,
    output: Option<&Path>,
    filetype: PdosFileType,
    flipx: bool,
) -> Result<()> {
    let PdosColumns { header, rows } = pdos_columns(table, flipx)?;

    match filetype {
        PdosFileType::Csv => {
            let names: Vec<&str> = header.iter().map(String::as_str).collect();
            write_csv_rows(&rows, output, Some(&names[..]))
        }
        PdosFileType::Txt => {
            let header = format!(" {}", txt_header(&header));
            write_txt_rows(&rows, output, Some(header.as_str()))
        }
    }
}

fn txt_header(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("{:12}", n))
        .collect::<Vec<_>>()
        .join(" ")
}
