//! # 文本 / CSV 谱数据解析器
//!
//! 读取以空白或逗号分隔的两列 (x, y) 或三列 (mode, x, y) 数据，
//! 以及带表头的 PDOS 文本表。
//!
//! ## 格式说明
//! ```text
//! # 注释行（`#` 之后的内容都被忽略）
//! freq intensity         # 可选表头（首个数据行含非数字字段时跳过）
//! 100.0  0.5
//! 200.0  1.5
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/spectrum.rs`, `models/pdos.rs`
//! - 使用 `csv` 读取 CSV，`rayon` 并行读取多个 PDOS 文件

use crate::error::{Result, SpecconvError};
use crate::models::{ElementPdos, PdosTable, Spectrum};
use rayon::prelude::*;
use std::fs::File;
use std::path::Path;

/// 一行原始字段及其行号（1 起）
type RawRow = (usize, Vec<String>);

/// 读取文本谱文件
///
/// `delimiter` 为 `None` 时按空白分隔，否则按该 ASCII 字节分隔。两列直接作为 (x, y)；
/// 三列时第一列视为振动模式编号并丢弃。
pub fn read_txt(path: &Path, delimiter: Option<u8>) -> Result<Spectrum> {
    if let Some(d) = delimiter.filter(|d| !d.is_ascii()) {
        return Err(SpecconvError::InvalidArgument(format!(
            "delimiter must be an ASCII byte, got 0x{:02x}",
            d
        )));
    }

    let content = super::read_file(path)?;
    let mut rows = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<String> = match delimiter {
            None => line.split_whitespace().map(str::to_string).collect(),
            Some(d) => line
                .split(d as char)
                .map(|f| f.trim().to_string())
                .collect(),
        };
        rows.push((idx + 1, fields));
    }

    let table = numeric_table("txt", path, rows)?;
    spectrum_from_table(path, table)
}

/// 读取 CSV 谱文件，列规则与 [`read_txt`] 相同
pub fn read_csv(path: &Path) -> Result<Spectrum> {
    let file = File::open(path).map_err(|e| SpecconvError::read(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        // 行内注释：`#` 之后的字段全部丢弃
        let mut fields = Vec::with_capacity(record.len());
        for field in record.iter() {
            if let Some(pos) = field.find('#') {
                fields.push(field[..pos].trim().to_string());
                break;
            }
            fields.push(field.to_string());
        }
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        rows.push((line, fields));
    }

    let table = numeric_table("csv", path, rows)?;
    spectrum_from_table(path, table)
}

/// 读取 PDOS 文本表
///
/// 首行为列名，例如 `# Energy s p d f`；第一列为能量，其余为轨道。
/// 元素标签取文件名（不含扩展名）。
pub fn read_pdos_txt(path: &Path) -> Result<ElementPdos> {
    let content = super::read_file(path)?;
    let mut lines = content.lines().enumerate();

    let names: Vec<String> = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => {
                break line
                    .trim()
                    .trim_start_matches('#')
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            }
            None => return Err(SpecconvError::parse("pdos", path, "File is empty")),
        }
    };

    if names.len() < 2 {
        return Err(SpecconvError::parse(
            "pdos",
            path,
            format!("Header must name an energy column and at least one orbital, got {:?}", names),
        ));
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    for (idx, line) in lines {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != names.len() {
            return Err(SpecconvError::parse(
                "pdos",
                path,
                format!(
                    "Line {} has {} columns but the header names {}",
                    idx + 1,
                    fields.len(),
                    names.len()
                ),
            ));
        }
        for (col, field) in columns.iter_mut().zip(&fields) {
            let value = parse_field(field).ok_or_else(|| {
                SpecconvError::parse(
                    "pdos",
                    path,
                    format!("Line {}: cannot parse '{}' as a number", idx + 1, field),
                )
            })?;
            col.push(value);
        }
    }

    let element = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");

    let mut columns = columns.into_iter();
    let energy = columns.next().unwrap_or_default();
    let mut pdos = ElementPdos::new(element, energy);
    for (name, values) in names.into_iter().skip(1).zip(columns) {
        pdos.push_orbital(name, values)?;
    }

    log::debug!(
        "Read PDOS for '{}' from {}: {} points, orbitals {:?}",
        pdos.element,
        path.display(),
        pdos.energy.len(),
        pdos.orbital_names().collect::<Vec<_>>()
    );

    Ok(pdos)
}

/// 并行读取多个 PDOS 文本表（每个文件一个元素），保持输入顺序
pub fn read_pdos_files<P>(paths: &[P]) -> Result<PdosTable>
where
    P: AsRef<Path> + Sync,
{
    let elements = paths
        .par_iter()
        .map(|p| read_pdos_txt(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(PdosTable { elements })
}

// ─────────────────────────────────────────────────────────────
// 内部工具
// ─────────────────────────────────────────────────────────────

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// 空字段视为 NaN
pub(crate) fn parse_field(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return Some(f64::NAN);
    }
    field.parse().ok()
}

/// 将原始字段表转换为数值表
///
/// 首行若含非数字字段则视为表头跳过；其余行必须全部为数字且列数一致。
fn numeric_table(format: &str, path: &Path, rows: Vec<RawRow>) -> Result<Vec<Vec<f64>>> {
    let mut table: Vec<Vec<f64>> = Vec::with_capacity(rows.len());
    let mut columns: Option<usize> = None;

    for (i, (line, fields)) in rows.into_iter().enumerate() {
        let parsed: Option<Vec<f64>> = fields.iter().map(|f| parse_field(f)).collect();
        let values = match parsed {
            Some(v) => v,
            None if i == 0 => {
                log::debug!("Skipping header line {} of {}", line, path.display());
                continue;
            }
            None => {
                let bad = fields
                    .iter()
                    .find(|f| parse_field(f).is_none())
                    .cloned()
                    .unwrap_or_default();
                return Err(SpecconvError::parse(
                    format,
                    path,
                    format!("Line {}: cannot parse '{}' as a number", line, bad),
                ));
            }
        };

        match columns {
            None => columns = Some(values.len()),
            Some(n) if n != values.len() => {
                return Err(SpecconvError::parse(
                    format,
                    path,
                    format!("Line {} (got {} columns instead of {})", line, values.len(), n),
                ));
            }
            Some(_) => {}
        }
        table.push(values);
    }

    if table.is_empty() {
        return Err(SpecconvError::parse(format, path, "No data rows found"));
    }

    Ok(table)
}

fn spectrum_from_table(path: &Path, table: Vec<Vec<f64>>) -> Result<Spectrum> {
    let columns = table.first().map(Vec::len).unwrap_or(0);

    let offset = match columns {
        2 => 0,
        3 => 1,
        n if n < 2 => {
            return Err(SpecconvError::ColumnCount {
                path: path.display().to_string(),
                reason: "not enough columns".to_string(),
            })
        }
        _ => {
            return Err(SpecconvError::ColumnCount {
                path: path.display().to_string(),
                reason: "too many columns".to_string(),
            })
        }
    };

    Ok(Spectrum::from_pairs(
        table.iter().map(|row| (row[offset], row[offset + 1])),
    ))
}
