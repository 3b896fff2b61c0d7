//! # VASP DOSCAR 解析器
//!
//! 读取 DOSCAR 的总态密度块，自旋极化时将上下自旋相加。
//!
//! ## DOSCAR 格式说明
//! ```text
//!     2    2    1    0              # 第 1-5 行：原子数、体积、温度等
//!   0.1446E+02  0.5...
//!   1.0000000000000000E-004
//!   CAR                             # 第 4 行固定为 CAR
//!  unknown system
//!  10.0  -5.0  301  4.5  1.0        # 第 6 行：EMAX EMIN NEDOS EFERMI weight
//!  -5.000  0.000  0.000             # 非自旋极化：energy dos integrated
//!  -5.000  0.000  0.000  0.0  0.0   # 自旋极化：energy up down int_up int_down
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/spectrum.rs`

use crate::error::{Result, SpecconvError};
use crate::models::Spectrum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// DOSCAR 头部的第 6 行
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoscarHeader {
    pub emax: f64,
    pub emin: f64,
    /// 态密度采样点数
    pub nedos: usize,
    pub efermi: f64,
    pub weight: Option<f64>,
}

/// 读取 DOSCAR 总态密度 (energy, dos)
///
/// 列数为 3 时为单自旋，原样返回；列数为 5 时为双自旋，dos 为上下自旋之和。
pub fn read_doscar(path: &Path) -> Result<Spectrum> {
    let content = super::read_file(path)?;
    parse_doscar_content(&content, path)
}

/// 只读取 DOSCAR 第 6 行
pub fn read_doscar_header(path: &Path) -> Result<DoscarHeader> {
    let content = super::read_file(path)?;
    let line = content
        .lines()
        .nth(5)
        .ok_or_else(|| SpecconvError::parse("doscar", path, "File too short"))?;
    parse_header_line(line, path)
}

/// 从字符串内容解析 DOSCAR 总态密度
pub fn parse_doscar_content(content: &str, path: &Path) -> Result<Spectrum> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 7 {
        return Err(SpecconvError::parse("doscar", path, "File too short"));
    }

    let header = parse_header_line(lines[5], path)?;
    let nedos = header.nedos;

    let first: Vec<&str> = lines[6].split_whitespace().collect();
    let spin_channels = match first.len() {
        3 => 1,
        5 => 2,
        n => {
            return Err(SpecconvError::parse(
                "doscar",
                path,
                format!("Unexpected number of columns ({}) in DOSCAR", n),
            ))
        }
    };

    log::debug!(
        "DOSCAR {}: NEDOS = {}, {} spin channel(s)",
        path.display(),
        nedos,
        spin_channels
    );

    // 第一行总是读入，NEDOS 为 0 时也返回一行
    let rows = nedos.max(1);
    let end = match rows.checked_add(6) {
        Some(end) if end <= lines.len() => end,
        _ => {
            return Err(SpecconvError::parse(
                "doscar",
                path,
                format!(
                    "Expected {} DOS lines after the header, found {}",
                    nedos,
                    lines.len() - 6
                ),
            ))
        }
    };

    if lines.len() > end {
        log::debug!(
            "DOSCAR {}: ignoring {} line(s) after the total DOS block",
            path.display(),
            lines.len() - end
        );
    }

    let mut x = Vec::with_capacity(rows);
    let mut y = Vec::with_capacity(rows);

    for (i, line) in lines[6..end].iter().enumerate() {
        let values: Vec<f64> = line
            .split_whitespace()
            .map(|s| s.parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| {
                SpecconvError::parse("doscar", path, format!("Line {}: {}", i + 7, e))
            })?;

        if values.len() < 1 + spin_channels {
            return Err(SpecconvError::parse(
                "doscar",
                path,
                format!("Line {}: expected at least {} columns", i + 7, 1 + spin_channels),
            ));
        }

        x.push(values[0]);
        y.push(if spin_channels == 2 {
            values[1] + values[2]
        } else {
            values[1]
        });
    }

    Ok(Spectrum { x, y })
}

fn parse_header_line(line: &str, path: &Path) -> Result<DoscarHeader> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(SpecconvError::parse(
            "doscar",
            path,
            format!("Invalid header at line 6: '{}'", line.trim()),
        ));
    }

    let float = |s: &str, name: &str| -> Result<f64> {
        s.parse().map_err(|_| {
            SpecconvError::parse("doscar", path, format!("Invalid {} '{}' at line 6", name, s))
        })
    };

    let nedos: usize = parts[2].parse().map_err(|_| {
        SpecconvError::parse(
            "doscar",
            path,
            format!("Invalid NEDOS '{}' at line 6", parts[2]),
        )
    })?;

    Ok(DoscarHeader {
        emax: float(parts[0], "EMAX")?,
        emin: float(parts[1], "EMIN")?,
        nedos,
        efermi: float(parts[3], "EFERMI")?,
        weight: parts.get(4).and_then(|s| s.parse().ok()),
    })
}
