//! # 解析器模块
//!
//! 提供各种谱数据格式的识别与解析。
//!
//! ## 格式识别
//! - 按文件名: `.csv`, `.xml`, `.xml.gz`
//! - 按内容: DOSCAR（第 4 行为 `CAR`）、vasp_raman.py 输出（固定表头）
//! - 其余一律按空白分隔文本处理
//!
//! ## 依赖关系
//! - 使用 `models/` 数据模型
//! - 子模块: text, doscar, raman, vasprun

pub mod doscar;
pub mod raman;
pub mod text;
pub mod vasprun;

use crate::error::{Result, SpecconvError};
use crate::models::Spectrum;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 可自动识别的谱文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumFormat {
    /// VASP vasprun.xml（总态密度）
    Vasprun,
    /// 逗号分隔
    Csv,
    /// VASP DOSCAR
    Doscar,
    /// raman-sc vasp_raman.py 输出
    VaspRaman,
    /// 空白分隔文本
    Text,
}

impl std::fmt::Display for SpectrumFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpectrumFormat::Vasprun => write!(f, "vasprun"),
            SpectrumFormat::Csv => write!(f, "csv"),
            SpectrumFormat::Doscar => write!(f, "doscar"),
            SpectrumFormat::VaspRaman => write!(f, "vasp_raman"),
            SpectrumFormat::Text => write!(f, "txt"),
        }
    }
}

/// 识别文件格式
///
/// 先按文件名判断 XML 与 CSV，再读取内容判断 DOSCAR 与 vasp_raman，
/// 都不匹配时视为文本。
pub fn detect_format(path: &Path) -> Result<SpectrumFormat> {
    let format = if is_xml(path) {
        SpectrumFormat::Vasprun
    } else if is_csv(path) {
        SpectrumFormat::Csv
    } else if is_doscar(path)? {
        SpectrumFormat::Doscar
    } else if is_vasp_raman(path)? {
        SpectrumFormat::VaspRaman
    } else {
        SpectrumFormat::Text
    };

    log::debug!("Detected {} as {}", path.display(), format);
    Ok(format)
}

/// 自动识别格式并读取 (x, y) 谱
pub fn read_spectrum(path: &Path) -> Result<Spectrum> {
    match detect_format(path)? {
        SpectrumFormat::Vasprun => vasprun::read_vasprun_totaldos(path),
        SpectrumFormat::Csv => text::read_csv(path),
        SpectrumFormat::Doscar => doscar::read_doscar(path),
        SpectrumFormat::VaspRaman => raman::read_vasp_raman(path),
        SpectrumFormat::Text => text::read_txt(path, None),
    }
}

// ─────────────────────────────────────────────────────────────
// 格式判断
// ─────────────────────────────────────────────────────────────

/// 第 4 行去除空白后为 `CAR` 即为 DOSCAR
///
/// 不足 4 行的文件返回 `false`。
pub fn is_doscar(path: &Path) -> Result<bool> {
    let line = nth_line(path, 3)?;
    Ok(line.map_or(false, |l| l.trim() == "CAR"))
}

/// 首行为 vasp_raman.py 固定表头
pub fn is_vasp_raman(path: &Path) -> Result<bool> {
    let line = nth_line(path, 0)?;
    Ok(line.map_or(false, |l| l.trim() == raman::VASP_RAMAN_HEADER))
}

/// 文件名最后一段为 `csv`
pub fn is_csv(path: &Path) -> bool {
    name_parts(path).last() == Some(&"csv")
}

/// 文件名最后一段为 `xml`，或为 `xml.gz`
pub fn is_xml(path: &Path) -> bool {
    let parts = name_parts(path);
    match parts.as_slice() {
        [.., "xml", "gz"] => true,
        [.., "gz"] => false,
        [.., last] => *last == "xml",
        [] => false,
    }
}

fn name_parts(path: &Path) -> Vec<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.split('.').collect())
        .unwrap_or_default()
}

/// 读取第 `n` 行（0 起），非 UTF-8 字节按有损方式解码
fn nth_line(path: &Path, n: usize) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| SpecconvError::read(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    for _ in 0..=n {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| SpecconvError::read(path, e))?;
        if read == 0 {
            return Ok(None);
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// 读取整个文本文件
pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SpecconvError::read(path, e))
}
