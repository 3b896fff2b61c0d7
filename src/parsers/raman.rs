//! # vasp_raman.py 输出解析器
//!
//! raman-sc/VASP 的 `vasp_raman.py` 沿振动模式计算极化率，生成五列数据：
//!
//! ```text
//! # mode    freq(cm-1)    alpha    beta2    activity
//! 001   834.76451   0.0000000   0.5271300   3.6899099
//! ```
//!
//! 只保留频率与活性两列。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/spectrum.rs`

use crate::error::{Result, SpecconvError};
use crate::models::Spectrum;
use std::path::Path;

/// vasp_raman.py 输出的固定表头
pub const VASP_RAMAN_HEADER: &str = "# mode    freq(cm-1)    alpha    beta2    activity";

/// 读取 vasp_raman.dat，返回 (频率, Raman 活性)
pub fn read_vasp_raman(path: &Path) -> Result<Spectrum> {
    let content = super::read_file(path)?;
    parse_vasp_raman_content(&content, path)
}

pub fn parse_vasp_raman_content(content: &str, path: &Path) -> Result<Spectrum> {
    let mut pairs = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 2 {
            return Err(SpecconvError::ColumnCount {
                path: path.display().to_string(),
                reason: "not enough columns".to_string(),
            });
        }

        let parse = |s: &str| -> Result<f64> {
            s.parse().map_err(|_| {
                SpecconvError::parse(
                    "vasp_raman",
                    path,
                    format!("Line {}: cannot parse '{}' as a number", idx + 1, s),
                )
            })
        };

        let freq = parse(fields[1])?;
        let activity = parse(fields[fields.len() - 1])?;
        pairs.push((freq, activity));
    }

    log::debug!("Read {} Raman modes from {}", pairs.len(), path.display());

    Ok(Spectrum::from_pairs(pairs))
}
