//! # 空白分隔文本 / CSV 写出
//!
//! ## 支持格式
//! - 文本: 每个值以 `{:10.6e}` 科学计数法输出（指数带符号、至少两位），空格分隔
//! - CSV: 浮点数以最短可往返形式输出，表头行可与数据行列数不同
//!
//! 输出目标为 `None` 时写到标准输出。
//!
//! ## 依赖关系
//! - 被 `writers/pdos.rs` 调用
//! - 使用 `csv` 库写入 CSV

use crate::error::{Result, SpecconvError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// 写出两列 (x, y) 文本
pub fn write_txt(x: &[f64], y: &[f64], output: Option<&Path>, header: Option<&str>) -> Result<()> {
    check_lengths(x, y)?;
    let rows = x.iter().zip(y).map(|(&a, &b)| [a, b]);
    write_txt_rows(rows, output, header)
}

/// 写出任意列数的文本行
pub fn write_txt_rows<I, R>(rows: I, output: Option<&Path>, header: Option<&str>) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f64]>,
{
    let mut out = open_output(output)?;
    let err = |e: io::Error| write_error(output, e);

    if let Some(header) = header {
        writeln!(out, "{}", header).map_err(err)?;
    }

    for row in rows {
        let line = row
            .as_ref()
            .iter()
            .map(|&v| format_sci(v))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line).map_err(err)?;
    }

    out.flush().map_err(err)
}

/// 写出两列 (x, y) CSV
pub fn write_csv(x: &[f64], y: &[f64], output: Option<&Path>, header: Option<&[&str]>) -> Result<()> {
    check_lengths(x, y)?;
    let rows = x.iter().zip(y).map(|(&a, &b)| [a, b]);
    write_csv_rows(rows, output, header)
}

/// 写出任意列数的 CSV 行
pub fn write_csv_rows<I, R>(rows: I, output: Option<&Path>, header: Option<&[&str]>) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f64]>,
{
    let out = open_output(output)?;
    let terminator = if cfg!(windows) {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    };
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(terminator)
        .from_writer(out);

    if let Some(header) = header {
        wtr.write_record(header)?;
    }

    for row in rows {
        wtr.serialize(row.as_ref())?;
    }

    wtr.flush().map_err(|e| write_error(output, e))
}

/// 科学计数法：尾数 6 位小数，指数带符号且至少两位，右对齐到宽度 10
pub fn format_sci(value: f64) -> String {
    let body = if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "inf" } else { "-inf" }).to_string()
    } else {
        // Rust 输出 "1.234560e2"，需补成 "1.234560e+02"
        let s = format!("{:.6e}", value);
        match s.split_once('e') {
            Some((mantissa, exp)) => match exp.parse::<i32>() {
                Ok(exp) => format!(
                    "{}e{}{:02}",
                    mantissa,
                    if exp < 0 { '-' } else { '+' },
                    exp.abs()
                ),
                Err(_) => s.clone(),
            },
            None => s.clone(),
        }
    };
    format!("{:>10}", body)
}

fn check_lengths(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(SpecconvError::InvalidArgument(format!(
            "x has {} values but y has {}",
            x.len(),
            y.len()
        )));
    }
    Ok(())
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| SpecconvError::write(path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn write_error(output: Option<&Path>, source: io::Error) -> SpecconvError {
    match output {
        Some(path) => SpecconvError::write(path, source),
        None => SpecconvError::write(Path::new("<stdout>"), source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::text::{read_csv, read_txt};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_sci() {
        assert_eq!(format_sci(1.0), "1.000000e+00");
        assert_eq!(format_sci(-0.000123456), "-1.234560e-04");
        assert_eq!(format_sci(123456789.0), "1.234568e+08");
        assert_eq!(format_sci(1e-100), "1.000000e-100");
        assert_eq!(format_sci(f64::NAN), "       nan");
    }

    #[test]
    fn test_write_txt_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        write_txt(&[1.0, 2.5], &[0.5, 10.0], Some(path.as_path()), Some("# freq intensity")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "# freq intensity\n1.000000e+00 5.000000e-01\n2.500000e+00 1.000000e+01\n"
        );
    }

    #[test]
    fn test_txt_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spectrum.txt");
        let x = vec![100.0, 250.25, 1234.5678];
        let y = vec![0.001, 17.5, -3.25e-7];
        write_txt(&x, &y, Some(path.as_path()), Some("frequency intensity")).unwrap();

        let spectrum = read_txt(&path, None).unwrap();
        for (a, b) in spectrum.x.iter().zip(&x).chain(spectrum.y.iter().zip(&y)) {
            assert!((a - b).abs() <= 1e-6 * b.abs(), "{} != {}", a, b);
        }
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spectrum.csv");
        let x = vec![100.0, 250.25, 1234.5678];
        let y = vec![0.001, 17.5, -3.25e-7];
        write_csv(&x, &y, Some(path.as_path()), Some(&["frequency", "intensity"][..])).unwrap();

        let spectrum = read_csv(&path).unwrap();
        assert_eq!(spectrum.x, x);
        assert_eq!(spectrum.y, y);
    }

    #[test]
    fn test_csv_header_may_differ_in_length() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.csv");
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        write_csv_rows(&rows, Some(path.as_path()), Some(&["energy", "total"][..])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "energy,total");
        assert_eq!(lines[1], "1.0,2.0,3.0");
    }

    #[test]
    fn test_write_csv_without_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bare.csv");
        write_csv(&[1.5, 2.0], &[3.0, -4.25], Some(path.as_path()), None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1.5,3.0\n2.0,-4.25\n");
    }

    #[test]
    fn test_stdout_output() {
        assert!(open_output(None).is_ok());
        write_txt(&[1.0], &[2.0], None, Some("# x y")).unwrap();
        write_csv(&[1.0], &[2.0], None, None).unwrap();
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let err = write_txt(&[1.0], &[], None, None).unwrap_err();
        assert!(matches!(err, SpecconvError::InvalidArgument(_)));
    }
}
