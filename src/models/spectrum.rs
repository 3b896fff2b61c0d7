//! # 一维谱数据模型
//!
//! 统一的 (x, y) 谱表示：x 为频率或能量，y 为强度或态密度。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `writers/` 使用
//! - 无外部模块依赖

use crate::error::{Result, SpecconvError};
use serde::{Deserialize, Serialize};

/// 一维谱：等长的 x、y 序列
///
/// x 不要求有序。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// 频率 (cm⁻¹) 或能量 (eV)
    pub x: Vec<f64>,
    /// 强度 / 态密度
    pub y: Vec<f64>,
}

impl Spectrum {
    /// 从 x、y 序列创建，长度必须一致
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(SpecconvError::InvalidArgument(format!(
                "x has {} values but y has {}",
                x.len(),
                y.len()
            )));
        }
        Ok(Spectrum { x, y })
    }

    /// 从 (x, y) 对创建
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y) = pairs.into_iter().unzip();
        Spectrum { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// 按行遍历 (x, y)
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_unequal_lengths() {
        let err = Spectrum::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(err.to_string().contains("x has 2 values but y has 1"));
    }

    #[test]
    fn test_from_pairs() {
        let spectrum = Spectrum::from_pairs(vec![(100.0, 0.5), (200.0, 1.5)]);
        assert_eq!(spectrum.x, vec![100.0, 200.0]);
        assert_eq!(spectrum.y, vec![0.5, 1.5]);
        assert_eq!(spectrum.len(), 2);

        let pairs: Vec<_> = spectrum.pairs().collect();
        assert_eq!(pairs, vec![(100.0, 0.5), (200.0, 1.5)]);
    }
}
