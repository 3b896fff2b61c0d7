//! # 投影态密度 (PDOS) 数据模型
//!
//! 按元素组织的轨道分辨态密度。每个元素有一条能量轴和若干轨道列，
//! 轨道插入顺序即输出列顺序。
//!
//! ## 依赖关系
//! - 被 `parsers/text.rs`, `parsers/vasprun.rs` 构造
//! - 被 `writers/pdos.rs` 使用

use crate::error::{Result, SpecconvError};
use serde::{Deserialize, Serialize};

/// 单个元素的 PDOS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementPdos {
    /// 元素标签
    pub element: String,
    /// 能量轴
    pub energy: Vec<f64>,
    /// (轨道名, 态密度) 列，保持插入顺序
    pub orbitals: Vec<(String, Vec<f64>)>,
}

impl ElementPdos {
    pub fn new(element: impl Into<String>, energy: Vec<f64>) -> Self {
        ElementPdos {
            element: element.into(),
            energy,
            orbitals: Vec::new(),
        }
    }

    /// 追加一个轨道列，长度必须与能量轴一致
    pub fn push_orbital(&mut self, name: impl Into<String>, densities: Vec<f64>) -> Result<()> {
        let name = name.into();
        if densities.len() != self.energy.len() {
            return Err(SpecconvError::InvalidArgument(format!(
                "orbital '{}' of {} has {} values but the energy axis has {}",
                name,
                self.element,
                densities.len(),
                self.energy.len()
            )));
        }
        self.orbitals.push((name, densities));
        Ok(())
    }

    /// builder 风格的 `push_orbital`
    pub fn with_orbital(mut self, name: impl Into<String>, densities: Vec<f64>) -> Result<Self> {
        self.push_orbital(name, densities)?;
        Ok(self)
    }

    /// 按名称查找轨道列
    pub fn orbital(&self, name: &str) -> Option<&[f64]> {
        self.orbitals
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// 轨道名称（按顺序）
    pub fn orbital_names(&self) -> impl Iterator<Item = &str> {
        self.orbitals.iter().map(|(n, _)| n.as_str())
    }
}

/// 多元素 PDOS 表，元素顺序即插入顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdosTable {
    pub elements: Vec<ElementPdos>,
}

impl PdosTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: ElementPdos) {
        self.elements.push(element);
    }

    pub fn get(&self, element: &str) -> Option<&ElementPdos> {
        self.elements.iter().find(|e| e.element == element)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementPdos> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<ElementPdos> for PdosTable {
    fn from_iter<I: IntoIterator<Item = ElementPdos>>(iter: I) -> Self {
        PdosTable {
            elements: iter.into_iter().collect(),
        }
    }
}
