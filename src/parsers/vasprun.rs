//! # VASP vasprun.xml 态密度解析器
//!
//! 从 vasprun.xml（或 vasprun.xml.gz）读取总态密度与投影态密度。
//!
//! ## 能量零点
//! - 金属：Fermi 能级
//! - 半导体/绝缘体：价带顶 (VBM)
//! - ISMEAR 为 0 或 -1 时再额外减去 SIGMA
//!
//! ## vasprun.xml 结构（相关部分）
//! ```text
//! <modeling>
//!   <parameters> ... <i name="ISMEAR">0</i> <i name="SIGMA">0.05</i> ...
//!   <atominfo> <array name="atoms"> <set> <rc><c>Zn</c><c>1</c></rc> ...
//!   <calculation>
//!     <eigenvalues> <array> <set> <set comment="spin 1"> <set comment="kpoint 1"> <r>e occ</r>
//!     <dos>
//!       <i name="efermi">...</i>
//!       <total>   <array> <set> <set comment="spin 1"> <r>energy total integrated</r>
//!       <partial> <array> <field>energy</field><field>s</field>...
//!                 <set> <set comment="ion 1"> <set comment="spin 1"> <r>...</r>
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/spectrum.rs`, `models/pdos.rs`
//! - 使用 `roxmltree` 解析 XML，`flate2` 解压 .gz（`vasprun` feature）

use crate::error::{Result, SpecconvError};
use crate::models::{ElementPdos, PdosTable, Spectrum};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// 角动量通道，按输出顺序排列
const ORBITAL_TYPES: [&str; 4] = ["s", "p", "d", "f"];

/// vasprun.xml 中读取到的态密度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VasprunDos {
    /// 已平移到能量零点的能量轴
    pub energies: Vec<f64>,
    pub efermi: f64,
    /// 平移所用的零点（Fermi 能级或 VBM，不含 SIGMA）
    pub zero_point: f64,
    pub is_metal: bool,
    /// 每个自旋通道的总态密度
    pub total: Vec<Vec<f64>>,
    /// 每个离子的元素符号
    pub atoms: Vec<String>,
    /// 投影态密度（LORBIT 未设置时为 None）
    pub projected: Option<ProjectedDos>,
}

/// 投影态密度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedDos {
    /// 轨道字段名，如 `s`, `py`, `dxy`, `x2-y2`
    pub orbitals: Vec<String>,
    /// 按离子排列，`ions[ion][spin][orbital][point]`
    pub ions: Vec<Vec<Vec<Vec<f64>>>>,
}

impl VasprunDos {
    pub fn spin_channels(&self) -> usize {
        self.total.len()
    }

    /// 上下自旋相加后的总态密度
    pub fn summed_total(&self) -> Vec<f64> {
        sum_spins(&self.total, self.energies.len())
    }

    /// 按元素、按 s/p/d/f 汇总的投影态密度
    ///
    /// 元素按符号排序；同一元素的所有离子、同一角动量的所有 lm 分量、
    /// 所有自旋通道全部相加。
    pub fn element_spd(&self) -> Option<PdosTable> {
        let projected = self.projected.as_ref()?;
        let npoints = self.energies.len();

        let symbols: BTreeSet<&str> = self.atoms.iter().map(String::as_str).collect();
        let mut table = PdosTable::new();

        for symbol in symbols {
            let mut pdos = ElementPdos::new(symbol, self.energies.clone());

            for orbital_type in ORBITAL_TYPES {
                let fields: Vec<usize> = projected
                    .orbitals
                    .iter()
                    .enumerate()
                    .filter(|(_, name)| orbital_type_of(name) == Some(orbital_type))
                    .map(|(i, _)| i)
                    .collect();
                if fields.is_empty() {
                    continue;
                }

                let mut densities = vec![0.0; npoints];
                let ions = self
                    .atoms
                    .iter()
                    .zip(&projected.ions)
                    .filter(|(atom, _)| atom.as_str() == symbol)
                    .map(|(_, ion)| ion);
                for ion in ions {
                    for spin in ion {
                        for &field in &fields {
                            for (acc, v) in densities.iter_mut().zip(&spin[field]) {
                                *acc += v;
                            }
                        }
                    }
                }

                pdos.orbitals.push((orbital_type.to_string(), densities));
            }

            table.push(pdos);
        }

        Some(table)
    }
}

/// 读取 vasprun.xml 的态密度，能量已平移到零点
#[cfg(feature = "vasprun")]
pub fn read_vasprun(path: &Path) -> Result<VasprunDos> {
    let text = xml::read_text(path)?;
    xml::parse_vasprun_content(&text, path)
}

#[cfg(not(feature = "vasprun"))]
pub fn read_vasprun(_path: &Path) -> Result<VasprunDos> {
    Err(SpecconvError::MissingFeature {
        feature: "vasprun",
        reason: "An XML parser is necessary to load vasprun files".to_string(),
    })
}

/// 读取 vasprun.xml 总态密度 (energy, dos)，自旋通道相加
pub fn read_vasprun_totaldos(path: &Path) -> Result<Spectrum> {
    let dos = read_vasprun(path)?;
    let densities = dos.summed_total();
    Spectrum::new(dos.energies, densities)
}

/// 读取 vasprun.xml 投影态密度，按元素和 s/p/d/f 汇总
pub fn read_vasprun_pdos(path: &Path) -> Result<PdosTable> {
    let dos = read_vasprun(path)?;
    dos.element_spd().ok_or_else(|| {
        SpecconvError::parse(
            "vasprun",
            path,
            "No projected DOS found (was LORBIT set?)",
        )
    })
}

/// lm 分量名 -> 角动量通道
fn orbital_type_of(field: &str) -> Option<&'static str> {
    let field = field.trim();
    if field.starts_with('s') {
        Some("s")
    } else if field.starts_with('p') {
        Some("p")
    } else if field.starts_with('d') || field.starts_with("x2") {
        Some("d")
    } else if field.starts_with('f') {
        Some("f")
    } else {
        None
    }
}

fn sum_spins(spins: &[Vec<f64>], npoints: usize) -> Vec<f64> {
    let mut total = vec![0.0; npoints];
    for spin in spins {
        for (acc, v) in total.iter_mut().zip(spin) {
            *acc += v;
        }
    }
    total
}

#[cfg(feature = "vasprun")]
mod xml {
    use super::{ProjectedDos, VasprunDos};
    use crate::error::{Result, SpecconvError};
    use flate2::read::GzDecoder;
    use roxmltree::{Document, Node};
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;

    /// 判断金属时 Fermi 能级两侧的容差 (eV)
    const METAL_TOLERANCE: f64 = 1e-4;

    /// VASP 默认值
    const DEFAULT_ISMEAR: i64 = 1;
    const DEFAULT_SIGMA: f64 = 0.2;

    /// 读取文件内容，`.gz` 自动解压；非 UTF-8 字节按有损方式解码
    pub(super) fn read_text(path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|e| SpecconvError::read(path, e))?;
        let mut bytes = Vec::new();

        let gzipped = path.extension().and_then(|e| e.to_str()) == Some("gz");
        let read = if gzipped {
            GzDecoder::new(file).read_to_end(&mut bytes)
        } else {
            let mut file = file;
            file.read_to_end(&mut bytes)
        };
        read.map_err(|e| SpecconvError::read(path, e))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub(super) fn parse_vasprun_content(text: &str, path: &Path) -> Result<VasprunDos> {
        let doc = Document::parse(text)
            .map_err(|e| SpecconvError::parse("vasprun", path, e.to_string()))?;
        let root = doc.root_element();

        let err = |reason: &str| SpecconvError::parse("vasprun", path, reason);

        // 最后一个 <dos> 块
        let dos = root
            .descendants()
            .filter(|n| n.has_tag_name("dos"))
            .last()
            .ok_or_else(|| err("No <dos> block found"))?;

        let efermi = dos
            .children()
            .find(|n| n.has_tag_name("i") && n.attribute("name") == Some("efermi"))
            .and_then(|n| n.text())
            .ok_or_else(|| err("No efermi in <dos>"))?;
        let efermi: f64 = efermi
            .trim()
            .parse()
            .map_err(|_| err(&format!("Invalid efermi '{}'", efermi.trim())))?;

        // 总态密度
        let total_array = child(dos, "total")
            .and_then(|n| child(n, "array"))
            .ok_or_else(|| err("No total DOS array"))?;
        let mut raw_energies: Vec<f64> = Vec::new();
        let mut total = Vec::new();
        for (i, spin) in spin_sets(total_array).enumerate() {
            let rows = parse_rows(spin, path)?;
            if i == 0 {
                raw_energies = rows.iter().map(|r| r[0]).collect();
            }
            total.push(column(&rows, 1, path)?);
        }
        if total.is_empty() {
            return Err(err("Total DOS has no spin channels"));
        }

        // 投影态密度
        let projected = match child(dos, "partial").and_then(|n| child(n, "array")) {
            Some(array) => Some(parse_projected(array, path)?),
            None => None,
        };

        let atoms = parse_atoms(root);
        if let Some(ref p) = projected {
            if p.ions.len() != atoms.len() {
                return Err(err(&format!(
                    "Projected DOS has {} ions but atominfo lists {}",
                    p.ions.len(),
                    atoms.len()
                )));
            }
        }

        // 能量零点
        let bands = parse_bands(root, path)?;
        let (is_metal, vbm) = band_edges(&bands, efermi);
        let zero_point = match (is_metal, vbm) {
            (false, Some(vbm)) => vbm,
            _ => efermi,
        };

        let ismear: i64 = parameter(root, "ISMEAR")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_ISMEAR);
        let sigma: f64 = parameter(root, "SIGMA")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SIGMA);

        let mut shift = zero_point;
        if ismear == 0 || ismear == -1 {
            shift += sigma;
        }

        log::debug!(
            "vasprun {}: efermi = {:.4}, metal = {}, zero point = {:.4}, ISMEAR = {}, SIGMA = {}",
            path.display(),
            efermi,
            is_metal,
            zero_point,
            ismear,
            sigma
        );

        Ok(VasprunDos {
            energies: raw_energies.iter().map(|e| e - shift).collect(),
            efermi,
            zero_point,
            is_metal,
            total,
            atoms,
            projected,
        })
    }

    fn parse_projected(array: Node, path: &Path) -> Result<ProjectedDos> {
        let orbitals: Vec<String> = array
            .children()
            .filter(|n| n.has_tag_name("field"))
            .filter_map(|n| n.text())
            .map(|s| s.trim().to_string())
            .skip(1)
            .collect();

        let mut ions = Vec::new();
        for ion in spin_sets(array) {
            let mut spins = Vec::new();
            for spin in ion.children().filter(|n| n.has_tag_name("set")) {
                let rows = parse_rows(spin, path)?;
                let columns = (1..=orbitals.len())
                    .map(|c| column(&rows, c, path))
                    .collect::<Result<Vec<_>>>()?;
                spins.push(columns);
            }
            ions.push(spins);
        }

        Ok(ProjectedDos { orbitals, ions })
    }

    fn parse_atoms(root: Node) -> Vec<String> {
        root.children()
            .find(|n| n.has_tag_name("atominfo"))
            .and_then(|info| {
                info.children()
                    .find(|n| n.has_tag_name("array") && n.attribute("name") == Some("atoms"))
            })
            .and_then(|array| child(array, "set"))
            .map(|set| {
                set.children()
                    .filter(|n| n.has_tag_name("rc"))
                    .filter_map(|rc| child(rc, "c"))
                    .filter_map(|c| c.text())
                    .map(|s| s.trim().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `bands[spin][band][kpoint]`
    fn parse_bands(root: Node, path: &Path) -> Result<Vec<Vec<Vec<f64>>>> {
        let eigenvalues = root
            .descendants()
            .filter(|n| {
                n.has_tag_name("eigenvalues")
                    && n.parent().map_or(false, |p| p.has_tag_name("calculation"))
            })
            .last();
        let array = match eigenvalues.and_then(|n| child(n, "array")) {
            Some(a) => a,
            None => return Ok(Vec::new()),
        };

        let mut bands = Vec::new();
        for spin in spin_sets(array) {
            let mut spin_bands: Vec<Vec<f64>> = Vec::new();
            for kpoint in spin.children().filter(|n| n.has_tag_name("set")) {
                for (b, row) in parse_rows(kpoint, path)?.into_iter().enumerate() {
                    if spin_bands.len() <= b {
                        spin_bands.push(Vec::new());
                    }
                    spin_bands[b].push(row[0]);
                }
            }
            bands.push(spin_bands);
        }

        Ok(bands)
    }

    /// (是否金属, Fermi 能级以下的最高本征值)
    pub(super) fn band_edges(bands: &[Vec<Vec<f64>>], efermi: f64) -> (bool, Option<f64>) {
        if bands.iter().all(|spin| spin.is_empty()) {
            return (true, None);
        }

        let is_metal = bands.iter().flatten().any(|band| {
            band.iter().any(|e| e - efermi < -METAL_TOLERANCE)
                && band.iter().any(|e| e - efermi > METAL_TOLERANCE)
        });

        let vbm = bands
            .iter()
            .flatten()
            .flatten()
            .copied()
            .filter(|&e| e < efermi)
            .fold(None, |acc: Option<f64>, e| Some(acc.map_or(e, |m| m.max(e))));

        (is_metal, vbm)
    }

    /// 在 <parameters> 中查找参数，找不到时回退到 <incar>
    fn parameter(root: Node, name: &str) -> Option<String> {
        ["parameters", "incar"].iter().find_map(|section| {
            root.children()
                .find(|n| n.has_tag_name(*section))?
                .descendants()
                .find(|n| n.has_tag_name("i") && n.attribute("name") == Some(name))?
                .text()
                .map(|s| s.trim().to_string())
        })
    }

    fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
        node.children().find(|n| n.has_tag_name(tag))
    }

    /// `<array><set><set comment="...">` 的内层 set 序列
    fn spin_sets<'a, 'input>(array: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
        child(array, "set")
            .into_iter()
            .flat_map(|outer| outer.children().filter(|n| n.has_tag_name("set")))
    }

    fn parse_rows(set: Node, path: &Path) -> Result<Vec<Vec<f64>>> {
        set.children()
            .filter(|n| n.has_tag_name("r"))
            .map(|r| {
                let text = r.text().unwrap_or("");
                text.split_whitespace()
                    .map(|s| {
                        s.parse::<f64>().map_err(|_| {
                            SpecconvError::parse(
                                "vasprun",
                                path,
                                format!("Cannot parse '{}' as a number", s),
                            )
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .filter(|row| row.as_ref().map_or(true, |r| !r.is_empty()))
            .collect()
    }

    fn column(rows: &[Vec<f64>], index: usize, path: &Path) -> Result<Vec<f64>> {
        rows.iter()
            .map(|r| {
                r.get(index).copied().ok_or_else(|| {
                    SpecconvError::parse(
                        "vasprun",
                        path,
                        format!("Row has {} columns, expected more than {}", r.len(), index),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbital_type_of() {
        assert_eq!(orbital_type_of("s"), Some("s"));
        assert_eq!(orbital_type_of("py"), Some("p"));
        assert_eq!(orbital_type_of("dxy"), Some("d"));
        assert_eq!(orbital_type_of("x2-y2"), Some("d"));
        assert_eq!(orbital_type_of("fxyz"), Some("f"));
        assert_eq!(orbital_type_of("energy"), None);
    }

    #[cfg(not(feature = "vasprun"))]
    #[test]
    fn test_missing_feature() {
        let err = read_vasprun(Path::new("vasprun.xml")).unwrap_err();
        assert!(matches!(err, SpecconvError::MissingFeature { .. }));
    }
}

#[cfg(all(test, feature = "vasprun"))]
mod xml_tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    const SEMICONDUCTOR: &str = r#"<modeling>
 <incar>
  <i type="string" name="SYSTEM">ZnO</i>
  <i name="ISMEAR">     0</i>
 </incar>
 <parameters>
  <separator name="electronic">
   <separator name="electronic smearing">
    <i name="SIGMA">      0.05000000</i>
    <i type="int" name="ISMEAR">     0</i>
   </separator>
  </separator>
 </parameters>
 <atominfo>
  <atoms>       2 </atoms>
  <array name="atoms" >
   <dimension dim="1">ion</dimension>
   <field type="string">element</field>
   <field type="int">atomtype</field>
   <set>
    <rc><c>Zn</c><c>   1</c></rc>
    <rc><c>O </c><c>   2</c></rc>
   </set>
  </array>
 </atominfo>
 <calculation>
  <eigenvalues>
   <array>
    <dimension dim="1">band</dimension>
    <field>eigene</field>
    <field>occ</field>
    <set>
     <set comment="spin 1">
      <set comment="kpoint 1">
       <r>    0.5000    1.0000 </r>
       <r>    2.0000    0.0000 </r>
      </set>
      <set comment="kpoint 2">
       <r>    0.6000    1.0000 </r>
       <r>    2.2000    0.0000 </r>
      </set>
     </set>
    </set>
   </array>
  </eigenvalues>
  <dos>
   <i name="efermi">      1.00000000 </i>
   <total>
    <array>
     <dimension dim="1">gridpoints</dimension>
     <dimension dim="2">spin</dimension>
     <field>energy</field>
     <field>total</field>
     <field>integrated</field>
     <set>
      <set comment="spin 1">
       <r>   -1.0000     0.1000     0.0000 </r>
       <r>    0.0000     0.2000     0.1000 </r>
       <r>    1.0000     0.3000     0.3000 </r>
       <r>    2.0000     0.4000     0.6000 </r>
      </set>
     </set>
    </array>
   </total>
   <partial>
    <array>
     <dimension dim="1">gridpoints</dimension>
     <dimension dim="2">spin</dimension>
     <dimension dim="3">ion</dimension>
     <field>energy</field>
     <field>s</field>
     <field>py</field>
     <field>pz</field>
     <field>px</field>
     <set>
      <set comment="ion 1">
       <set comment="spin 1">
        <r>   -1.0000  0.1000  0.0100  0.0100  0.0100 </r>
        <r>    0.0000  0.2000  0.0100  0.0100  0.0100 </r>
        <r>    1.0000  0.3000  0.0100  0.0100  0.0100 </r>
        <r>    2.0000  0.4000  0.0100  0.0100  0.0100 </r>
       </set>
      </set>
      <set comment="ion 2">
       <set comment="spin 1">
        <r>   -1.0000  1.0000  0.1000  0.2000  0.3000 </r>
        <r>    0.0000  1.0000  0.1000  0.2000  0.3000 </r>
        <r>    1.0000  1.0000  0.1000  0.2000  0.3000 </r>
        <r>    2.0000  1.0000  0.1000  0.2000  0.3000 </r>
       </set>
      </set>
     </set>
    </array>
   </partial>
  </dos>
 </calculation>
</modeling>
"#;

    const METAL_SPIN_POLARISED: &str = r#"<modeling>
 <parameters>
  <i name="SIGMA">      0.20000000</i>
  <i type="int" name="ISMEAR">     1</i>
 </parameters>
 <atominfo>
  <array name="atoms" >
   <set>
    <rc><c>Fe</c><c>   1</c></rc>
   </set>
  </array>
 </atominfo>
 <calculation>
  <eigenvalues>
   <array>
    <set>
     <set comment="spin 1">
      <set comment="kpoint 1">
       <r>    4.0000    1.0000 </r>
      </set>
      <set comment="kpoint 2">
       <r>    6.0000    0.0000 </r>
      </set>
     </set>
     <set comment="spin 2">
      <set comment="kpoint 1">
       <r>    4.5000    1.0000 </r>
      </set>
      <set comment="kpoint 2">
       <r>    6.5000    0.0000 </r>
      </set>
     </set>
    </set>
   </array>
  </eigenvalues>
  <dos>
   <i name="efermi">      5.00000000 </i>
   <total>
    <array>
     <set>
      <set comment="spin 1">
       <r>    4.0000     1.0000     0.0000 </r>
       <r>    5.0000     2.0000     1.0000 </r>
      </set>
      <set comment="spin 2">
       <r>    4.0000     0.5000     0.0000 </r>
       <r>    5.0000     0.2500     0.5000 </r>
      </set>
     </set>
    </array>
   </total>
  </dos>
 </calculation>
</modeling>
"#;

    fn fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_semiconductor_shifted_to_vbm_and_sigma() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "vasprun.xml", SEMICONDUCTOR);
        let dos = read_vasprun(&path).unwrap();

        assert!(!dos.is_metal);
        assert!((dos.zero_point - 0.6).abs() < 1e-12);
        // 0.6 (VBM) + 0.05 (SIGMA, ISMEAR = 0)
        let expected = [-1.65, -0.65, 0.35, 1.35];
        for (e, x) in dos.energies.iter().zip(expected) {
            assert!((e - x).abs() < 1e-9, "{} != {}", e, x);
        }
        assert_eq!(dos.atoms, vec!["Zn", "O"]);
    }

    #[test]
    fn test_totaldos_single_spin() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "vasprun.xml", SEMICONDUCTOR);
        let spectrum = read_vasprun_totaldos(&path).unwrap();
        assert_eq!(spectrum.len(), 4);
        assert_eq!(spectrum.y, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_metal_spins_summed_and_fermi_zero() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "vasprun.xml", METAL_SPIN_POLARISED);
        let dos = read_vasprun(&path).unwrap();
        assert!(dos.is_metal);
        assert_eq!(dos.spin_channels(), 2);

        let spectrum = read_vasprun_totaldos(&path).unwrap();
        // ISMEAR = 1: 只减去 Fermi 能级
        assert!((spectrum.x[0] + 1.0).abs() < 1e-12);
        assert!((spectrum.x[1] - 0.0).abs() < 1e-12);
        assert!((spectrum.y[0] - 1.5).abs() < 1e-12);
        assert!((spectrum.y[1] - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_pdos_grouped_by_element_and_orbital() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "vasprun.xml", SEMICONDUCTOR);
        let table = read_vasprun_pdos(&path).unwrap();

        let names: Vec<_> = table.iter().map(|e| e.element.as_str()).collect();
        assert_eq!(names, vec!["O", "Zn"]);

        let o = table.get("O").unwrap();
        assert_eq!(o.orbital_names().collect::<Vec<_>>(), vec!["s", "p"]);
        for v in o.orbital("p").unwrap() {
            assert!((v - 0.6).abs() < 1e-9);
        }

        let zn = table.get("Zn").unwrap();
        assert_eq!(zn.orbital("s").unwrap(), &[0.1, 0.2, 0.3, 0.4]);
        for v in zn.orbital("p").unwrap() {
            assert!((v - 0.03).abs() < 1e-9);
        }
        assert_eq!(zn.energy.len(), 4);
    }

    #[test]
    fn test_pdos_missing_projection() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir, "vasprun.xml", METAL_SPIN_POLARISED);
        let err = read_vasprun_pdos(&path).unwrap_err();
        assert!(err.to_string().contains("LORBIT"));
    }

    #[test]
    fn test_gzipped_vasprun() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vasprun.xml.gz");
        let file = fs::File::create(&path).unwrap();
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(SEMICONDUCTOR.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let spectrum = read_vasprun_totaldos(&path).unwrap();
        assert_eq!(spectrum.len(), 4);
    }

    #[test]
    fn test_band_edges_without_eigenvalues() {
        assert_eq!(xml::band_edges(&[], 1.0), (true, None));
    }
}
