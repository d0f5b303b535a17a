//! 数据模型定义
//! 基准表、配置需求、用户硬件档案与兼容性判定结果，仅存储数据，支持序列化/反序列化

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::HwCompatError;

/// 硬件类别（每类对应一张独立的基准表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Cpu,
    Gpu,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Cpu => write!(f, "cpu"),
            ComponentKind::Gpu => write!(f, "gpu"),
        }
    }
}

/// 基准表条目：一个已知硬件型号及其跑分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    // 兼容抓取脚本写入的列名
    #[serde(alias = "cpu_name", alias = "gpu_name")]
    pub name: String,
    #[serde(alias = "cpu_mark", alias = "gpu_mark")]
    pub score: f64,
}

impl BenchmarkEntry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// 完整基准库（CPU + GPU）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkLibrary {
    #[serde(default)]
    pub cpu: Vec<BenchmarkEntry>,
    #[serde(default)]
    pub gpu: Vec<BenchmarkEntry>,
}

impl BenchmarkLibrary {
    /// 按类别取出对应的基准表
    pub fn table(&self, kind: ComponentKind) -> &[BenchmarkEntry] {
        match kind {
            ComponentKind::Cpu => &self.cpu,
            ComponentKind::Gpu => &self.gpu,
        }
    }
}

/// 单次请求内使用的基准表快照，预先计算小写名称
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    pub kind: ComponentKind,
    entries: Vec<BenchmarkEntry>,
    lowered: Vec<String>,
}

impl BenchmarkTable {
    pub fn new(kind: ComponentKind, entries: Vec<BenchmarkEntry>) -> Self {
        let lowered = entries.iter().map(|e| e.name.to_lowercase()).collect();
        Self { kind, entries, lowered }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按表内顺序迭代 (条目, 小写名称)
    pub fn iter(&self) -> impl Iterator<Item = (&BenchmarkEntry, &str)> {
        self.entries.iter().zip(self.lowered.iter().map(String::as_str))
    }
}

/// 某一档位（最低/推荐）的结构化配置需求，每次请求从文本行重新推导
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSpec {
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<u32>,
    pub directx: Option<u32>,
    pub windows: Option<String>,
}

/// 用户硬件档案（由外部采集程序写入）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHardwareProfile {
    #[serde(default)]
    pub cpu_name: Option<String>,
    #[serde(default)]
    pub gpu_name: Option<String>,
    #[serde(default)]
    pub total_ram_gb: Option<u32>,
    #[serde(default)]
    pub directx_version: Option<String>,
    #[serde(default)]
    pub windows_version: Option<String>,
}

/// 游戏配置需求记录（最低/推荐两组原始文本行）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequirements {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub min_sys: Vec<String>,
    #[serde(default)]
    pub rec_sys: Vec<String>,
}

/// 单个硬件维度的兼容性判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// 用户数据或最低需求缺失
    Unknown,
    /// 达到推荐配置
    Recommended,
    /// 达到最低配置
    Minimum,
    /// 低于最低配置
    Insufficient,
    /// 发行商未给出该项需求
    Unspecified,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Unknown => "unknown",
            Verdict::Recommended => "recommended",
            Verdict::Minimum => "minimum",
            Verdict::Insufficient => "insufficient",
            Verdict::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = HwCompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(Verdict::Unknown),
            "recommended" => Ok(Verdict::Recommended),
            "minimum" => Ok(Verdict::Minimum),
            "insufficient" => Ok(Verdict::Insufficient),
            "unspecified" => Ok(Verdict::Unspecified),
            other => Err(HwCompatError::InvalidInput(format!("未知的判定标签：{}", other))),
        }
    }
}

/// 兼容性检查结果（五个维度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub cpu: Verdict,
    pub gpu: Verdict,
    pub ram: Verdict,
    pub directx: Verdict,
    pub windows: Verdict,
}

impl ComparisonResult {
    /// 按固定顺序列出 (维度名, 判定)
    pub fn entries(&self) -> [(&'static str, Verdict); 5] {
        [
            ("cpu", self.cpu),
            ("gpu", self.gpu),
            ("ram", self.ram),
            ("directx", self.directx),
            ("windows", self.windows),
        ]
    }
}

// ======== 为 ComparisonResult 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, verdict)) in self.entries().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, verdict)?;
        }
        Ok(())
    }
}
