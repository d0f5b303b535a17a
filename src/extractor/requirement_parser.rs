//! 配置需求解析
//! 将发行商给出的无序自由文本需求行解析为结构化的 RequirementSpec
//! 每个字段一条独立规则，便于针对不同发行商的写法单独测试

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::rule::RequirementSpec;
use crate::utils::VersionExtractor;

static CPU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:intel|amd).*\d").expect("valid cpu regex"));

// "hd" 仅在后接空白/数字时计入，避免误中 "HDD"；"arc" 需为独立单词
static GPU_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:gtx|rtx|radeon|rx|graphics|geforce)|\bhd(?:\s|\d)|\barc\b").expect("valid gpu regex")
});

// 行首的 "标签:"（如 "Процессор:"、"Graphics:"），标签内不含数字
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^:\d]{1,40}:\s*").expect("valid label regex"));

/// 配置需求解析器
pub struct RequirementParser;

impl RequirementParser {
    /// 解析一组需求行，未命中的字段保持 None
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> RequirementSpec {
        let mut spec = RequirementSpec::default();

        for line in lines {
            let line = line.as_ref();
            if spec.cpu.is_none() {
                spec.cpu = Self::parse_cpu(line);
            }
            if spec.gpu.is_none() {
                spec.gpu = Self::parse_gpu(line);
            }
            if spec.ram.is_none() {
                spec.ram = Self::parse_ram(line);
            }
            if spec.directx.is_none() {
                spec.directx = Self::parse_directx(line);
            }
            if spec.windows.is_none() {
                spec.windows = Self::parse_windows(line);
            }
        }

        debug!("需求解析结果：{:?}", spec);
        spec
    }

    /// CPU：形如 "(intel|amd) ... 数字" 的行，返回去掉标签后的原始文本
    /// 同时命中 GPU 规则的行（"AMD Radeon RX 580"）不视为 CPU
    pub fn parse_cpu(line: &str) -> Option<String> {
        (CPU_RE.is_match(line) && !GPU_RE.is_match(line)).then(|| Self::strip_label(line))
    }

    /// GPU：包含 gtx/rtx/radeon/rx/hd/arc/graphics/geforce 的行
    pub fn parse_gpu(line: &str) -> Option<String> {
        GPU_RE.is_match(line).then(|| Self::strip_label(line))
    }

    /// 内存：标注为 ОЗУ/RAM 的容量（GB）
    pub fn parse_ram(line: &str) -> Option<u32> {
        VersionExtractor::ram_gb(line)
    }

    /// DirectX：包含 "directx" 或 "верс" 的行，优先取 "directx" 之后的数字
    /// 同时提到 Windows 而未提到 DirectX 的行（"Windows 10, версия 1909"）不计入
    pub fn parse_directx(line: &str) -> Option<u32> {
        let lowered = line.to_lowercase();
        let mentions_directx = lowered.contains("directx");
        let mentions_version = lowered.contains("верс") && !lowered.contains("windows");
        if mentions_directx || mentions_version {
            VersionExtractor::directx(line)
        } else {
            None
        }
    }

    /// Windows：包含 "windows" 的行，原样保存（去首尾空白）
    pub fn parse_windows(line: &str) -> Option<String> {
        line.to_lowercase()
            .contains("windows")
            .then(|| line.trim().to_string())
    }

    /// 档位回填：推荐缺失而最低存在时，最低 → 推荐；
    /// 随后最低缺失 CPU/GPU 而推荐存在时，推荐 → 最低
    pub fn apply_fallback(min: &mut RequirementSpec, rec: &mut RequirementSpec) {
        fill(&mut rec.cpu, &min.cpu);
        fill(&mut rec.gpu, &min.gpu);
        fill(&mut rec.ram, &min.ram);
        fill(&mut rec.directx, &min.directx);
        fill(&mut rec.windows, &min.windows);

        fill(&mut min.cpu, &rec.cpu);
        fill(&mut min.gpu, &rec.gpu);
    }

    /// 解析两组需求行并应用档位回填
    pub fn parse_tiers<S: AsRef<str>>(min_lines: &[S], rec_lines: &[S]) -> (RequirementSpec, RequirementSpec) {
        let mut min = Self::parse(min_lines);
        let mut rec = Self::parse(rec_lines);
        Self::apply_fallback(&mut min, &mut rec);
        (min, rec)
    }

    fn strip_label(line: &str) -> String {
        LABEL_RE.replace(line.trim(), "").trim().to_string()
    }
}

fn fill<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if target.is_none() {
        target.clone_from(source);
    }
}
