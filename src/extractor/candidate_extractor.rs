//! 候选设备名提取
//! 将包含多个可选硬件（"X or Y"、"X/Y"）的原始字符串拆分为归一化候选名，并过滤主频、DirectX 等噪声片段

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::utils::HardwareNormalizer;

// 分隔符：/ , | 以及独立的 "или" / "or"
static SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)/|,|\||\s+или\s+|\s+or\s+").expect("valid split regex")
});

// 纯数值，可带 ghz / gb 单位
static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(?:[.,]\d+)?\s*(?:ghz|gb)?$").expect("valid numeric regex")
});

const NOISE_PREFIXES: [&str; 4] = ["directx", "newer", "older", "version"];

/// 候选名提取器
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    // 长度不超过该值的候选名被丢弃
    min_candidate_length: usize,
}

impl Default for CandidateExtractor {
    fn default() -> Self {
        Self::new(6)
    }
}

impl CandidateExtractor {
    pub fn new(min_candidate_length: usize) -> Self {
        Self { min_candidate_length }
    }

    /// 拆分并归一化候选名，保持原始顺序（可能为空）
    pub fn extract(&self, raw: &str) -> Vec<String> {
        let candidates: Vec<String> = SPLIT_RE
            .split(raw)
            .map(HardwareNormalizer::normalize)
            .filter(|candidate| !self.is_noise(candidate))
            .collect();

        debug!("候选名提取：原始={:?}，候选={:?}", raw, candidates);
        candidates
    }

    /// 判断归一化后的片段是否为噪声
    pub fn is_noise(&self, candidate: &str) -> bool {
        candidate.chars().count() <= self.min_candidate_length
            || NUMERIC_RE.is_match(candidate)
            || NOISE_PREFIXES.iter().any(|prefix| candidate.starts_with(prefix))
            || candidate.chars().all(|c| c.is_ascii_digit())
    }
}
