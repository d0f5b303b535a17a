//! 硬件名称归一化
//! 去除厂商/营销噪声，输出可用于相似度比较的小写规范形式

use once_cell::sync::Lazy;
use regex::Regex;

// 商标标记、(R)/(TM)、独立的 "cpu" 以及 @x.xGHz 主频标注
static MARKS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"®|™|\(r\)|\(tm\)|\bcpu\b|@\s*\d+(?:\.\d+)?\s*ghz").expect("valid marks regex")
});

static BRANDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:nvidia|amd|intel|geforce|radeon)\b").expect("valid brands regex")
});

static PARENS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").expect("valid parens regex"));

static SEPARATORS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[|/]").expect("valid separators regex"));

static DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9 .,\-]").expect("valid charset regex"));

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid spaces regex"));

/// 硬件名称归一化工具
pub struct HardwareNormalizer;

impl HardwareNormalizer {
    /// 归一化硬件名称，空输入返回空串
    ///
    /// 单轮处理顺序：小写 → 去商标/主频 → 去品牌词 → 去括号段 → 分隔符转逗号 → 字符白名单 → 合并空格。
    /// 删除片段可能拼出新的噪声词（如 `i(x)ntel`），因此重复处理直到结果不再变化；
    /// 每轮只会缩短或保持长度，循环必然终止，且输出满足幂等。
    pub fn normalize(raw: &str) -> String {
        let mut current = Self::normalize_once(raw);
        loop {
            let next = Self::normalize_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn normalize_once(raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let s = MARKS_RE.replace_all(&lowered, "");
        let s = BRANDS_RE.replace_all(&s, "");
        let s = PARENS_RE.replace_all(&s, "");
        let s = SEPARATORS_RE.replace_all(&s, ",");
        let s = DISALLOWED_RE.replace_all(&s, "");
        let s = SPACES_RE.replace_all(&s, " ");
        s.trim().to_string()
    }
}
