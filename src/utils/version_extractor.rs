//! 版本号提取工具模块
//! 负责从自由文本中提取 DirectX 版本、Windows 版本与内存容量等整数值
//! Windows 版本必须按整数比较（11 ≥ 10），不能按字符串比较

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid number regex"));

// "directx" 之后的第一段数字
static DIRECTX_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)directx\D*?(\d+)").expect("valid directx number regex")
});

// 商标标记
static WINDOWS_MARKS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)®|™|\(r\)|\(tm\)").expect("valid windows marks regex")
});

// 版本/位数/"edition" 等修饰词
static WINDOWS_NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:home|pro|enterprise|ultimate)\b|\b(?:32|64)[\s-]?bits?\b|\boperating\s+system\b|\b(?:edition|version|os)\b",
    )
    .expect("valid windows noise regex")
});

static WINDOWS_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)windows\s*(\d+)").expect("valid windows number regex")
});

// "<数字> ГБ/GB ... ОЗУ/RAM"，\bram 排除 VRAM
static RAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:гб|gb)\b.*\b(?:озу|ram)\b").expect("valid ram regex")
});

/// 版本提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 提取文本中第一段连续数字
    pub fn first_number(text: &str) -> Option<u32> {
        FIRST_NUMBER_RE
            .find(text)
            .and_then(|m| m.as_str().parse().ok())
    }

    /// 从 DirectX 描述中提取主版本号（"DirectX 12" → 12）
    ///
    /// 文本含 "directx" 时取其后的数字（"Windows 10, DirectX 12" → 12），否则取第一段数字
    pub fn directx(text: &str) -> Option<u32> {
        DIRECTX_NUMBER_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .or_else(|| Self::first_number(text))
    }

    /// 从 Windows 描述中提取主版本号
    ///
    /// 先去除商标、版本名（home/pro/enterprise/ultimate）、位数（32/64-bit）
    /// 以及 edition/version/os/operating system 等词，再取 "windows" 之后的数字。
    pub fn windows(text: &str) -> Option<u32> {
        let cleaned = WINDOWS_MARKS_RE.replace_all(text, "");
        let cleaned = WINDOWS_NOISE_RE.replace_all(&cleaned, " ");

        WINDOWS_NUMBER_RE
            .captures(&cleaned)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// 从标注为内存的需求行中提取容量（GB）
    pub fn ram_gb(line: &str) -> Option<u32> {
        RAM_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}
