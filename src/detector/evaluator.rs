//! 兼容性评估器
//! 将用户分数与最低/推荐分数比较，得出每个硬件维度的分级判定
//!
//! 比较方向固定为：value ≥ target × (1 − tolerance) 即视为达到 target。
//! 基准分数是基准表自身的排名约定，此处只按上述方向使用，不做任何翻转。

use tracing::debug;

use crate::config::MatchConfig;
use crate::matcher::{AggregationMode, FuzzyMatcher};
use crate::rule::{BenchmarkTable, ComparisonResult, RequirementSpec, UserHardwareProfile, Verdict};
use crate::utils::VersionExtractor;

/// 默认容差（3%）
pub const DEFAULT_TOLERANCE: f64 = 0.03;

/// 近似大于等于：value ≥ target × (1 − tolerance)，任一操作数缺失时为 false
pub fn is_roughly_greater_or_equal(value: Option<f64>, target: Option<f64>, tolerance: f64) -> bool {
    match (value, target) {
        (Some(value), Some(target)) => value >= target * (1.0 - tolerance),
        _ => false,
    }
}

/// 三档比较
///
/// 用户值或最低值缺失 → unknown；推荐值缺失时不可能达到推荐档，直接落到最低档判断。
pub fn compare(user: Option<f64>, min: Option<f64>, rec: Option<f64>, tolerance: f64) -> Verdict {
    if user.is_none() || min.is_none() {
        return Verdict::Unknown;
    }
    if rec.is_some() && is_roughly_greater_or_equal(user, rec, tolerance) {
        Verdict::Recommended
    } else if is_roughly_greater_or_equal(user, min, tolerance) {
        Verdict::Minimum
    } else {
        Verdict::Insufficient
    }
}

/// 兼容性评估器（纯函数，不修改任何输入）
#[derive(Debug, Clone)]
pub struct CompatibilityEvaluator {
    matcher: FuzzyMatcher,
    tolerance: f64,
}

impl Default for CompatibilityEvaluator {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl CompatibilityEvaluator {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            matcher: FuzzyMatcher::new(config),
            tolerance: config.tolerance,
        }
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// 评估五个维度
    pub fn evaluate(
        &self,
        profile: &UserHardwareProfile,
        min: &RequirementSpec,
        rec: &RequirementSpec,
        cpu_table: &BenchmarkTable,
        gpu_table: &BenchmarkTable,
    ) -> ComparisonResult {
        let result = ComparisonResult {
            cpu: self.evaluate_device(cpu_table, profile.cpu_name.as_deref(), min.cpu.as_deref(), rec.cpu.as_deref()),
            gpu: self.evaluate_device(gpu_table, profile.gpu_name.as_deref(), min.gpu.as_deref(), rec.gpu.as_deref()),
            ram: self.evaluate_ram(profile.total_ram_gb, min.ram, rec.ram),
            directx: self.evaluate_directx(profile.directx_version.as_deref(), min.directx, rec.directx),
            windows: self.evaluate_windows(
                profile.windows_version.as_deref(),
                min.windows.as_deref(),
                rec.windows.as_deref(),
            ),
        };
        debug!("兼容性评估结果：{:?}", result);
        result
    }

    /// CPU/GPU：用户设备取自身分数，最低档取最弱可选设备，推荐档取最强可选设备
    pub fn evaluate_device(
        &self,
        table: &BenchmarkTable,
        user: Option<&str>,
        min: Option<&str>,
        rec: Option<&str>,
    ) -> Verdict {
        let user_score = self.matcher.score_from_candidates(table, user, AggregationMode::Best);
        let min_score = self.matcher.score_from_candidates(table, min, AggregationMode::Min);
        let rec_score = self.matcher.score_from_candidates(table, rec, AggregationMode::Best);
        debug!(
            "{} 分数：用户={:?}，最低={:?}，推荐={:?}",
            table.kind, user_score, min_score, rec_score
        );
        compare(user_score, min_score, rec_score, self.tolerance)
    }

    /// 内存：直接按 GB 数比较
    pub fn evaluate_ram(&self, user: Option<u32>, min: Option<u32>, rec: Option<u32>) -> Verdict {
        compare(user.map(f64::from), min.map(f64::from), rec.map(f64::from), self.tolerance)
    }

    /// DirectX：两档都未给出时为 unspecified
    pub fn evaluate_directx(&self, user: Option<&str>, min: Option<u32>, rec: Option<u32>) -> Verdict {
        if min.is_none() && rec.is_none() {
            return Verdict::Unspecified;
        }
        let user = user.and_then(VersionExtractor::directx);
        compare(user.map(f64::from), min.map(f64::from), rec.map(f64::from), self.tolerance)
    }

    /// Windows：两档都未给出时为 unspecified，否则按整数主版本号比较
    pub fn evaluate_windows(&self, user: Option<&str>, min: Option<&str>, rec: Option<&str>) -> Verdict {
        if min.is_none() && rec.is_none() {
            return Verdict::Unspecified;
        }
        let version = |text: Option<&str>| text.and_then(VersionExtractor::windows).map(f64::from);
        compare(version(user), version(min), version(rec), self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{BenchmarkEntry, ComponentKind};

    #[test]
    fn test_roughly_greater_or_equal_band() {
        assert!(is_roughly_greater_or_equal(Some(90.0), Some(90.0), DEFAULT_TOLERANCE));
        // 90 × 0.97 = 87.3
        assert!(is_roughly_greater_or_equal(Some(87.3), Some(90.0), DEFAULT_TOLERANCE));
        assert!(!is_roughly_greater_or_equal(Some(87.0), Some(90.0), DEFAULT_TOLERANCE));
        assert!(!is_roughly_greater_or_equal(None, Some(90.0), DEFAULT_TOLERANCE));
        assert!(!is_roughly_greater_or_equal(Some(90.0), None, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_compare_direction() {
        // 100 < 110 × 0.97 = 106.7，但 100 ≥ 90 × 0.97
        assert_eq!(compare(Some(100.0), Some(90.0), Some(110.0), DEFAULT_TOLERANCE), Verdict::Minimum);
        assert_eq!(compare(Some(107.0), Some(90.0), Some(110.0), DEFAULT_TOLERANCE), Verdict::Recommended);
        assert_eq!(compare(Some(80.0), Some(90.0), Some(110.0), DEFAULT_TOLERANCE), Verdict::Insufficient);
    }

    #[test]
    fn test_compare_missing_values() {
        assert_eq!(compare(None, Some(90.0), Some(110.0), DEFAULT_TOLERANCE), Verdict::Unknown);
        assert_eq!(compare(Some(100.0), None, Some(110.0), DEFAULT_TOLERANCE), Verdict::Unknown);
        // 推荐值缺失时落到最低档判断
        assert_eq!(compare(Some(200.0), Some(90.0), None, DEFAULT_TOLERANCE), Verdict::Minimum);
    }

    #[test]
    fn test_ram_tiers() {
        let evaluator = CompatibilityEvaluator::default();
        assert_eq!(evaluator.evaluate_ram(Some(16), Some(8), Some(16)), Verdict::Recommended);
        assert_eq!(evaluator.evaluate_ram(Some(8), Some(8), Some(16)), Verdict::Minimum);
        assert_eq!(evaluator.evaluate_ram(Some(4), Some(8), Some(16)), Verdict::Insufficient);
        assert_eq!(evaluator.evaluate_ram(None, Some(8), Some(16)), Verdict::Unknown);
    }

    #[test]
    fn test_directx_tiers() {
        let evaluator = CompatibilityEvaluator::default();
        assert_eq!(evaluator.evaluate_directx(Some("DirectX 12"), None, None), Verdict::Unspecified);
        assert_eq!(evaluator.evaluate_directx(Some("DirectX 12"), Some(11), Some(12)), Verdict::Recommended);
        assert_eq!(evaluator.evaluate_directx(Some("DirectX 10"), Some(11), Some(12)), Verdict::Insufficient);
        assert_eq!(evaluator.evaluate_directx(Some("Неизвестно"), Some(11), Some(12)), Verdict::Unknown);
    }

    #[test]
    fn test_windows_tiers_compare_as_integers() {
        let evaluator = CompatibilityEvaluator::default();
        assert_eq!(evaluator.evaluate_windows(Some("Windows 10"), None, None), Verdict::Unspecified);
        assert_eq!(
            evaluator.evaluate_windows(Some("Windows® 11 Home"), Some("Windows 10 64-bit"), Some("Windows 10 64-bit")),
            Verdict::Recommended
        );
        assert_eq!(
            evaluator.evaluate_windows(Some("Windows 7 Ultimate"), Some("Windows 10 64-bit"), None),
            Verdict::Insufficient
        );
    }

    #[test]
    fn test_device_verdict_with_alternatives() {
        let table = BenchmarkTable::new(
            ComponentKind::Gpu,
            vec![
                BenchmarkEntry::new("GeForce GTX 1060", 10000.0),
                BenchmarkEntry::new("Radeon RX 5500 XT", 9000.0),
                BenchmarkEntry::new("GeForce RTX 2060", 14000.0),
            ],
        );
        let evaluator = CompatibilityEvaluator::default();
        // 最低档取 "GTX 1060 / RX 5500 XT" 中较弱的 9000
        let verdict = evaluator.evaluate_device(
            &table,
            Some("AMD Radeon RX 5500 XT"),
            Some("NVIDIA GeForce GTX 1060 / AMD Radeon RX 5500 XT"),
            Some("NVIDIA GeForce RTX 2060"),
        );
        assert_eq!(verdict, Verdict::Minimum);
        assert_eq!(evaluator.evaluate_device(&table, None, Some("GeForce GTX 1060"), None), Verdict::Unknown);
    }
}
