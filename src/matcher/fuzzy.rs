//! 模糊匹配器
//! 将候选设备名与基准表中的型号名做近似子串匹配，并按聚合模式归约为单一分数
//!
//! 匹配距离约定：0 表示完全匹配，数值越小越接近（距离空间，与位置无关）。
//! 距离 = 候选名与参考名任意子串之间的最小编辑距离 / 候选名字符数。

use std::fmt;
use strsim::normalized_levenshtein;
use tracing::debug;

use crate::config::MatchConfig;
use crate::error::HwResult;
use crate::extractor::CandidateExtractor;
use crate::rule::{BenchmarkEntry, BenchmarkRepository, BenchmarkTable, ComponentKind};

/// 完全匹配的距离
pub const EXACT_MATCH_DISTANCE: f64 = 0.0;

/// 多个候选分数的归约方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationMode {
    /// 取最大分数（推荐档/用户设备）
    #[default]
    Best,
    /// 取最小分数（最低档中最弱的可选设备）
    Min,
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationMode::Best => write!(f, "best"),
            AggregationMode::Min => write!(f, "min"),
        }
    }
}

/// 单个候选名的匹配结果
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyHit<'a> {
    pub entry: &'a BenchmarkEntry,
    /// 匹配距离，越小越接近
    pub distance: f64,
    /// 候选名与参考名小写后完全相同
    pub exact: bool,
}

/// 模糊匹配器
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    extractor: CandidateExtractor,
    match_threshold: f64,
    min_match_char_length: usize,
    low_confidence_distance: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl FuzzyMatcher {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            extractor: CandidateExtractor::new(config.min_candidate_length),
            match_threshold: config.match_threshold,
            min_match_char_length: config.min_match_char_length,
            low_confidence_distance: config.low_confidence_distance,
        }
    }

    /// 从原始设备字符串计算单一分数
    ///
    /// 空输入直接返回 None（区分"无数据"与"零分"）；未匹配的候选名静默丢弃；
    /// 全部候选都未匹配时返回 None。
    pub fn score_from_candidates(
        &self,
        table: &BenchmarkTable,
        raw_device: Option<&str>,
        mode: AggregationMode,
    ) -> Option<f64> {
        let raw_device = raw_device.filter(|raw| !raw.trim().is_empty())?;

        let scores: Vec<f64> = self
            .extractor
            .extract(raw_device)
            .iter()
            .filter_map(|candidate| {
                let hit = self.best_match(table, candidate)?;
                if !hit.exact && hit.distance > self.low_confidence_distance {
                    debug!(
                        "低置信度匹配：表={}，候选={}，参考={}，距离={:.3}",
                        table.kind, candidate, hit.entry.name, hit.distance
                    );
                } else {
                    debug!(
                        "匹配成功：表={}，候选={}，参考={}，距离={:.3}，分数={}",
                        table.kind, candidate, hit.entry.name, hit.distance, hit.entry.score
                    );
                }
                Some(hit.entry.score)
            })
            .collect();

        let reduced = match mode {
            AggregationMode::Min => scores.iter().copied().reduce(f64::min),
            AggregationMode::Best => scores.iter().copied().reduce(f64::max),
        };
        debug!("分数归约：表={}，模式={}，候选分数={:?}，结果={:?}", table.kind, mode, scores, reduced);
        reduced
    }

    /// 从仓库读取基准表后计算分数；空输入不会触发读取
    pub async fn score_from_repository(
        &self,
        repository: &dyn BenchmarkRepository,
        kind: ComponentKind,
        raw_device: Option<&str>,
        mode: AggregationMode,
    ) -> HwResult<Option<f64>> {
        if raw_device.is_none_or(|raw| raw.trim().is_empty()) {
            return Ok(None);
        }
        let table = BenchmarkTable::new(kind, repository.load_table(kind).await?);
        Ok(self.score_from_candidates(&table, raw_device, mode))
    }

    /// 为单个候选名寻找最佳参考条目
    ///
    /// 小写后完全相同的条目直接采用；否则取距离最小且不超过阈值的条目，
    /// 距离相同时取整体相似度更高者，再相同则取表内靠前者。
    pub fn best_match<'a>(&self, table: &'a BenchmarkTable, candidate: &str) -> Option<FuzzyHit<'a>> {
        let pattern = candidate.to_lowercase();
        if pattern.chars().count() < self.min_match_char_length {
            return None;
        }

        if let Some((entry, _)) = table.iter().find(|(_, name)| *name == pattern) {
            return Some(FuzzyHit {
                entry,
                distance: EXACT_MATCH_DISTANCE,
                exact: true,
            });
        }

        let mut best: Option<(FuzzyHit<'a>, f64)> = None;
        for (entry, name) in table.iter() {
            let distance = substring_distance(&pattern, name);
            if distance > self.match_threshold {
                continue;
            }
            let similarity = normalized_levenshtein(&pattern, name);
            let better = match &best {
                None => true,
                Some((hit, best_similarity)) => {
                    distance < hit.distance || (distance == hit.distance && similarity > *best_similarity)
                }
            };
            if better {
                best = Some((
                    FuzzyHit {
                        entry,
                        distance,
                        exact: false,
                    },
                    similarity,
                ));
            }
        }

        best.map(|(hit, _)| hit)
    }
}

/// 近似子串距离：pattern 与 text 任意子串的最小编辑距离 / pattern 字符数
///
/// 动态规划首行全为 0（匹配可从 text 任意位置开始），结果取末行最小值（可在任意位置结束），
/// 因此与匹配位置无关。空 pattern 返回 0。
pub fn substring_distance(pattern: &str, text: &str) -> f64 {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    if pattern.is_empty() {
        return EXACT_MATCH_DISTANCE;
    }

    let mut prev = vec![0usize; text.len() + 1];
    let mut curr = vec![0usize; text.len() + 1];
    for (i, pc) in pattern.iter().enumerate() {
        curr[0] = i + 1;
        for (j, tc) in text.iter().enumerate() {
            let substitution = prev[j] + usize::from(pc != tc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let edits = prev.iter().copied().min().unwrap_or(pattern.len());
    edits as f64 / pattern.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::error::HwCompatError;
    use crate::rule::InMemoryBenchmarkStore;

    struct UnreachableStore;

    #[async_trait]
    impl BenchmarkRepository for UnreachableStore {
        async fn load_table(&self, kind: ComponentKind) -> HwResult<Vec<BenchmarkEntry>> {
            Err(HwCompatError::BenchmarkLoadError(format!("{} 基准表不可用", kind)))
        }
    }

    fn cpu_table() -> BenchmarkTable {
        BenchmarkTable::new(
            ComponentKind::Cpu,
            vec![
                BenchmarkEntry::new("Intel Core i5-8400 @ 2.80GHz", 9200.0),
                BenchmarkEntry::new("Intel Core i5-8400T @ 1.70GHz", 7600.0),
                BenchmarkEntry::new("Intel Core i7-9700K @ 3.60GHz", 14500.0),
                BenchmarkEntry::new("AMD Ryzen 5 2600", 13200.0),
                BenchmarkEntry::new("core i3-10100", 8800.0),
            ],
        )
    }

    #[test]
    fn test_substring_distance() {
        assert_eq!(substring_distance("rtx 2070", "geforce rtx 2070 super"), 0.0);
        assert_eq!(substring_distance("rtx 2060", "geforce rtx 2070"), 0.125);
        assert_eq!(substring_distance("abcd", ""), 1.0);
        assert_eq!(substring_distance("", "anything"), 0.0);
    }

    #[test]
    fn test_best_match_prefers_tighter_name() {
        let table = cpu_table();
        let hit = FuzzyMatcher::default().best_match(&table, "core i5-8400").unwrap();
        assert_eq!(hit.entry.score, 9200.0);
        assert_eq!(hit.distance, 0.0);
        assert!(!hit.exact);
    }

    #[test]
    fn test_best_match_exact_name() {
        let table = cpu_table();
        let hit = FuzzyMatcher::default().best_match(&table, "Core i3-10100").unwrap();
        assert!(hit.exact);
        assert_eq!(hit.entry.score, 8800.0);
    }

    #[test]
    fn test_best_match_threshold_and_min_length() {
        let table = cpu_table();
        let matcher = FuzzyMatcher::default();
        assert!(matcher.best_match(&table, "pentium g4560").is_none());
        assert!(matcher.best_match(&table, "i5").is_none());
    }

    #[test]
    fn test_score_modes() {
        let table = cpu_table();
        let matcher = FuzzyMatcher::default();
        let raw = Some("Intel Core i5-8400 или AMD Ryzen 5 2600");
        assert_eq!(matcher.score_from_candidates(&table, raw, AggregationMode::Min), Some(9200.0));
        assert_eq!(matcher.score_from_candidates(&table, raw, AggregationMode::Best), Some(13200.0));
    }

    #[test]
    fn test_unmatched_candidates_dropped() {
        let table = cpu_table();
        let matcher = FuzzyMatcher::default();
        let raw = Some("Intel Pentium G4560 / AMD Ryzen 5 2600");
        assert_eq!(matcher.score_from_candidates(&table, raw, AggregationMode::Min), Some(13200.0));
        assert_eq!(
            matcher.score_from_candidates(&table, Some("Pentium G4560"), AggregationMode::Best),
            None
        );
    }

    #[test]
    fn test_empty_input_is_none() {
        let table = cpu_table();
        let matcher = FuzzyMatcher::default();
        assert_eq!(matcher.score_from_candidates(&table, None, AggregationMode::Best), None);
        assert_eq!(matcher.score_from_candidates(&table, Some("  "), AggregationMode::Best), None);
        assert_eq!(matcher.score_from_candidates(&table, Some("DirectX 11"), AggregationMode::Best), None);
    }

    #[tokio::test]
    async fn test_score_from_repository() {
        let store = InMemoryBenchmarkStore::new().with_pairs(ComponentKind::Gpu, &[("GeForce GTX 1060", 10000.0)]);
        let matcher = FuzzyMatcher::default();
        let score = matcher
            .score_from_repository(&store, ComponentKind::Gpu, Some("NVIDIA GeForce GTX 1060"), AggregationMode::Best)
            .await
            .unwrap();
        assert_eq!(score, Some(10000.0));
        let none = matcher
            .score_from_repository(&store, ComponentKind::Gpu, None, AggregationMode::Best)
            .await
            .unwrap();
        assert_eq!(none, None);
    }

    #[tokio::test]
    async fn test_empty_input_skips_repository() {
        let matcher = FuzzyMatcher::default();
        for raw in [None, Some("  ")] {
            let score = matcher
                .score_from_repository(&UnreachableStore, ComponentKind::Cpu, raw, AggregationMode::Best)
                .await
                .unwrap();
            assert_eq!(score, None);
        }

        let err = matcher
            .score_from_repository(&UnreachableStore, ComponentKind::Cpu, Some("Intel Core i5-8400"), AggregationMode::Best)
            .await
            .unwrap_err();
        assert!(matches!(err, HwCompatError::BenchmarkLoadError(_)));
    }
}
