//! 兼容性检查器：整合需求解析、基准表读取与评估，输出检查结果
use std::sync::Arc;

use tracing::debug;

use super::evaluator::CompatibilityEvaluator;
use crate::config::MatchConfig;
use crate::error::HwResult;
use crate::extractor::RequirementParser;
use crate::rule::{
    BenchmarkRepository, BenchmarkTable, ComparisonResult, ComponentKind, ConfiguredBenchmarkStore,
    GameRequirements, UserHardwareProfile,
};

/// 兼容性检查器
#[derive(Clone)]
pub struct CompatibilityChecker {
    repository: Arc<dyn BenchmarkRepository>,
    evaluator: CompatibilityEvaluator,
    config: MatchConfig,
}

impl CompatibilityChecker {
    /// 使用注入的基准表仓库创建检查器
    pub fn new(repository: Arc<dyn BenchmarkRepository>, config: MatchConfig) -> Self {
        Self {
            repository,
            evaluator: CompatibilityEvaluator::new(&config),
            config,
        }
    }

    /// 按配置中的数据来源创建检查器（首次检查时加载基准表）
    pub fn from_config(config: MatchConfig) -> Self {
        let repository = Arc::new(ConfiguredBenchmarkStore::new(config.clone()));
        Self::new(repository, config)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &CompatibilityEvaluator {
        &self.evaluator
    }

    /// 核心检查接口（用户档案 + 最低/推荐需求行）
    ///
    /// 仅基准表读取失败会返回错误，其余缺失/无法匹配的情况降级为 unknown/unspecified。
    pub async fn check_compatibility<S: AsRef<str>>(
        &self,
        profile: &UserHardwareProfile,
        min_sys: &[S],
        rec_sys: &[S],
    ) -> HwResult<ComparisonResult> {
        // 1. 并发读取两张基准表
        let (cpu_entries, gpu_entries) = tokio::try_join!(
            self.repository.load_table(ComponentKind::Cpu),
            self.repository.load_table(ComponentKind::Gpu),
        )?;
        let cpu_table = BenchmarkTable::new(ComponentKind::Cpu, cpu_entries);
        let gpu_table = BenchmarkTable::new(ComponentKind::Gpu, gpu_entries);
        debug!("基准表读取完成，CPU：{}，GPU：{}", cpu_table.len(), gpu_table.len());

        // 2. 解析需求并应用档位回填
        let (min, rec) = RequirementParser::parse_tiers(min_sys, rec_sys);

        // 3. 评估
        Ok(self.evaluator.evaluate(profile, &min, &rec, &cpu_table, &gpu_table))
    }

    /// 以游戏记录为输入的检查接口
    pub async fn check_game(
        &self,
        profile: &UserHardwareProfile,
        game: &GameRequirements,
    ) -> HwResult<ComparisonResult> {
        debug!("开始检查游戏：{}", game.name);
        self.check_compatibility(profile, game.min_sys.as_slice(), game.rec_sys.as_slice()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::error::HwCompatError;
    use crate::rule::{BenchmarkEntry, InMemoryBenchmarkStore, Verdict};

    struct FailingStore;

    #[async_trait]
    impl BenchmarkRepository for FailingStore {
        async fn load_table(&self, kind: ComponentKind) -> HwResult<Vec<BenchmarkEntry>> {
            Err(HwCompatError::BenchmarkLoadError(format!("{} 基准表不可用", kind)))
        }
    }

    #[tokio::test]
    async fn test_reference_failure_propagates() {
        let checker = CompatibilityChecker::new(Arc::new(FailingStore), MatchConfig::default());
        let err = checker
            .check_compatibility(&UserHardwareProfile::default(), &["DirectX 11"], &["DirectX 12"])
            .await
            .unwrap_err();
        assert!(matches!(err, HwCompatError::BenchmarkLoadError(_)));
    }

    #[tokio::test]
    async fn test_empty_inputs_degrade_to_unknown_and_unspecified() {
        let checker = CompatibilityChecker::new(Arc::new(InMemoryBenchmarkStore::new()), MatchConfig::default());
        let result = checker
            .check_compatibility::<&str>(&UserHardwareProfile::default(), &[], &[])
            .await
            .unwrap();
        assert_eq!(result.cpu, Verdict::Unknown);
        assert_eq!(result.gpu, Verdict::Unknown);
        assert_eq!(result.ram, Verdict::Unknown);
        assert_eq!(result.directx, Verdict::Unspecified);
        assert_eq!(result.windows, Verdict::Unspecified);
    }
}
