//! 全局检查器单例管理
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::warn;

use super::checker::CompatibilityChecker;
use crate::config::{ConfigManager, MatchConfig};
use crate::error::{HwCompatError, HwResult};
use crate::rule::{BenchmarkRepository, ComparisonResult, UserHardwareProfile};

/// 全局检查器实例
static GLOBAL_CHECKER: Lazy<Arc<OnceCell<CompatibilityChecker>>> = Lazy::new(|| {
    Arc::new(OnceCell::new())
});

/// 初始化全局检查器（默认配置）
pub fn init_global_checker_default() -> HwResult<()> {
    init_global_checker(ConfigManager::get_default())
}

/// 按配置中的数据来源初始化全局检查器
pub fn init_global_checker(config: MatchConfig) -> HwResult<()> {
    install(CompatibilityChecker::from_config(config))
}

/// 使用注入的基准表仓库初始化全局检查器
pub fn init_global_checker_with_repository(
    repository: Arc<dyn BenchmarkRepository>,
    config: MatchConfig,
) -> HwResult<()> {
    install(CompatibilityChecker::new(repository, config))
}

fn install(checker: CompatibilityChecker) -> HwResult<()> {
    if GLOBAL_CHECKER.get().is_some() {
        warn!("全局检查器已初始化，本次传入的配置与基准表仓库被忽略");
        return Ok(());
    }

    GLOBAL_CHECKER.set(checker).map_err(|e| {
        HwCompatError::CheckerInitError(format!("全局检查器重复设置：{}", e))
    })
}

/// 获取全局检查器
pub(crate) fn get_global_checker() -> HwResult<&'static CompatibilityChecker> {
    GLOBAL_CHECKER.get().ok_or_else(|| {
        HwCompatError::CheckerNotInitialized("请先调用 init_global_checker".to_string())
    })
}

/// 使用全局检查器执行兼容性检查
pub async fn check_compatibility<S: AsRef<str>>(
    profile: &UserHardwareProfile,
    min_sys: &[S],
    rec_sys: &[S],
) -> HwResult<ComparisonResult> {
    let checker = get_global_checker()?;
    checker.check_compatibility(profile, min_sys, rec_sys).await
}
