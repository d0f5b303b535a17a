//! 基准表仓库
//! 以只读接口注入基准数据，检查器不直接持有数据源连接

use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use super::loader::BenchmarkLoader;
use super::model::{BenchmarkEntry, BenchmarkLibrary, ComponentKind};
use crate::config::MatchConfig;
use crate::error::{HwCompatError, HwResult};

/// 只读基准表仓库
#[async_trait]
pub trait BenchmarkRepository: Send + Sync {
    /// 读取某一类别的完整基准表（读取失败是唯一会向上传播的错误）
    async fn load_table(&self, kind: ComponentKind) -> HwResult<Vec<BenchmarkEntry>>;
}

/// 内存基准表（测试夹具 / 嵌入式数据）
#[derive(Debug, Clone, Default)]
pub struct InMemoryBenchmarkStore {
    tables: HashMap<ComponentKind, Vec<BenchmarkEntry>>,
}

impl InMemoryBenchmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置某一类别的基准表（覆盖已有数据）
    pub fn with_table(mut self, kind: ComponentKind, entries: Vec<BenchmarkEntry>) -> Self {
        self.tables.insert(kind, entries);
        self
    }

    /// 以 (名称, 分数) 列表设置基准表
    pub fn with_pairs(self, kind: ComponentKind, pairs: &[(&str, f64)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(name, score)| BenchmarkEntry::new(*name, *score))
            .collect();
        self.with_table(kind, entries)
    }
}

impl From<BenchmarkLibrary> for InMemoryBenchmarkStore {
    fn from(library: BenchmarkLibrary) -> Self {
        Self::new()
            .with_table(ComponentKind::Cpu, library.cpu)
            .with_table(ComponentKind::Gpu, library.gpu)
    }
}

#[async_trait]
impl BenchmarkRepository for InMemoryBenchmarkStore {
    async fn load_table(&self, kind: ComponentKind) -> HwResult<Vec<BenchmarkEntry>> {
        Ok(self.tables.get(&kind).cloned().unwrap_or_default())
    }
}

/// 按配置来源加载的基准表仓库，首次访问时加载一次
#[derive(Debug)]
pub struct ConfiguredBenchmarkStore {
    config: MatchConfig,
    library: OnceCell<BenchmarkLibrary>,
}

impl ConfiguredBenchmarkStore {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            library: OnceCell::new(),
        }
    }

    async fn library(&self) -> HwResult<&BenchmarkLibrary> {
        self.library
            .get_or_try_init(|| async {
                let library = BenchmarkLoader::load(&self.config).await?;
                debug!("基准库初始化完成，CPU：{}，GPU：{}", library.cpu.len(), library.gpu.len());
                Ok::<_, HwCompatError>(library)
            })
            .await
    }
}

#[async_trait]
impl BenchmarkRepository for ConfiguredBenchmarkStore {
    async fn load_table(&self, kind: ComponentKind) -> HwResult<Vec<BenchmarkEntry>> {
        Ok(self.library().await?.table(kind).to_vec())
    }
}
