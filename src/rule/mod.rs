//! 基准数据模块：负责数据模型定义、基准表的加载、缓存与仓库接口
pub mod model;
pub mod cache;
pub mod loader;
pub mod store;

// 导出核心接口
pub use self::model::{
    BenchmarkEntry, BenchmarkLibrary, BenchmarkTable, ComparisonResult, ComponentKind,
    GameRequirements, RequirementSpec, UserHardwareProfile, Verdict,
};
pub use self::loader::BenchmarkLoader;
pub use self::cache::BenchmarkCacheManager;
pub use self::store::{BenchmarkRepository, ConfiguredBenchmarkStore, InMemoryBenchmarkStore};
