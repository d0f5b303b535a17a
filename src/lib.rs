//! hwcompat - 游戏配置需求与用户硬件的兼容性检查引擎

// 导出全局错误类型
pub use self::error::{HwCompatError, HwResult};

// 导出配置模块
pub use self::config::{BenchmarkSource, ConfigManager, CustomConfigBuilder, MatchConfig};

// 导出基准数据模块核心接口
pub use self::rule::{
    BenchmarkCacheManager, BenchmarkEntry, BenchmarkLibrary, BenchmarkLoader, BenchmarkRepository,
    BenchmarkTable, ComparisonResult, ComponentKind, ConfiguredBenchmarkStore, GameRequirements,
    InMemoryBenchmarkStore, RequirementSpec, UserHardwareProfile, Verdict,
};

// 导出工具模块核心接口
pub use self::utils::{HardwareNormalizer, VersionExtractor};

// 导出提取模块核心接口
pub use self::extractor::{CandidateExtractor, RequirementParser};

// 导出匹配模块核心接口
pub use self::matcher::{AggregationMode, FuzzyHit, FuzzyMatcher};

// 导出检测模块核心接口（含全局单例的简化接口）
pub use self::detector::{
    CompatibilityChecker,
    CompatibilityEvaluator,
    compare,
    is_roughly_greater_or_equal,
    check_compatibility,
    init_global_checker,
    init_global_checker_default,
    init_global_checker_with_repository,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod extractor;
pub mod matcher;
pub mod detector;
