//! 检测模块：兼容性评估与检查核心逻辑
pub mod evaluator;
pub mod checker;
pub mod global;

// 导出核心接口
pub use self::evaluator::{CompatibilityEvaluator, compare, is_roughly_greater_or_equal, DEFAULT_TOLERANCE};
pub use self::checker::CompatibilityChecker;
pub use self::global::{
    check_compatibility,
    init_global_checker,
    init_global_checker_default,
    init_global_checker_with_repository,
};
