//! 匹配模块：候选设备名与基准表的模糊匹配
pub mod fuzzy;

pub use self::fuzzy::{AggregationMode, FuzzyHit, FuzzyMatcher, EXACT_MATCH_DISTANCE, substring_distance};
