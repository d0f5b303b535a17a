//! 提取模块：需求行解析与候选设备名提取
pub mod candidate_extractor;
pub mod requirement_parser;

pub use self::candidate_extractor::CandidateExtractor;
pub use self::requirement_parser::RequirementParser;
