//! 工具模块：硬件名称归一化与版本号提取
pub mod normalizer;
pub mod version_extractor;

pub use self::normalizer::HardwareNormalizer;
pub use self::version_extractor::VersionExtractor;
