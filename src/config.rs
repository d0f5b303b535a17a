//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// 基准表数据来源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BenchmarkSource {
    /// 本地JSON文件
    LocalJson(PathBuf),
    /// 远程JSON地址
    Remote(String),
}

impl BenchmarkSource {
    /// 按字面值推断来源类型：http(s) 前缀视为远程地址，其余视为本地路径
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            BenchmarkSource::Remote(location.to_string())
        } else {
            BenchmarkSource::LocalJson(PathBuf::from(location))
        }
    }
}

/// 全局配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    // CPU 基准表来源
    pub cpu_source: BenchmarkSource,
    // GPU 基准表来源
    pub gpu_source: BenchmarkSource,
    // 基准表 MessagePack 快照缓存路径（None 表示不缓存）
    pub benchmark_cache_path: Option<PathBuf>,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 模糊匹配阈值（距离空间，越小越严格）
    pub match_threshold: f64,
    // 参与模糊匹配的最短字符数
    pub min_match_char_length: usize,
    // 候选名长度不超过该值即被丢弃
    pub min_candidate_length: usize,
    // 匹配距离超过该值时记为低置信度
    pub low_confidence_distance: f64,
    // "近似大于等于"的容差比例
    pub tolerance: f64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cpu_source: BenchmarkSource::LocalJson(PathBuf::from("benchmarks/cpu.json")),
            gpu_source: BenchmarkSource::LocalJson(PathBuf::from("benchmarks/gpu.json")),
            benchmark_cache_path: None,
            http_timeout: 30,
            match_threshold: 0.4,
            min_match_char_length: 4,
            min_candidate_length: 6,
            low_confidence_distance: 0.25,
            tolerance: 0.03,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> MatchConfig {
        MatchConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: MatchConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn cpu_source(mut self, source: BenchmarkSource) -> Self {
        self.config.cpu_source = source;
        self
    }

    pub fn gpu_source(mut self, source: BenchmarkSource) -> Self {
        self.config.gpu_source = source;
        self
    }

    pub fn benchmark_cache_path(mut self, path: PathBuf) -> Self {
        self.config.benchmark_cache_path = Some(path);
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn match_threshold(mut self, threshold: f64) -> Self {
        self.config.match_threshold = threshold;
        self
    }

    pub fn min_match_char_length(mut self, len: usize) -> Self {
        self.config.min_match_char_length = len;
        self
    }

    pub fn min_candidate_length(mut self, len: usize) -> Self {
        self.config.min_candidate_length = len;
        self
    }

    pub fn low_confidence_distance(mut self, distance: f64) -> Self {
        self.config.low_confidence_distance = distance;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> MatchConfig {
        self.config
    }
}
