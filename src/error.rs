//! 全局错误类型定义
//! 解析与匹配过程不产生错误（降级为 unknown/unspecified 判定），仅基准表读取与检查器初始化会报错

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum HwCompatError {
    // 基准表相关错误
    #[error("基准表加载失败：{0}")]
    BenchmarkLoadError(String),
    #[error("基准库缓存失败：{0}")]
    BenchmarkCacheError(String),
    #[error("基准表解析失败：{0}")]
    BenchmarkParseError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 检查器相关错误
    #[error("兼容性检查器未初始化：{0}")]
    CheckerNotInitialized(String),
    #[error("兼容性检查器初始化失败：{0}")]
    CheckerInitError(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    NetworkError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type HwResult<T> = Result<T, HwCompatError>;
