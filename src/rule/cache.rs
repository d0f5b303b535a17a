//! 基准库缓存管理
//! 仅处理基准库的本地序列化（MessagePack）和反序列化

use std::path::Path;
use rmp_serde::{Serializer, from_slice};
use serde::Serialize;
use tracing::debug;

use super::model::BenchmarkLibrary;
use crate::error::{HwResult, HwCompatError};

/// 基准库缓存管理器
pub struct BenchmarkCacheManager;

impl BenchmarkCacheManager {
    /// 从本地缓存加载基准库
    pub async fn load_from_cache(cache_path: &Path) -> HwResult<BenchmarkLibrary> {
        let cache_data = tokio::fs::read(cache_path).await?;

        // MessagePack反序列化
        let library: BenchmarkLibrary = from_slice(&cache_data)
            .map_err(|e| HwCompatError::MsgPackError(format!("反序列化失败：{}", e)))?;

        // 空库视为缓存失效，交由调用方重新加载
        if library.cpu.is_empty() && library.gpu.is_empty() {
            return Err(HwCompatError::BenchmarkCacheError(format!(
                "缓存 {} 中没有任何条目",
                cache_path.display()
            )));
        }

        debug!("缓存文件反序列化成功，CPU条目数：{}，GPU条目数：{}", library.cpu.len(), library.gpu.len());

        Ok(library)
    }

    /// 将基准库缓存到本地
    pub async fn save_to_cache(cache_path: &Path, library: &BenchmarkLibrary) -> HwResult<()> {
        let mut cache_data = Vec::new();

        // MessagePack序列化
        library.serialize(&mut Serializer::new(&mut cache_data))
            .map_err(|e| HwCompatError::MsgPackError(format!("序列化失败：{}", e)))?;

        debug!("基准库序列化成功，序列化后数据大小：{} 字节", cache_data.len());

        tokio::fs::write(cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地缓存
    pub async fn clear_cache(cache_path: &Path) -> HwResult<()> {
        if cache_path.exists() {
            tokio::fs::remove_file(cache_path).await?;
        }
        Ok(())
    }
}
