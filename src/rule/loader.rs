//! 基准表加载管理器
//! 负责从本地缓存、本地JSON文件或远程地址加载CPU/GPU基准表

use std::time::Duration;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::cache::BenchmarkCacheManager;
use super::model::{BenchmarkEntry, BenchmarkLibrary};
use crate::config::{BenchmarkSource, MatchConfig};
use crate::error::{HwResult, HwCompatError};

/// 基准表加载管理器
pub struct BenchmarkLoader;

impl BenchmarkLoader {
    /// 加载完整基准库（优先本地缓存，缓存失效则按配置来源加载）
    pub async fn load(config: &MatchConfig) -> HwResult<BenchmarkLibrary> {
        // 1. 优先加载本地缓存
        if let Some(cache_path) = &config.benchmark_cache_path {
            match BenchmarkCacheManager::load_from_cache(cache_path).await {
                Ok(library) => {
                    debug!("从本地缓存加载基准库成功");
                    return Ok(library);
                }
                Err(e) => warn!("本地缓存不存在或损坏（{}），将从数据源加载基准库", e),
            }
        }

        // 2. 并发加载两张基准表
        let (cpu, gpu) = tokio::try_join!(
            Self::load_table(&config.cpu_source, config.http_timeout),
            Self::load_table(&config.gpu_source, config.http_timeout),
        )?;
        let library = BenchmarkLibrary { cpu, gpu };

        // 3. 缓存到本地
        if let Some(cache_path) = &config.benchmark_cache_path {
            if let Err(e) = BenchmarkCacheManager::save_to_cache(cache_path, &library).await {
                warn!("基准库缓存到本地失败：{}", e);
            } else {
                debug!("基准库已缓存到本地");
            }
        }

        Ok(library)
    }

    /// 从单个来源加载一张基准表
    pub async fn load_table(source: &BenchmarkSource, http_timeout: u64) -> HwResult<Vec<BenchmarkEntry>> {
        let raw = match source {
            BenchmarkSource::LocalJson(path) => {
                debug!("开始读取本地基准表：{}", path.display());
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    HwCompatError::BenchmarkLoadError(format!("{}: {}", path.display(), e))
                })?;
                Self::parse_json(&bytes)?
            }
            BenchmarkSource::Remote(raw_url) => Self::fetch_remote(raw_url, http_timeout).await?,
        };

        Ok(Self::sanitize(raw))
    }

    /// 拉取远程基准表
    pub async fn fetch_remote(raw_url: &str, http_timeout: u64) -> HwResult<Vec<BenchmarkEntry>> {
        let url = Url::parse(raw_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(http_timeout))
            .build()?;

        debug!("开始拉取远程基准表：{}", url);
        let response = client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(HwCompatError::BenchmarkLoadError(format!(
                "{} 返回状态码 {}",
                url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        Self::parse_json(&bytes)
    }

    /// 解析JSON基准表（条目数组）
    pub fn parse_json(bytes: &[u8]) -> HwResult<Vec<BenchmarkEntry>> {
        serde_json::from_slice::<Vec<BenchmarkEntry>>(bytes)
            .map_err(|e| HwCompatError::BenchmarkParseError(e.to_string()))
    }

    /// 丢弃空名称或非有限分数的条目
    fn sanitize(entries: Vec<BenchmarkEntry>) -> Vec<BenchmarkEntry> {
        let total = entries.len();
        let kept: Vec<BenchmarkEntry> = entries
            .into_iter()
            .filter(|e| !e.name.trim().is_empty() && e.score.is_finite())
            .collect();

        if kept.len() < total {
            warn!("基准表中有 {} 条无效条目已丢弃", total - kept.len());
        }
        debug!("基准表加载完成，有效条目数：{}", kept.len());
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 本地单次应答的 HTTP 服务，返回请求地址
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/gpu.json", addr)
    }

    #[test]
    fn test_parse_json_drops_invalid_entries() {
        let raw = br#"[
            {"name": "GeForce GTX 1060", "score": 10000},
            {"gpu_name": "Radeon RX 580", "gpu_mark": 8800},
            {"name": "   ", "score": 1}
        ]"#;
        let entries = BenchmarkLoader::sanitize(BenchmarkLoader::parse_json(raw).unwrap());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "Radeon RX 580");
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        let err = BenchmarkLoader::parse_json(br#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, HwCompatError::BenchmarkParseError(_)));
    }

    #[tokio::test]
    async fn test_load_from_local_files_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cpu_path = dir.path().join("cpu.json");
        let gpu_path = dir.path().join("gpu.json");
        let cache_path = dir.path().join("cache.mp");
        tokio::fs::write(&cpu_path, r#"[{"cpu_name":"Intel Core i7-9700K @ 3.60GHz","cpu_mark":14500}]"#)
            .await
            .unwrap();
        tokio::fs::write(&gpu_path, r#"[{"name":"GeForce RTX 2070","score":16000}]"#)
            .await
            .unwrap();

        let config = ConfigManager::custom()
            .cpu_source(BenchmarkSource::LocalJson(cpu_path.clone()))
            .gpu_source(BenchmarkSource::LocalJson(gpu_path.clone()))
            .benchmark_cache_path(cache_path.clone())
            .build();

        let library = BenchmarkLoader::load(&config).await.unwrap();
        assert_eq!(library.cpu.len(), 1);
        assert_eq!(library.gpu[0].score, 16000.0);
        assert!(cache_path.exists());

        // 删除源文件后仍可从缓存加载
        tokio::fs::remove_file(&cpu_path).await.unwrap();
        tokio::fs::remove_file(&gpu_path).await.unwrap();
        let cached = BenchmarkLoader::load(&config).await.unwrap();
        assert_eq!(cached, library);
    }

    #[tokio::test]
    async fn test_missing_local_file_is_load_error() {
        let source = BenchmarkSource::LocalJson("definitely/missing/cpu.json".into());
        let err = BenchmarkLoader::load_table(&source, 5).await.unwrap_err();
        assert!(matches!(err, HwCompatError::BenchmarkLoadError(_)));
    }

    #[tokio::test]
    async fn test_invalid_remote_url() {
        let err = BenchmarkLoader::fetch_remote("not a url", 5).await.unwrap_err();
        assert!(matches!(err, HwCompatError::UrlError(_)));
    }

    #[tokio::test]
    async fn test_remote_error_status_is_load_error() {
        let url = serve_once("HTTP/1.1 404 Not Found", "not found").await;
        let err = BenchmarkLoader::fetch_remote(&url, 5).await.unwrap_err();
        assert!(matches!(err, HwCompatError::BenchmarkLoadError(_)));
    }

    #[tokio::test]
    async fn test_remote_table_is_parsed_and_sanitized() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"gpu_name":"GeForce GTX 1060","gpu_mark":10000},{"name":"","score":5}]"#,
        )
        .await;
        let entries = BenchmarkLoader::load_table(&BenchmarkSource::Remote(url), 5).await.unwrap();
        assert_eq!(entries, vec![BenchmarkEntry::new("GeForce GTX 1060", 10000.0)]);
    }
}
