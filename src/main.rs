//! hwcompat 命令行：读取用户硬件档案与游戏需求，输出兼容性检查结果

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use hwcompat::{BenchmarkSource, CompatibilityChecker, ConfigManager, GameRequirements, UserHardwareProfile};

#[derive(Debug, Parser)]
#[command(name = "hwcompat", version, about = "Check a hardware profile against a game's system requirements")]
struct Cli {
    /// 用户硬件档案 JSON（cpu_name / gpu_name / total_ram_gb / directx_version / windows_version）
    #[arg(long)]
    profile: PathBuf,

    /// 游戏需求 JSON（name / min_sys / rec_sys）
    #[arg(long)]
    game: PathBuf,

    /// CPU 基准表（本地路径或 http(s) 地址）
    #[arg(long, default_value = "benchmarks/cpu.json")]
    cpu_table: String,

    /// GPU 基准表（本地路径或 http(s) 地址）
    #[arg(long, default_value = "benchmarks/gpu.json")]
    gpu_table: String,

    /// 基准库 MessagePack 缓存路径
    #[arg(long)]
    cache: Option<PathBuf>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read(path).with_context(|| format!("读取文件失败：{}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("解析JSON失败：{}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let profile: UserHardwareProfile = read_json(&cli.profile)?;
    let game: GameRequirements = read_json(&cli.game)?;

    let mut builder = ConfigManager::custom()
        .cpu_source(BenchmarkSource::from_location(&cli.cpu_table))
        .gpu_source(BenchmarkSource::from_location(&cli.gpu_table))
        .verbose(cli.verbose);
    if let Some(cache) = cli.cache {
        builder = builder.benchmark_cache_path(cache);
    }

    let checker = CompatibilityChecker::from_config(builder.build());
    let result = checker
        .check_game(&profile, &game)
        .await
        .context("兼容性检查失败")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if !game.name.is_empty() {
            println!("{}", game.name);
        }
        println!("{}", result);
    }

    Ok(())
}
