use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use pagesmanager_server::db::{ConnectionManager, SchemaManager};
use pagesmanager_server::util::config::{Config, ConfigLoader};
use pagesmanager_server::util::log::log_init_with_config;

/// 准备SQLite数据库文件与后台用户表
///
/// 用法：`init-db [config.yaml]`
#[tokio::main]
async fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.yaml"));

    let (config, generated) = load_or_generate_config(&config_path)?;

    let _guard =
        log_init_with_config("pagesmanager", &config.logging).context("初始化日志系统失败")?;

    if generated {
        warn!(
            event = "config.template.generated",
            path = %config_path.display(),
            "配置文件不存在，已生成模板"
        );
    }

    let pool = ConnectionManager::create_pool_with_config(&config.database)
        .await
        .context("连接数据库失败")?;
    SchemaManager::create_all_tables(&pool)
        .await
        .context("创建数据表失败")?;
    ConnectionManager::validate_pool(&pool).await?;

    info!(
        event = "db.init.complete",
        path = %config.database.path,
        "数据库初始化完成"
    );
    pool.close().await;
    Ok(())
}

/// 配置文件不存在时先写入模板，返回值第二项表示是否新生成
fn load_or_generate_config(config_path: &Path) -> Result<(Config, bool)> {
    let generated = !config_path.exists();
    if generated {
        Config::default()
            .write_yaml_to_path(config_path)
            .with_context(|| format!("生成配置模板失败: {}", config_path.display()))?;
    }

    let config = ConfigLoader::load_with_env_overrides(config_path)
        .with_context(|| format!("加载配置文件失败: {}", config_path.display()))?;
    Ok((config, generated))
}
