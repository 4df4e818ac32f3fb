//! SQLite连接管理

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::util::config::DatabaseConfig;

/// SQLite连接管理器
pub struct ConnectionManager;

impl ConnectionManager {
    /// 创建新的SQLite连接池，数据库文件不存在时自动创建
    pub async fn create_pool(db_path: &str) -> Result<SqlitePool> {
        Self::create_pool_with_size(db_path, DatabaseConfig::default().max_connections).await
    }

    pub async fn create_pool_with_config(config: &DatabaseConfig) -> Result<SqlitePool> {
        Self::create_pool_with_size(&config.path, config.max_connections).await
    }

    async fn create_pool_with_size(db_path: &str, max_connections: u32) -> Result<SqlitePool> {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        info!(
            event = "db.connect.success",
            path = %db_path,
            max_connections,
            "已连接SQLite数据库"
        );
        Ok(pool)
    }

    /// 验证连接池状态
    pub async fn validate_pool(pool: &SqlitePool) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(pool).await?;
        Ok(())
    }
}
