//! 后台用户表结构定义
//! 表名：admin_user_info，备注：后台用户表

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

pub const ADMIN_USER_INFO_TABLE: &str = "admin_user_info";

pub const COLUMN_ID: &str = "id";
pub const COLUMN_USERNAME: &str = "username";
pub const COLUMN_PASSWORD: &str = "password";
pub const COLUMN_STATUS: &str = "status";
pub const COLUMN_GMT_CREATE: &str = "gmt_create";
pub const COLUMN_GMT_UPDATE: &str = "gmt_update";

/// 与 [`crate::model::AdminUserInfo`] 字段顺序一致
pub const ADMIN_USER_INFO_COLUMNS: [&str; 6] = [
    COLUMN_ID,
    COLUMN_USERNAME,
    COLUMN_PASSWORD,
    COLUMN_STATUS,
    COLUMN_GMT_CREATE,
    COLUMN_GMT_UPDATE,
];

pub const ADMIN_USER_INFO_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS admin_user_info (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        password TEXT NOT NULL,
        status INTEGER NOT NULL DEFAULT 1,
        gmt_create TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        gmt_update TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// `SELECT id, username, ... FROM admin_user_info`
pub fn select_admin_user_info() -> String {
    format!(
        "SELECT {} FROM {}",
        ADMIN_USER_INFO_COLUMNS.join(", "),
        ADMIN_USER_INFO_TABLE
    )
}

/// 数据库表结构管理器
pub struct SchemaManager;

impl SchemaManager {
    pub async fn create_all_tables(pool: &SqlitePool) -> Result<()> {
        Self::create_admin_user_info_table(pool).await?;
        Ok(())
    }

    pub async fn create_admin_user_info_table(pool: &SqlitePool) -> Result<()> {
        sqlx::query(ADMIN_USER_INFO_DDL).execute(pool).await?;
        info!(
            event = "db.schema.ready",
            table = ADMIN_USER_INFO_TABLE,
            "后台用户表已就绪"
        );
        Ok(())
    }
}
