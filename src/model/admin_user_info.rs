//! 后台用户表实体
//! 表名：admin_user_info，对应管理员账号

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 后台用户表记录
///
/// 字段与 `admin_user_info` 表逐列对应，不做任何校验；
/// 状态值、用户名唯一性等约束由上层服务负责。
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AdminUserInfo {
    pub id: i64,                   // 数据库字段：id，自增主键
    pub username: String,          // 用户名, 数据库字段：username
    pub password: String,          // 密码, 数据库字段：password
    pub status: i32,               // 状态，1：启用，2：禁用, 数据库字段：status
    pub gmt_create: DateTime<Utc>, // 数据库字段：gmt_create
    pub gmt_update: DateTime<Utc>, // 数据库字段：gmt_update
}

impl AdminUserInfo {
    /// 状态的类型化视图，未定义的状态值返回 None（原始值保持不变）
    pub fn admin_status(&self) -> Option<AdminStatus> {
        AdminStatus::try_from(self.status).ok()
    }

    pub fn is_enabled(&self) -> bool {
        self.admin_status() == Some(AdminStatus::Enabled)
    }
}

/// 后台用户状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AdminStatus {
    Enabled = 1,
    Disabled = 2,
}

impl AdminStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// 状态码不在 {1, 2} 中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("未知的后台用户状态: {0}")]
pub struct UnknownAdminStatus(pub i32);

impl TryFrom<i32> for AdminStatus {
    type Error = UnknownAdminStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AdminStatus::Enabled),
            2 => Ok(AdminStatus::Disabled),
            other => Err(UnknownAdminStatus(other)),
        }
    }
}

impl From<AdminStatus> for i32 {
    fn from(status: AdminStatus) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> AdminUserInfo {
        let created = Utc.with_ymd_and_hms(2019, 3, 1, 8, 0, 0).unwrap();
        AdminUserInfo {
            id: 42,
            username: "alice".to_string(),
            password: "$2a$10$hash".to_string(),
            status: 1,
            gmt_create: created,
            gmt_update: created,
        }
    }

    #[test]
    fn fields_read_back_what_was_written() {
        let mut user = sample();
        let updated = Utc.with_ymd_and_hms(2020, 6, 15, 12, 30, 0).unwrap();

        user.id = 7;
        user.username = "root".to_string();
        user.password = "another-hash".to_string();
        user.status = 2;
        user.gmt_update = updated;

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "root");
        assert_eq!(user.password, "another-hash");
        assert_eq!(user.status, 2);
        assert_eq!(
            user.gmt_create,
            Utc.with_ymd_and_hms(2019, 3, 1, 8, 0, 0).unwrap()
        );
        assert_eq!(user.gmt_update, updated);
        assert!(user.gmt_create <= user.gmt_update);
    }

    #[test]
    fn status_view_follows_raw_code() {
        let mut user = sample();
        assert_eq!(user.admin_status(), Some(AdminStatus::Enabled));
        assert!(user.is_enabled());

        user.status = AdminStatus::Disabled.code();
        assert_eq!(user.admin_status(), Some(AdminStatus::Disabled));
        assert!(!user.is_enabled());
    }

    #[test]
    fn undefined_status_is_kept_as_is() {
        let mut user = sample();
        user.status = 9;

        assert_eq!(user.status, 9);
        assert_eq!(user.admin_status(), None);
        assert!(!user.is_enabled());
        assert_eq!(AdminStatus::try_from(0), Err(UnknownAdminStatus(0)));
        assert_eq!(
            UnknownAdminStatus(9).to_string(),
            "未知的后台用户状态: 9"
        );
    }

    #[test]
    fn status_serializes_as_code() {
        assert_eq!(serde_json::to_string(&AdminStatus::Disabled).unwrap(), "2");
        let parsed: AdminStatus = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, AdminStatus::Enabled);
        assert!(serde_json::from_str::<AdminStatus>("3").is_err());
    }
}
