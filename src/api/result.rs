//! 接口返回对象

use serde::{Deserialize, Serialize};

use crate::model::AdminUserInfo;

/// 当前后台用户信息，只暴露 id 和用户名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserInfoVO {
    /// 数据库字段：id
    pub id: i64,
    /// 用户名, 数据库字段：username
    pub username: String,
}

impl From<&AdminUserInfo> for AdminUserInfoVO {
    fn from(user: &AdminUserInfo) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

impl From<AdminUserInfo> for AdminUserInfoVO {
    fn from(user: AdminUserInfo) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
