//! pagesmanager 后台用户数据模型
//!
//! - [`model::AdminUserInfo`]：后台用户表 `admin_user_info` 的实体
//! - [`api::AdminUserInfoVO`]：返回给前端的后台用户信息（只含 id、用户名）
//! - [`util::WebResult`]：前端约定的统一响应结构

pub mod api;
pub mod db;
pub mod model;
pub mod util;

pub use api::AdminUserInfoVO;
pub use model::{AdminStatus, AdminUserInfo};
pub use util::config::Config;
pub use util::{ServerError, WebResult};
