pub mod admin_user_info;

pub use admin_user_info::{AdminStatus, AdminUserInfo, UnknownAdminStatus};
