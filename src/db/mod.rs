// 数据库映射层：连接池与后台用户表结构

pub mod connection;
pub mod schema;

pub use connection::ConnectionManager;
pub use schema::{SchemaManager, ADMIN_USER_INFO_COLUMNS, ADMIN_USER_INFO_TABLE};
