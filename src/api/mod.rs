//! 接口层数据结构
//! 前端统一以 `{"data": encodeURIComponent(JSON)}` 提交参数，响应见 [`crate::util::WebResult`]

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod result;

pub use result::AdminUserInfoVO;

/// 请求参数解析失败
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("参数解码失败: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("参数格式错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 前端提交的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiParam {
    pub data: String,
}

impl ApiParam {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// 按前端的方式编码：先转 JSON 再做 URL 编码
    pub fn encode<T: Serialize>(param: &T) -> Result<Self, ParamError> {
        let json = serde_json::to_string(param)?;
        Ok(Self::new(urlencoding::encode(&json).into_owned()))
    }

    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParamError> {
        let decoded = urlencoding::decode(&self.data)?;
        let param = serde_json::from_str(&decoded)?;
        Ok(param)
    }
}

/// 接口路径统一为 `/xxx/` 形式
pub fn normalize_uri(uri: &str) -> String {
    let mut normalized = String::with_capacity(uri.len() + 2);
    if !uri.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(uri);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn parses_browser_encoded_payload() {
        // encodeURIComponent(JSON.stringify({username: "管理员", page: 1}))
        let param = ApiParam::new(
            "%7B%22username%22%3A%22%E7%AE%A1%E7%90%86%E5%91%98%22%2C%22page%22%3A1%7D",
        );

        let value: Value = param.parse().unwrap();
        assert_eq!(value, json!({"username": "管理员", "page": 1}));
    }

    #[test]
    fn encode_matches_parse() {
        let vo = AdminUserInfoVO {
            id: 5,
            username: "a b+c".to_string(),
        };

        let param = ApiParam::encode(&vo).unwrap();
        assert!(!param.data.contains(' '));
        assert!(!param.data.contains('{'));
        assert_eq!(param.parse::<AdminUserInfoVO>().unwrap(), vo);
    }

    #[test]
    fn rejects_invalid_payloads() {
        assert!(matches!(
            ApiParam::new("%FF%FE").parse::<Value>(),
            Err(ParamError::Decode(_))
        ));
        assert!(matches!(
            ApiParam::new("not%20json").parse::<Value>(),
            Err(ParamError::Json(_))
        ));
    }

    #[test]
    fn normalizes_uri_slashes() {
        assert_eq!(normalize_uri("admin.user.info"), "/admin.user.info/");
        assert_eq!(normalize_uri("/goods.get/1.0"), "/goods.get/1.0/");
        assert_eq!(normalize_uri("/login/"), "/login/");
        assert_eq!(normalize_uri(""), "/");
    }
}
