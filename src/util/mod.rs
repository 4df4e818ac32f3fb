use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::api::ParamError;

pub mod config;
pub mod log;

/// 接口返回码，与后台前端约定一致（字符串形式）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    /// 业务错误，提示信息直接展示给用户
    Business,
    SystemError,
    NotLogin,
    TokenInvalid,
    TokenExpired,
}

impl ResultCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultCode::Success => "0",
            ResultCode::Business => "-1",
            ResultCode::SystemError => "-9",
            ResultCode::NotLogin => "-100",
            ResultCode::TokenInvalid => "18",
            ResultCode::TokenExpired => "21",
        }
    }
}

/// 统一响应结构：`{"code": "0", "msg": "", "data": ...}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebResult {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

impl WebResult {
    /// 序列化失败时返回系统错误，而不是空数据的成功结果
    pub fn ok(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                code: ResultCode::Success.as_str().to_string(),
                msg: String::new(),
                data,
            },
            Err(err) => {
                tracing::error!(event = "api.serialize_failed", error = %err);
                Self::system_error()
            }
        }
    }

    pub fn ok_empty() -> Self {
        Self::ok(Value::Null)
    }

    pub fn err(err: ServerError) -> Self {
        Self::err_with_code(err.code(), err)
    }

    pub fn err_custom(msg: impl ToString) -> Self {
        Self::err_with_code(ResultCode::Business.as_str(), msg)
    }

    pub fn err_with_code(code: impl Into<String>, msg: impl ToString) -> Self {
        Self {
            code: code.into(),
            msg: msg.to_string(),
            data: Value::Null,
        }
    }

    pub fn system_error() -> Self {
        Self::err(ServerError::System)
    }

    pub fn is_success(&self) -> bool {
        self.code == ResultCode::Success.as_str()
    }

    /// 前端收到这些返回码会清除token并跳转登录页
    pub fn requires_login(&self) -> bool {
        [
            ResultCode::NotLogin,
            ResultCode::TokenInvalid,
            ResultCode::TokenExpired,
        ]
        .iter()
        .any(|code| self.code == code.as_str())
    }
}

impl IntoResponse for WebResult {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// 接口层错误，统一转换为 [`WebResult`]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("系统错误")]
    System,
    #[error("未登录")]
    NotLogin,
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error("{msg}")]
    Custom { code: String, msg: String },
}

impl ServerError {
    /// 成功码 "0" 不能用于错误，替换为业务错误码
    pub fn custom(code: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut code = code.into();
        if code == ResultCode::Success.as_str() {
            code = ResultCode::Business.as_str().to_string();
        }
        ServerError::Custom {
            code,
            msg: msg.into(),
        }
    }

    pub fn code(&self) -> String {
        match self {
            ServerError::System => ResultCode::SystemError.as_str().to_string(),
            ServerError::NotLogin => ResultCode::NotLogin.as_str().to_string(),
            ServerError::Param(_) => ResultCode::Business.as_str().to_string(),
            ServerError::Custom { code, .. } => code.clone(),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        // 内部错误只记录日志，不把细节返回给前端
        tracing::error!(event = "api.internal_error", error = %err);
        ServerError::System
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        WebResult::err(self).into_response()
    }
}

pub trait IntoJson {
    fn into_json(self) -> Json<WebResult>;
}

impl IntoJson for anyhow::Result<WebResult> {
    fn into_json(self) -> Json<WebResult> {
        self.unwrap_or_else(|err| WebResult::err(err.into()))
            .into_json()
    }
}

impl IntoJson for WebResult {
    fn into_json(self) -> Json<WebResult> {
        Json(self)
    }
}
