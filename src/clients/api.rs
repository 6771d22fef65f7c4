//! 题库 REST 接口约定
//!
//! | 操作 | 方法 + 路径 | 认证 |
//! |---|---|---|
//! | 题目列表 | GET `/api/questions/` | 携带 cookie |
//! | 题目详情 | GET `/api/questions/{id}/` | 无要求 |
//! | 提交代码 | POST `/api/submit/` | 携带 cookie + `X-CSRFToken` |

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::models::{Problem, ProblemSummary, SubmissionRequest, SubmitAck};

/// 提交时携带 CSRF token 的请求头
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const QUESTIONS_PATH: &str = "/api/questions/";
pub const SUBMIT_PATH: &str = "/api/submit/";

/// 题目详情路径，`id` 不做校验原样拼接
pub fn question_path(id: &str) -> String {
    format!("{}{}/", QUESTIONS_PATH, id)
}

/// 题库服务能力
///
/// 页面与提交流程只依赖这个 trait，具体走 HTTP 还是浏览器由装配层决定
#[async_trait]
pub trait ProblemApi: Send + Sync {
    /// 拉取题目列表
    async fn list_problems(&self) -> AppResult<Vec<ProblemSummary>>;

    /// 按标识拉取题目详情
    async fn get_problem(&self, id: &str) -> AppResult<Problem>;

    /// 发送一次提交，`csrf_token` 放入 [`CSRF_HEADER`]
    async fn submit(&self, request: &SubmissionRequest, csrf_token: &str) -> AppResult<SubmitAck>;
}

/// 按状态码和响应体解码
///
/// 非 2xx 一律视为失败，2xx 但无法解析同样视为失败
pub(crate) fn decode_body<T: DeserializeOwned>(endpoint: &str, status: u16, body: &str) -> AppResult<T> {
    if !(200..300).contains(&status) {
        return Err(AppError::api_bad_status(endpoint, status));
    }
    serde_json::from_str(body).map_err(|e| AppError::api_parse_failed(endpoint, e))
}

/// 解码提交回执
///
/// 2xx 且响应体为空（如 204）时服务端已受理，回执记为 `null`
pub(crate) fn decode_ack(endpoint: &str, status: u16, body: &str) -> AppResult<SubmitAck> {
    if (200..300).contains(&status) && body.trim().is_empty() {
        return Ok(SubmitAck(JsonValue::Null));
    }
    decode_body(endpoint, status, body).map(SubmitAck)
}
