//! 浏览器内的题库客户端
//!
//! 通过 [`JsExecutor`] 在已登录的页面里执行 `fetch`，
//! `credentials: "include"` 让浏览器自动附带会话 cookie

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::clients::api::{
    decode_ack, decode_body, question_path, ProblemApi, CSRF_HEADER, QUESTIONS_PATH, SUBMIT_PATH,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::JsExecutor;
use crate::models::{Problem, ProblemSummary, SubmissionRequest, SubmitAck};

/// 页面内 fetch 的返回值
#[derive(Debug, Deserialize)]
struct FetchReply {
    #[serde(default)]
    status: u16,
    #[serde(default)]
    body: String,
    #[serde(default)]
    error: Option<String>,
}

/// 浏览器题库客户端
pub struct BrowserProblemClient {
    executor: Arc<JsExecutor>,
    origin: String,
}

impl BrowserProblemClient {
    pub fn new(executor: Arc<JsExecutor>, api_origin: impl Into<String>) -> Self {
        Self {
            executor,
            origin: api_origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// 执行一次页面内 fetch，网络层失败转换为请求错误
    async fn fetch(
        &self,
        method: &str,
        path: &str,
        headers: JsonValue,
        body: Option<String>,
    ) -> AppResult<FetchReply> {
        let url = format!("{}{}", self.origin, path);
        let script = build_fetch_script(&url, method, &headers, body.as_deref())?;
        debug!("{} {} (浏览器内)", method, url);

        let reply: FetchReply = self.executor.eval_as(script).await?;
        match reply.error {
            Some(error) => Err(AppError::api_request_failed(path, error)),
            None => Ok(reply),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let reply = self
            .fetch("GET", path, json!({"Accept": "application/json"}), None)
            .await?;
        decode_body(path, reply.status, &reply.body)
    }
}

#[async_trait]
impl ProblemApi for BrowserProblemClient {
    async fn list_problems(&self) -> AppResult<Vec<ProblemSummary>> {
        self.get_json(QUESTIONS_PATH).await
    }

    async fn get_problem(&self, id: &str) -> AppResult<Problem> {
        self.get_json(&question_path(id)).await
    }

    async fn submit(&self, request: &SubmissionRequest, csrf_token: &str) -> AppResult<SubmitAck> {
        let mut headers = json!({
            "Content-Type": "application/json",
            "Accept": "application/json",
        });
        headers[CSRF_HEADER] = json!(csrf_token);
        let body = serde_json::to_string(request)
            .map_err(|e| AppError::api_parse_failed(SUBMIT_PATH, e))?;

        let reply = self.fetch("POST", SUBMIT_PATH, headers, Some(body)).await?;
        decode_ack(SUBMIT_PATH, reply.status, &reply.body)
    }
}

/// 构建页面内 fetch 脚本
///
/// 所有动态值都经过 JSON 编码后再嵌入，避免破坏脚本结构
fn build_fetch_script(
    url: &str,
    method: &str,
    headers: &JsonValue,
    body: Option<&str>,
) -> AppResult<String> {
    let url_js = js_string(url)?;
    let method_js = js_string(method)?;
    let body_js = match body {
        Some(b) => js_string(b)?,
        None => "null".to_string(),
    };

    Ok(format!(
        r#"
        (async () => {{
            try {{
                const res = await fetch({url}, {{
                    method: {method},
                    headers: {headers},
                    credentials: "include",
                    body: {body}
                }});
                const text = await res.text();
                return {{ status: res.status, body: text }};
            }} catch (err) {{
                console.error("API请求失败:", err);
                return {{ status: 0, error: String(err) }};
            }}
        }})()
        "#,
        url = url_js,
        method = method_js,
        headers = headers,
        body = body_js,
    ))
}

fn js_string(value: &str) -> AppResult<String> {
    serde_json::to_string(value).map_err(AppError::script_failed)
}
