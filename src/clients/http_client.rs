//! 基于 reqwest 的题库客户端
//!
//! 所有请求共享同一个 Cookie Jar，因此每次请求都会携带会话 cookie；
//! 服务端的 `Set-Cookie` 也会回写到 Jar 中

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::clients::api::{
    decode_ack, decode_body, question_path, ProblemApi, CSRF_HEADER, QUESTIONS_PATH, SUBMIT_PATH,
};
use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::{Problem, ProblemSummary, SubmissionRequest, SubmitAck};

/// HTTP 题库客户端
pub struct HttpProblemClient {
    client: Client,
    origin: Url,
    jar: Arc<Jar>,
}

impl HttpProblemClient {
    /// 根据配置创建客户端，并把 `session_cookies` 预置到 Jar
    pub fn new(config: &Config) -> AppResult<Self> {
        let origin_str = config.api_origin();
        let origin = Url::parse(origin_str).map_err(|e| ConfigError::InvalidUrl {
            url: origin_str.to_string(),
            source: Box::new(e),
        })?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::api_request_failed(origin_str, e))?;

        let this = Self {
            client,
            origin,
            jar,
        };

        if let Some(cookies) = &config.session_cookies {
            this.seed_cookies(cookies);
        }

        Ok(this)
    }

    /// 共享的 Cookie Jar，凭据读取方从这里取 token
    pub fn jar(&self) -> Arc<Jar> {
        self.jar.clone()
    }

    /// 服务地址（作为 cookie 的作用域）
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// 将 `name=value; name=value` 形式的 cookie 写入 Jar
    pub fn seed_cookies(&self, cookies: &str) {
        for pair in cookies.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            debug!("预置 cookie: {}", pair.split('=').next().unwrap_or_default());
            self.jar.add_cookie_str(&format!("{}; Path=/", pair), &self.origin);
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.origin.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        decode_body(path, status, &body)
    }
}

#[async_trait]
impl ProblemApi for HttpProblemClient {
    async fn list_problems(&self) -> AppResult<Vec<ProblemSummary>> {
        self.get_json(QUESTIONS_PATH).await
    }

    async fn get_problem(&self, id: &str) -> AppResult<Problem> {
        self.get_json(&question_path(id)).await
    }

    async fn submit(&self, request: &SubmissionRequest, csrf_token: &str) -> AppResult<SubmitAck> {
        let url = self.url_for(SUBMIT_PATH);
        debug!("POST {} (题目 {})", url, request.question_id);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CSRF_HEADER, csrf_token)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(SUBMIT_PATH, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(SUBMIT_PATH, e))?;

        decode_ack(SUBMIT_PATH, status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore;

    #[test]
    fn seeded_cookies_land_in_jar() {
        let config = Config {
            api_base_url: "http://127.0.0.1:8000/".to_string(),
            session_cookies: Some("sessionid=s1; csrftoken=abc123".to_string()),
            ..Config::default()
        };
        let client = HttpProblemClient::new(&config).unwrap();

        let header = client.jar().cookies(client.origin()).unwrap();
        let header = header.to_str().unwrap();
        assert!(header.contains("csrftoken=abc123"));
        assert!(header.contains("sessionid=s1"));
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let config = Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        };
        let err = HttpProblemClient::new(&config).err().unwrap();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn urls_join_without_double_slash() {
        let client = HttpProblemClient::new(&Config::default()).unwrap();
        assert_eq!(
            client.url_for(&question_path("3")),
            "http://127.0.0.1:8000/api/questions/3/"
        );
    }
}
