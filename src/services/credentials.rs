//! 凭据读取 - 业务能力层
//!
//! 只负责"从会话 cookie 中取出 CSRF token"，每次提交都重新读取

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;
use tracing::{debug, warn};

use crate::infrastructure::JsExecutor;

/// CSRF token 来源
///
/// 返回 `None` 表示会话里没有 token（未登录），与 token 被服务端拒绝是两回事
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Option<String>;
}

/// 在 `name=value; name=value` 形式的 cookie 串中查找 `name`
///
/// 名字精确匹配，取第一个命中项，值做百分号解码（解码失败时原样返回）
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| decode_cookie_value(value.trim()))
    })
}

fn decode_cookie_value(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// 从 reqwest 的 Cookie Jar 读取 token
pub struct JarTokenSource {
    jar: Arc<Jar>,
    url: Url,
    cookie_name: String,
}

impl JarTokenSource {
    /// `url` 决定读取哪个站点下的 cookie
    pub fn new(jar: Arc<Jar>, url: Url, cookie_name: impl Into<String>) -> Self {
        Self {
            jar,
            url,
            cookie_name: cookie_name.into(),
        }
    }
}

#[async_trait]
impl TokenSource for JarTokenSource {
    async fn token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        let cookies = header.to_str().ok()?;
        let token = find_cookie(cookies, &self.cookie_name);
        debug!("Cookie Jar 中 {} 存在: {}", self.cookie_name, token.is_some());
        token
    }
}

/// 从浏览器页面的 `document.cookie` 读取 token
pub struct BrowserCookieSource {
    executor: Arc<JsExecutor>,
    cookie_name: String,
}

impl BrowserCookieSource {
    pub fn new(executor: Arc<JsExecutor>, cookie_name: impl Into<String>) -> Self {
        Self {
            executor,
            cookie_name: cookie_name.into(),
        }
    }
}

#[async_trait]
impl TokenSource for BrowserCookieSource {
    async fn token(&self) -> Option<String> {
        match self.executor.eval_as::<String>("document.cookie").await {
            Ok(cookies) => find_cookie(&cookies, &self.cookie_name),
            Err(e) => {
                warn!("读取 document.cookie 失败: {}", e);
                None
            }
        }
    }
}
