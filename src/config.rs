use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppResult, ConfigError};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "problem_submit.toml";

/// 请求发送方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// reqwest + Cookie Jar
    #[default]
    Http,
    /// 通过调试端口附加到已登录的浏览器，在页面内 fetch
    Browser,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "browser" => Ok(Transport::Browser),
            other => Err(ConfigError::UnknownTransport(other.to_string())),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库服务地址
    pub api_base_url: String,
    /// 存放 CSRF token 的 cookie 名
    pub csrf_cookie_name: String,
    /// 编辑器初始占位代码
    pub placeholder_code: String,
    pub transport: Transport,
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 浏览器模式下附加的页面地址
    pub target_url: String,
    /// 预置到 Cookie Jar 的会话 cookie，格式 `name=value; name=value`
    pub session_cookies: Option<String>,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            placeholder_code: "# Write your Python code here".to_string(),
            transport: Transport::Http,
            browser_debug_port: 9222,
            target_url: "http://127.0.0.1:3000/".to_string(),
            session_cookies: None,
            request_timeout_secs: 10,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：默认值 → 配置文件（可选） → 环境变量
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("PROBLEM_SUBMIT_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let base = if Path::new(&path).exists() {
            info!("📄 读取配置文件: {}", path);
            let content = std::fs::read_to_string(&path)
                .map_err(|e| crate::error::AppError::file_read_failed(&path, e))?;
            Self::from_toml_str(&content, &path)?
        } else {
            debug!("配置文件 {} 不存在，使用默认配置", path);
            Self::default()
        };

        Ok(base.apply_env(|key| std::env::var(key).ok())?)
    }

    /// 解析 TOML 配置，缺失的字段使用默认值
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })
    }

    /// 用环境变量覆盖已有配置
    ///
    /// `lookup` 便于测试时注入变量表
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("CSRF_COOKIE_NAME") {
            self.csrf_cookie_name = v;
        }
        if let Some(v) = lookup("PLACEHOLDER_CODE") {
            self.placeholder_code = v;
        }
        if let Some(v) = lookup("TRANSPORT") {
            self.transport = v.parse()?;
        }
        if let Some(v) = lookup("BROWSER_DEBUG_PORT") {
            self.browser_debug_port = parse_var("BROWSER_DEBUG_PORT", v, "u16")?;
        }
        if let Some(v) = lookup("TARGET_URL") {
            self.target_url = v;
        }
        if let Some(v) = lookup("SESSION_COOKIES") {
            self.session_cookies = Some(v);
        }
        if let Some(v) = lookup("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", v, "u64")?;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_var("VERBOSE_LOGGING", v, "bool")?;
        }
        Ok(self)
    }

    /// 去掉末尾斜杠的服务地址，便于拼接路径
    pub fn api_origin(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

fn parse_var<T: FromStr>(var_name: &str, value: String, expected_type: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvVarParseFailed {
        var_name: var_name.to_string(),
        value,
        expected_type: expected_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = Config::from_toml_str(
            r#"
            api_base_url = "https://judge.example.org/"
            transport = "browser"
            "#,
            "test.toml",
        )
        .unwrap();

        assert_eq!(config.api_origin(), "https://judge.example.org");
        assert_eq!(config.transport, Transport::Browser);
        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn env_overrides_file_values() {
        let config = Config::default()
            .apply_env(vars(&[
                ("CSRF_COOKIE_NAME", "xsrf"),
                ("REQUEST_TIMEOUT_SECS", "3"),
                ("TRANSPORT", "HTTP"),
            ]))
            .unwrap();

        assert_eq!(config.csrf_cookie_name, "xsrf");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.transport, Transport::Http);
    }

    #[test]
    fn bad_numeric_env_is_an_error() {
        let err = Config::default()
            .apply_env(vars(&[("BROWSER_DEBUG_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarParseFailed { .. }));
    }

    #[test]
    fn unknown_transport_is_rejected() {
        let err = Config::default()
            .apply_env(vars(&[("TRANSPORT", "carrier-pigeon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTransport(_)));
    }
}
