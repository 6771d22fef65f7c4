use std::path::Path;
use std::sync::Arc;

use chromiumoxide::Browser;
use tracing::{info, warn};

use crate::browser;
use crate::clients::{BrowserProblemClient, HttpProblemClient, ProblemApi};
use crate::config::{Config, Transport};
use crate::error::{AppError, AppResult};
use crate::infrastructure::JsExecutor;
use crate::services::{BrowserCookieSource, JarTokenSource, LogNotifier, Notifier, TokenSource};
use crate::workflow::render::{render_problem, render_problem_list};
use crate::workflow::{
    resolve_route, ProblemListPage, ProblemPage, Route, SubmissionCoordinator, SubmitOutcome,
};

/// 应用主结构
pub struct App {
    config: Config,
    api: Arc<dyn ProblemApi>,
    tokens: Arc<dyn TokenSource>,
    notifier: Arc<dyn Notifier>,
    // 浏览器模式下保持 DevTools 连接
    _browser: Option<Browser>,
}

impl App {
    /// 按配置的传输方式装配客户端和凭据来源
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        match config.transport {
            Transport::Http => {
                let client = HttpProblemClient::new(&config)?;
                let tokens = JarTokenSource::new(
                    client.jar(),
                    client.origin().clone(),
                    &config.csrf_cookie_name,
                );
                Ok(Self::with_parts(
                    config,
                    Arc::new(client),
                    Arc::new(tokens),
                    Arc::new(LogNotifier),
                ))
            }
            Transport::Browser => {
                let (browser, page) = browser::connect_to_browser_and_page(
                    config.browser_debug_port,
                    &config.target_url,
                )
                .await?;
                let executor = Arc::new(JsExecutor::new(page));
                let client = BrowserProblemClient::new(executor.clone(), config.api_origin());
                let tokens = BrowserCookieSource::new(executor, &config.csrf_cookie_name);

                let mut app = Self::with_parts(
                    config,
                    Arc::new(client),
                    Arc::new(tokens),
                    Arc::new(LogNotifier),
                );
                app._browser = Some(browser);
                Ok(app)
            }
        }
    }

    /// 使用现成的组件创建应用
    pub fn with_parts(
        config: Config,
        api: Arc<dyn ProblemApi>,
        tokens: Arc<dyn TokenSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            api,
            tokens,
            notifier,
            _browser: None,
        }
    }

    /// 打开站内路径；详情页给出 `code_file` 时把文件内容写入编辑器并提交一次
    ///
    /// 返回提交结果（未提交时为 `None`）
    pub async fn run(&self, path: &str, code_file: Option<&Path>) -> AppResult<Option<SubmitOutcome>> {
        match resolve_route(path) {
            Route::ProblemList => {
                let page = ProblemListPage::new();
                page.load(self.api.as_ref()).await;
                println!("{}", render_problem_list(&page.view_state()));
                if code_file.is_some() {
                    warn!("⚠️ 列表页不支持提交，忽略代码文件");
                }
                Ok(None)
            }
            Route::ProblemDetail { .. } => {
                let page = ProblemPage::new(&self.config.placeholder_code);
                page.navigate(self.api.as_ref(), path).await;

                let Some(code_file) = code_file else {
                    println!("{}", render_problem(&page.view_state(), &page.code()));
                    return Ok(None);
                };

                let code = tokio::fs::read_to_string(code_file)
                    .await
                    .map_err(|e| AppError::file_read_failed(code_file.display().to_string(), e))?;
                page.edit(code);
                println!("{}", render_problem(&page.view_state(), &page.code()));

                let coordinator = SubmissionCoordinator::new(
                    self.api.clone(),
                    self.tokens.clone(),
                    self.notifier.clone(),
                );
                let outcome = coordinator.submit(&page).await;
                if outcome == SubmitOutcome::Skipped {
                    warn!("⚠️ 题目未加载，未提交");
                }
                Ok(Some(outcome))
            }
            Route::NotFound => {
                warn!("⚠️ 未知路径: {}", path);
                println!("Page not found: {}", path);
                Ok(None)
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 传输方式: {:?}", config.transport);
    info!("🌐 服务地址: {}", config.api_origin());
    info!("{}", "=".repeat(60));
}
