//! # Problem Submit
//!
//! 刷题站点的命令行客户端：浏览题目列表、查看题目、提交代码
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `browser/` - 附加到已登录的浏览器
//!
//! ### ② 能力层（Clients / Services）
//! - `clients/` - `ProblemApi`：HTTP（reqwest + Cookie Jar）或浏览器内 fetch
//! - `services/` - `TokenSource` 读取 CSRF token，`Notifier` 通知用户
//!
//! ### ③ 流程层（Workflow）
//! - `route` - 路径 → 题目标识
//! - `view_state` - Loading / Error / Loaded 状态机，按代次丢弃过期响应
//! - `problem_page` / `problem_list` - 页面状态
//! - `submission` - 提交流程（快照 → token → 发送 → 通知）
//!
//! ### ④ 装配层
//! - `app` - 按配置组装各层并运行

pub mod app;
pub mod browser;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

#[cfg(test)]
mod testing;

// 重新导出常用类型
pub use app::App;
pub use clients::{HttpProblemClient, ProblemApi};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Problem, ProblemSummary, SubmissionRequest};
pub use services::{Notification, Notifier, TokenSource};
pub use workflow::{ProblemPage, SubmissionCoordinator, SubmitOutcome, ViewState};
