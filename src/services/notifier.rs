//! 用户通知 - 业务能力层

use chrono::Local;
use tracing::{info, warn};

/// 提交流程产生的用户可见通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// 提交已被服务端接收
    Submitted,
    /// 网络失败或非 2xx
    SubmitFailed,
    /// 会话中没有 CSRF token，未发出请求
    NotAuthenticated,
}

impl Notification {
    /// 展示给用户的文本
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Submitted => "Submission sent successfully!",
            Notification::SubmitFailed => "Failed to submit code.",
            Notification::NotAuthenticated => {
                "You are not logged in. Please log in and try again."
            }
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notification::Submitted)
    }
}

/// 通知展示能力
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 通过日志输出通知（命令行使用）
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        let now = Local::now().format("%H:%M:%S");
        if notification.is_error() {
            warn!("[{}] ❌ {}", now, notification.message());
        } else {
            info!("[{}] ✅ {}", now, notification.message());
        }
    }
}
