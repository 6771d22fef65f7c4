//! 提交流程 - 流程层
//!
//! 流程顺序：
//! 1. 题目未加载 → 静默忽略
//! 2. 取代码快照
//! 3. 读取 CSRF token，缺失 → 提示未登录，不发请求
//! 4. 发送一次提交（不重试），按结果通知用户

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clients::ProblemApi;
use crate::models::{SubmissionRequest, SubmitAck};
use crate::services::{Notification, Notifier, TokenSource};
use crate::utils::truncate_text;
use crate::workflow::problem_page::ProblemPage;

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 没有已加载的题目，什么也没做
    Skipped,
    /// 会话中没有 token，未发出请求
    NotAuthenticated,
    /// 服务端已接收
    Accepted(SubmitAck),
    /// 网络失败、非 2xx 或响应无法解析
    Failed(String),
}

/// 提交协调器
///
/// 凭据来源、题库和通知方式都以能力的形式注入，便于替换
pub struct SubmissionCoordinator {
    api: Arc<dyn ProblemApi>,
    tokens: Arc<dyn TokenSource>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionCoordinator {
    pub fn new(
        api: Arc<dyn ProblemApi>,
        tokens: Arc<dyn TokenSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            tokens,
            notifier,
        }
    }

    /// 提交页面当前的代码
    ///
    /// 代码在调用时取快照，之后的编辑不影响本次提交；失败时缓冲区保持不变
    pub async fn submit(&self, page: &ProblemPage) -> SubmitOutcome {
        let Some(question_id) = page.loaded_problem_id() else {
            debug!("题目尚未加载，忽略提交");
            return SubmitOutcome::Skipped;
        };
        let request = SubmissionRequest::new(question_id, page.code());

        let Some(token) = self.tokens.token().await else {
            warn!("⚠️ 会话中没有 CSRF token，取消提交 (题目 {})", question_id);
            self.notifier.notify(Notification::NotAuthenticated);
            return SubmitOutcome::NotAuthenticated;
        };

        info!(
            "📤 正在提交题目 {} ({}): {}",
            question_id,
            request.language,
            truncate_text(&request.code, 60)
        );

        match self.api.submit(&request, &token).await {
            Ok(ack) => {
                info!("✓ 提交成功 (题目 {})", question_id);
                debug!("提交响应: {:?}", ack);
                self.notifier.notify(Notification::Submitted);
                SubmitOutcome::Accepted(ack)
            }
            Err(e) => {
                warn!("⚠️ 提交失败 (题目 {}): {}", question_id, e);
                self.notifier.notify(Notification::SubmitFailed);
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
