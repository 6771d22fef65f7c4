//! 题目列表页

use std::cell::RefCell;

use tracing::info;

use crate::clients::api::QUESTIONS_PATH;
use crate::clients::ProblemApi;
use crate::models::ProblemSummary;
use crate::workflow::view_state::{FetchTracker, ViewState};

/// 列表加载失败时展示的文本
pub const LIST_FAILURE_MESSAGE: &str = "Failed to load questions.";

pub struct ProblemListPage {
    view: RefCell<FetchTracker<Vec<ProblemSummary>>>,
}

impl ProblemListPage {
    pub fn new() -> Self {
        Self {
            view: RefCell::new(FetchTracker::new(LIST_FAILURE_MESSAGE)),
        }
    }

    /// 拉取题目列表，返回结果是否被采纳
    pub async fn load(&self, api: &dyn ProblemApi) -> bool {
        let ticket = self.view.borrow_mut().begin(QUESTIONS_PATH);
        info!("📁 正在加载题目列表...");

        let result = api.list_problems().await;
        if let Ok(list) = &result {
            info!("✓ 找到 {} 道题目", list.len());
        }

        self.view.borrow_mut().resolve(&ticket, result)
    }

    pub fn view_state(&self) -> ViewState<Vec<ProblemSummary>> {
        self.view.borrow().state().clone()
    }
}

impl Default for ProblemListPage {
    fn default() -> Self {
        Self::new()
    }
}
