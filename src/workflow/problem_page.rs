//! 题目详情页
//!
//! 持有显示状态和代码缓冲区，两者互不影响。
//! 所有修改都发生在同一个事件循环上，用 `RefCell` 即可；
//! 借用从不跨越 `.await`

use std::cell::RefCell;

use tracing::{info, warn};

use crate::clients::ProblemApi;
use crate::models::Problem;
use crate::workflow::code_buffer::CodeBuffer;
use crate::workflow::route::problem_id;
use crate::workflow::view_state::{FetchTracker, ViewState};

/// 题目加载失败时展示的文本
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load question.";

pub struct ProblemPage {
    view: RefCell<FetchTracker<Problem>>,
    buffer: RefCell<CodeBuffer>,
}

impl ProblemPage {
    /// 新页面处于 Loading，代码缓冲区为占位代码
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            view: RefCell::new(FetchTracker::new(LOAD_FAILURE_MESSAGE)),
            buffer: RefCell::new(CodeBuffer::new(placeholder)),
        }
    }

    /// 导航到站内路径并加载对应题目
    ///
    /// 路径中没有题目标识时直接进入 Error，不发请求。
    /// 返回本次结果是否被页面采纳
    pub async fn navigate(&self, api: &dyn ProblemApi, path: &str) -> bool {
        match problem_id(path) {
            Some(id) => self.load(api, id).await,
            None => {
                warn!("⚠️ 路径 {} 中没有题目标识", path);
                self.view.borrow_mut().reject();
                false
            }
        }
    }

    /// 按标识加载题目，晚到的旧结果会被丢弃
    pub async fn load(&self, api: &dyn ProblemApi, id: impl Into<String>) -> bool {
        let ticket = self.view.borrow_mut().begin(id);
        info!("📥 正在加载题目 {}", ticket.id());

        let result = api.get_problem(ticket.id()).await;

        let applied = self.view.borrow_mut().resolve(&ticket, result);
        if applied {
            if let Some(problem) = self.view.borrow().state().loaded() {
                info!("✓ 题目加载完成: {}", problem.title);
            }
        }
        applied
    }

    pub fn view_state(&self) -> ViewState<Problem> {
        self.view.borrow().state().clone()
    }

    pub fn loaded_problem(&self) -> Option<Problem> {
        self.view.borrow().state().loaded().cloned()
    }

    pub fn loaded_problem_id(&self) -> Option<u64> {
        self.view.borrow().state().loaded().map(|p| p.id)
    }

    /// 编辑器变更事件
    pub fn edit(&self, new_text: impl Into<String>) {
        self.buffer.borrow_mut().on_edit(new_text);
    }

    /// 当前代码的快照
    pub fn code(&self) -> String {
        self.buffer.borrow().snapshot()
    }

    pub fn buffer(&self) -> CodeBuffer {
        self.buffer.borrow().clone()
    }
}
