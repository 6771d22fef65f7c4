//! 页面显示状态机
//!
//! ```text
//!            begin(id)                 resolve(ok)
//!   任意状态 ─────────▶ Loading ──────────────────▶ Loaded
//!                          │
//!                          │ resolve(err)
//!                          ▼
//!                        Error
//! ```
//!
//! 每次 `begin` 生成新的代次，`resolve` 只接受当前代次的结果，
//! 被新标识取代的旧请求即使晚到也会被丢弃

use std::fmt::Display;

use tracing::{debug, warn};

/// 三种互斥的显示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> ViewState<T> {
    /// 由一次拉取结果得到的状态，失败统一显示 `failure_message`
    pub fn settle<E>(result: Result<T, E>, failure_message: &str) -> Self {
        match result {
            Ok(data) => ViewState::Loaded(data),
            Err(_) => ViewState::Error(failure_message.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// 一次拉取的凭证，记录目标标识和发起时的代次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    id: String,
}

impl FetchTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// 带代次计数的状态机
#[derive(Debug)]
pub struct FetchTracker<T> {
    state: ViewState<T>,
    generation: u64,
    failure_message: &'static str,
}

impl<T> FetchTracker<T> {
    pub fn new(failure_message: &'static str) -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
            failure_message,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// 标识变化：进入 Loading，之前发出的请求全部作废
    pub fn begin(&mut self, id: impl Into<String>) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket {
            generation: self.generation,
            id: id.into(),
        }
    }

    /// 没有可用标识：直接进入 Error，同时作废进行中的请求
    pub fn reject(&mut self) {
        self.generation += 1;
        self.state = ViewState::Error(self.failure_message.to_string());
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// 应用拉取结果，返回是否被采纳
    ///
    /// 过期代次或已离开 Loading 的结果会被忽略
    pub fn resolve<E: Display>(&mut self, ticket: &FetchTicket, result: Result<T, E>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "丢弃过期响应: 标识 {} (代次 {}, 当前 {})",
                ticket.id, ticket.generation, self.generation
            );
            return false;
        }
        if !self.state.is_loading() {
            debug!("状态已确定，忽略重复响应: 标识 {}", ticket.id);
            return false;
        }

        if let Err(e) = &result {
            warn!("⚠️ 加载 {} 失败: {}", ticket.id, e);
        }
        self.state = ViewState::settle(result, self.failure_message);
        true
    }
}
