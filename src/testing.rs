//! 单元测试共用的替身实现

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use crate::clients::api::{question_path, ProblemApi, SUBMIT_PATH};
use crate::error::{AppError, AppResult};
use crate::models::{Problem, ProblemSummary, SubmissionRequest, SubmitAck};
use crate::services::{Notification, Notifier, TokenSource};

pub(crate) fn problem(id: u64) -> Problem {
    Problem {
        id,
        title: format!("Problem {}", id),
        description: format!("<p>Description {}</p>", id),
    }
}

/// 内存中的题库
pub(crate) struct FakeApi {
    problems: Vec<Problem>,
    held: Mutex<HashMap<String, Arc<Notify>>>,
    list_fails: bool,
    submit_status: Option<u16>,
    pub gets: Mutex<Vec<String>>,
    pub submissions: Mutex<Vec<(SubmissionRequest, String)>>,
}

impl FakeApi {
    pub fn with_problems(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            held: Mutex::new(HashMap::new()),
            list_fails: false,
            submit_status: None,
            gets: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// 列表接口返回 500
    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// 提交接口返回指定的非 2xx 状态
    pub fn rejecting_submit(mut self, status: u16) -> Self {
        self.submit_status = Some(status);
        self
    }

    /// 让 `id` 的详情请求挂起，直到返回的 Notify 被触发
    pub fn hold(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.held
            .lock()
            .unwrap()
            .insert(id.to_string(), gate.clone());
        gate
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl ProblemApi for FakeApi {
    async fn list_problems(&self) -> AppResult<Vec<ProblemSummary>> {
        if self.list_fails {
            return Err(AppError::api_bad_status("/api/questions/", 500));
        }
        Ok(self
            .problems
            .iter()
            .map(|p| ProblemSummary {
                id: p.id,
                title: p.title.clone(),
            })
            .collect())
    }

    async fn get_problem(&self, id: &str) -> AppResult<Problem> {
        self.gets.lock().unwrap().push(id.to_string());
        let gate = self.held.lock().unwrap().get(id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.problems
            .iter()
            .find(|p| p.id.to_string() == id)
            .cloned()
            .ok_or_else(|| AppError::api_bad_status(question_path(id), 404))
    }

    async fn submit(&self, request: &SubmissionRequest, csrf_token: &str) -> AppResult<SubmitAck> {
        self.submissions
            .lock()
            .unwrap()
            .push((request.clone(), csrf_token.to_string()));
        match self.submit_status {
            Some(status) => Err(AppError::api_bad_status(SUBMIT_PATH, status)),
            None => Ok(SubmitAck(json!({"status": "queued"}))),
        }
    }
}

/// 固定返回值的 token 来源，可选地在返回前等待放行
pub(crate) struct FixedTokens {
    token: Option<String>,
    gate: Option<Arc<Notify>>,
    pub reads: Mutex<usize>,
}

impl FixedTokens {
    pub fn present(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            gate: None,
            reads: Mutex::new(0),
        }
    }

    pub fn absent() -> Self {
        Self {
            token: None,
            gate: None,
            reads: Mutex::new(0),
        }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait]
impl TokenSource for FixedTokens {
    async fn token(&self) -> Option<String> {
        *self.reads.lock().unwrap() += 1;
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.token.clone()
    }
}

/// 记录收到的通知
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}
