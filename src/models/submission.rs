use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 提交使用的语言标记，本流程固定为 python
pub const SUBMISSION_LANGUAGE: &str = "python";

/// 一次提交的请求体，对应 `POST /api/submit/`
///
/// 提交时构造，发送后即丢弃
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub question_id: u64,
    pub code: String,
    pub language: String,
}

impl SubmissionRequest {
    pub fn new(question_id: u64, code: impl Into<String>) -> Self {
        Self {
            question_id,
            code: code.into(),
            language: SUBMISSION_LANGUAGE.to_string(),
        }
    }
}

/// 服务端对提交的确认，内容由服务端决定，只用于日志
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitAck(pub JsonValue);
