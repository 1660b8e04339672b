use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 判题结果状态
///
/// 序列化形式对齐上游的带空格写法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Accepted,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
    #[serde(rename = "Compile Error")]
    CompileError,
    #[serde(rename = "Time Limit Exceeded")]
    TimeLimitExceeded,
    #[serde(rename = "Memory Limit Exceeded")]
    MemoryLimitExceeded,
    /// 判题进行中（仅内部使用，绝不作为最终返回值）
    Pending,
    /// 提交流程本身失败
    Error,
}

impl SubmissionStatus {
    pub fn name(self) -> &'static str {
        match self {
            SubmissionStatus::Accepted => "Accepted",
            SubmissionStatus::WrongAnswer => "Wrong Answer",
            SubmissionStatus::RuntimeError => "Runtime Error",
            SubmissionStatus::CompileError => "Compile Error",
            SubmissionStatus::TimeLimitExceeded => "Time Limit Exceeded",
            SubmissionStatus::MemoryLimitExceeded => "Memory Limit Exceeded",
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::Error => "Error",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 提交请求
///
/// 凭证字段是调用方的机密，任何路径下都不得写入日志或落盘
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// 题目 slug
    pub problem_slug: String,
    /// 源代码
    pub source_code: String,
    /// 语言 slug（如 "python3"、"cpp"）
    pub language_slug: String,
    /// 会话 Cookie
    pub session_cookie: String,
    /// CSRF Token（可选）
    pub csrf_token: Option<String>,
}

/// 提交结果
///
/// 每次提交生成一份，返回后即为终态；持久化由调用方负责
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_cases_passed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_test_cases: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionOutcome {
    /// 以指定状态创建结果，其余字段留空
    pub fn with_status(status: SubmissionStatus) -> Self {
        Self {
            status,
            runtime: None,
            memory: None,
            test_cases_passed: None,
            total_test_cases: None,
            error_message: None,
            expected_output: None,
            actual_output: None,
            input: None,
            submitted_at: Utc::now(),
        }
    }

    /// 创建提交流程失败的结果
    pub fn failed(message: impl Into<String>) -> Self {
        let mut outcome = Self::with_status(SubmissionStatus::Error);
        outcome.error_message = Some(message.into());
        outcome
    }
}
