//! 判题文本分类
//!
//! 对页面可见文本做模式匹配，按优先级取第一个命中的终态。
//! "Accepted" 可能先出现在过渡动画/历史面板里，所以必须有
//! 毫秒和内存两个佐证才算数；其余状态按字面命中。
//! 数字提取全部可选，取不到就留空，不影响分类本身

use regex::Regex;

use crate::models::{SubmissionOutcome, SubmissionStatus};

/// 一次分类命中的终态判定
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionVerdict {
    pub status: SubmissionStatus,
    pub runtime: Option<String>,
    pub memory: Option<String>,
    pub test_cases_passed: Option<u32>,
    pub total_test_cases: Option<u32>,
}

impl SubmissionVerdict {
    fn new(status: SubmissionStatus) -> Self {
        Self {
            status,
            runtime: None,
            memory: None,
            test_cases_passed: None,
            total_test_cases: None,
        }
    }

    /// 转成对外返回的提交结果
    pub fn into_outcome(self) -> SubmissionOutcome {
        let mut outcome = SubmissionOutcome::with_status(self.status);
        outcome.runtime = self.runtime;
        outcome.memory = self.memory;
        outcome.test_cases_passed = self.test_cases_passed;
        outcome.total_test_cases = self.total_test_cases;
        outcome
    }
}

/// 对页面文本做终态分类；未出现任何终态返回 None（继续轮询）
pub fn classify_page_text(text: &str) -> Option<SubmissionVerdict> {
    let runtime_re = Regex::new(r"(\d+)\s*ms").expect("runtime 正则无效");
    let memory_re = Regex::new(r"(\d+\.?\d*)\s*MB").expect("memory 正则无效");

    // Accepted 必须有 ms + MB 佐证，否则视为尚未出最终结果
    if text.contains("Accepted") && runtime_re.is_match(text) && memory_re.is_match(text) {
        let mut verdict = SubmissionVerdict::new(SubmissionStatus::Accepted);
        verdict.runtime = runtime_re
            .captures(text)
            .map(|c| format!("{} ms", &c[1]));
        verdict.memory = memory_re.captures(text).map(|c| format!("{} MB", &c[1]));
        let (passed, total) = extract_case_counts(text);
        verdict.test_cases_passed = passed;
        verdict.total_test_cases = total;
        return Some(verdict);
    }

    if text.contains("Wrong Answer") {
        let mut verdict = SubmissionVerdict::new(SubmissionStatus::WrongAnswer);
        let (passed, total) = extract_case_counts(text);
        verdict.test_cases_passed = passed;
        verdict.total_test_cases = total;
        return Some(verdict);
    }

    if text.contains("Runtime Error") {
        return Some(SubmissionVerdict::new(SubmissionStatus::RuntimeError));
    }

    if text.contains("Compile Error") || text.contains("Compilation Error") {
        return Some(SubmissionVerdict::new(SubmissionStatus::CompileError));
    }

    if text.contains("Time Limit Exceeded") {
        return Some(SubmissionVerdict::new(SubmissionStatus::TimeLimitExceeded));
    }

    if text.contains("Memory Limit Exceeded") {
        return Some(SubmissionVerdict::new(SubmissionStatus::MemoryLimitExceeded));
    }

    None
}

/// 提取 "a/b" 形式的用例计数
fn extract_case_counts(text: &str) -> (Option<u32>, Option<u32>) {
    let cases_re = Regex::new(r"(\d+)\s*/\s*(\d+)").expect("用例计数正则无效");
    match cases_re.captures(text) {
        Some(caps) => (caps[1].parse().ok(), caps[2].parse().ok()),
        None => (None, None),
    }
}
