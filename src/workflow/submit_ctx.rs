//! 提交上下文
//!
//! 封装"我正在提交哪道题、用什么语言"这一信息，供日志引用。
//! 凭证不进上下文，避免任何展示路径碰到它

use std::fmt::Display;

/// 提交上下文
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 题目 slug
    pub problem_slug: String,
    /// 语言 slug
    pub language_slug: String,
    /// 题目页面 URL
    pub problem_url: String,
}

impl SubmissionCtx {
    /// 创建新的提交上下文
    pub fn new(site_base: &str, problem_slug: &str, language_slug: &str) -> Self {
        Self {
            problem_slug: problem_slug.to_string(),
            language_slug: language_slug.to_string(),
            problem_url: format!("{}/problems/{}/", site_base, problem_slug),
        }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目#{} 语言#{}]", self.problem_slug, self.language_slug)
    }
}
