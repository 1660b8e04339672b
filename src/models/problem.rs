use serde::{Deserialize, Serialize};

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 从上游返回的难度文本解析，未知值按 Medium 处理
    pub fn parse(s: &str) -> Self {
        match s {
            "Easy" => Difficulty::Easy,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 题目身份（列表项/候选项的最小信息）
///
/// 解析完成后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemIdentity {
    /// 展示题号（字符串形式，如 "1"、"1266"）
    pub frontend_id: String,
    /// 标题
    pub title: String,
    /// 规范 slug
    pub slug: String,
    /// 难度
    pub difficulty: Difficulty,
}

impl ProblemIdentity {
    pub fn new(
        frontend_id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            frontend_id: frontend_id.into(),
            title: title.into(),
            slug: slug.into(),
            difficulty,
        }
    }

    /// "1. Two Sum" 形式的展示标题
    pub fn numbered_title(&self) -> String {
        format!("{}. {}", self.frontend_id, self.title)
    }
}

/// 题目示例
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// 语言起始代码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub lang: String,
    #[serde(rename = "langSlug")]
    pub lang_slug: String,
    pub code: String,
}

/// 题目完整内容
///
/// 每次请求重新拉取，不做跨请求缓存（上游内容可能变化）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetail {
    pub frontend_id: String,
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub sample_test_cases: Vec<String>,
}

impl ProblemDetail {
    /// 对应的题目身份
    pub fn identity(&self) -> ProblemIdentity {
        ProblemIdentity {
            frontend_id: self.frontend_id.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            difficulty: self.difficulty,
        }
    }

    /// "1. Two Sum" 形式的展示标题
    pub fn numbered_title(&self) -> String {
        format!("{}. {}", self.frontend_id, self.title)
    }
}
