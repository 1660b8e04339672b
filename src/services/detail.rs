//! 题目详情拉取与内容解析
//!
//! 上游返回的 content 字段是格式不稳定的半结构化 HTML，
//! 描述/示例/约束都是尽力而为的文本提取：缺某一段就给空值，不报错

use regex::Regex;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::clients::GraphqlClient;
use crate::error::{AppError, AppResult};
use crate::models::{CodeSnippet, Difficulty, Example, ProblemDetail};
use crate::utils::{decode_entities, strip_tags};

/// 题目详情查询文档
const DETAIL_QUERY: &str = r#"
    query getQuestionDetail($titleSlug: String!) {
      question(titleSlug: $titleSlug) {
        title
        titleSlug
        difficulty
        content
        exampleTestcases
        codeSnippets {
          lang
          langSlug
          code
        }
        questionFrontendId
      }
    }
"#;

/// 题目详情拉取服务
pub struct DetailFetcher {
    client: GraphqlClient,
}

impl DetailFetcher {
    /// 创建新的详情服务
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    /// 按 slug 拉取题目完整内容
    ///
    /// 上游报告题目不存在 → NotFound；网络/状态码问题 → Upstream
    pub async fn fetch(&self, slug: &str) -> AppResult<ProblemDetail> {
        debug!("拉取题目详情: {}", slug);

        let referer = format!("{}/problems/{}/", self.client.site_base(), slug);
        let data = self
            .client
            .query(DETAIL_QUERY, json!({ "titleSlug": slug }), None, &referer)
            .await?;

        let question = match data.get("question") {
            Some(q) if !q.is_null() => q,
            _ => return Err(AppError::question_not_found(slug)),
        };

        let detail = self.build_detail(question, slug)?;
        info!(
            "✓ 已获取题目: {} - {}",
            detail.numbered_title(),
            detail.difficulty
        );
        Ok(detail)
    }

    /// 把上游 question 对象转换为 ProblemDetail
    fn build_detail(&self, question: &Value, slug: &str) -> AppResult<ProblemDetail> {
        let title = question
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(slug)
            .to_string();
        let title_slug = question
            .get("titleSlug")
            .and_then(|v| v.as_str())
            .unwrap_or(slug)
            .to_string();
        let frontend_id = question
            .get("questionFrontendId")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        let difficulty = question
            .get("difficulty")
            .and_then(|v| v.as_str())
            .map(Difficulty::parse)
            .unwrap_or(Difficulty::Medium);
        let content = question
            .get("content")
            .and_then(|v| v.as_str())
            .unwrap_or("");

        let code_snippets = question
            .get("codeSnippets")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|s| serde_json::from_value::<CodeSnippet>(s.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        let sample_test_cases = question
            .get("exampleTestcases")
            .and_then(|v| v.as_str())
            .map(|s| {
                s.lines()
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let url = format!("{}/problems/{}/", self.client.site_base(), title_slug);

        Ok(ProblemDetail {
            frontend_id,
            title,
            slug: title_slug,
            difficulty,
            description: parse_description(content),
            examples: parse_examples(content),
            constraints: parse_constraints(content),
            url,
            code_snippets,
            sample_test_cases,
        })
    }
}

/// 提取描述（第一个 "Example N:" 之前的文本）
pub fn parse_description(content: &str) -> String {
    let text = decode_entities(&strip_tags(content, " "));
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let marker = example_marker_re();
    match marker.find(&collapsed) {
        Some(m) if m.start() > 0 => collapsed[..m.start()].trim().to_string(),
        _ => collapsed,
    }
}

/// 提取示例列表
///
/// 在 "Example" 标记之间逐块捕获 Input/Output/可选 Explanation，
/// 截止到 "Constraints" 或文本末尾
pub fn parse_examples(content: &str) -> Vec<Example> {
    let text = decode_entities(&strip_tags(content, "\n"));

    let end = constraints_marker_re()
        .find(&text)
        .map(|m| m.start())
        .unwrap_or(text.len());
    let region = &text[..end];

    let marker = example_marker_re();
    let starts: Vec<(usize, usize)> = marker
        .find_iter(region)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut examples = Vec::new();
    for (idx, (_, body_start)) in starts.iter().enumerate() {
        let block_end = starts
            .get(idx + 1)
            .map(|(next_start, _)| *next_start)
            .unwrap_or(region.len());
        if let Some(example) = parse_example_block(&region[*body_start..block_end]) {
            examples.push(example);
        }
    }
    examples
}

/// 解析单个示例块
fn parse_example_block(block: &str) -> Option<Example> {
    let input_re = Regex::new(r"(?i)Input\s*:").expect("Input 正则无效");
    let output_re = Regex::new(r"(?i)Output\s*:").expect("Output 正则无效");
    let explanation_re = Regex::new(r"(?i)Explanation\s*:").expect("Explanation 正则无效");

    let input_m = input_re.find(block)?;
    let output_m = output_re.find_at(block, input_m.end())?;

    let input = block[input_m.end()..output_m.start()].trim().to_string();
    let rest = &block[output_m.end()..];

    let (output, explanation) = match explanation_re.find(rest) {
        Some(m) => {
            let explanation = rest[m.end()..].trim();
            (
                rest[..m.start()].trim().to_string(),
                (!explanation.is_empty()).then(|| explanation.to_string()),
            )
        }
        None => (rest.trim().to_string(), None),
    };

    if input.is_empty() && output.is_empty() {
        return None;
    }

    Some(Example {
        input,
        output,
        explanation,
    })
}

/// 提取约束列表（"Constraints:" 之后的非空行，剔除混入的 "Example" 行）
pub fn parse_constraints(content: &str) -> Vec<String> {
    let text = decode_entities(&strip_tags(content, "\n"));

    let Some(m) = constraints_marker_re().find(&text) else {
        return Vec::new();
    };

    text[m.end()..]
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with("Example"))
        .map(|line| line.to_string())
        .collect()
}

fn example_marker_re() -> Regex {
    Regex::new(r"(?i)Example\s*\d*\s*:").expect("Example 正则无效")
}

fn constraints_marker_re() -> Regex {
    Regex::new(r"(?i)Constraints\s*:").expect("Constraints 正则无效")
}
