//! slug 规范化
//!
//! 纯文本变换：任意查询 → 规范 slug。确定性、全函数、幂等

use regex::Regex;

/// 题目页面 URL 的特征子串
const PROBLEM_URL_MARKER: &str = "leetcode.com/problems/";

/// 判断查询是否是题目页面 URL
pub fn is_problem_url(query: &str) -> bool {
    query.contains(PROBLEM_URL_MARKER)
}

/// 判断查询是否是纯数字题号
pub fn is_problem_number(query: &str) -> bool {
    let trimmed = query.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// 把任意查询规范化为 slug
///
/// 规则按顺序应用：
/// 1. URL 直接提取路径段
/// 2. 去掉 "1. " 形式的题号前缀
/// 3. 小写、空白转连字符、删除非法字符、合并连字符、去掉首尾连字符
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();

    // URL 优先：提取 /problems/ 后的路径段（忽略尾随参数）
    let url_re = Regex::new(r"leetcode\.com/problems/([^/?#]+)").expect("URL 正则无效");
    let base = match url_re.captures(trimmed) {
        Some(caps) => caps[1].to_string(),
        None => trimmed.to_string(),
    };

    // 去掉 "N. " 题号前缀
    let prefix_re = Regex::new(r"^\d+\.\s*").expect("前缀正则无效");
    let without_prefix = prefix_re.replace(&base, "");

    let lowered = without_prefix.to_lowercase();

    // 空白 → 连字符
    let hyphenated: String = lowered
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();

    // 删除 [a-z0-9-] 以外的字符
    let cleaned: String = hyphenated
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    // 合并连续连字符，去掉首尾连字符
    let mut slug = String::with_capacity(cleaned.len());
    let mut prev_hyphen = false;
    for c in cleaned.chars() {
        if c == '-' {
            if !prev_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(c);
            prev_hyphen = false;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// 查询的空白替换为连字符（用于 slug 等值比较）
pub fn hyphenate(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
