//! 候选项相关性打分
//!
//! 纯函数，永不失败。0 分表示不匹配，下游直接剔除

use crate::models::ProblemIdentity;
use crate::services::normalizer::hyphenate;

/// 题号精确命中
const SCORE_NUMBER_EXACT: u32 = 1000;
/// 标题精确命中
const SCORE_TITLE_EXACT: u32 = 900;
/// slug 精确命中
const SCORE_SLUG_EXACT: u32 = 850;
/// 标题以查询开头
const SCORE_TITLE_PREFIX: u32 = 100;
/// 标题包含查询
const SCORE_TITLE_CONTAINS: u32 = 50;
/// slug 包含连字符化查询
const SCORE_SLUG_CONTAINS: u32 = 30;
/// 标题词以查询词开头（逐词对累加）
const SCORE_WORD_PREFIX: u32 = 20;
/// 标题词包含查询词（逐词对累加）
const SCORE_WORD_CONTAINS: u32 = 10;

/// 计算候选项得分
///
/// # 参数
/// - `candidate`: 候选题目
/// - `query_lower`: 已小写、已 trim 的查询
/// - `query_number`: 查询为纯数字时的题号
///
/// 前三档命中即短路返回，否则按规则累加
pub fn score(
    candidate: &ProblemIdentity,
    query_lower: &str,
    query_number: Option<&str>,
) -> u32 {
    let title_lower = candidate.title.to_lowercase();
    let slug_lower = candidate.slug.to_lowercase();

    // 第一档：题号精确命中
    if let Some(number) = query_number {
        if candidate.frontend_id == number {
            return SCORE_NUMBER_EXACT;
        }
    }

    // 第二档：标题精确命中
    if title_lower == query_lower {
        return SCORE_TITLE_EXACT;
    }

    // 第三档：slug 精确命中（原样或空白转连字符后）
    let hyphenated_query = hyphenate(query_lower);
    if slug_lower == query_lower || slug_lower == hyphenated_query {
        return SCORE_SLUG_EXACT;
    }

    // 累加档
    let mut score = 0;

    if title_lower.starts_with(query_lower) {
        score += SCORE_TITLE_PREFIX;
    }
    if title_lower.contains(query_lower) {
        score += SCORE_TITLE_CONTAINS;
    }
    if slug_lower.contains(&hyphenated_query) {
        score += SCORE_SLUG_CONTAINS;
    }

    // 词级匹配：对所有词对累加，不是只取最佳
    for q_word in query_lower.split_whitespace() {
        if q_word.chars().count() < 2 {
            continue;
        }
        for t_word in title_lower.split_whitespace() {
            if t_word.starts_with(q_word) {
                score += SCORE_WORD_PREFIX;
            } else if t_word.contains(q_word) {
                score += SCORE_WORD_CONTAINS;
            }
        }
    }

    score
}
