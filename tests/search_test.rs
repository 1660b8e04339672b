//! 搜索子系统测试：规范化、打分、解析流程（用桩数据源离线验证）

use leetcode_search_submit::config::Config;
use leetcode_search_submit::error::{AppError, AppResult};
use leetcode_search_submit::models::{
    Difficulty, ProblemDetail, ProblemIdentity, ResolutionOutcome,
};
use leetcode_search_submit::services::fallback_catalog::fallback_catalog;
use leetcode_search_submit::services::normalizer::{is_problem_number, normalize};
use leetcode_search_submit::services::scorer;
use leetcode_search_submit::workflow::{ProblemSource, Resolver};

/// 桩数据源：候选列表固定，详情只对目录内的 slug 成功
struct StubSource {
    catalog: Vec<ProblemIdentity>,
    detail_available: bool,
}

impl StubSource {
    fn new(catalog: Vec<ProblemIdentity>) -> Self {
        Self {
            catalog,
            detail_available: true,
        }
    }

    fn without_detail(catalog: Vec<ProblemIdentity>) -> Self {
        Self {
            catalog,
            detail_available: false,
        }
    }
}

impl ProblemSource for StubSource {
    async fn candidates(&self) -> Vec<ProblemIdentity> {
        self.catalog.clone()
    }

    async fn detail(&self, slug: &str) -> AppResult<ProblemDetail> {
        if !self.detail_available {
            return Err(AppError::bad_status("stub", 503));
        }
        match self.catalog.iter().find(|c| c.slug == slug) {
            Some(identity) => Ok(ProblemDetail {
                frontend_id: identity.frontend_id.clone(),
                title: identity.title.clone(),
                slug: identity.slug.clone(),
                difficulty: identity.difficulty,
                description: format!("{} 的描述", identity.title),
                examples: Vec::new(),
                constraints: Vec::new(),
                url: format!("https://leetcode.com/problems/{}/", identity.slug),
                code_snippets: Vec::new(),
                sample_test_cases: Vec::new(),
            }),
            None => Err(AppError::question_not_found(slug)),
        }
    }
}

fn resolver_with(source: StubSource) -> Resolver<StubSource> {
    Resolver::new(source, &Config::default())
}

fn candidate(id: &str, title: &str, slug: &str) -> ProblemIdentity {
    ProblemIdentity::new(id, title, slug, Difficulty::Easy)
}

// ========== 规范化 ==========

#[test]
fn test_normalize_idempotent() {
    let samples = [
        "Two Sum",
        "1. Two Sum",
        "https://leetcode.com/problems/two-sum/?envType=daily",
        "  String to Integer (atoi)  ",
        "3Sum",
        "already-canonical-slug",
        "",
    ];
    for sample in samples {
        let once = normalize(sample);
        let twice = normalize(&once);
        assert_eq!(once, twice, "规范化应该幂等: {:?}", sample);
    }
}

#[test]
fn test_normalize_url_precedence() {
    assert_eq!(
        normalize("https://leetcode.com/problems/two-sum/"),
        "two-sum"
    );
    assert_eq!(
        normalize("https://leetcode.com/problems/two-sum/?envType=daily-question"),
        "two-sum",
        "URL 的尾随参数应该被忽略"
    );
    assert_eq!(
        normalize("leetcode.com/problems/median-of-two-sorted-arrays/description/"),
        "median-of-two-sorted-arrays"
    );
}

#[test]
fn test_normalize_title_forms() {
    assert_eq!(normalize("1. Two Sum"), "two-sum");
    assert_eq!(normalize("String to Integer (atoi)"), "string-to-integer-atoi");
    assert_eq!(normalize("  Merge   k  Sorted Lists "), "merge-k-sorted-lists");
    assert_eq!(normalize("two-sum"), "two-sum", "已规范的 slug 应该原样返回");
}

#[test]
fn test_is_problem_number() {
    assert!(is_problem_number("1"));
    assert!(is_problem_number(" 1266 "));
    assert!(!is_problem_number("1. Two Sum"));
    assert!(!is_problem_number(""));
    assert!(!is_problem_number("12a"));
}

// ========== 打分 ==========

#[test]
fn test_score_tiers_are_monotonic() {
    let two_sum = candidate("1", "Two Sum", "two-sum");

    // 题号精确命中永远高于任何累加分
    let number_score = scorer::score(&two_sum, "1", Some("1"));
    assert_eq!(number_score, 1000);

    let title_score = scorer::score(&two_sum, "two sum", None);
    assert_eq!(title_score, 900);

    let slug_score = scorer::score(&two_sum, "two-sum", None);
    assert_eq!(slug_score, 850);

    let partial = scorer::score(&two_sum, "two", None);
    assert!(partial > 0, "前缀匹配应该得到累加分");
    assert!(partial < 900, "累加分不应该达到精确命中档");
    assert!(number_score > title_score && title_score > slug_score && slug_score > partial);
}

#[test]
fn test_score_accumulation_rules() {
    let two_sum = candidate("1", "Two Sum", "two-sum");

    // "two": 标题前缀 100 + 标题包含 50 + slug 包含 30 + 词前缀 20
    assert_eq!(scorer::score(&two_sum, "two", None), 200);

    // "sum": 标题包含 50 + slug 包含 30 + 词前缀 20
    assert_eq!(scorer::score(&two_sum, "sum", None), 100);

    let three_sum = candidate("15", "3Sum", "3sum");
    // "sum": 标题包含 50 + slug 包含 30 + 词包含 10
    assert_eq!(scorer::score(&three_sum, "sum", None), 90);
}

#[test]
fn test_score_no_match_is_zero() {
    let two_sum = candidate("1", "Two Sum", "two-sum");
    assert_eq!(
        scorer::score(&two_sum, "completely-unrelated-xyz", None),
        0,
        "毫无交集的查询得分应该是 0"
    );
}

#[test]
fn test_score_short_tokens_skipped() {
    let candidate = candidate("9", "Palindrome Number", "palindrome-number");
    // 单字符词不参与词级匹配
    assert_eq!(scorer::score(&candidate, "p q", None), 0);
}

// ========== 解析流程 ==========

#[tokio::test]
async fn test_resolve_numeric_exact() {
    let resolver = resolver_with(StubSource::new(fallback_catalog()));

    let outcome = resolver.resolve("1").await;
    match outcome {
        ResolutionOutcome::Exact(detail) => {
            assert_eq!(detail.numbered_title(), "1. Two Sum");
            assert_eq!(detail.difficulty, Difficulty::Easy);
        }
        other => panic!("题号 1 应该精确命中, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_numeric_not_found() {
    let resolver = resolver_with(StubSource::new(fallback_catalog()));

    let outcome = resolver.resolve("999999").await;
    match outcome {
        ResolutionOutcome::NotFound(reason) => {
            assert!(
                reason.contains("999999"),
                "未找到的原因应该带上题号: {}",
                reason
            );
        }
        other => panic!("不存在的题号应该返回 NotFound, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_title_exact() {
    let resolver = resolver_with(StubSource::new(fallback_catalog()));

    let outcome = resolver.resolve("two sum").await;
    match outcome {
        ResolutionOutcome::Exact(detail) => {
            assert_eq!(detail.numbered_title(), "1. Two Sum");
        }
        other => panic!("\"two sum\" 应该精确命中, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_url_query() {
    let resolver = resolver_with(StubSource::new(fallback_catalog()));

    let outcome = resolver
        .resolve("https://leetcode.com/problems/lru-cache/")
        .await;
    match outcome {
        ResolutionOutcome::Exact(detail) => assert_eq!(detail.slug, "lru-cache"),
        other => panic!("URL 查询应该精确命中, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_gibberish_not_found() {
    let resolver = resolver_with(StubSource::new(fallback_catalog()));

    let outcome = resolver.resolve("xyzxyz-not-real").await;
    assert!(
        outcome.is_not_found(),
        "乱码查询应该返回 NotFound, 实际: {:?}",
        outcome
    );
}

#[tokio::test]
async fn test_resolve_suggestions_strictly_ordered() {
    let catalog = fallback_catalog();
    let resolver = resolver_with(StubSource::new(catalog.clone()));

    let outcome = resolver.resolve("sum").await;
    let suggestions = match outcome {
        ResolutionOutcome::Suggestions(suggestions) => suggestions,
        other => panic!("\"sum\" 应该返回建议列表, 实际: {:?}", other),
    };

    assert!(suggestions.len() > 1);
    assert!(suggestions.len() <= 8, "建议数量不应超过上限");

    // Two Sum 的词前缀分高于 3Sum 的词包含分
    let two_sum_pos = suggestions.iter().position(|s| s.slug == "two-sum");
    let three_sum_pos = suggestions.iter().position(|s| s.slug == "3sum");
    assert!(two_sum_pos.is_some(), "建议里应该有 Two Sum");
    assert!(
        two_sum_pos < three_sum_pos || three_sum_pos.is_none(),
        "Two Sum 应该排在 3Sum 前面"
    );

    // 分数非严格递增：重新打分验证降序
    let mut last_score = u32::MAX;
    for suggestion in &suggestions {
        let score = scorer::score(suggestion, "sum", None);
        assert!(score <= last_score, "建议列表应该按分数降序");
        last_score = score;
    }
}

#[tokio::test]
async fn test_resolve_suggestions_no_duplicate_slug() {
    let mut catalog = fallback_catalog();
    // 人为制造重复目录项
    catalog.push(ProblemIdentity::new("1", "Two Sum", "two-sum", Difficulty::Easy));
    let resolver = resolver_with(StubSource::new(catalog));

    let outcome = resolver.resolve("sum").await;
    if let ResolutionOutcome::Suggestions(suggestions) = outcome {
        let mut slugs: Vec<&str> = suggestions.iter().map(|s| s.slug.as_str()).collect();
        slugs.sort();
        let before = slugs.len();
        slugs.dedup();
        assert_eq!(before, slugs.len(), "建议列表不应该有重复 slug");
    }
}

#[tokio::test]
async fn test_resolve_single_candidate_degrades_on_detail_failure() {
    // 只有一个候选且详情拉取失败：应该降级为建议，而不是硬失败
    let catalog = vec![candidate("200", "Number of Islands", "number-of-islands")];
    let resolver = resolver_with(StubSource::without_detail(catalog));

    let outcome = resolver.resolve("islands").await;
    match outcome {
        ResolutionOutcome::Suggestions(suggestions) => {
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].slug, "number-of-islands");
        }
        other => panic!("详情失败时应该降级为建议, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_swallows_confident_guess_failure() {
    // 详情全挂时，自信猜测的失败不应该上抛，而是落入模糊搜索
    let resolver = resolver_with(StubSource::without_detail(fallback_catalog()));

    let outcome = resolver.resolve("two sum").await;
    match outcome {
        ResolutionOutcome::Suggestions(suggestions) => {
            assert_eq!(
                suggestions[0].slug, "two-sum",
                "降级后的建议列表应该把 two-sum 排在首位"
            );
        }
        other => panic!("应该降级为建议列表, 实际: {:?}", other),
    }
}
