//! 离线降级行为测试
//!
//! 把端点指向本机未监听的端口，验证远端不可用时的兜底路径。
//! 不依赖外部网络

use std::time::Duration;

use leetcode_search_submit::config::Config;
use leetcode_search_submit::models::Difficulty;
use leetcode_search_submit::services::fallback_catalog::fallback_catalog;
use leetcode_search_submit::services::{CandidateSource, DailyFetcher, DetailFetcher};
use leetcode_search_submit::clients::GraphqlClient;
use leetcode_search_submit::utils::wait_until;
use leetcode_search_submit::workflow::{LiveProblemSource, Resolver};
use leetcode_search_submit::ResolutionOutcome;

/// 指向本机闭合端口的配置（连接立即被拒绝）
fn offline_config() -> Config {
    let mut config = Config::default();
    config.graphql_endpoint = "http://127.0.0.1:9/graphql/".to_string();
    config
}

#[tokio::test]
async fn test_catalog_falls_back_to_static_list() {
    let config = offline_config();
    let source = CandidateSource::new(GraphqlClient::new(&config), &config);

    let candidates = source.candidates().await;
    assert_eq!(
        candidates,
        fallback_catalog(),
        "远端不可用时应该返回完整的内置列表"
    );
    assert!(candidates.iter().any(|c| c.slug == "two-sum"));
}

#[tokio::test]
async fn test_daily_falls_back_with_today_date() {
    let config = offline_config();
    let fetcher = DailyFetcher::new(GraphqlClient::new(&config), &config);

    let challenge = fetcher.fetch().await;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(challenge.date, today, "兜底每日一题应该盖上今天的日期");
    assert_eq!(challenge.slug, "two-sum");
    assert_eq!(challenge.difficulty, Difficulty::Easy);
    assert!(!challenge.title.is_empty());
}

#[tokio::test]
async fn test_detail_fails_with_upstream_error_when_offline() {
    let config = offline_config();
    let fetcher = DetailFetcher::new(GraphqlClient::new(&config));

    let result = fetcher.fetch("two-sum").await;
    let err = result.expect_err("断网时详情拉取应该失败");
    assert!(!err.is_not_found(), "传输失败应该归类为上游错误而非未找到");
}

#[tokio::test]
async fn test_resolver_answers_common_query_offline() {
    // 候选目录走静态兜底，详情全挂：常见查询仍然要给出可用的建议
    let config = offline_config();
    let source = LiveProblemSource::new(
        CandidateSource::new(GraphqlClient::new(&config), &config),
        DetailFetcher::new(GraphqlClient::new(&config)),
    );
    let resolver = Resolver::new(source, &config);

    let outcome = resolver.resolve("two sum").await;
    match outcome {
        ResolutionOutcome::Suggestions(suggestions) => {
            assert_eq!(
                suggestions[0].slug, "two-sum",
                "断网时 \"two sum\" 仍应把 two-sum 排在建议首位"
            );
        }
        ResolutionOutcome::Exact(detail) => {
            // 理论上详情不可达，但若实现升级了离线详情也算满足契约
            assert_eq!(detail.slug, "two-sum");
        }
        ResolutionOutcome::NotFound(reason) => {
            panic!("断网时不应该返回 NotFound: {}", reason)
        }
    }
}

// ========== 轮询原语（虚拟时钟） ==========

#[tokio::test(start_paused = true)]
async fn test_wait_until_resolves_when_predicate_fires() {
    let mut calls = 0;
    let result = wait_until(
        Duration::from_secs(90),
        Duration::from_millis(2500),
        move || {
            calls += 1;
            let current = calls;
            async move { (current >= 3).then_some(current) }
        },
    )
    .await;

    assert_eq!(result, Some(3), "第三次检查应该命中");
}

#[tokio::test(start_paused = true)]
async fn test_wait_until_times_out() {
    let started = tokio::time::Instant::now();
    let result: Option<()> = wait_until(
        Duration::from_secs(90),
        Duration::from_millis(2500),
        || async { None },
    )
    .await;

    assert_eq!(result, None, "条件永不满足时应该超时返回 None");
    assert!(
        started.elapsed() <= Duration::from_secs(90),
        "总等待不应该超过上限"
    );
}
