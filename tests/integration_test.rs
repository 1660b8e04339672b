//! 联网/浏览器集成测试
//!
//! 默认忽略，需要手动运行：cargo test -- --ignored

use leetcode_search_submit::app::App;
use leetcode_search_submit::config::Config;
use leetcode_search_submit::models::{ResolutionOutcome, SubmissionRequest, SubmissionStatus};
use leetcode_search_submit::utils::logger;

#[tokio::test]
#[ignore] // 需要外网
async fn test_live_search_two_sum() {
    logger::init();
    let app = App::initialize(Config::from_env());

    let outcome = app.resolve("two sum").await;
    match outcome {
        ResolutionOutcome::Exact(detail) => {
            assert_eq!(detail.numbered_title(), "1. Two Sum");
            assert!(!detail.description.is_empty(), "描述不应该为空");
            assert!(!detail.examples.is_empty(), "示例不应该为空");
        }
        other => panic!("\"two sum\" 应该精确命中, 实际: {:?}", other),
    }
}

#[tokio::test]
#[ignore] // 需要外网
async fn test_live_daily_challenge() {
    logger::init();
    let app = App::initialize(Config::from_env());

    let challenge = app.fetch_daily().await;
    assert!(!challenge.slug.is_empty());
    assert!(!challenge.date.is_empty());
}

#[tokio::test]
#[ignore] // 需要外网
async fn test_live_profile_stats() {
    logger::init();
    let app = App::initialize(Config::from_env());

    // 注意：请换成真实存在的用户名
    let stats = app
        .fetch_profile_stats("https://leetcode.com/u/leetcode/")
        .await
        .expect("拉取用户统计失败");
    assert!(!stats.username.is_empty());
}

#[tokio::test]
#[ignore] // 需要本机浏览器和有效的 LEETCODE_SESSION
async fn test_live_submit_returns_structured_outcome() {
    logger::init();
    let app = App::initialize(Config::from_env());

    let session_cookie =
        std::env::var("LEETCODE_SESSION").expect("缺少环境变量 LEETCODE_SESSION");

    let request = SubmissionRequest {
        problem_slug: "two-sum".to_string(),
        source_code: "class Solution:\n    def twoSum(self, nums, target):\n        seen = {}\n        for i, n in enumerate(nums):\n            if target - n in seen:\n                return [seen[target - n], i]\n            seen[n] = i\n".to_string(),
        language_slug: "python3".to_string(),
        session_cookie,
        csrf_token: std::env::var("LEETCODE_CSRF").ok(),
    };

    // 公开契约：无论中间哪一步失败，都必须拿到结构化结果而不是 panic
    let outcome = app.submit(&request).await;
    if outcome.status == SubmissionStatus::Error {
        assert!(
            outcome.error_message.as_deref().is_some_and(|m| !m.is_empty()),
            "Error 结果必须带非空错误信息"
        );
    }
    assert_ne!(outcome.status, SubmissionStatus::Pending);

    app.shutdown().await;
}

#[tokio::test]
#[ignore] // 需要本机浏览器（不需要有效凭证）
async fn test_submit_with_bad_credential_folds_to_error() {
    logger::init();
    let app = App::initialize(Config::from_env());

    let request = SubmissionRequest {
        problem_slug: "two-sum".to_string(),
        source_code: "print()".to_string(),
        language_slug: "python3".to_string(),
        session_cookie: "obviously-invalid".to_string(),
        csrf_token: None,
    };

    let outcome = app.submit(&request).await;
    // 凭证无效应该在登录检查一步被拦下，折叠为 Error 结果
    assert_ne!(outcome.status, SubmissionStatus::Pending);
    if outcome.status == SubmissionStatus::Error {
        assert!(outcome.error_message.is_some());
    }

    app.shutdown().await;
}
