//! 判题文本分类测试

use leetcode_search_submit::models::SubmissionStatus;
use leetcode_search_submit::workflow::classify_page_text;

#[test]
fn test_accepted_requires_corroboration() {
    // 只有 "Accepted" 没有 ms/MB 佐证：视为尚未出最终结果
    assert!(
        classify_page_text("Submission Accepted is loading...").is_none(),
        "没有耗时/内存佐证的 Accepted 不应该被当成终态"
    );

    // ms + MB 齐备才算数
    let verdict =
        classify_page_text("Accepted Runtime: 42 ms Memory: 14.2 MB Beats 98%").unwrap();
    assert_eq!(verdict.status, SubmissionStatus::Accepted);
    assert_eq!(verdict.runtime.as_deref(), Some("42 ms"));
    assert_eq!(verdict.memory.as_deref(), Some("14.2 MB"));
}

#[test]
fn test_wrong_answer_beats_incidental_accepted() {
    // 页面早些位置有残留的 "Accepted" 字样（无佐证），真正的判决是 Wrong Answer
    let text = "Your previous run: Accepted\nResult: Wrong Answer\n3/5 testcases passed";
    let verdict = classify_page_text(text).unwrap();
    assert_eq!(verdict.status, SubmissionStatus::WrongAnswer);
    assert_eq!(verdict.test_cases_passed, Some(3));
    assert_eq!(verdict.total_test_cases, Some(5));
}

#[test]
fn test_accepted_wins_when_corroborated() {
    // Accepted 带齐佐证时优先级最高
    let text = "Accepted 12 ms 9.8 MB (previous attempt: Wrong Answer)";
    let verdict = classify_page_text(text).unwrap();
    assert_eq!(verdict.status, SubmissionStatus::Accepted);
}

#[test]
fn test_terminal_states_mapping() {
    let cases = [
        ("Runtime Error on line 3", SubmissionStatus::RuntimeError),
        ("Compile Error: expected ;", SubmissionStatus::CompileError),
        ("Compilation Error in Solution.java", SubmissionStatus::CompileError),
        ("Time Limit Exceeded", SubmissionStatus::TimeLimitExceeded),
        ("Memory Limit Exceeded", SubmissionStatus::MemoryLimitExceeded),
    ];
    for (text, expected) in cases {
        let verdict = classify_page_text(text)
            .unwrap_or_else(|| panic!("应该分类出终态: {}", text));
        assert_eq!(verdict.status, expected, "文本: {}", text);
    }
}

#[test]
fn test_no_terminal_state_returns_none() {
    assert!(classify_page_text("Judging... please wait").is_none());
    assert!(classify_page_text("").is_none());
}

#[test]
fn test_numeric_extraction_is_optional() {
    // Wrong Answer 没有用例计数时字段留空，不影响分类
    let verdict = classify_page_text("Wrong Answer").unwrap();
    assert_eq!(verdict.status, SubmissionStatus::WrongAnswer);
    assert_eq!(verdict.test_cases_passed, None);
    assert_eq!(verdict.total_test_cases, None);
}

#[test]
fn test_outcome_never_pending() {
    let texts = [
        "Accepted 42 ms 14.2 MB",
        "Wrong Answer 3/5",
        "Runtime Error",
        "Time Limit Exceeded",
    ];
    for text in texts {
        let outcome = classify_page_text(text).unwrap().into_outcome();
        assert_ne!(
            outcome.status,
            SubmissionStatus::Pending,
            "返回的结果永远不应该是 Pending"
        );
    }
}
