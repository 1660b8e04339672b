//! 题目内容解析测试（上游 HTML 的尽力而为提取）

use leetcode_search_submit::services::detail::{
    parse_constraints, parse_description, parse_examples,
};

/// 仿上游 content 字段的典型 HTML
const SAMPLE_CONTENT: &str = r#"<p>Given an array of integers <code>nums</code>&nbsp;and an integer <code>target</code>, return <em>indices of the two numbers such that they add up to target</em>.</p>

<p>&nbsp;</p>
<p><strong class="example">Example 1:</strong></p>

<pre>
<strong>Input:</strong> nums = [2,7,11,15], target = 9
<strong>Output:</strong> [0,1]
<strong>Explanation:</strong> Because nums[0] + nums[1] == 9, we return [0, 1].
</pre>

<p><strong class="example">Example 2:</strong></p>

<pre>
<strong>Input:</strong> nums = [3,2,4], target = 6
<strong>Output:</strong> [1,2]
</pre>

<p><strong>Constraints:</strong></p>

<ul>
	<li><code>2 &lt;= nums.length &lt;= 10^4</code></li>
	<li><code>-10^9 &lt;= nums[i] &lt;= 10^9</code></li>
	<li><strong>Only one valid answer exists.</strong></li>
</ul>
"#;

#[test]
fn test_parse_description_stops_before_examples() {
    let description = parse_description(SAMPLE_CONTENT);
    assert!(
        description.starts_with("Given an array of integers"),
        "描述应该从正文开头开始: {}",
        description
    );
    assert!(
        !description.contains("Example"),
        "描述不应该包含示例段: {}",
        description
    );
    assert!(
        description.contains("add up to target"),
        "HTML 标签应该被剥掉而保留文本"
    );
}

#[test]
fn test_parse_examples_captures_all_blocks() {
    let examples = parse_examples(SAMPLE_CONTENT);
    assert_eq!(examples.len(), 2, "应该解析出两个示例");

    assert_eq!(examples[0].input, "nums = [2,7,11,15], target = 9");
    assert_eq!(examples[0].output, "[0,1]");
    assert_eq!(
        examples[0].explanation.as_deref(),
        Some("Because nums[0] + nums[1] == 9, we return [0, 1]."),
    );

    assert_eq!(examples[1].input, "nums = [3,2,4], target = 6");
    assert_eq!(examples[1].output, "[1,2]");
    assert_eq!(examples[1].explanation, None, "没有解释段就留空");
}

#[test]
fn test_parse_constraints_collects_lines() {
    let constraints = parse_constraints(SAMPLE_CONTENT);
    assert_eq!(constraints.len(), 3, "应该收集全部约束行: {:?}", constraints);
    assert_eq!(constraints[0], "2 <= nums.length <= 10^4");
    assert!(constraints[2].contains("Only one valid answer exists."));
}

#[test]
fn test_missing_sections_yield_empty() {
    let bare = "<p>Just a statement without structure.</p>";
    assert_eq!(parse_examples(bare).len(), 0, "没有示例段就返回空列表");
    assert_eq!(parse_constraints(bare).len(), 0, "没有约束段就返回空列表");
    assert_eq!(
        parse_description(bare),
        "Just a statement without structure."
    );
}

#[test]
fn test_entities_are_decoded() {
    let content = "<p>a &lt;= b &amp;&amp; b &gt;= c</p>";
    assert_eq!(parse_description(content), "a <= b && b >= c");
}

#[test]
fn test_constraints_exclude_stray_example_lines() {
    let content = "Constraints:\n1 <= n <= 100\nExample leftovers should be dropped\n";
    let constraints = parse_constraints(content);
    assert_eq!(constraints, vec!["1 <= n <= 100".to_string()]);
}
