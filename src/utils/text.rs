//! 文本处理辅助函数

use regex::Regex;

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

/// 去掉 HTML 标签，标签位置替换为指定分隔符
pub fn strip_tags(html: &str, replacement: &str) -> String {
    // 标签正则是固定字面量，编译不会失败
    let re = Regex::new(r"<[^>]+>").expect("标签正则无效");
    re.replace_all(html, replacement).to_string()
}

/// 解码常见 HTML 实体
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
