//! 语言 slug 与编辑器下拉框展示名的对照表

use phf::phf_map;

/// slug → 编辑器里的展示名
///
/// 选择语言时用展示名去匹配下拉选项
static EDITOR_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "cpp" => "C++",
    "java" => "Java",
    "python" => "Python",
    "python3" => "Python3",
    "c" => "C",
    "csharp" => "C#",
    "javascript" => "JavaScript",
    "typescript" => "TypeScript",
    "php" => "PHP",
    "swift" => "Swift",
    "kotlin" => "Kotlin",
    "dart" => "Dart",
    "golang" => "Go",
    "ruby" => "Ruby",
    "scala" => "Scala",
    "rust" => "Rust",
    "racket" => "Racket",
    "erlang" => "Erlang",
    "elixir" => "Elixir",
};

/// 查找语言 slug 对应的展示名，未知 slug 原样返回（大写首字母兜底交给上游匹配）
pub fn editor_label(lang_slug: &str) -> &str {
    EDITOR_LABELS
        .get(lang_slug)
        .copied()
        .unwrap_or(lang_slug)
}
