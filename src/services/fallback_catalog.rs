//! 内置候选题目兜底列表
//!
//! 不是远端目录的缓存，而是独立打包的静态资产：
//! 断网时也要能答出常见题号/题名的查询

use crate::models::Difficulty::{self, Easy, Hard, Medium};
use crate::models::ProblemIdentity;

/// (题号, 标题, slug, 难度)
const WELL_KNOWN_PROBLEMS: &[(&str, &str, &str, Difficulty)] = &[
    ("1", "Two Sum", "two-sum", Easy),
    ("2", "Add Two Numbers", "add-two-numbers", Medium),
    ("3", "Longest Substring Without Repeating Characters", "longest-substring-without-repeating-characters", Medium),
    ("4", "Median of Two Sorted Arrays", "median-of-two-sorted-arrays", Hard),
    ("5", "Longest Palindromic Substring", "longest-palindromic-substring", Medium),
    ("6", "Zigzag Conversion", "zigzag-conversion", Medium),
    ("7", "Reverse Integer", "reverse-integer", Medium),
    ("8", "String to Integer (atoi)", "string-to-integer-atoi", Medium),
    ("9", "Palindrome Number", "palindrome-number", Easy),
    ("10", "Regular Expression Matching", "regular-expression-matching", Hard),
    ("11", "Container With Most Water", "container-with-most-water", Medium),
    ("12", "Integer to Roman", "integer-to-roman", Medium),
    ("13", "Roman to Integer", "roman-to-integer", Easy),
    ("14", "Longest Common Prefix", "longest-common-prefix", Easy),
    ("15", "3Sum", "3sum", Medium),
    ("20", "Valid Parentheses", "valid-parentheses", Easy),
    ("21", "Merge Two Sorted Lists", "merge-two-sorted-lists", Easy),
    ("22", "Generate Parentheses", "generate-parentheses", Medium),
    ("23", "Merge k Sorted Lists", "merge-k-sorted-lists", Hard),
    ("26", "Remove Duplicates from Sorted Array", "remove-duplicates-from-sorted-array", Easy),
    ("33", "Search in Rotated Sorted Array", "search-in-rotated-sorted-array", Medium),
    ("42", "Trapping Rain Water", "trapping-rain-water", Hard),
    ("49", "Group Anagrams", "group-anagrams", Medium),
    ("53", "Maximum Subarray", "maximum-subarray", Medium),
    ("55", "Jump Game", "jump-game", Medium),
    ("56", "Merge Intervals", "merge-intervals", Medium),
    ("70", "Climbing Stairs", "climbing-stairs", Easy),
    ("72", "Edit Distance", "edit-distance", Medium),
    ("76", "Minimum Window Substring", "minimum-window-substring", Hard),
    ("78", "Subsets", "subsets", Medium),
    ("79", "Word Search", "word-search", Medium),
    ("94", "Binary Tree Inorder Traversal", "binary-tree-inorder-traversal", Easy),
    ("98", "Validate Binary Search Tree", "validate-binary-search-tree", Medium),
    ("100", "Same Tree", "same-tree", Easy),
    ("101", "Symmetric Tree", "symmetric-tree", Easy),
    ("102", "Binary Tree Level Order Traversal", "binary-tree-level-order-traversal", Medium),
    ("104", "Maximum Depth of Binary Tree", "maximum-depth-of-binary-tree", Easy),
    ("121", "Best Time to Buy and Sell Stock", "best-time-to-buy-and-sell-stock", Easy),
    ("124", "Binary Tree Maximum Path Sum", "binary-tree-maximum-path-sum", Hard),
    ("128", "Longest Consecutive Sequence", "longest-consecutive-sequence", Medium),
    ("136", "Single Number", "single-number", Easy),
    ("139", "Word Break", "word-break", Medium),
    ("141", "Linked List Cycle", "linked-list-cycle", Easy),
    ("146", "LRU Cache", "lru-cache", Medium),
    ("152", "Maximum Product Subarray", "maximum-product-subarray", Medium),
    ("153", "Find Minimum in Rotated Sorted Array", "find-minimum-in-rotated-sorted-array", Medium),
    ("155", "Min Stack", "min-stack", Medium),
    ("160", "Intersection of Two Linked Lists", "intersection-of-two-linked-lists", Easy),
    ("169", "Majority Element", "majority-element", Easy),
    ("198", "House Robber", "house-robber", Medium),
    ("200", "Number of Islands", "number-of-islands", Medium),
    ("206", "Reverse Linked List", "reverse-linked-list", Easy),
    ("207", "Course Schedule", "course-schedule", Medium),
    ("208", "Implement Trie (Prefix Tree)", "implement-trie-prefix-tree", Medium),
    ("215", "Kth Largest Element in an Array", "kth-largest-element-in-an-array", Medium),
    ("226", "Invert Binary Tree", "invert-binary-tree", Easy),
    ("230", "Kth Smallest Element in a BST", "kth-smallest-element-in-a-bst", Medium),
    ("234", "Palindrome Linked List", "palindrome-linked-list", Easy),
    ("236", "Lowest Common Ancestor of a Binary Tree", "lowest-common-ancestor-of-a-binary-tree", Medium),
    ("238", "Product of Array Except Self", "product-of-array-except-self", Medium),
    ("239", "Sliding Window Maximum", "sliding-window-maximum", Hard),
    ("240", "Search a 2D Matrix II", "search-a-2d-matrix-ii", Medium),
    ("283", "Move Zeroes", "move-zeroes", Easy),
    ("287", "Find the Duplicate Number", "find-the-duplicate-number", Medium),
    ("295", "Find Median from Data Stream", "find-median-from-data-stream", Hard),
    ("297", "Serialize and Deserialize Binary Tree", "serialize-and-deserialize-binary-tree", Hard),
    ("300", "Longest Increasing Subsequence", "longest-increasing-subsequence", Medium),
    ("322", "Coin Change", "coin-change", Medium),
    ("347", "Top K Frequent Elements", "top-k-frequent-elements", Medium),
    ("394", "Decode String", "decode-string", Medium),
    ("416", "Partition Equal Subset Sum", "partition-equal-subset-sum", Medium),
    ("437", "Path Sum III", "path-sum-iii", Medium),
    ("438", "Find All Anagrams in a String", "find-all-anagrams-in-a-string", Medium),
    ("543", "Diameter of Binary Tree", "diameter-of-binary-tree", Easy),
    ("560", "Subarray Sum Equals K", "subarray-sum-equals-k", Medium),
    ("617", "Merge Two Binary Trees", "merge-two-binary-trees", Easy),
    ("739", "Daily Temperatures", "daily-temperatures", Medium),
    ("763", "Partition Labels", "partition-labels", Medium),
];

/// 兜底候选列表（保持表内顺序）
pub fn fallback_catalog() -> Vec<ProblemIdentity> {
    WELL_KNOWN_PROBLEMS
        .iter()
        .map(|(id, title, slug, difficulty)| {
            ProblemIdentity::new(*id, *title, *slug, *difficulty)
        })
        .collect()
}
