use serde::{Deserialize, Serialize};

use crate::models::problem::Difficulty;

/// 每日一题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyChallenge {
    /// 日期（YYYY-MM-DD）
    pub date: String,
    /// 题号
    pub question_number: String,
    /// 标题
    pub title: String,
    /// 规范 slug
    pub slug: String,
    /// 难度
    pub difficulty: Difficulty,
    /// 题目页面 URL
    pub url: String,
}
