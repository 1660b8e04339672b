use serde::{Deserialize, Serialize};

/// 关联账号的公开做题统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    pub username: String,
    pub ranking: u64,
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub total_questions: u32,
    pub easy_total: u32,
    pub medium_total: u32,
    pub hard_total: u32,
    /// 已解题数占总题数的百分比（取整）
    pub acceptance_rate: u32,
    pub contribution_points: u32,
    pub reputation: u32,
}
