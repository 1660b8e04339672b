use serde::{Deserialize, Serialize};

use crate::models::problem::{ProblemDetail, ProblemIdentity};

/// 打分后的候选项
///
/// 只在一次解析调用内部存在，排序之后即丢弃
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub identity: ProblemIdentity,
    pub score: u32,
}

/// 一次查询的解析结果
///
/// 三个分支有且仅有一个成立
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// 命中唯一题目，附带完整内容
    Exact(ProblemDetail),
    /// 多个候选，按分数从高到低排列
    Suggestions(Vec<ProblemIdentity>),
    /// 无法解析，附带原因
    NotFound(String),
}

impl ResolutionOutcome {
    pub fn is_exact(&self) -> bool {
        matches!(self, ResolutionOutcome::Exact(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolutionOutcome::NotFound(_))
    }
}
