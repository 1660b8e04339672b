//! 智能搜索 - 流程层
//!
//! 把任意查询解析为精确题目、候选列表或未找到。
//! 决策顺序（每个分支成功即终止）：
//! 1. 纯数字 → 按题号精确匹配
//! 2. 题目 URL → 直接按 slug 拉详情
//! 3. 规范化后像 slug → 自信猜测拉一次详情，失败吞掉
//! 4. 模糊打分排序兜底
//!
//! 只要还有可用的候选列表，本流程就不会把错误抛给调用方

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ProblemDetail, ProblemIdentity, ResolutionOutcome, ScoredCandidate};
use crate::services::catalog::CandidateSource;
use crate::services::detail::DetailFetcher;
use crate::services::normalizer::{is_problem_number, is_problem_url, normalize};
use crate::services::scorer;

/// 题目数据来源的能力边界
///
/// 解析流程只依赖这两个能力，测试用桩实现替换真实网络
pub trait ProblemSource {
    /// 获取候选题目列表（按目录顺序，失败时内部兜底）
    fn candidates(&self) -> impl std::future::Future<Output = Vec<ProblemIdentity>> + Send;
    /// 按 slug 拉取完整内容
    fn detail(&self, slug: &str) -> impl std::future::Future<Output = AppResult<ProblemDetail>> + Send;
}

/// 真实数据来源：远端目录 + 详情接口
pub struct LiveProblemSource {
    catalog: CandidateSource,
    detail: DetailFetcher,
}

impl LiveProblemSource {
    pub fn new(catalog: CandidateSource, detail: DetailFetcher) -> Self {
        Self { catalog, detail }
    }
}

impl ProblemSource for LiveProblemSource {
    async fn candidates(&self) -> Vec<ProblemIdentity> {
        self.catalog.candidates().await
    }

    async fn detail(&self, slug: &str) -> AppResult<ProblemDetail> {
        self.detail.fetch(slug).await
    }
}

/// 智能搜索流程
pub struct Resolver<S: ProblemSource> {
    source: S,
    suggestion_limit: usize,
}

impl<S: ProblemSource> Resolver<S> {
    /// 创建新的解析流程
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            source,
            suggestion_limit: config.suggestion_limit,
        }
    }

    /// 解析一次查询，总是返回一个结果分支
    pub async fn resolve(&self, query: &str) -> ResolutionOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return ResolutionOutcome::NotFound("No matching problems found".to_string());
        }

        // ========== 分支 1: 纯数字题号 ==========
        if is_problem_number(trimmed) {
            info!("🔍 按题号搜索: {}", trimmed);
            return self.resolve_by_number(trimmed).await;
        }

        // ========== 分支 2: 题目 URL ==========
        if is_problem_url(trimmed) {
            let slug = normalize(trimmed);
            info!("🔍 按 URL 直接拉取: {}", slug);
            return match self.source.detail(&slug).await {
                Ok(detail) => ResolutionOutcome::Exact(detail),
                Err(e) => ResolutionOutcome::NotFound(e.to_string()),
            };
        }

        // ========== 分支 3: 自信猜测（查询本身可能就是合法 slug） ==========
        let slug = normalize(trimmed);
        if slug.chars().count() >= 2 {
            match self.source.detail(&slug).await {
                Ok(detail) => {
                    info!("✓ 猜测命中: {}", slug);
                    return ResolutionOutcome::Exact(detail);
                }
                Err(e) => {
                    // 吞掉失败落入模糊搜索；疑似上游故障时留一条痕迹
                    if !e.is_not_found() {
                        warn!("⚠️ 猜测 slug {} 失败（疑似上游故障）: {}", slug, e);
                    } else {
                        debug!("猜测 slug {} 未命中，转模糊搜索", slug);
                    }
                }
            }
        }

        // ========== 分支 4: 模糊搜索兜底 ==========
        info!("🔍 模糊搜索: {}", trimmed);
        self.resolve_fuzzy(trimmed).await
    }

    /// 题号分支：精确命中拉详情，否则给建议/未找到
    async fn resolve_by_number(&self, number: &str) -> ResolutionOutcome {
        let candidates = self.source.candidates().await;
        let ranked = self.rank(&candidates, number, Some(number));

        let exact = ranked
            .iter()
            .find(|c| c.identity.frontend_id == number)
            .map(|c| c.identity.clone());

        if let Some(identity) = exact {
            match self.source.detail(&identity.slug).await {
                Ok(detail) => return ResolutionOutcome::Exact(detail),
                Err(e) => {
                    warn!("⚠️ 题号 {} 的详情拉取失败: {}", number, e);
                    // 落回建议列表，不把错误当硬失败
                }
            }
        }

        let suggestions = self.take_identities(ranked);
        if suggestions.is_empty() {
            ResolutionOutcome::NotFound(format!("No question found with number {}", number))
        } else {
            ResolutionOutcome::Suggestions(suggestions)
        }
    }

    /// 模糊分支：打分排序；唯一结果升级为精确，失败降级回建议
    async fn resolve_fuzzy(&self, query: &str) -> ResolutionOutcome {
        let candidates = self.source.candidates().await;
        let query_lower = query.to_lowercase();
        let ranked = self.rank(&candidates, &query_lower, None);
        let suggestions = self.take_identities(ranked);

        match suggestions.len() {
            0 => ResolutionOutcome::NotFound("No matching problems found".to_string()),
            1 => {
                // 唯一候选足够自信，试着直接给出完整内容
                let only = &suggestions[0];
                match self.source.detail(&only.slug).await {
                    Ok(detail) => ResolutionOutcome::Exact(detail),
                    Err(e) => {
                        warn!("⚠️ 唯一候选 {} 的详情拉取失败，降级为建议: {}", only.slug, e);
                        ResolutionOutcome::Suggestions(suggestions)
                    }
                }
            }
            _ => ResolutionOutcome::Suggestions(suggestions),
        }
    }

    /// slug 去重 → 打分 → 稳定降序（分数相同保持目录顺序）
    fn rank(
        &self,
        candidates: &[ProblemIdentity],
        query_lower: &str,
        query_number: Option<&str>,
    ) -> Vec<ScoredCandidate> {
        let mut seen = HashSet::new();
        let mut scored: Vec<ScoredCandidate> = Vec::new();

        for candidate in candidates {
            if !seen.insert(candidate.slug.clone()) {
                continue;
            }
            let score = scorer::score(candidate, query_lower, query_number);
            if score > 0 {
                scored.push(ScoredCandidate {
                    identity: candidate.clone(),
                    score,
                });
            }
        }

        // Vec::sort_by 是稳定排序，平分时目录顺序即最终顺序
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// 截断到建议上限并丢弃分数
    fn take_identities(&self, ranked: Vec<ScoredCandidate>) -> Vec<ProblemIdentity> {
        ranked
            .into_iter()
            .take(self.suggestion_limit)
            .map(|c| c.identity)
            .collect()
    }
}
