use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::GraphqlClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::BrowserSession;
use crate::models::{
    DailyChallenge, ProblemDetail, ProfileStats, ResolutionOutcome, SubmissionOutcome,
    SubmissionRequest,
};
use crate::services::profile::extract_username;
use crate::services::{CandidateSource, DailyFetcher, DetailFetcher, ProfileFetcher};
use crate::workflow::{LiveProblemSource, Resolver, SubmitDriver};

/// 应用主结构
///
/// 把各服务接好线，对外暴露四个入口操作：
/// resolve / fetch_detail / fetch_daily / submit（外加账号统计）。
/// 历史记录等持久化由调用方负责，这里不落盘
pub struct App {
    resolver: Resolver<LiveProblemSource>,
    detail: DetailFetcher,
    daily: DailyFetcher,
    profile: ProfileFetcher,
    session: Arc<BrowserSession>,
    submit_driver: SubmitDriver,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let client = GraphqlClient::new(&config);

        let catalog = CandidateSource::new(client.clone(), &config);
        let resolver = Resolver::new(
            LiveProblemSource::new(catalog, DetailFetcher::new(client.clone())),
            &config,
        );

        let session = Arc::new(BrowserSession::new(&config));
        let submit_driver = SubmitDriver::new(session.clone(), &config);

        Self {
            resolver,
            detail: DetailFetcher::new(client.clone()),
            daily: DailyFetcher::new(client.clone(), &config),
            profile: ProfileFetcher::new(client),
            session,
            submit_driver,
        }
    }

    // ========== 对外入口 ==========

    /// 智能搜索
    pub async fn resolve(&self, query: &str) -> ResolutionOutcome {
        self.resolver.resolve(query).await
    }

    /// 按 slug 拉取题目详情
    pub async fn fetch_detail(&self, slug: &str) -> AppResult<ProblemDetail> {
        self.detail.fetch(slug).await
    }

    /// 每日一题（不失败）
    pub async fn fetch_daily(&self) -> DailyChallenge {
        self.daily.fetch().await
    }

    /// 关联账号统计
    pub async fn fetch_profile_stats(&self, url_or_username: &str) -> AppResult<ProfileStats> {
        let username = extract_username(url_or_username).ok_or_else(|| {
            crate::error::AppError::user_not_found(url_or_username)
        })?;
        self.profile.fetch(&username).await
    }

    /// 提交代码（永不抛错）
    pub async fn submit(&self, request: &SubmissionRequest) -> SubmissionOutcome {
        self.submit_driver.submit(request).await
    }

    /// 停机钩子：关闭共享浏览器进程
    pub async fn shutdown(&self) {
        self.session.shutdown().await;
    }

    // ========== CLI 调度 ==========

    /// 按命令行参数执行一次操作
    pub async fn run(&self, args: &[String]) -> Result<()> {
        match args {
            [cmd, query] if cmd == "search" => {
                let outcome = self.resolve(query).await;
                render_outcome(&outcome);
            }
            [cmd, slug] if cmd == "detail" => match self.fetch_detail(slug).await {
                Ok(detail) => render_detail(&detail),
                Err(e) => warn!("⚠️ {}", e),
            },
            [cmd] if cmd == "daily" => {
                let challenge = self.fetch_daily().await;
                render_daily(&challenge);
            }
            [cmd, user] if cmd == "profile" => match self.fetch_profile_stats(user).await {
                Ok(stats) => render_stats(&stats),
                Err(e) => warn!("⚠️ {}", e),
            },
            [cmd, slug, code_file, language] if cmd == "submit" => {
                let source_code = std::fs::read_to_string(code_file)?;
                let session_cookie = std::env::var("LEETCODE_SESSION")
                    .map_err(|_| anyhow::anyhow!("缺少环境变量 LEETCODE_SESSION"))?;
                let csrf_token = std::env::var("LEETCODE_CSRF").ok();

                let request = SubmissionRequest {
                    problem_slug: slug.clone(),
                    source_code,
                    language_slug: language.clone(),
                    session_cookie,
                    csrf_token,
                };

                let outcome = self.submit(&request).await;
                render_submission(&outcome);
                self.shutdown().await;
            }
            _ => {
                info!("用法:");
                info!("  search <查询>              智能搜索题目");
                info!("  detail <slug>              拉取题目详情");
                info!("  daily                      今日每日一题");
                info!("  profile <用户名或主页URL>   账号做题统计");
                info!("  submit <slug> <代码文件> <语言slug>   提交代码");
                info!("        （提交需要环境变量 LEETCODE_SESSION，可选 LEETCODE_CSRF）");
            }
        }
        Ok(())
    }
}

// ========== 展示辅助函数 ==========

fn render_outcome(outcome: &ResolutionOutcome) {
    match outcome {
        ResolutionOutcome::Exact(detail) => render_detail(detail),
        ResolutionOutcome::Suggestions(suggestions) => {
            info!("{}", "=".repeat(60));
            info!("找到 {} 个候选题目:", suggestions.len());
            for (idx, identity) in suggestions.iter().enumerate() {
                info!(
                    "  {}. {} [{}]",
                    idx + 1,
                    identity.numbered_title(),
                    identity.difficulty
                );
            }
            info!("{}", "=".repeat(60));
        }
        ResolutionOutcome::NotFound(reason) => {
            warn!("⚠️ 未找到题目: {}", reason);
        }
    }
}

fn render_detail(detail: &ProblemDetail) {
    info!("{}", "=".repeat(60));
    info!("📌 {} [{}]", detail.numbered_title(), detail.difficulty);
    info!("🔗 {}", detail.url);
    info!("{}", "─".repeat(60));
    info!("{}", crate::utils::truncate_text(&detail.description, 400));
    for (idx, example) in detail.examples.iter().enumerate() {
        info!("示例 {}: 输入 {} → 输出 {}", idx + 1, example.input, example.output);
    }
    if !detail.constraints.is_empty() {
        info!("约束:");
        for constraint in &detail.constraints {
            info!("  - {}", constraint);
        }
    }
    info!("{}", "=".repeat(60));
}

fn render_daily(challenge: &DailyChallenge) {
    info!("{}", "=".repeat(60));
    info!(
        "📅 每日一题 ({}): {}. {} [{}]",
        challenge.date, challenge.question_number, challenge.title, challenge.difficulty
    );
    info!("🔗 {}", challenge.url);
    info!("{}", "=".repeat(60));
}

fn render_stats(stats: &ProfileStats) {
    info!("{}", "=".repeat(60));
    info!("👤 {} (排名 {})", stats.username, stats.ranking);
    info!(
        "✅ 已解决 {}/{} (Easy {}/{}, Medium {}/{}, Hard {}/{})",
        stats.total_solved,
        stats.total_questions,
        stats.easy_solved,
        stats.easy_total,
        stats.medium_solved,
        stats.medium_total,
        stats.hard_solved,
        stats.hard_total,
    );
    info!(
        "📊 解题率 {}% | 贡献 {} | 声望 {}",
        stats.acceptance_rate, stats.contribution_points, stats.reputation
    );
    info!("{}", "=".repeat(60));
}

fn render_submission(outcome: &SubmissionOutcome) {
    info!("{}", "=".repeat(60));
    info!("📋 判题结果: {}", outcome.status);
    if let Some(runtime) = &outcome.runtime {
        info!("⏱️ 运行时间: {}", runtime);
    }
    if let Some(memory) = &outcome.memory {
        info!("💾 内存: {}", memory);
    }
    if let (Some(passed), Some(total)) = (outcome.test_cases_passed, outcome.total_test_cases) {
        info!("🧪 通过用例: {}/{}", passed, total);
    }
    if let Some(message) = &outcome.error_message {
        info!("❌ 错误信息: {}", message);
    }
    info!("{}", "=".repeat(60));
}
