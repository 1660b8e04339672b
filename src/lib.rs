//! # LeetCode Search & Submit
//!
//! 一个用于题目检索与自动化提交的 Rust 库
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Browser / Page），只暴露能力
//! - `BrowserSession` - 共享浏览器进程的唯一 owner，提供隔离上下文
//! - `PageDriver` - 单个页面的 owner，提供 eval / Cookie / 截图能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只管一种能力
//! - `normalizer` / `scorer` - 纯函数：规范化与打分
//! - `CandidateSource` - 候选目录（远端优先，静态兜底）
//! - `DetailFetcher` / `DailyFetcher` / `ProfileFetcher` - 上游数据拉取
//! - `TypingRhythm` - 模拟真人输入节奏
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义一次操作的完整流程
//! - `Resolver` - 智能搜索决策序列（精确 / 建议 / 未找到）
//! - `SubmitDriver` - 提交状态机（导航 → 注入 → 轮询判题）
//!
//! ### ④ 编排层（App）
//! - `app.rs` - 接线各服务，暴露对外入口和 CLI 调度
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    DailyChallenge, Difficulty, ProblemDetail, ProblemIdentity, ProfileStats, ResolutionOutcome,
    SubmissionOutcome, SubmissionRequest, SubmissionStatus,
};
pub use workflow::{Resolver, SubmitDriver};
