//! 每日一题
//!
//! 15 秒超时自截断；超时/非 2xx/响应异常一律返回固定兜底题，
//! 该功能永远不把失败抛给调用方

use std::time::Duration;

use serde_json::json;
use tracing::{info, warn};

use crate::clients::GraphqlClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{DailyChallenge, Difficulty};

/// 每日一题查询文档
const DAILY_QUERY: &str = r#"
    query questionOfToday {
      activeDailyCodingChallengeQuestion {
        date
        link
        question {
          title
          titleSlug
          difficulty
          questionFrontendId
        }
      }
    }
"#;

/// 每日一题服务
pub struct DailyFetcher {
    client: GraphqlClient,
    timeout: Duration,
}

impl DailyFetcher {
    /// 创建新的每日一题服务
    pub fn new(client: GraphqlClient, config: &Config) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(config.daily_timeout_secs),
        }
    }

    /// 获取今日题目，失败时返回兜底题（不失败）
    pub async fn fetch(&self) -> DailyChallenge {
        match tokio::time::timeout(self.timeout, self.fetch_remote()).await {
            Ok(Ok(challenge)) => {
                info!(
                    "✓ 每日一题: {}. {}",
                    challenge.question_number, challenge.title
                );
                challenge
            }
            Ok(Err(e)) => {
                warn!("⚠️ 每日一题拉取失败，使用兜底题: {}", e);
                self.fallback()
            }
            Err(_) => {
                warn!(
                    "⚠️ 每日一题请求超时 ({} 秒)，使用兜底题",
                    self.timeout.as_secs()
                );
                self.fallback()
            }
        }
    }

    /// 远端拉取
    async fn fetch_remote(&self) -> AppResult<DailyChallenge> {
        let referer = format!("{}/problemset/", self.client.site_base());
        let data = self
            .client
            .query(DAILY_QUERY, json!({}), Some("questionOfToday"), &referer)
            .await?;

        let challenge = data
            .get("activeDailyCodingChallengeQuestion")
            .filter(|v| !v.is_null())
            .ok_or_else(|| {
                AppError::malformed_response("questionOfToday", "缺少每日一题字段")
            })?;

        let question = challenge.get("question").ok_or_else(|| {
            AppError::malformed_response("questionOfToday", "缺少 question 字段")
        })?;

        let link = challenge.get("link").and_then(|v| v.as_str()).unwrap_or("");

        Ok(DailyChallenge {
            date: challenge
                .get("date")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            question_number: question
                .get("questionFrontendId")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            title: question
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            slug: question
                .get("titleSlug")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            difficulty: question
                .get("difficulty")
                .and_then(|v| v.as_str())
                .map(Difficulty::parse)
                .unwrap_or(Difficulty::Medium),
            url: format!("{}{}", self.client.site_base(), link),
        })
    }

    /// 固定兜底题，盖上今天的日期
    fn fallback(&self) -> DailyChallenge {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        DailyChallenge {
            date: today,
            question_number: "1".to_string(),
            title: "Two Sum (Daily Challenge Unavailable)".to_string(),
            slug: "two-sum".to_string(),
            difficulty: Difficulty::Easy,
            url: format!("{}/problems/two-sum/", self.client.site_base()),
        }
    }
}
