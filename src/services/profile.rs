//! 关联账号统计
//!
//! 从公开接口拉取指定用户名的做题统计；这里没有兜底数据，
//! 上游失败按类型化错误上抛

use regex::Regex;
use serde_json::{json, Value};
use tracing::debug;

use crate::clients::GraphqlClient;
use crate::error::{AppError, AppResult};
use crate::models::ProfileStats;

/// 用户统计查询文档
const PROFILE_QUERY: &str = r#"
    query getUserProfile($username: String!) {
      matchedUser(username: $username) {
        username
        profile {
          ranking
          reputation
        }
        contributions {
          points
        }
        submitStatsGlobal {
          acSubmissionNum {
            difficulty
            count
          }
        }
      }
      allQuestionsCount {
        difficulty
        count
      }
    }
"#;

/// 从个人主页 URL 或裸用户名中提取用户名
pub fn extract_username(url_or_username: &str) -> Option<String> {
    let trimmed = url_or_username.trim();

    let url_re =
        Regex::new(r"leetcode\.com/(?:u/)?([^/\s?]+)").expect("主页 URL 正则无效");
    if let Some(caps) = url_re.captures(trimmed) {
        return Some(caps[1].to_string());
    }

    let username_re = Regex::new(r"^[a-zA-Z0-9_-]+$").expect("用户名正则无效");
    if username_re.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    None
}

/// 账号统计服务
pub struct ProfileFetcher {
    client: GraphqlClient,
}

impl ProfileFetcher {
    /// 创建新的统计服务
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    /// 拉取用户公开统计
    pub async fn fetch(&self, username: &str) -> AppResult<ProfileStats> {
        debug!("拉取用户统计: {}", username);

        let referer = format!("{}/{}/", self.client.site_base(), username);
        let data = self
            .client
            .query(
                PROFILE_QUERY,
                json!({ "username": username }),
                None,
                &referer,
            )
            .await?;

        let user = match data.get("matchedUser") {
            Some(u) if !u.is_null() => u,
            _ => return Err(AppError::user_not_found(username)),
        };

        let submissions = user
            .pointer("/submitStatsGlobal/acSubmissionNum")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        let all_questions = data
            .get("allQuestionsCount")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();

        let total_solved = count_for(&submissions, "All");
        let total_questions = count_for(&all_questions, "All");

        Ok(ProfileStats {
            username: user
                .get("username")
                .and_then(|v| v.as_str())
                .unwrap_or(username)
                .to_string(),
            ranking: user
                .pointer("/profile/ranking")
                .and_then(|v| v.as_u64())
                .unwrap_or(0),
            total_solved,
            easy_solved: count_for(&submissions, "Easy"),
            medium_solved: count_for(&submissions, "Medium"),
            hard_solved: count_for(&submissions, "Hard"),
            total_questions,
            easy_total: count_for(&all_questions, "Easy"),
            medium_total: count_for(&all_questions, "Medium"),
            hard_total: count_for(&all_questions, "Hard"),
            acceptance_rate: if total_questions > 0 {
                ((total_solved as f64 / total_questions as f64) * 100.0).round() as u32
            } else {
                0
            },
            contribution_points: user
                .pointer("/contributions/points")
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32,
            reputation: user
                .pointer("/profile/reputation")
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32,
        })
    }
}

/// 在 {difficulty, count} 数组里找指定难度的计数
fn count_for(entries: &[Value], difficulty: &str) -> u32 {
    entries
        .iter()
        .find(|e| e.get("difficulty").and_then(|v| v.as_str()) == Some(difficulty))
        .and_then(|e| e.get("count"))
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32
}
