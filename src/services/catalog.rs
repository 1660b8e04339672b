//! 候选题目来源
//!
//! 远端目录优先，任何失败都回退到内置静态列表。
//! 每次解析只尝试远端一次，不做重试

use serde_json::json;
use tracing::{debug, warn};

use crate::clients::GraphqlClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Difficulty, ProblemIdentity};
use crate::services::fallback_catalog::fallback_catalog;

/// 题目列表查询文档
const CATALOG_QUERY: &str = r#"
    query problemsetQuestionList($categorySlug: String!, $skip: Int, $limit: Int, $filters: QuestionListFilterInput) {
      problemsetQuestionList(
        categorySlug: $categorySlug
        skip: $skip
        limit: $limit
        filters: $filters
      ) {
        total
        questions {
          title
          titleSlug
          difficulty
          frontendQuestionId
        }
      }
    }
"#;

/// 候选题目来源
pub struct CandidateSource {
    client: GraphqlClient,
    page_size: usize,
}

impl CandidateSource {
    /// 创建新的候选来源
    pub fn new(client: GraphqlClient, config: &Config) -> Self {
        Self {
            client,
            page_size: config.catalog_page_size,
        }
    }

    /// 获取候选题目列表（按目录顺序）
    ///
    /// 远端失败时返回兜底列表，本函数不失败
    pub async fn candidates(&self) -> Vec<ProblemIdentity> {
        match self.fetch_remote().await {
            Ok(list) if !list.is_empty() => {
                debug!("远端目录拉取成功: {} 道题", list.len());
                list
            }
            Ok(_) => {
                warn!("⚠️ 远端目录返回空列表，使用内置兜底列表");
                fallback_catalog()
            }
            Err(e) => {
                warn!("⚠️ 远端目录拉取失败，使用内置兜底列表: {}", e);
                fallback_catalog()
            }
        }
    }

    /// 单次拉取远端目录
    async fn fetch_remote(&self) -> AppResult<Vec<ProblemIdentity>> {
        let referer = format!("{}/problemset/", self.client.site_base());
        let variables = json!({
            "categorySlug": "",
            "skip": 0,
            "limit": self.page_size,
            "filters": {},
        });

        let data = self
            .client
            .query(CATALOG_QUERY, variables, None, &referer)
            .await?;

        let questions = data
            .get("problemsetQuestionList")
            .and_then(|v| v.get("questions"))
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                AppError::malformed_response("problemsetQuestionList", "缺少 questions 数组")
            })?;

        let mut identities = Vec::with_capacity(questions.len());
        for item in questions {
            let title = item.get("title").and_then(|v| v.as_str()).unwrap_or("");
            let slug = item.get("titleSlug").and_then(|v| v.as_str()).unwrap_or("");
            let frontend_id = item
                .get("frontendQuestionId")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            if title.is_empty() || slug.is_empty() {
                continue;
            }
            let difficulty = item
                .get("difficulty")
                .and_then(|v| v.as_str())
                .map(Difficulty::parse)
                .unwrap_or(Difficulty::Medium);

            identities.push(ProblemIdentity::new(frontend_id, title, slug, difficulty));
        }

        Ok(identities)
    }
}
