/// GraphQL 客户端
///
/// 封装对上游查询端点的调用：POST {query, variables}，响应带 data 信封。
/// 上游会校验 UA/Referer/Origin，所以每个请求都带上仿浏览器头。
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// GraphQL 客户端
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    site_base: String,
    user_agent: String,
}

impl GraphqlClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.graphql_endpoint.clone(),
            site_base: config.site_base.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// 站点根地址（用于拼接 Referer / 页面 URL）
    pub fn site_base(&self) -> &str {
        &self.site_base
    }

    /// 执行一次查询，返回 data 信封内的内容
    ///
    /// # 参数
    /// - `document`: 查询文档
    /// - `variables`: 查询变量
    /// - `operation_name`: 操作名（部分查询要求携带）
    /// - `referer`: 模拟的来源页面，须与查询语义一致
    pub async fn query(
        &self,
        document: &str,
        variables: Value,
        operation_name: Option<&str>,
        referer: &str,
    ) -> AppResult<Value> {
        let mut body = json!({
            "query": document,
            "variables": variables,
        });
        if let Some(name) = operation_name {
            body["operationName"] = json!(name);
        }

        debug!("GraphQL 请求: referer={}", referer);

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .header("Referer", referer)
            .header("Origin", &self.site_base)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_status(&self.endpoint, status.as_u16()));
        }

        let payload: Value = response.json().await?;

        match payload.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(AppError::malformed_response(
                &self.endpoint,
                "响应缺少 data 字段",
            )),
        }
    }
}
