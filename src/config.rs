use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL 端点
    pub graphql_endpoint: String,
    /// 站点根地址（用于拼接题目/用户页面 URL）
    pub site_base: String,
    /// 伪装的浏览器 User-Agent
    pub user_agent: String,
    /// 题目列表单次拉取数量（一次拉全量）
    pub catalog_page_size: usize,
    /// 模糊搜索建议数量上限
    pub suggestion_limit: usize,
    /// 每日一题请求超时（秒）
    pub daily_timeout_secs: u64,
    /// 等待判题结果的总超时（秒）
    pub poll_timeout_secs: u64,
    /// 判题结果轮询间隔（毫秒）
    pub poll_interval_ms: u64,
    /// 等待编辑器出现的超时（秒）
    pub editor_wait_secs: u64,
    /// 是否无头模式（默认有头，便于人工观察和降低风控）
    pub headless: bool,
    /// 浏览器可执行文件路径（为空时用系统默认 Chrome）
    pub chrome_executable: Option<String>,
    /// 失败截图存放目录
    pub screenshot_dir: String,
    /// 模拟打字的随机种子（为空时每次随机）
    pub typing_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_endpoint: "https://leetcode.com/graphql/".to_string(),
            site_base: "https://leetcode.com".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            catalog_page_size: 3000,
            suggestion_limit: 8,
            daily_timeout_secs: 15,
            poll_timeout_secs: 90,
            poll_interval_ms: 2500,
            editor_wait_secs: 20,
            headless: false,
            chrome_executable: None,
            screenshot_dir: "/tmp".to_string(),
            typing_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            graphql_endpoint: std::env::var("GRAPHQL_ENDPOINT").unwrap_or(default.graphql_endpoint),
            site_base: std::env::var("SITE_BASE").unwrap_or(default.site_base),
            user_agent: std::env::var("USER_AGENT").unwrap_or(default.user_agent),
            catalog_page_size: std::env::var("CATALOG_PAGE_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.catalog_page_size),
            suggestion_limit: std::env::var("SUGGESTION_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.suggestion_limit),
            daily_timeout_secs: std::env::var("DAILY_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.daily_timeout_secs),
            poll_timeout_secs: std::env::var("POLL_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.poll_timeout_secs),
            poll_interval_ms: std::env::var("POLL_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.poll_interval_ms),
            editor_wait_secs: std::env::var("EDITOR_WAIT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.editor_wait_secs),
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().or(default.chrome_executable),
            screenshot_dir: std::env::var("SCREENSHOT_DIR").unwrap_or(default.screenshot_dir),
            typing_seed: std::env::var("TYPING_SEED").ok().and_then(|v| v.parse().ok()).or(default.typing_seed),
        }
    }

    /// 从 TOML 配置文件加载，文件里没写的字段用默认值
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(ConfigError::FileLoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            AppError::Config(ConfigError::FileLoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;
        Ok(config)
    }

    /// 优先读配置文件（CONFIG_FILE 指定或当前目录 config.toml），再叠加环境变量
    pub fn load() -> Self {
        let file_path =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        if Path::new(&file_path).exists() {
            match Self::from_file(&file_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("⚠️ 配置文件加载失败，改用环境变量: {}", e);
                }
            }
        }
        Self::from_env()
    }
}
