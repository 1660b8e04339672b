use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 题目不存在（查询/slug 没有对应的题目）
    NotFound(NotFoundError),
    /// 上游服务错误（网络/非 2xx/超时）
    Upstream(UpstreamError),
    /// 提交凭证已失效
    SessionExpired {
        message: String,
    },
    /// 浏览器自动化错误
    Automation(AutomationError),
    /// 等待判题结果超时
    ClassificationTimeout {
        waited_secs: u64,
    },
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(e) => write!(f, "未找到: {}", e),
            AppError::Upstream(e) => write!(f, "上游错误: {}", e),
            AppError::SessionExpired { message } => write!(f, "会话已失效: {}", message),
            AppError::Automation(e) => write!(f, "自动化错误: {}", e),
            AppError::ClassificationTimeout { waited_secs } => {
                write!(f, "等待判题结果超时 (已等待 {} 秒)", waited_secs)
            }
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::NotFound(e) => Some(e),
            AppError::Upstream(e) => Some(e),
            AppError::Automation(e) => Some(e),
            AppError::Config(e) => Some(e),
            _ => None,
        }
    }
}

/// 未找到类错误
#[derive(Debug)]
pub enum NotFoundError {
    /// slug 对应的题目不存在
    Question {
        slug: String,
    },
    /// 题号对应的题目不存在
    Number {
        number: String,
    },
    /// 用户不存在
    User {
        username: String,
    },
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::Question { slug } => write!(f, "题目不存在: {}", slug),
            NotFoundError::Number { number } => write!(f, "没有题号为 {} 的题目", number),
            NotFoundError::User { username } => write!(f, "用户不存在: {}", username),
        }
    }
}

impl std::error::Error for NotFoundError {}

/// 上游服务错误
#[derive(Debug)]
pub enum UpstreamError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 上游返回非 2xx 状态码
    BadStatus {
        endpoint: String,
        status: u16,
    },
    /// 响应体结构不符合预期
    MalformedResponse {
        endpoint: String,
        detail: String,
    },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::RequestFailed { endpoint, source } => {
                write!(f, "请求失败 ({}): {}", endpoint, source)
            }
            UpstreamError::BadStatus { endpoint, status } => {
                write!(f, "上游返回状态码 {} ({})", status, endpoint)
            }
            UpstreamError::MalformedResponse { endpoint, detail } => {
                write!(f, "响应结构异常 ({}): {}", endpoint, detail)
            }
            UpstreamError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::RequestFailed { source, .. }
            | UpstreamError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 浏览器自动化错误
#[derive(Debug)]
pub enum AutomationError {
    /// 启动浏览器失败
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建隔离上下文/页面失败
    ContextFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 导航失败
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 执行脚本失败
    ScriptExecutionFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 未找到代码编辑器
    EditorNotFound,
    /// 代码注入失败
    InjectionFailed {
        detail: String,
    },
    /// 未找到提交按钮
    SubmitButtonNotFound,
}

impl fmt::Display for AutomationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomationError::LaunchFailed { source } => {
                write!(f, "启动浏览器失败: {}", source)
            }
            AutomationError::ContextFailed { source } => {
                write!(f, "创建浏览器上下文失败: {}", source)
            }
            AutomationError::NavigationFailed { url, source } => {
                write!(f, "导航到 {} 失败: {}", url, source)
            }
            AutomationError::ScriptExecutionFailed { source } => {
                write!(f, "执行脚本失败: {}", source)
            }
            AutomationError::EditorNotFound => write!(f, "页面上未找到代码编辑器"),
            AutomationError::InjectionFailed { detail } => {
                write!(f, "代码注入失败: {}", detail)
            }
            AutomationError::SubmitButtonNotFound => write!(f, "页面上未找到提交按钮"),
        }
    }
}

impl std::error::Error for AutomationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutomationError::LaunchFailed { source }
            | AutomationError::ContextFailed { source }
            | AutomationError::NavigationFailed { source, .. }
            | AutomationError::ScriptExecutionFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取/解析失败
    FileLoadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
            ConfigError::FileLoadFailed { path, source } => {
                write!(f, "配置文件加载失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileLoadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Automation(AutomationError::ScriptExecutionFailed {
            source: Box::new(err),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err.url().map(|u| u.to_string()).unwrap_or_default();
        AppError::Upstream(UpstreamError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Upstream(UpstreamError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建"题目不存在"错误
    pub fn question_not_found(slug: impl Into<String>) -> Self {
        AppError::NotFound(NotFoundError::Question { slug: slug.into() })
    }

    /// 创建"题号不存在"错误
    pub fn number_not_found(number: impl Into<String>) -> Self {
        AppError::NotFound(NotFoundError::Number {
            number: number.into(),
        })
    }

    /// 创建"用户不存在"错误
    pub fn user_not_found(username: impl Into<String>) -> Self {
        AppError::NotFound(NotFoundError::User {
            username: username.into(),
        })
    }

    /// 创建上游状态码错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Upstream(UpstreamError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建响应结构异常错误
    pub fn malformed_response(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Upstream(UpstreamError::MalformedResponse {
            endpoint: endpoint.into(),
            detail: detail.into(),
        })
    }

    /// 创建会话失效错误
    pub fn session_expired(message: impl Into<String>) -> Self {
        AppError::SessionExpired {
            message: message.into(),
        }
    }

    /// 创建导航失败错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Automation(AutomationError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 是否属于"未找到"类错误（解析器里可静默吞掉的失败）
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
