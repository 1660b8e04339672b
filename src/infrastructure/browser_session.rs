//! 共享浏览器会话 - 基础设施层
//!
//! 进程内唯一的浏览器资源：首次提交时惰性启动，跨提交复用。
//! 创建动作串行化在一把锁后面，并发的首批提交不会各起一个进程。
//! 每次提交在共享进程上开独立的浏览器上下文 + 页面，
//! 提交之间不共享 Cookie/DOM 状态

use chromiumoxide::cdp::browser_protocol::browser::BrowserContextId;
use chromiumoxide::cdp::browser_protocol::target::{
    CreateBrowserContextParams, CreateTargetParams, DisposeBrowserContextParams,
};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, AutomationError};

/// 降低自动化特征的启动参数
const EVASION_ARGS: &[&str] = &[
    "--disable-blink-features=AutomationControlled",
    "--disable-web-security",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-infobars",
];

/// 一次提交专用的隔离上下文
///
/// 页面和上下文由 `BrowserSession::close_context` 统一回收
pub struct IsolatedContext {
    context_id: BrowserContextId,
    page: Page,
}

impl IsolatedContext {
    pub fn page(&self) -> &Page {
        &self.page
    }
}

/// 存活的浏览器进程句柄
struct BrowserHandle {
    browser: Browser,
    /// CDP 事件循环；结束意味着浏览器已断开
    event_loop: JoinHandle<()>,
}

/// 共享浏览器会话
pub struct BrowserSession {
    headless: bool,
    chrome_executable: Option<String>,
    inner: Mutex<Option<BrowserHandle>>,
}

impl BrowserSession {
    /// 创建会话管理器（不启动浏览器）
    pub fn new(config: &Config) -> Self {
        Self {
            headless: config.headless,
            chrome_executable: config.chrome_executable.clone(),
            inner: Mutex::new(None),
        }
    }

    /// 开一个隔离上下文和页面；浏览器不存在或已断开时先（重新）启动
    pub async fn open_context(&self) -> AppResult<IsolatedContext> {
        let mut guard = self.inner.lock().await;

        // 已断开的句柄直接丢弃重建
        if let Some(handle) = guard.as_ref() {
            if handle.event_loop.is_finished() {
                warn!("⚠️ 浏览器已断开，重新启动");
                *guard = None;
            }
        }

        if guard.is_none() {
            *guard = Some(self.launch().await?);
        }

        let handle = guard.as_ref().expect("浏览器句柄刚刚建立");

        let context_id = handle
            .browser
            .execute(CreateBrowserContextParams::default())
            .await
            .map_err(|e| {
                AppError::Automation(AutomationError::ContextFailed {
                    source: Box::new(e),
                })
            })?
            .browser_context_id
            .clone();

        let target = CreateTargetParams::builder()
            .url("about:blank")
            .browser_context_id(context_id.clone())
            .build()
            .map_err(AppError::Other)?;

        let page = handle.browser.new_page(target).await.map_err(|e| {
            AppError::Automation(AutomationError::ContextFailed {
                source: Box::new(e),
            })
        })?;

        debug!("已创建隔离上下文: {:?}", context_id);
        Ok(IsolatedContext { context_id, page })
    }

    /// 回收一次提交用过的页面和上下文
    pub async fn close_context(&self, context: IsolatedContext) -> AppResult<()> {
        if let Err(e) = context.page.close().await {
            warn!("⚠️ 关闭页面失败: {}", e);
        }

        let guard = self.inner.lock().await;
        if let Some(handle) = guard.as_ref() {
            handle
                .browser
                .execute(DisposeBrowserContextParams::new(context.context_id))
                .await
                .map_err(|e| {
                    AppError::Automation(AutomationError::ContextFailed {
                        source: Box::new(e),
                    })
                })?;
        }
        debug!("隔离上下文已回收");
        Ok(())
    }

    /// 显式关闭共享浏览器进程（仅由停机钩子调用）
    pub async fn shutdown(&self) {
        let mut guard = self.inner.lock().await;
        if let Some(mut handle) = guard.take() {
            info!("正在关闭共享浏览器进程...");
            if let Err(e) = handle.browser.close().await {
                warn!("⚠️ 关闭浏览器失败: {}", e);
            }
            handle.event_loop.abort();
        }
    }

    /// 启动浏览器进程
    async fn launch(&self) -> AppResult<BrowserHandle> {
        info!("🚀 启动浏览器进程 (headless: {})...", self.headless);

        let mut builder = BrowserConfig::builder()
            .args(EVASION_ARGS.to_vec())
            .window_size(1920, 1080);

        if !self.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(std::path::Path::new(path));
        }

        let config = builder
            .build()
            .map_err(|e| AppError::Other(format!("浏览器配置失败: {}", e)))?;

        let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
            AppError::Automation(AutomationError::LaunchFailed {
                source: Box::new(e),
            })
        })?;

        // 在后台处理浏览器事件
        let event_loop = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        // 添加短暂延迟以等待浏览器状态同步
        sleep(tokio::time::Duration::from_millis(300)).await;

        info!("✅ 浏览器进程已就绪");
        Ok(BrowserHandle {
            browser,
            event_loop,
        })
    }
}
