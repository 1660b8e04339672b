//! 提交流程 - 流程层
//!
//! 驱动真实浏览器走完一次提交：
//! 导航 → 登录检查 → 定位编辑器 → 选语言 → 注入代码 → 点提交 → 轮询判题结果
//!
//! 每一步都可能失败；失败时保存诊断截图并返回 status=Error 的结果，
//! 不做自动重试（重试是调用方的决定）。对外契约：本流程永不抛错

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, AutomationError};
use crate::infrastructure::{BrowserSession, IsolatedContext, PageDriver};
use crate::models::{editor_label, SubmissionOutcome, SubmissionRequest};
use crate::services::pacing::TypingRhythm;
use crate::utils::wait_until;
use crate::workflow::submit_ctx::SubmissionCtx;
use crate::workflow::verdict::classify_page_text;

// ========== 选择器策略表 ==========
// 上游 DOM 是整个系统最易变的部分，全部集中在这里按顺序尝试

/// 编辑器出现的标志
const EDITOR_SELECTORS: &[&str] = &[".monaco-editor", ".CodeMirror", "[data-mode-id]"];

/// 可聚焦的编辑器区域（模拟打字入口）
const EDITOR_FOCUS_SELECTORS: &[&str] = &[
    ".monaco-editor .view-line",
    ".CodeMirror-code",
    "[data-mode-id]",
    ".monaco-editor",
];

/// 语言下拉按钮
const LANGUAGE_BUTTON_SELECTORS: &[&str] = &[
    "button[id*=\"lang\"]",
    "[data-cy=\"lang-select\"]",
    ".ant-select-selector",
];

/// 提交按钮
const SUBMIT_BUTTON_SELECTORS: &[&str] = &[
    "button[data-e2e-locator=\"console-submit-button\"]",
    "[data-cy=\"submit-code-btn\"]",
    "button[type=\"submit\"]",
];

/// 登录入口（出现即视为凭证失效）
const SIGN_IN_SELECTOR: &str = "a[href=\"/accounts/login/\"]";

/// 编辑器模型注入的返回
#[derive(Debug, Deserialize)]
struct InjectReport {
    success: bool,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// 上下文回收保证
///
/// 正常路径显式 release；调用方中途放弃（future 被 drop）时，
/// Drop 把回收任务甩给运行时，保证上下文不泄漏
struct ContextGuard {
    session: Arc<BrowserSession>,
    context: Option<IsolatedContext>,
}

impl ContextGuard {
    fn new(session: Arc<BrowserSession>, context: IsolatedContext) -> Self {
        Self {
            session,
            context: Some(context),
        }
    }

    /// 显式回收页面和上下文
    async fn release(mut self) -> crate::error::AppResult<()> {
        match self.context.take() {
            Some(context) => self.session.close_context(context).await,
            None => Ok(()),
        }
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        if let Some(context) = self.context.take() {
            let session = self.session.clone();
            tokio::spawn(async move {
                if let Err(e) = session.close_context(context).await {
                    warn!("⚠️ 后台回收浏览器上下文失败: {}", e);
                }
            });
        }
    }
}

/// 提交驱动
pub struct SubmitDriver {
    session: Arc<BrowserSession>,
    config: Config,
}

impl SubmitDriver {
    /// 创建新的提交驱动
    pub fn new(session: Arc<BrowserSession>, config: &Config) -> Self {
        Self {
            session,
            config: config.clone(),
        }
    }

    /// 提交一份代码并等待判题终态
    ///
    /// 公开契约：永不抛错，任何失败都折叠为 status=Error 的结果。
    /// 凭证只注入 Cookie，绝不写日志
    pub async fn submit(&self, request: &SubmissionRequest) -> SubmissionOutcome {
        let ctx = SubmissionCtx::new(
            &self.config.site_base,
            &request.problem_slug,
            &request.language_slug,
        );
        info!(
            "{} 📤 开始提交 (代码 {} 字符)",
            ctx,
            request.source_code.chars().count()
        );

        // 每次提交独占一个上下文，跨提交不共享任何状态
        let context = match self.session.open_context().await {
            Ok(context) => context,
            Err(e) => {
                error!("{} ❌ 无法打开浏览器上下文: {}", ctx, e);
                return SubmissionOutcome::failed(e.to_string());
            }
        };

        let driver = PageDriver::new(context.page().clone());
        let guard = ContextGuard::new(self.session.clone(), context);
        let mut rhythm = TypingRhythm::new(self.config.typing_seed);

        let outcome = match self.run_states(&driver, request, &ctx, &mut rhythm).await {
            Ok(outcome) => {
                info!("{} ✅ 判题结果: {}", ctx, outcome.status);
                outcome
            }
            Err(e) => {
                error!("{} ❌ 提交失败: {}", ctx, e);
                self.capture_failure(&driver, &ctx).await;
                SubmissionOutcome::failed(e.to_string())
            }
        };

        // 清理：任何出口都先做拟人停顿，再回收页面和上下文
        sleep(rhythm.pause(1000, 2000)).await;
        if let Err(e) = guard.release().await {
            warn!("{} ⚠️ 回收浏览器上下文失败: {}", ctx, e);
        }

        outcome
    }

    /// 状态机主干，任何一步的失败都向上折叠
    async fn run_states(
        &self,
        driver: &PageDriver,
        request: &SubmissionRequest,
        ctx: &SubmissionCtx,
        rhythm: &mut TypingRhythm,
    ) -> AppResult<SubmissionOutcome> {
        self.prepare_identity(driver, request).await?;

        self.navigate(driver, ctx).await?;
        sleep(rhythm.pause(2000, 4000)).await;

        self.check_auth(driver, ctx).await?;

        self.locate_editor(driver, ctx).await?;
        sleep(rhythm.pause(1500, 2500)).await;

        self.select_language(driver, request, ctx, rhythm).await?;

        self.inject_code(driver, request, ctx, rhythm).await?;
        sleep(rhythm.pause(1000, 2000)).await;

        self.click_submit(driver, ctx).await?;

        self.poll_result(driver, ctx, rhythm).await
    }

    /// 伪装身份：UA 覆盖 + 会话 Cookie 注入
    async fn prepare_identity(
        &self,
        driver: &PageDriver,
        request: &SubmissionRequest,
    ) -> AppResult<()> {
        driver.set_user_agent(&self.config.user_agent).await?;
        driver
            .set_session_cookies(
                &cookie_domain(&self.config.site_base),
                &request.session_cookie,
                request.csrf_token.as_deref(),
            )
            .await
    }

    /// 导航到题目页面
    async fn navigate(&self, driver: &PageDriver, ctx: &SubmissionCtx) -> AppResult<()> {
        info!("{} 🌐 正在打开题目页面...", ctx);
        driver.goto(&ctx.problem_url).await
    }

    /// 登录检查：页面还有登录入口说明凭证已失效，立刻失败
    async fn check_auth(&self, driver: &PageDriver, ctx: &SubmissionCtx) -> AppResult<()> {
        if driver.exists(SIGN_IN_SELECTOR).await? {
            return Err(AppError::session_expired(
                "Session expired. Please update your session cookie.",
            ));
        }
        debug!("{} 登录状态正常", ctx);
        Ok(())
    }

    /// 等待代码编辑器出现
    async fn locate_editor(&self, driver: &PageDriver, ctx: &SubmissionCtx) -> AppResult<()> {
        info!("{} 🔍 等待代码编辑器加载...", ctx);

        let found = wait_until(
            Duration::from_secs(self.config.editor_wait_secs),
            Duration::from_millis(500),
            move || async move {
                for selector in EDITOR_SELECTORS {
                    if driver.exists(selector).await.unwrap_or(false) {
                        return Some(*selector);
                    }
                }
                None
            },
        )
        .await;

        match found {
            Some(selector) => {
                debug!("{} 编辑器已出现 ({})", ctx, selector);
                Ok(())
            }
            None => Err(AppError::Automation(AutomationError::EditorNotFound)),
        }
    }

    /// 切换语言：打开下拉框后先按 data-value 找，再按展示名扫描选项
    ///
    /// 语言控件经常改版，找不到就沿用页面当前语言（尽力而为）
    async fn select_language(
        &self,
        driver: &PageDriver,
        request: &SubmissionRequest,
        ctx: &SubmissionCtx,
        rhythm: &mut TypingRhythm,
    ) -> AppResult<()> {
        let label = editor_label(&request.language_slug);
        info!("{} 🔤 选择语言: {}", ctx, label);

        let opened = driver.click_first(LANGUAGE_BUTTON_SELECTORS).await?;
        if opened.is_none() {
            warn!("{} ⚠️ 未找到语言下拉按钮，沿用当前语言", ctx);
            return Ok(());
        }
        sleep(rhythm.pause(500, 1000)).await;

        let js = format!(
            r#"(() => {{
                const byValue = document.querySelector('[data-value="{}"]');
                if (byValue) {{ byValue.click(); return true; }}
                const options = document.querySelectorAll('li, [role="option"]');
                for (const option of options) {{
                    if (option.textContent && option.textContent.trim() === {}) {{
                        option.click();
                        return true;
                    }}
                }}
                return false;
            }})()"#,
            request.language_slug,
            serde_json::to_string(label)?,
        );

        let selected: bool = driver.eval_as(js).await?;
        if selected {
            sleep(rhythm.pause(500, 1000)).await;
            debug!("{} 语言已切换", ctx);
        } else {
            warn!("{} ⚠️ 语言选项未命中，沿用当前语言", ctx);
        }
        Ok(())
    }

    /// 注入代码：优先直写编辑器内存模型，不可用再退回模拟打字
    async fn inject_code(
        &self,
        driver: &PageDriver,
        request: &SubmissionRequest,
        ctx: &SubmissionCtx,
        rhythm: &mut TypingRhythm,
    ) -> AppResult<()> {
        info!("{} 💉 注入代码...", ctx);

        let report: InjectReport = driver
            .eval_as(build_injection_script(&request.source_code)?)
            .await?;

        if report.success {
            info!(
                "{} ✓ 代码已写入编辑器模型 ({})",
                ctx,
                report.method.as_deref().unwrap_or("unknown")
            );
            return Ok(());
        }

        if let Some(err) = report.error {
            debug!("{} 编辑器模型注入报错: {}", ctx, err);
        }

        // 第二梯队：逐字符模拟打字（更慢、更抗检测）
        self.type_code(driver, request, ctx, rhythm).await
    }

    /// 模拟真人打字输入整份代码
    async fn type_code(
        &self,
        driver: &PageDriver,
        request: &SubmissionRequest,
        ctx: &SubmissionCtx,
        rhythm: &mut TypingRhythm,
    ) -> AppResult<()> {
        info!("{} ⌨️ 编辑器内部接口不可用，改用模拟打字", ctx);

        // 聚焦编辑器
        let mut editor = None;
        for selector in EDITOR_FOCUS_SELECTORS {
            if let Ok(element) = driver.page().find_element(*selector).await {
                if element.click().await.is_ok() {
                    editor = Some(element);
                    break;
                }
            }
        }
        let editor = editor.ok_or(AppError::Automation(AutomationError::EditorNotFound))?;
        sleep(rhythm.pause(500, 1000)).await;

        // 全选删除，清掉预置模板
        driver
            .eval("document.execCommand('selectAll', false, null)")
            .await?;
        sleep(rhythm.pause(300, 600)).await;
        editor.press_key("Backspace").await?;
        sleep(rhythm.pause(800, 1500)).await;

        let lines: Vec<&str> = request.source_code.split('\n').collect();
        let total_lines = lines.len();

        for (line_idx, line) in lines.iter().enumerate() {
            // 新代码块起手前的长停顿
            if is_block_opening(line) {
                sleep(rhythm.pause(500, 1200)).await;
            }

            for c in line.chars() {
                // 偶发邻键误击，发现后退格改回
                if let Some(wrong) = rhythm.typo_for(c) {
                    editor.type_str(wrong.to_string()).await?;
                    sleep(rhythm.pause(150, 350)).await;
                    editor.press_key("Backspace").await?;
                    sleep(rhythm.pause(80, 180)).await;
                }

                sleep(rhythm.key_delay(c)).await;
                editor.type_str(c.to_string()).await?;

                if let Some(pause) = rhythm.micro_pause() {
                    sleep(pause).await;
                }
            }

            if line_idx + 1 < total_lines {
                sleep(rhythm.pause(80, 200)).await;
                editor.press_key("Enter").await?;

                // 行尾是分号/大括号时的收尾停顿
                if line.ends_with(';') || line.ends_with('{') || line.ends_with('}') {
                    sleep(rhythm.pause(200, 500)).await;
                }
            }

            if line_idx % 5 == 0 && total_lines > 0 {
                info!("{} ⌨️ 打字进度 {}%", ctx, line_idx * 100 / total_lines);
            }
        }

        info!("{} ✓ 代码输入完成", ctx);
        Ok(())
    }

    /// 点击提交按钮：选择器表优先，再按文本兜底扫描
    async fn click_submit(&self, driver: &PageDriver, ctx: &SubmissionCtx) -> AppResult<()> {
        info!("{} 🚀 点击提交...", ctx);

        if let Some(selector) = driver.click_first(SUBMIT_BUTTON_SELECTORS).await? {
            debug!("{} 提交按钮已点击 ({})", ctx, selector);
            return Ok(());
        }

        // 兜底：按按钮文本扫描
        let clicked: bool = driver
            .eval_as(
                r#"(() => {
                    for (const button of document.querySelectorAll('button')) {
                        if (button.textContent && button.textContent.trim() === 'Submit') {
                            button.click();
                            return true;
                        }
                    }
                    return false;
                })()"#,
            )
            .await?;

        if clicked {
            debug!("{} 提交按钮已点击 (按文本命中)", ctx);
            Ok(())
        } else {
            Err(AppError::Automation(AutomationError::SubmitButtonNotFound))
        }
    }

    /// 轮询页面文本直到出现判题终态或超时
    async fn poll_result(
        &self,
        driver: &PageDriver,
        ctx: &SubmissionCtx,
        rhythm: &mut TypingRhythm,
    ) -> AppResult<SubmissionOutcome> {
        info!("{} ⏳ 等待判题结果...", ctx);
        sleep(rhythm.pause(3000, 5000)).await;

        let max_wait = Duration::from_secs(self.config.poll_timeout_secs);
        let interval = Duration::from_millis(self.config.poll_interval_ms);

        let verdict = wait_until(max_wait, interval, move || async move {
            match driver.body_text().await {
                Ok(text) => classify_page_text(&text),
                Err(e) => {
                    warn!("⚠️ 读取页面文本失败: {}", e);
                    None
                }
            }
        })
        .await;

        match verdict {
            Some(verdict) => Ok(verdict.into_outcome()),
            None => Err(AppError::ClassificationTimeout {
                waited_secs: self.config.poll_timeout_secs,
            }),
        }
    }

    /// 保存失败现场截图（副作用，不影响返回值）
    async fn capture_failure(&self, driver: &PageDriver, ctx: &SubmissionCtx) {
        let path = format!(
            "{}/submit-failure-{}-{}.png",
            self.config.screenshot_dir,
            ctx.problem_slug,
            chrono::Local::now().format("%Y%m%d-%H%M%S"),
        );
        match driver.screenshot(&path).await {
            Ok(()) => info!("{} 📷 诊断截图已保存: {}", ctx, path),
            Err(e) => warn!("{} ⚠️ 诊断截图保存失败: {}", ctx, e),
        }
    }
}

/// 新代码块的起始行（函数/类定义等）
fn is_block_opening(line: &str) -> bool {
    ["class ", "def ", "fn ", "function ", "public ", "private "]
        .iter()
        .any(|kw| line.contains(kw))
}

/// 构造编辑器模型注入脚本
fn build_injection_script(code: &str) -> AppResult<String> {
    let code_json = serde_json::to_string(code)?;
    Ok(format!(
        r#"(() => {{
            const codeText = {};
            try {{
                const models = window.monaco && window.monaco.editor && window.monaco.editor.getModels
                    ? window.monaco.editor.getModels() : null;
                if (models && models.length > 0) {{
                    models[0].setValue(codeText);
                    return {{ success: true, method: 'monaco-model' }};
                }}

                const editors = window.monaco && window.monaco.editor && window.monaco.editor.getEditors
                    ? window.monaco.editor.getEditors() : null;
                if (editors && editors.length > 0) {{
                    editors[0].setValue(codeText);
                    return {{ success: true, method: 'monaco-editor' }};
                }}

                const root = document.querySelector('[data-cy="code-editor"]');
                if (root) {{
                    const fiberKey = Object.keys(root).find(k => k.startsWith('__reactFiber$'));
                    let fiber = fiberKey ? root[fiberKey] : null;
                    while (fiber) {{
                        if (fiber.memoizedState && fiber.memoizedState.editor) {{
                            fiber.memoizedState.editor.setValue(codeText);
                            return {{ success: true, method: 'react-fiber' }};
                        }}
                        fiber = fiber.return;
                    }}
                }}

                return {{ success: false, method: 'none' }};
            }} catch (e) {{
                return {{ success: false, error: String(e) }};
            }}
        }})()"#,
        code_json
    ))
}

/// 从站点根地址推导 Cookie 作用域（".leetcode.com" 形式）
fn cookie_domain(site_base: &str) -> String {
    let host = site_base
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .split('/')
        .next()
        .unwrap_or(site_base);
    format!(".{}", host)
}
