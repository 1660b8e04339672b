//! 页面驱动 - 基础设施层
//!
//! 持有单个 Page 资源，向流程层暴露能力：
//! 执行 JS、导航、注入 Cookie、读取可见文本、截图。
//! 不认识题目和提交语义

use std::path::Path;

use chromiumoxide::cdp::browser_protocol::network::CookieParam;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 页面驱动
pub struct PageDriver {
    page: Page,
}

impl PageDriver {
    /// 创建新的页面驱动
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于元素级操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// 导航到指定 URL 并等待加载完成
    pub async fn goto(&self, url: &str) -> AppResult<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        debug!("已导航到: {}", url);
        Ok(())
    }

    /// 覆盖 User-Agent
    pub async fn set_user_agent(&self, user_agent: &str) -> AppResult<()> {
        self.page.set_user_agent(user_agent).await?;
        Ok(())
    }

    /// 注入会话 Cookie（值不写日志）
    pub async fn set_session_cookies(
        &self,
        domain: &str,
        session_cookie: &str,
        csrf_token: Option<&str>,
    ) -> AppResult<()> {
        let mut cookies = vec![build_cookie("LEETCODE_SESSION", session_cookie, domain)?];
        if let Some(token) = csrf_token {
            cookies.push(build_cookie("csrftoken", token, domain)?);
        }
        self.page.set_cookies(cookies).await?;
        debug!("会话 Cookie 已注入 (domain: {})", domain);
        Ok(())
    }

    /// 读取页面可见文本
    pub async fn body_text(&self) -> AppResult<String> {
        self.eval_as("document.body ? document.body.innerText : ''")
            .await
    }

    /// 判断选择器是否命中元素
    pub async fn exists(&self, selector: &str) -> AppResult<bool> {
        let js = format!(
            "document.querySelector({}) !== null",
            serde_json::to_string(selector)?
        );
        self.eval_as(js).await
    }

    /// 用 JS 点击选择器命中的第一个元素，返回是否点到
    pub async fn click_js(&self, selector: &str) -> AppResult<bool> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({});
                if (el) {{ el.click(); return true; }}
                return false;
            }})()"#,
            serde_json::to_string(selector)?
        );
        self.eval_as(js).await
    }

    /// 按顺序尝试一组选择器，点到第一个即返回它
    pub async fn click_first(&self, selectors: &[&str]) -> AppResult<Option<String>> {
        for selector in selectors {
            if self.click_js(selector).await? {
                return Ok(Some(selector.to_string()));
            }
        }
        Ok(None)
    }

    /// 保存整页截图
    pub async fn screenshot(&self, path: impl AsRef<Path>) -> AppResult<()> {
        self.page
            .save_screenshot(ScreenshotParams::builder().full_page(true).build(), path)
            .await?;
        Ok(())
    }
}

/// 构造域级 Cookie
fn build_cookie(name: &str, value: &str, domain: &str) -> AppResult<CookieParam> {
    CookieParam::builder()
        .name(name)
        .value(value)
        .domain(domain)
        .path("/")
        .build()
        .map_err(AppError::Other)
}
