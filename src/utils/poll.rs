//! 有界轮询原语
//!
//! 把"反复读取直到出现结果或超时"收敛成一个带显式上限和间隔的原语，
//! 调用方取消（drop future）时轮询随之停止

use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// 以固定间隔反复执行 `check`，直到它返回 `Some` 或总时长超过 `max_wait`
///
/// # 参数
/// - `max_wait`: 总超时
/// - `interval`: 两次检查之间的间隔
/// - `check`: 检查闭包，返回 `Some(T)` 表示条件满足
///
/// # 返回
/// 超时返回 `None`
pub async fn wait_until<T, F, Fut>(max_wait: Duration, interval: Duration, mut check: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let deadline = Instant::now() + max_wait;

    loop {
        if let Some(value) = check().await {
            return Some(value);
        }

        if Instant::now() + interval > deadline {
            return None;
        }

        sleep(interval).await;
    }
}
