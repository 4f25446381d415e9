use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use futures::future::join_all;

use crate::core::concurrency_controller::ConcurrencyController;
use crate::core::fetch::fetch;
use crate::models::result::FetchOutcome;
use crate::models::run_config::RunConfig;

/// 按固定节奏调度全部请求并收集结果
///
/// 每隔 `1/rate` 秒派发一个请求任务，第一个请求立即派发。派发不等待
/// 前面的请求完成，慢请求只会占用并发许可，不会拖慢后续派发。全部
/// 任务派发完之后统一等待收尾，返回的结果数量恒等于 `count`。
pub async fn run(config: &RunConfig) -> anyhow::Result<Vec<FetchOutcome>> {
    // 整个测试共用一个连接池，空闲连接数不设上限，避免连接复用限流
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .pool_max_idle_per_host(usize::MAX)
        .build()
        .context("构建http客户端失败")?;
    let controller = Arc::new(ConcurrencyController::new(config.concurrency));
    // 派发间隔
    let interval = Duration::from_secs_f64(1.0 / config.rate);
    // 任务池
    let mut handles = Vec::with_capacity(config.count as usize);
    for req_num in 1..=config.count {
        let client = client.clone();
        let url = config.url.clone();
        let controller = controller.clone();
        let verbose = config.verbose;
        let handle = tokio::spawn(async move {
            // 先拿许可再发请求，许可随任务结束自动归还
            let _permit = controller.acquire().await;
            fetch(&client, &url, req_num, verbose).await
        });
        handles.push(handle);
        tokio::time::sleep(interval).await;
    }
    // 等待所有任务完成，一个都不丢弃
    let mut outcomes = Vec::with_capacity(handles.len());
    for joined in join_all(handles).await {
        // 任务本身不会失败，万一被取消也按传输失败计数，保证结果数量不变
        outcomes.push(joined.unwrap_or_else(|_| FetchOutcome::transport_failure()));
    }
    Ok(outcomes)
}
