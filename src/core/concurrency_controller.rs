use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// 并发控制器，限制同时在途的请求数量
///
/// 许可是RAII守卫，守卫析构时自动归还，任何退出路径都不会漏还。
pub struct ConcurrencyController {
    semaphore: Arc<Semaphore>,
}

impl ConcurrencyController {
    pub fn new(max_concurrency: usize) -> Self {
        ConcurrencyController {
            semaphore: Arc::new(Semaphore::new(max_concurrency)),
        }
    }

    // 获取许可，许可不足时挂起等待
    pub async fn acquire(&self) -> OwnedSemaphorePermit {
        // 信号量在整个测试期间不会关闭
        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("信号量已关闭")
    }
}
