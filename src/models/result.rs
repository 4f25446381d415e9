use serde::Serialize;

// 传输层失败（连接失败、DNS失败、超时）统一记为500
pub const FAILURE_STATUS: u16 = 500;

/// 单个请求的结果，每个请求恰好产生一条，生成后不再修改
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FetchOutcome {
    pub status: u16,
    pub time_to_last_byte: f64,
}

impl FetchOutcome {
    // 传输层失败的哨兵值，耗时记为0
    pub fn transport_failure() -> Self {
        FetchOutcome {
            status: FAILURE_STATUS,
            time_to_last_byte: 0.0,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == 200
    }
}

/// 全部结果聚合出的最终报告
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub total_requests: u64,
    pub rps: f64,
    pub passed: u64,
    pub failed: u64,
    pub ttlb_mean: f64,
    pub ttlb_median: f64,
    pub total_duration: f64,
}
