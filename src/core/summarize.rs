use anyhow::bail;

use crate::models::result::{FetchOutcome, RunReport};

/// 把全部请求结果聚合成最终报告
///
/// `wall_secs` 由调用方计时，从派发开始前到全部任务收尾后。结果为空
/// 或耗时为零属于调用方违反前置条件，直接报错，不产出报告。
pub fn summarize(outcomes: &[FetchOutcome], wall_secs: f64) -> anyhow::Result<RunReport> {
    if outcomes.is_empty() {
        bail!("没有可统计的请求结果");
    }
    if wall_secs <= 0.0 {
        bail!("总耗时为零，无法计算速率");
    }
    let total_requests = outcomes.len() as u64;
    let passed = outcomes.iter().filter(|o| o.passed()).count() as u64;
    let ttlbs: Vec<f64> = outcomes.iter().map(|o| o.time_to_last_byte).collect();
    let ttlb_mean = ttlbs.iter().sum::<f64>() / ttlbs.len() as f64;
    Ok(RunReport {
        total_requests,
        rps: total_requests as f64 / wall_secs,
        passed,
        failed: total_requests - passed,
        ttlb_mean,
        ttlb_median: median(&ttlbs),
        total_duration: wall_secs,
    })
}

// 中位数，偶数个取中间两个的平均
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
