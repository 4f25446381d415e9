use std::time::Instant;

use reqwest::Client;

use crate::models::result::FetchOutcome;

/// 发送一次GET请求并计时
///
/// 耗时从发出请求起算，到响应体完整读完为止（time to last byte）。
/// 传输层失败（连接失败、超时、响应体读取失败）统一吸收为哨兵结果，
/// 不会向外抛错。
pub async fn fetch(client: &Client, url: &str, req_num: u64, verbose: bool) -> FetchOutcome {
    // 单调时钟计时
    let start = Instant::now();
    let outcome = match client.get(url).send().await {
        Ok(response) => {
            let status_code = response.status().as_u16();
            // 读完整个响应体再计时，保证统计的是完整传输耗时
            match response.bytes().await {
                Ok(_) => FetchOutcome {
                    status: status_code,
                    time_to_last_byte: start.elapsed().as_secs_f64(),
                },
                Err(_) => FetchOutcome::transport_failure(),
            }
        }
        Err(_) => FetchOutcome::transport_failure(),
    };
    if verbose {
        let status = if outcome.passed() { "PASS" } else { "FAIL" };
        println!(
            "req={} status={} url='{}' status_code={} ttlb={:.3} secs",
            req_num, status, url, outcome.status, outcome.time_to_last_byte
        );
    }
    outcome
}
