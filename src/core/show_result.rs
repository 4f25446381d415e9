use crate::models::result::RunReport;
use crate::models::run_config::RunConfig;

// 测试开始前打印的参数块
pub fn render_banner(config: &RunConfig) -> String {
    format!(
        "[-- SIMPLE LOAD TEST --]\n\
         \n\
         [params]\n\
         target url: '{}'\n\
         request count: {}\n\
         requests per sec: {}\n\
         max concurrency: {}\n\
         \n\
         test in progress ...",
        config.url, config.count, config.rate, config.concurrency
    )
}

// 测试结束后打印的结果块，纯函数，只依赖报告本身
pub fn render_report(report: &RunReport) -> String {
    format!(
        "\n\
         [results]\n\
         total requests sent: {}\n\
         requests per sec: {:.1}\n\
         passed: {}, failed: {}\n\
         ttlb mean avg: {:.3} seconds\n\
         ttlb median avg: {:.3} seconds\n\
         \n\
         Load test completed in {:.3} seconds",
        report.total_requests,
        report.rps,
        report.passed,
        report.failed,
        report.ttlb_mean,
        report.ttlb_median,
        report.total_duration
    )
}
