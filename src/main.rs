use std::time::Instant;

use clap::Parser;
use simple_load_engine::core::{execute, show_result, summarize};
use simple_load_engine::models::args::Args;
use simple_load_engine::models::run_config::RunConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = RunConfig::from(args);
    // 不合法的配置在发请求之前就退出
    config.validate()?;

    println!("{}", show_result::render_banner(&config));

    // 总耗时从派发前计到全部任务收尾后
    let start = Instant::now();
    let outcomes = execute::run(&config).await?;
    let total_duration = start.elapsed().as_secs_f64();

    println!("test complete! please wait while we gather metrics ...");

    let report = summarize::summarize(&outcomes, total_duration)?;
    println!("{}", show_result::render_report(&report));
    Ok(())
}
