use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 目标地址
    #[arg(short, long, env = "SIMPLE_TARGET", default_value = "https://www.google.com/")]
    pub url: String,

    /// 请求总数
    #[arg(short, long, env = "SIMPLE_COUNT", default_value_t = 1000)]
    pub count: u64,

    /// 每秒请求数
    #[arg(short, long, env = "SIMPLE_RATE", default_value_t = 100.0)]
    pub rate: f64,

    /// 最大并发数
    #[arg(short = 't', long, env = "SIMPLE_THREADS", default_value_t = 100)]
    pub concurrency: usize,

    /// 单请求超时时间（秒）
    #[arg(long, env = "SIMPLE_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// 打印每个请求的详情
    #[arg(short, long, env = "SIMPLE_VERBOSE")]
    pub verbose: bool,
}
