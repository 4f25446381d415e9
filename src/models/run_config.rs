use anyhow::bail;

use crate::models::args::Args;

/// 一次压测的全部参数，测试开始前构建，测试期间不可变
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub count: u64,
    pub rate: f64,
    pub concurrency: usize,
    pub timeout_secs: u64,
    pub verbose: bool,
}

impl RunConfig {
    // 校验参数，不合法的配置在发出任何请求之前直接报错
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.url.is_empty() {
            bail!("目标地址不能为空");
        }
        if self.count == 0 {
            bail!("请求总数必须大于0");
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            bail!("每秒请求数必须大于0");
        }
        if self.concurrency == 0 {
            bail!("最大并发数必须大于0");
        }
        if self.timeout_secs == 0 {
            bail!("超时时间必须大于0");
        }
        Ok(())
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            url: args.url,
            count: args.count,
            rate: args.rate,
            concurrency: args.concurrency,
            timeout_secs: args.timeout,
            verbose: args.verbose,
        }
    }
}
