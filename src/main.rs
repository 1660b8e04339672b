use anyhow::Result;
use leetcode_search_submit::app::App;
use leetcode_search_submit::config::Config;
use leetcode_search_submit::utils::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load();

    // 初始化并运行应用
    let args: Vec<String> = std::env::args().skip(1).collect();
    App::initialize(config).run(&args).await?;

    Ok(())
}
