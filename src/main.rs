use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use problem_submit::{logger, App, Config};

/// 浏览题库并提交 Python 代码
#[derive(Parser, Debug)]
#[command(name = "problem-submit", version)]
struct Cli {
    /// 页面路径，如 `/problems` 或 `/problems/1`
    #[arg(default_value = "/")]
    path: String,

    /// 要提交的代码文件，仅在题目详情页有效
    code_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    app.run(&cli.path, cli.code_file.as_deref()).await?;

    Ok(())
}
