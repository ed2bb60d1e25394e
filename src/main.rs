use anyhow::Result;
use user_api::config;
use user_api::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config, std::io::stdout);
    config.print_summary();

    user_api::server::run(config).await
}
